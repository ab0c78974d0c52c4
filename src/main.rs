use counter_embed::endpoints::make_routes;
use counter_embed::models::counter::Counter;
use counter_embed::utils::{fs_tree, settings::AppSettings};

use std::sync::Arc;

use anyhow::Context;
use warp::Filter;


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let app_settings = AppSettings::new();

    let counter = Counter::open(&app_settings.counter_file).await
        .context("could not load counter")?;
    log::info!(
        "counter loaded from {} at {}",
        counter.path().display(),
        counter.value().await
    );

    fs_tree::log_tree(&app_settings.static_dir, app_settings.tree_depth);

    let routes = make_routes(Arc::new(counter), app_settings.static_dir.clone())
        .with(warp::log("counter_embed"));

    let addr = app_settings.bind_addr();
    let (addr, server) = warp::serve(routes)
        .try_bind_ephemeral(addr)
        .with_context(|| format!("could not bind {addr}"))?;

    log::info!("listening on http://{addr}");
    server.await;

    Ok(())
}
