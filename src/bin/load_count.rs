use counter_embed::logic::loader::CountLoader;
use counter_embed::utils::settings::AppSettings;

use anyhow::Context;


/// Runs the page loader once and prints what the page would render.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let app_settings = AppSettings::new();
    let loader = CountLoader::new(&app_settings)
        .context("could not build HTTP client")?;

    log::debug!("loading count from {}", loader.endpoint());
    let result = loader.load().await;

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
