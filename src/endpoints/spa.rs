use std::path::PathBuf;

use warp::Filter;
use warp::filters::BoxedFilter;
use warp::filters::path::FullPath;
use warp::fs::File;
use warp::reject::{self, Rejection};


fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Lets everything through except `/api` paths, which are left for the API
/// routes (or a 404).
fn not_api() -> BoxedFilter<()> {
    warp::path::full()
        .and_then(|path: FullPath| async move {
            if is_api_path(path.as_str()) {
                Err::<(), Rejection>(reject::not_found())
            } else {
                Ok(())
            }
        })
        .untuple_one()
        .boxed()
}

/// Serves files from the static build, and `index.html` for any path that
/// has no file so the client-side router can take over.
pub fn make_spa_filters(static_dir: PathBuf) -> BoxedFilter<(File, )> {
    let index = static_dir.join("index.html");

    let files = warp::fs::dir(static_dir)
        .or(warp::fs::file(index))
        .unify();

    let read = warp::get()
        .or(warp::head())
        .unify();

    not_api()
        .and(read)
        .and(files)
        .boxed()
}
