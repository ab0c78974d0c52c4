pub mod api;
pub mod spa;

use crate::models::counter::CounterStore;

use std::path::PathBuf;

use warp::{Filter, Reply};
use warp::filters::BoxedFilter;
use warp::reply::Response;


/// The API under `/api`, then the single page app for everything else.
pub fn make_routes(counter: CounterStore, static_dir: PathBuf) -> BoxedFilter<(Response, )> {
    let api = api::make_api_filters(counter)
        .map(|r: api::ApiReply| r.into_response());
    let spa = spa::make_spa_filters(static_dir)
        .map(|f: warp::fs::File| f.into_response());

    api.or(spa)
        .unify()
        .boxed()
}
