use crate::{
    logic::counter as counter_logic,
    models::counter::CounterStore,
    models::errors::CounterError,
    models::response::{Count, ErrorBody}
};

use warp::Filter;
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::reply::{self, Json, WithStatus};
use warp::reject::Rejection;


pub type ApiReply = WithStatus<Json>;

fn into_reply(result: Result<Count, CounterError>) -> ApiReply {
    match result {
        Ok(count) => reply::with_status(reply::json(&count), StatusCode::OK),
        Err(err) => {
            log::error!("counter update failed: {err}");
            reply::with_status(
                reply::json(&ErrorBody::new(&err)),
                StatusCode::INTERNAL_SERVER_ERROR
            )
        }
    }
}

fn count_filter(counter: &BoxedFilter<(CounterStore, )>) -> BoxedFilter<(ApiReply, )> {
    warp::path("count")
        .and(warp::path::end())
        .and(warp::get())
        .and(counter.clone())
        .and_then(|counter: CounterStore| async move {
            let result = counter_logic::current_count(counter).await;
            Ok::<_, Rejection>(into_reply(Ok(result)))
        })
        .boxed()
}

fn increment_filter(counter: &BoxedFilter<(CounterStore, )>) -> BoxedFilter<(ApiReply, )> {
    warp::path("increment")
        .and(warp::path::end())
        .and(warp::post())
        .and(counter.clone())
        .and_then(|counter: CounterStore| async move {
            Ok::<_, Rejection>(into_reply(counter_logic::increment(counter).await))
        })
        .boxed()
}

fn decrement_filter(counter: &BoxedFilter<(CounterStore, )>) -> BoxedFilter<(ApiReply, )> {
    warp::path("decrement")
        .and(warp::path::end())
        .and(warp::post())
        .and(counter.clone())
        .and_then(|counter: CounterStore| async move {
            Ok::<_, Rejection>(into_reply(counter_logic::decrement(counter).await))
        })
        .boxed()
}

pub fn make_api_filters(counter: CounterStore) -> BoxedFilter<(ApiReply, )> {
    let counter = warp::any().map(move || counter.clone()).boxed();

    let routes = count_filter(&counter)
        .or(increment_filter(&counter))
        .unify()
        .or(decrement_filter(&counter))
        .unify();

    warp::path("api")
        .and(routes)
        .boxed()
}
