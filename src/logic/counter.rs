use crate::models::{
    counter::CounterStore,
    errors::CounterError,
    response::Count
};


pub async fn current_count(counter: CounterStore) -> Count {
    Count::new(counter.value().await)
}

pub async fn increment(counter: CounterStore) -> Result<Count, CounterError> {
    let value = counter.increment().await?;
    log::info!("counter incremented to {value}");
    Ok(Count::new(value))
}

pub async fn decrement(counter: CounterStore) -> Result<Count, CounterError> {
    let value = counter.decrement().await?;
    log::info!("counter decremented to {value}");
    Ok(Count::new(value))
}
