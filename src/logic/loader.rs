use crate::{
    models::errors::FetchFailure,
    models::response::Count,
    models::load_result::{FetchOutcome, LoadResult},
    utils::settings::AppSettings
};

use std::time::Duration;


pub const COUNT_PATH: &str = "/api/count";

/// Fetches the current count for the page before it renders.
#[derive(Clone)]
pub struct CountLoader {
    client: reqwest::Client,
    endpoint: String
}

impl CountLoader {
    pub fn new(settings: &AppSettings) -> Result<Self, reqwest::Error> {
        Self::with_timeout(&settings.api_base_url, settings.request_timeout)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(CountLoader {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), COUNT_PATH)
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Never fails: anything short of a 2xx JSON body with an integer
    /// `count` is logged and becomes a zero count.
    pub async fn load(&self) -> LoadResult {
        self.fetch().await.into_load_result()
    }

    pub async fn fetch(&self) -> FetchOutcome {
        let response = match self.client.get(&self.endpoint).send().await {
            Ok(r) => r,
            Err(e) => return FetchOutcome::Failure(FetchFailure::Transport(e))
        };

        let status = response.status();
        if !status.is_success() {
            return FetchOutcome::Failure(FetchFailure::Status(status));
        }

        // A body without `count` fails to decode, same as one that isn't JSON.
        match response.json::<Count>().await {
            Ok(payload) => FetchOutcome::Success(payload.count),
            Err(e) => FetchOutcome::Failure(FetchFailure::Body(e))
        }
    }
}
