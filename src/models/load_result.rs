use super::errors::FetchFailure;

use serde::{Serialize, Deserialize};


/// What the page gets to render. Always carries a number.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadResult {
    pub count: i64
}

impl LoadResult {
    pub fn new(count: i64) -> Self {
        LoadResult { count }
    }
}

#[derive(Debug)]
pub enum FetchOutcome {
    Success(i64),
    Failure(FetchFailure)
}

impl FetchOutcome {
    /// Collapses every failure to the zero count, logging the cause.
    pub fn into_load_result(self) -> LoadResult {
        match self {
            FetchOutcome::Success(count) => LoadResult::new(count),
            FetchOutcome::Failure(e) => {
                log::error!("Error fetching count: {e}");
                LoadResult::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    use crate::utils::test_log::{capture_logs, captured_containing};

    #[test]
    fn failure_folds_to_zero() {
        let outcome = FetchOutcome::Failure(FetchFailure::Status(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(outcome.into_load_result(), LoadResult { count: 0 });
    }

    #[test]
    fn failure_is_logged_as_error() {
        capture_logs();

        let outcome = FetchOutcome::Failure(FetchFailure::Status(StatusCode::IM_A_TEAPOT));
        assert_eq!(outcome.into_load_result().count, 0);

        let lines = captured_containing("status 418");
        assert_eq!(lines.len(), 1, "captured: {lines:?}");
        assert!(lines[0].starts_with("ERROR Error fetching count"), "got {}", lines[0]);
    }

    #[test]
    fn success_logs_nothing() {
        capture_logs();

        let outcome = FetchOutcome::Success(-7331);
        assert_eq!(outcome.into_load_result().count, -7331);
        assert!(captured_containing("-7331").is_empty());
    }

    #[test]
    fn success_keeps_value() {
        assert_eq!(FetchOutcome::Success(17).into_load_result(), LoadResult { count: 17 });
    }

    #[test]
    fn serializes_as_count_object() {
        let json = serde_json::to_string(&LoadResult::new(42)).unwrap();
        assert_eq!(json, r#"{"count":42}"#);
    }
}
