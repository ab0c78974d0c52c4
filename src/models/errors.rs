use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum CounterError {
    #[error("failed to read counter file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("counter file {path} does not hold an integer: {source}")]
    Parse { path: PathBuf, source: ParseIntError },
    #[error("failed to write counter file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("counter would overflow")]
    Overflow
}

/// Why a count could not be fetched. The loader reports these but never
/// hands them to its caller.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server answered with status {0}")]
    Status(StatusCode),
    #[error("unusable response body: {0}")]
    Body(#[source] reqwest::Error)
}
