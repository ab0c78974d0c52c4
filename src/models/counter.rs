use super::errors::CounterError;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;


/// An integer persisted as plain text in `path`.
///
/// The file is only rewritten while the lock is held, and the in-memory value
/// is updated after the write succeeds, so the two never disagree.
pub struct Counter {
    path: PathBuf,
    value: Mutex<i64>
}

impl Counter {
    /// Loads the counter from `path`. A missing file starts the count at zero.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, CounterError> {
        let path = path.as_ref().to_path_buf();

        let value = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text.trim().parse::<i64>()
                .map_err(|source| CounterError::Parse { path: path.clone(), source })?,
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(source) => return Err(CounterError::Read { path, source })
        };

        Ok(Counter {
            path,
            value: Mutex::new(value)
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn value(&self) -> i64 {
        *self.value.lock().await
    }

    pub async fn increment(&self) -> Result<i64, CounterError> {
        self.update(|v| v.checked_add(1)).await
    }

    pub async fn decrement(&self) -> Result<i64, CounterError> {
        self.update(|v| v.checked_sub(1)).await
    }

    async fn update(&self, step: impl FnOnce(i64) -> Option<i64>) -> Result<i64, CounterError> {
        let mut value = self.value.lock().await;
        let next = step(*value).ok_or(CounterError::Overflow)?;

        tokio::fs::write(&self.path, next.to_string()).await
            .map_err(|source| CounterError::Write { path: self.path.clone(), source })?;

        *value = next;
        Ok(next)
    }
}

pub type CounterStore = Arc<Counter>;
