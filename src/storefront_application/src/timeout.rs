//! Deadline for persistence calls.
//!
//! Every store call made by a use case goes through [`with_timeout`]. When the
//! deadline passes first the operation future is dropped, which cancels the
//! in-flight call instead of leaving it running in the background.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Request took too long")]
pub struct TimeoutError;

impl TimeoutError {
    pub const STATUS_CODE: u16 = 408;
}

pub async fn with_timeout<F>(duration: Duration, operation: F) -> Result<F::Output, TimeoutError>
where
    F: Future,
{
    tokio::time::timeout(duration, operation)
        .await
        .map_err(|_| {
            tracing::warn!(timeout_ms = duration.as_millis() as u64, "persistence call timed out");
            TimeoutError
        })
}
