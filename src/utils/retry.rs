// src/utils/retry.rs

//! Bounded retry for async operations.

use std::fmt::Display;
use std::future::Future;

/// Run `operation`, retrying up to `max_retries` more times on error.
///
/// Every error is retried the same way and nothing sleeps between attempts;
/// callers that need spacing must provide it. With `max_retries == 0` the
/// operation still runs once. When all attempts fail, the last error is
/// returned unchanged.
pub async fn retry<T, E, F, Fut>(max_retries: u32, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if attempt < max_retries => {
                attempt += 1;
                log::warn!("Attempt {} of {} failed: {}", attempt, max_retries + 1, error);
            }
            Err(error) => return Err(error),
        }
    }
}
