//! Bounded retry with linearly growing delays.
//!
//! Attempt `n` that fails transiently is followed by a pause of
//! `base_delay * n` before attempt `n + 1`. Non-transient errors are
//! returned immediately.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use log::warn;

use crate::errors::{ClientError, Result};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    /// A policy that tries exactly once.
    pub fn no_retry() -> Self {
        RetryPolicy {
            max_attempts: 1,
            base_delay: Duration::ZERO,
        }
    }

    /// Pause after the failed attempt `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

/// Source of delays between attempts.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Runs `operation` until it succeeds, fails with a non-transient error,
/// or `policy.max_attempts` attempts have been made.
pub async fn retry_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
    operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    retry_with_backoff_if(policy, sleeper, ClientError::is_transient, operation).await
}

/// Like [`retry_with_backoff`], but only errors accepted by `should_retry`
/// are retried.
pub async fn retry_with_backoff_if<T, F, Fut>(
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
    should_retry: fn(&ClientError) -> bool,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if should_retry(&err) && attempt < max_attempts => {
                let delay = policy.delay_after(attempt);
                warn!(
                    "Attempt {}/{} failed ({}); retrying in {:?}",
                    attempt, max_attempts, err, delay
                );
                sleeper.sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
