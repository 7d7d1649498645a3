//! Delay and bounded retry helpers for async probes

use std::future::Future;
use std::time::Duration;

use log::warn;

use crate::settings::TestConfig;

/// Suspend the current task for `ms` milliseconds.
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Run `operation` with the configured retry count and pause.
pub async fn retry_request_default<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_retries = TestConfig::current().max_retries;
    retry_request(operation, max_retries).await
}

/// Run `operation` until it succeeds, retrying up to `max_retries` times.
///
/// Waits the configured `retry_delay` between attempts. See
/// [`retry_request_with`] for the exact semantics.
pub async fn retry_request<F, Fut, T, E>(operation: F, max_retries: u32) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let pause = Duration::from_millis(TestConfig::current().retry_delay);
    retry_request_with(operation, max_retries, pause).await
}

/// Run `operation` until it succeeds, retrying up to `max_retries` times.
///
/// Makes at most `max_retries + 1` attempts with a fixed `pause` between
/// them, none after the last. Errors are never inspected; the one from the
/// final attempt is returned unchanged. An attempt in flight is never
/// cancelled; operations that need a deadline must enforce it themselves.
pub async fn retry_request_with<F, Fut, T, E>(
    mut operation: F,
    max_retries: u32,
    pause: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(_) if attempt < max_retries => {
                attempt += 1;
                warn!(
                    "Request failed, retry {}/{} in {:?}",
                    attempt, max_retries, pause
                );
                tokio::time::sleep(pause).await;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    const PAUSE: Duration = Duration::from_millis(1_000);

    #[tokio::test(start_paused = true)]
    async fn test_retry_succeeds_after_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let start = Instant::now();

        let result = retry_request_with(
            || {
                let calls = calls.clone();
                async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                    if n <= 2 {
                        Err(format!("attempt {} failed", n))
                    } else {
                        Ok(n)
                    }
                }
            },
            2,
            PAUSE,
        )
        .await;

        assert_eq!(result, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // two pauses, one per failed attempt
        let elapsed = start.elapsed();
        assert!(elapsed >= PAUSE * 2 && elapsed < PAUSE * 3, "{:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_gives_up_with_last_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let start = Instant::now();

        let result: Result<(), String> = retry_request_with(
            || {
                let calls = calls.clone();
                async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                    Err(format!("attempt {} failed", n))
                }
            },
            1,
            PAUSE,
        )
        .await;

        assert_eq!(result, Err("attempt 2 failed".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        // no pause after the final attempt
        assert!(start.elapsed() < PAUSE * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_first_success_does_not_wait() {
        let start = Instant::now();
        let result: Result<&str, String> = retry_request(|| async { Ok("ok") }, 2).await;

        assert_eq!(result, Ok("ok"));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_retries_is_single_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let result: Result<(), &str> = retry_request_with(
            || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err("down")
                }
            },
            0,
            PAUSE,
        )
        .await;

        assert_eq!(result, Err("down"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[derive(Debug, PartialEq)]
    struct Opaque;

    #[tokio::test(start_paused = true)]
    async fn test_error_type_needs_no_formatting() {
        let result: Result<(), Opaque> =
            retry_request_with(|| async { Err(Opaque) }, 1, PAUSE).await;
        assert_eq!(result, Err(Opaque));
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_uses_configured_retries() {
        let calls = Arc::new(AtomicU32::new(0));
        let result: Result<(), &str> = retry_request_default(|| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("down")
            }
        })
        .await;

        assert_eq!(result, Err("down"));
        // default max_retries is 2
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_suspends() {
        let start = Instant::now();
        delay(250).await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }
}
