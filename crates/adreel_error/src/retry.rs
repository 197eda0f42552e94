//! Retry classification shared by error types.

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use adreel_error::{AdreelError, ProviderError, ProviderErrorKind, RetryableError};
///
/// let err: AdreelError = ProviderError::new(ProviderErrorKind::Http {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// })
/// .into();
///
/// assert!(err.is_retryable());
/// let (backoff, retries, _max_delay) = err.retry_strategy_params();
/// assert_eq!(backoff, 2000);
/// assert_eq!(retries, 5);
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient failures such as 503, 429 or a dropped connection return true.
    /// Terminal task failures, timeouts and bad input return false.
    fn is_retryable(&self) -> bool;

    /// Get retry strategy parameters for this error.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 5, 60)
    }
}
