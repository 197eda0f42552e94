//! Bounded-wait errors: polling timeouts and caller cancellation.

/// How a bounded wait ran out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TimeoutErrorKind {
    /// The maximum number of status checks was reached
    #[display("Task {} still pending after {} status checks", task_id, attempts)]
    AttemptsExhausted {
        /// Provider-side task identifier
        task_id: String,
        /// Status checks performed
        attempts: usize,
    },
    /// The wall-clock deadline passed
    #[display("Task {} still pending after {}s", task_id, elapsed_secs)]
    DeadlineExceeded {
        /// Provider-side task identifier
        task_id: String,
        /// Seconds waited
        elapsed_secs: u64,
    },
}

/// Timeout error with location tracking.
///
/// The remote task may still be running when this is raised.
///
/// # Examples
///
/// ```
/// use adreel_error::{TimeoutError, TimeoutErrorKind};
///
/// let err = TimeoutError::new(TimeoutErrorKind::AttemptsExhausted {
///     task_id: "abc".to_string(),
///     attempts: 3,
/// });
/// assert!(format!("{}", err).contains("3 status checks"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Timeout Error: {} at line {} in {}", kind, line, file)]
pub struct TimeoutError {
    /// The kind of error that occurred
    pub kind: TimeoutErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TimeoutError {
    /// Create a new timeout error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TimeoutErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// The caller aborted an in-flight operation.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Cancelled: {} at line {} in {}", message, line, file)]
pub struct CancelledError {
    /// What was cancelled
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CancelledError {
    /// Create a new CancelledError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
