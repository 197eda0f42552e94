//! Terminal failure reported by a remote clip generation task.

/// A remote task finished in a failed or cancelled state.
///
/// The provider's own failure payload is kept verbatim for diagnostics.
///
/// # Examples
///
/// ```
/// use adreel_error::GenerationError;
///
/// let err = GenerationError::new("luma", "task-42", r#"{"status":"Failed"}"#);
/// assert_eq!(err.task_id, "task-42");
/// assert!(format!("{}", err).contains("luma"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Generation Error: {} task {} failed: {} at line {} in {}",
    provider,
    task_id,
    payload,
    line,
    file
)]
pub struct GenerationError {
    /// Provider that ran the task
    pub provider: String,
    /// Provider-side task identifier
    pub task_id: String,
    /// Failure payload as returned by the provider
    pub payload: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError at the current location.
    #[track_caller]
    pub fn new(
        provider: impl Into<String>,
        task_id: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        let location = std::panic::Location::caller();
        Self {
            provider: provider.into(),
            task_id: task_id.into(),
            payload: payload.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
