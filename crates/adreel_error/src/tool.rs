//! External tool error types.

/// Ways an external tool invocation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ToolErrorKind {
    /// The tool process could not be started
    #[display("Failed to launch {}: {}", tool, message)]
    Launch {
        /// Program name
        tool: String,
        /// Launch failure description
        message: String,
    },
    /// The tool exited unsuccessfully
    #[display("{} exited with {:?}: {}", tool, code, stderr)]
    Failed {
        /// Program name
        tool: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },
}

/// Tool error with location tracking.
///
/// # Examples
///
/// ```
/// use adreel_error::{ToolError, ToolErrorKind};
///
/// let err = ToolError::new(ToolErrorKind::Failed {
///     tool: "ffmpeg".to_string(),
///     code: Some(1),
///     stderr: "No such file or directory".to_string(),
/// });
/// assert!(format!("{}", err).contains("ffmpeg"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Tool Error: {} at line {} in {}", kind, line, file)]
pub struct ToolError {
    /// The kind of error that occurred
    pub kind: ToolErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ToolError {
    /// Create a new tool error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ToolErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
