//! Input validation error types.

/// Kinds of invalid pipeline input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum InputErrorKind {
    /// Assembly was requested with no clips
    #[display("No clips to assemble")]
    NoClips,
    /// Scene or request input could not be used
    #[display("Malformed input: {}", _0)]
    MalformedInput(String),
}

/// Input error with location tracking.
///
/// # Examples
///
/// ```
/// use adreel_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::NoClips);
/// assert!(format!("{}", err).contains("No clips"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The kind of error that occurred
    pub kind: InputErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InputError {
    /// Create a new input error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
