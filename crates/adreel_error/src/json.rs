//! Storyboard JSON that could not be read or written.

use std::fmt::Display;

/// Characters of the offending document kept in the message.
const PREVIEW_CHARS: usize = 200;

/// A model reply that is not a storyboard, or output that failed to serialize.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Decoder message, with a preview of the document when decoding
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a JsonError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// `raw` could not be decoded. The message keeps its first 200 characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use adreel_error::JsonError;
    ///
    /// let err = JsonError::unparseable("expected value", "Sure! Here are your shots");
    /// assert_eq!(
    ///     err.message,
    ///     "Failed to parse JSON: expected value (JSON: Sure! Here are your shots...)"
    /// );
    /// ```
    #[track_caller]
    pub fn unparseable(cause: impl Display, raw: &str) -> Self {
        let preview = raw.chars().take(PREVIEW_CHARS).collect::<String>();
        Self::new(format!("Failed to parse JSON: {} (JSON: {}...)", cause, preview))
    }

    /// `what` could not be rendered as JSON.
    #[track_caller]
    pub fn serialization(what: &str, cause: impl Display) -> Self {
        Self::new(format!("Failed to serialize {}: {}", what, cause))
    }
}
