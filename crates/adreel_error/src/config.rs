//! Settings that could not be loaded or do not describe a usable pipeline.

use std::fmt::Display;

/// Invalid or incomplete adreel settings.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Which setting is wrong and why
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a ConfigError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The layered settings from `origin` failed to load or deserialize.
    #[track_caller]
    pub fn load(origin: impl Display, cause: impl Display) -> Self {
        Self::new(format!("Failed to load configuration from {}: {}", origin, cause))
    }

    /// A remote clip provider was selected without its settings section.
    ///
    /// # Examples
    ///
    /// ```
    /// use adreel_error::ConfigError;
    ///
    /// let err = ConfigError::missing_provider("luma");
    /// assert_eq!(err.message, "No [providers.luma] section configured");
    /// ```
    #[track_caller]
    pub fn missing_provider(name: impl Display) -> Self {
        Self::new(format!("No [providers.{}] section configured", name))
    }
}
