//! Failures of the HTTP plumbing shared by the gateway and the remote clip providers.

use std::fmt::Display;

/// The HTTP client itself could not be set up or used.
///
/// Service responses with an error status are [`ProviderError`]s instead;
/// this covers the client side, such as a TLS backend that fails to load.
///
/// [`ProviderError`]: crate::ProviderError
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// What went wrong
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create an HttpError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The client for `service` could not be built.
    ///
    /// # Examples
    ///
    /// ```
    /// use adreel_error::HttpError;
    ///
    /// let err = HttpError::client_build("runway", "no TLS backend");
    /// assert_eq!(err.message, "Failed to build runway HTTP client: no TLS backend");
    /// ```
    #[track_caller]
    pub fn client_build(service: &str, cause: impl Display) -> Self {
        Self::new(format!("Failed to build {} HTTP client: {}", service, cause))
    }
}
