//! Top-level error wrapper types.

use crate::{
    CancelledError, ConfigError, GenerationError, HttpError, InputError, JsonError,
    PipelineStage, ProviderError, RetryableError, StageError, StorageError, TimeoutError,
    ToolError,
};

/// Every failure the pipeline can report.
///
/// # Examples
///
/// ```
/// use adreel_error::{AdreelError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: AdreelError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AdreelErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Media storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Upstream model or video service error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Remote task reported failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Invalid pipeline input
    #[from(InputError)]
    Input(InputError),
    /// External tool failure
    #[from(ToolError)]
    Tool(ToolError),
    /// Polling bound exceeded
    #[from(TimeoutError)]
    Timeout(TimeoutError),
    /// Caller cancelled the operation
    #[from(CancelledError)]
    Cancelled(CancelledError),
    /// Failure attributed to a pipeline stage
    #[from(StageError)]
    Stage(StageError),
}

/// Adreel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use adreel_error::{AdreelResult, ConfigError};
///
/// fn might_fail() -> AdreelResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Adreel Error: {}", _0)]
pub struct AdreelError(Box<AdreelErrorKind>);

impl AdreelError {
    /// Create a new error from a kind.
    pub fn new(kind: AdreelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AdreelErrorKind {
        &self.0
    }

    /// Stage the failure is attributed to, if any.
    pub fn stage(&self) -> Option<PipelineStage> {
        match self.kind() {
            AdreelErrorKind::Stage(e) => Some(e.stage),
            _ => None,
        }
    }

    /// Underlying error kind with stage wrappers removed.
    pub fn root_kind(&self) -> &AdreelErrorKind {
        match self.kind() {
            AdreelErrorKind::Stage(e) => e.source.root_kind(),
            kind => kind,
        }
    }
}

// Generic From implementation for any type that converts to AdreelErrorKind
impl<T> From<T> for AdreelError
where
    T: Into<AdreelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl RetryableError for AdreelError {
    fn is_retryable(&self) -> bool {
        match self.root_kind() {
            AdreelErrorKind::Provider(e) => e.kind.is_retryable(),
            AdreelErrorKind::Http(_) => true,
            _ => false,
        }
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self.root_kind() {
            AdreelErrorKind::Provider(e) => e.kind.retry_strategy_params(),
            AdreelErrorKind::Http(_) => (1000, 3, 10),
            _ => (2000, 5, 60),
        }
    }
}

/// Result type for adreel operations.
///
/// # Examples
///
/// ```
/// use adreel_error::{AdreelResult, HttpError};
///
/// fn fetch_clip() -> AdreelResult<Vec<u8>> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type AdreelResult<T> = std::result::Result<T, AdreelError>;
