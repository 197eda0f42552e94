//! Stage attribution for pipeline failures.

use crate::AdreelError;

/// Pipeline stage in which a job failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineStage {
    /// Turning a storyboard into scene requests
    #[display("compilation")]
    Compilation,
    /// Producing clips through a provider
    #[display("generation")]
    Generation,
    /// Concatenating clips into the final video
    #[display("assembly")]
    Assembly,
}

/// A failure attributed to the stage that produced it.
///
/// # Examples
///
/// ```
/// use adreel_error::{AdreelError, InputError, InputErrorKind, PipelineStage, StageError};
///
/// let err: AdreelError = StageError::new(
///     PipelineStage::Assembly,
///     InputError::new(InputErrorKind::NoClips).into(),
/// )
/// .into();
/// assert_eq!(err.stage(), Some(PipelineStage::Assembly));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("{} stage failed: {}", stage, source)]
pub struct StageError {
    /// Stage that failed
    pub stage: PipelineStage,
    /// Underlying failure
    pub source: AdreelError,
}

impl StageError {
    /// Attribute an error to a stage.
    pub fn new(stage: PipelineStage, source: AdreelError) -> Self {
        Self { stage, source }
    }
}
