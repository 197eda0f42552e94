//! Job identifiers and records.

use crate::Storyboard;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Unique identifier of one pipeline run.
///
/// # Examples
///
/// ```
/// use adreel_core::JobId;
///
/// let a = JobId::new();
/// let b = JobId::new();
/// assert_ne!(a, b);
/// assert_eq!(a.to_string().len(), 36);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one pipeline run.
///
/// `clip_paths` is index-aligned with the compiled scenes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Job {
    /// Run identifier
    job_id: JobId,
    /// Number of compiled scenes
    scene_count: usize,
    /// Clip files in scene order
    clip_paths: Vec<PathBuf>,
    /// Assembled video
    final_video_path: PathBuf,
}

impl Job {
    /// Create a job record.
    pub fn new(job_id: JobId, clip_paths: Vec<PathBuf>, final_video_path: PathBuf) -> Self {
        Self {
            job_id,
            scene_count: clip_paths.len(),
            clip_paths,
            final_video_path,
        }
    }
}

/// What an end-to-end run returns to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct JobSummary {
    /// Description the ad was generated for
    product_description: String,
    /// Storyboard the clips were compiled from
    storyboard: Storyboard,
    /// The finished job
    job: Job,
}

impl JobSummary {
    /// Create a summary.
    pub fn new(product_description: impl Into<String>, storyboard: Storyboard, job: Job) -> Self {
        Self {
            product_description: product_description.into(),
            storyboard,
            job,
        }
    }
}
