//! Offline clip provider.

use adreel_core::{JobId, PipelineMetrics, SceneRequest};
use adreel_error::{AdreelResult, CancelledError};
use adreel_interface::ClipProvider;
use adreel_storage::ClipStore;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Produces placeholder clips without network access.
///
/// Copies the configured sample clip when it exists and writes an empty
/// file otherwise.
#[derive(Debug, Clone)]
pub struct MockClipProvider {
    store: ClipStore,
    sample: PathBuf,
}

impl MockClipProvider {
    /// Create a provider writing into `store` from `sample`.
    pub fn new(store: ClipStore, sample: impl Into<PathBuf>) -> Self {
        Self {
            store,
            sample: sample.into(),
        }
    }
}

#[async_trait]
impl ClipProvider for MockClipProvider {
    #[instrument(skip(self, scene, cancel), fields(job_id = %job_id, scene = scene.index))]
    async fn generate(
        &self,
        scene: &SceneRequest,
        job_id: &JobId,
        cancel: &CancellationToken,
    ) -> AdreelResult<PathBuf> {
        if cancel.is_cancelled() {
            return Err(CancelledError::new(format!("mock clip for scene {}", scene.index)).into());
        }

        let path = self.store.clip_path(job_id, scene.index);
        if tokio::fs::try_exists(&self.sample).await.unwrap_or(false) {
            self.store.copy_clip(&self.sample, &path).await?;
            debug!(sample = %self.sample.display(), "Copied sample clip");
        } else {
            self.store.write_clip(&path, &[]).await?;
            debug!("Sample clip missing, wrote empty placeholder");
        }

        PipelineMetrics::get().record_clip("mock", "completed");
        Ok(path)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
