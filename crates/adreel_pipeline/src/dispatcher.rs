//! Concurrent clip generation with ordered results.

use adreel_core::{JobId, SceneRequest};
use adreel_error::{AdreelResult, RetryableError};
use adreel_interface::ClipProvider;
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};

/// Runs one clip provider over all scenes of a job.
///
/// At most `max_concurrent` scenes are in flight. Results are placed by input
/// position, so the returned paths line up with the scenes regardless of
/// which finished first. The first failure cancels the remaining scenes and
/// is returned.
#[derive(Clone)]
pub struct ClipDispatcher {
    provider: Arc<dyn ClipProvider>,
    max_concurrent: usize,
    scene_retries: usize,
    retry_backoff: Option<Duration>,
}

impl ClipDispatcher {
    /// Create a dispatcher. A `max_concurrent` of zero is treated as one.
    pub fn new(provider: Arc<dyn ClipProvider>, max_concurrent: usize) -> Self {
        Self {
            provider,
            max_concurrent: max_concurrent.max(1),
            scene_retries: 0,
            retry_backoff: None,
        }
    }

    /// Retry retryable scene failures up to `retries` extra times.
    ///
    /// Backoff follows the failing error's
    /// [`retry_strategy_params`](RetryableError::retry_strategy_params).
    pub fn with_retries(mut self, retries: usize) -> Self {
        self.scene_retries = retries;
        self
    }

    /// Override the initial backoff taken from the error.
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = Some(backoff);
        self
    }

    /// Name of the active provider.
    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Worker pool size.
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Generate a clip for every scene.
    ///
    /// # Errors
    ///
    /// Returns the first scene failure. In-flight scenes are cancelled and
    /// their partial results discarded.
    #[instrument(
        name = "clip_dispatcher.dispatch_all",
        skip(self, scenes, cancel),
        fields(
            %job_id,
            provider = self.provider.provider_name(),
            scenes = scenes.len(),
            max_concurrent = self.max_concurrent,
        )
    )]
    pub async fn dispatch_all(
        &self,
        scenes: &[SceneRequest],
        job_id: &JobId,
        cancel: &CancellationToken,
    ) -> AdreelResult<Vec<PathBuf>> {
        let cancel = cancel.child_token();
        let mut slots: Vec<Option<PathBuf>> = vec![None; scenes.len()];

        let mut pending = stream::iter(scenes.iter().enumerate())
            .map(|(position, scene)| {
                let cancel = &cancel;
                async move { (position, self.generate_scene(scene, job_id, cancel).await) }
            })
            .buffer_unordered(self.max_concurrent);

        while let Some((position, result)) = pending.next().await {
            match result {
                Ok(path) => {
                    info!(scene = scenes[position].index, path = %path.display(), "Clip ready");
                    slots[position] = Some(path);
                }
                Err(e) => {
                    error!(scene = scenes[position].index, error = %e, "Scene failed, aborting job");
                    cancel.cancel();
                    return Err(e);
                }
            }
        }

        Ok(slots.into_iter().flatten().collect())
    }

    async fn generate_scene(
        &self,
        scene: &SceneRequest,
        job_id: &JobId,
        cancel: &CancellationToken,
    ) -> AdreelResult<PathBuf> {
        let first = self.provider.generate(scene, job_id, cancel).await;
        let e = match first {
            Ok(path) => return Ok(path),
            Err(e) if self.scene_retries == 0 || !e.is_retryable() || cancel.is_cancelled() => {
                return Err(e);
            }
            Err(e) => e,
        };

        let (mut initial_ms, _, max_delay_secs) = e.retry_strategy_params();
        if let Some(backoff) = self.retry_backoff {
            initial_ms = backoff.as_millis() as u64;
        }
        warn!(
            scene = scene.index,
            error = %e,
            initial_backoff_ms = initial_ms,
            max_retries = self.scene_retries,
            max_delay_secs,
            "Transient scene failure, will retry"
        );

        let mut delays = ExponentialBackoff::from_millis(initial_ms)
            .factor(2)
            .max_delay(Duration::from_secs(max_delay_secs))
            .map(jitter)
            .take(self.scene_retries);

        // The first retry waits here; the remaining delays drive Retry::spawn.
        let Some(first_delay) = delays.next() else {
            return Err(e);
        };
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(e),
            _ = tokio::time::sleep(first_delay) => {}
        }

        Retry::spawn(delays, move || async move {
            match self.provider.generate(scene, job_id, cancel).await {
                Ok(path) => Ok(path),
                Err(e) if e.is_retryable() && !cancel.is_cancelled() => {
                    warn!(scene = scene.index, error = %e, "Transient scene failure, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => Err(RetryError::Permanent(e)),
            }
        })
        .await
    }
}
