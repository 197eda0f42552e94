//! One job through compilation, generation and assembly.

use crate::{ClipDispatcher, SceneCompiler, VideoAssembler};
use adreel_core::{Job, JobId, Storyboard};
use adreel_error::{AdreelResult, InputError, InputErrorKind, PipelineStage, StageError};
use adreel_storage::ClipStore;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

/// Reject blank product descriptions.
pub(crate) fn validate_description(product_description: &str) -> AdreelResult<()> {
    if product_description.trim().is_empty() {
        return Err(InputError::new(InputErrorKind::MalformedInput(
            "product description is empty".to_string(),
        ))
        .into());
    }
    Ok(())
}

/// Sequences the pipeline stages for a job.
///
/// Each stage completes for every scene before the next begins. Failures are
/// wrapped in a [`StageError`] naming the stage.
#[derive(Clone)]
pub struct PipelineOrchestrator {
    compiler: SceneCompiler,
    dispatcher: ClipDispatcher,
    assembler: VideoAssembler,
    store: ClipStore,
}

impl PipelineOrchestrator {
    /// Create an orchestrator from its stages.
    pub fn new(
        compiler: SceneCompiler,
        dispatcher: ClipDispatcher,
        assembler: VideoAssembler,
        store: ClipStore,
    ) -> Self {
        Self {
            compiler,
            dispatcher,
            assembler,
            store,
        }
    }

    /// The clip store jobs write into.
    pub fn store(&self) -> &ClipStore {
        &self.store
    }

    /// The clip dispatcher.
    pub fn dispatcher(&self) -> &ClipDispatcher {
        &self.dispatcher
    }

    /// Run a job under a fresh job identifier.
    pub async fn run(&self, storyboard: &Storyboard, product_description: &str) -> AdreelResult<Job> {
        self.run_with_cancel(storyboard, product_description, &CancellationToken::new())
            .await
    }

    /// Run a job that stops early when `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns an error whose [`stage`](adreel_error::AdreelError::stage) is:
    /// - `compilation` for a blank product description
    /// - `generation` for provider, timeout or cancellation failures
    /// - `assembly` when there are no clips or the concat tool fails
    #[instrument(
        name = "pipeline.run",
        skip_all,
        fields(
            job_id = tracing::field::Empty,
            shots = storyboard.len(),
            provider = self.dispatcher.provider_name(),
        )
    )]
    pub async fn run_with_cancel(
        &self,
        storyboard: &Storyboard,
        product_description: &str,
        cancel: &CancellationToken,
    ) -> AdreelResult<Job> {
        validate_description(product_description)
            .map_err(|e| StageError::new(PipelineStage::Compilation, e))?;

        let job_id = JobId::new();
        tracing::Span::current().record("job_id", tracing::field::display(&job_id));

        let scenes = self.compiler.compile(storyboard, product_description);
        info!(stage = %PipelineStage::Compilation, scenes = scenes.len(), "Stage complete");

        let clip_paths = self
            .dispatcher
            .dispatch_all(&scenes, &job_id, cancel)
            .await
            .map_err(|e| StageError::new(PipelineStage::Generation, e))?;
        info!(stage = %PipelineStage::Generation, clips = clip_paths.len(), "Stage complete");

        let final_path = self.store.final_path(&job_id);
        self.assembler
            .assemble(&clip_paths, &final_path)
            .await
            .map_err(|e| StageError::new(PipelineStage::Assembly, e))?;
        info!(
            stage = %PipelineStage::Assembly,
            final_path = %final_path.display(),
            "Stage complete"
        );

        Ok(Job::new(job_id, clip_paths, final_path))
    }
}
