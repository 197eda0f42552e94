//! Product description to finished ad.

use crate::orchestrator::validate_description;
use crate::{ClipDispatcher, PipelineOrchestrator, SceneCompiler, VideoAssembler};
use adreel_config::AdreelConfig;
use adreel_core::JobSummary;
use adreel_error::{AdreelResult, PipelineStage, StageError};
use adreel_interface::PromptGateway;
use adreel_models::{OllamaGateway, build_clip_provider, build_gateway};
use adreel_planner::{PlanOutcome, StoryboardPlanner};
use adreel_storage::ClipStore;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

/// Plans a storyboard and runs it through the pipeline.
///
/// # Examples
///
/// ```no_run
/// use adreel_config::AdreelConfig;
/// use adreel_pipeline::AdGenerator;
///
/// # async fn example() -> adreel_error::AdreelResult<()> {
/// let config = AdreelConfig::load()?;
/// let generator = AdGenerator::from_config(&config)?;
/// let summary = generator.generate("Matte black insulated water bottle", 4).await?;
/// println!("{}", summary.job().final_video_path().display());
/// # Ok(())
/// # }
/// ```
pub struct AdGenerator<G: PromptGateway> {
    planner: StoryboardPlanner<G>,
    orchestrator: PipelineOrchestrator,
}

impl AdGenerator<OllamaGateway> {
    /// Wire every component from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the media directories cannot be created or a provider
    /// cannot be built.
    pub fn from_config(config: &AdreelConfig) -> AdreelResult<Self> {
        let planner = build_planner(config)?;
        let store = ClipStore::new(&config.media.root)?;
        let provider = build_clip_provider(config, config.video.provider, store.clone())?;

        let dispatcher = ClipDispatcher::new(provider, config.video.max_concurrent_scenes)
            .with_retries(config.video.scene_retries);
        let orchestrator = PipelineOrchestrator::new(
            SceneCompiler::from_config(&config.video),
            dispatcher,
            VideoAssembler::from_config(&config.assembler),
            store,
        );

        Ok(Self::new(planner, orchestrator))
    }
}

/// Build only the storyboard planner from configuration.
///
/// No media directories are created and no clip provider is built, so
/// planning works without any `[providers.<name>]` section.
///
/// # Errors
///
/// Returns an HTTP error if the gateway client cannot be built.
pub fn build_planner(config: &AdreelConfig) -> AdreelResult<StoryboardPlanner<OllamaGateway>> {
    let gateway = build_gateway(config)?;
    Ok(StoryboardPlanner::with_config(gateway, config.planner.clone()))
}

/// Plan a storyboard without generating video.
///
/// # Errors
///
/// Returns an input error for a blank description.
pub async fn plan_ad<G: PromptGateway>(
    planner: &StoryboardPlanner<G>,
    product_description: &str,
    max_scenes: usize,
) -> AdreelResult<PlanOutcome> {
    validate_description(product_description)?;
    Ok(planner.plan_detailed(product_description, max_scenes).await)
}

impl<G: PromptGateway> AdGenerator<G> {
    /// Create a generator from a planner and an orchestrator.
    pub fn new(planner: StoryboardPlanner<G>, orchestrator: PipelineOrchestrator) -> Self {
        Self {
            planner,
            orchestrator,
        }
    }

    /// The storyboard planner.
    pub fn planner(&self) -> &StoryboardPlanner<G> {
        &self.planner
    }

    /// The pipeline orchestrator.
    pub fn orchestrator(&self) -> &PipelineOrchestrator {
        &self.orchestrator
    }

    /// Plan a storyboard without generating video.
    ///
    /// # Errors
    ///
    /// Returns an input error for a blank description.
    pub async fn plan(&self, product_description: &str, max_scenes: usize) -> AdreelResult<PlanOutcome> {
        plan_ad(&self.planner, product_description, max_scenes).await
    }

    /// Plan, generate and assemble an ad.
    pub async fn generate(&self, product_description: &str, max_scenes: usize) -> AdreelResult<JobSummary> {
        self.generate_with_cancel(product_description, max_scenes, &CancellationToken::new())
            .await
    }

    /// Plan, generate and assemble an ad, stopping early when `cancel` fires.
    ///
    /// Planning always yields a storyboard; failures come from the pipeline
    /// stages and carry the stage that failed.
    #[instrument(name = "ad_generator.generate", skip(self, product_description, cancel))]
    pub async fn generate_with_cancel(
        &self,
        product_description: &str,
        max_scenes: usize,
        cancel: &CancellationToken,
    ) -> AdreelResult<JobSummary> {
        validate_description(product_description)
            .map_err(|e| StageError::new(PipelineStage::Compilation, e))?;

        let storyboard = self.planner.plan(product_description, max_scenes).await;
        let job = self
            .orchestrator
            .run_with_cancel(&storyboard, product_description, cancel)
            .await?;

        info!(job_id = %job.job_id(), scenes = job.scene_count(), "Ad generated");
        Ok(JobSummary::new(product_description, storyboard, job))
    }
}
