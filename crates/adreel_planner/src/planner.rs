//! The draft, critique and refine planning loop.

use crate::{extract_json_block, fallback_storyboard, parse_json, prompts};
use adreel_config::PlannerConfig;
use adreel_core::{ChatMessage, PipelineMetrics, Storyboard};
use adreel_interface::PromptGateway;
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Where a planned storyboard came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StoryboardSource {
    /// Decoded from the refined model reply
    Model,
    /// The canned fallback storyboard
    Fallback,
}

/// Why the planner fell back to the canned storyboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FallbackReason {
    /// The draft round returned blank text
    EmptyDraft,
    /// A gateway call failed
    GatewayError,
    /// The refined reply did not decode as a storyboard
    DecodeError,
    /// The refined storyboard had no shots
    EmptyStoryboard,
    /// The shot count policy refused the refined storyboard
    ShotCountRejected,
}

/// A planned storyboard together with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct PlanOutcome {
    /// The storyboard to render
    storyboard: Storyboard,
    /// Model output or fallback
    source: StoryboardSource,
    /// Set when `source` is [`StoryboardSource::Fallback`]
    fallback_reason: Option<FallbackReason>,
}

impl PlanOutcome {
    fn model(storyboard: Storyboard) -> Self {
        Self {
            storyboard,
            source: StoryboardSource::Model,
            fallback_reason: None,
        }
    }

    fn fallback(max_scenes: usize, reason: FallbackReason) -> Self {
        Self {
            storyboard: fallback_storyboard(max_scenes),
            source: StoryboardSource::Fallback,
            fallback_reason: Some(reason),
        }
    }

    /// True when the storyboard came from the fallback.
    pub fn is_fallback(&self) -> bool {
        self.source == StoryboardSource::Fallback
    }

    /// Take the storyboard.
    pub fn into_storyboard(self) -> Storyboard {
        self.storyboard
    }
}

/// Plans storyboards with three sequential model rounds.
///
/// Planning never fails: blank drafts, gateway errors, undecodable replies,
/// empty storyboards and policy rejections all yield the fallback storyboard.
pub struct StoryboardPlanner<G: PromptGateway> {
    gateway: G,
    settings: PlannerConfig,
}

impl<G: PromptGateway> StoryboardPlanner<G> {
    /// Create a planner with default temperatures and shot count policy.
    pub fn new(gateway: G) -> Self {
        Self::with_config(gateway, PlannerConfig::default())
    }

    /// Create a planner from configuration.
    pub fn with_config(gateway: G, settings: PlannerConfig) -> Self {
        Self { gateway, settings }
    }

    /// The underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// The planner settings.
    pub fn settings(&self) -> &PlannerConfig {
        &self.settings
    }

    /// Plan a storyboard for a product.
    pub async fn plan(&self, product_description: &str, max_scenes: usize) -> Storyboard {
        self.plan_detailed(product_description, max_scenes)
            .await
            .into_storyboard()
    }

    /// Plan a storyboard and report whether the fallback was used.
    #[instrument(
        name = "storyboard_planner.plan",
        skip(self, product_description),
        fields(
            model = %self.gateway.model_name(),
            storyboard_source = tracing::field::Empty,
            reason = tracing::field::Empty,
        )
    )]
    pub async fn plan_detailed(&self, product_description: &str, max_scenes: usize) -> PlanOutcome {
        let outcome = match self.run_rounds(product_description, max_scenes).await {
            Ok(storyboard) => PlanOutcome::model(storyboard),
            Err(reason) => PlanOutcome::fallback(max_scenes, reason),
        };

        let span = tracing::Span::current();
        span.record("storyboard_source", outcome.source.as_ref());
        let reason = outcome.fallback_reason.map(|r| r.as_ref().to_string());
        if let Some(reason) = &reason {
            span.record("reason", reason.as_str());
            warn!(
                storyboard_source = outcome.source.as_ref(),
                reason = reason.as_str(),
                shots = outcome.storyboard.len(),
                "Using fallback storyboard"
            );
        } else {
            info!(
                storyboard_source = outcome.source.as_ref(),
                shots = outcome.storyboard.len(),
                "Storyboard planned"
            );
        }

        PipelineMetrics::get().record_storyboard(outcome.source.as_ref(), reason.as_deref());
        outcome
    }

    async fn run_rounds(
        &self,
        product_description: &str,
        max_scenes: usize,
    ) -> Result<Storyboard, FallbackReason> {
        let draft = self
            .ask(
                "draft",
                &prompts::draft_messages(product_description, max_scenes),
                self.settings.draft_temperature,
            )
            .await?;
        if draft.trim().is_empty() {
            return Err(FallbackReason::EmptyDraft);
        }

        let critique = self
            .ask(
                "critique",
                &prompts::critique_messages(product_description, &draft),
                self.settings.critique_temperature,
            )
            .await?;
        debug!(critique = %critique.chars().take(100).collect::<String>(), "Critique received");

        let refined = self
            .ask(
                "refine",
                &prompts::refine_messages(&draft, &critique, max_scenes),
                self.settings.refine_temperature,
            )
            .await?;

        let storyboard: Storyboard = parse_json(extract_json_block(&refined)).map_err(|e| {
            warn!(error = %e, "Refined storyboard did not decode");
            FallbackReason::DecodeError
        })?;

        if storyboard.is_empty() {
            return Err(FallbackReason::EmptyStoryboard);
        }

        let returned = storyboard.len();
        let policy = self.settings.shot_count_policy;
        let storyboard = policy
            .apply(storyboard, max_scenes)
            .ok_or(FallbackReason::ShotCountRejected)?;
        if returned != max_scenes {
            debug!(returned, requested = max_scenes, %policy, "Shot count differs from request");
        }
        Ok(storyboard)
    }

    async fn ask(
        &self,
        round: &'static str,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, FallbackReason> {
        debug!(round, temperature, "Sending planning round");
        self.gateway.send(messages, temperature).await.map_err(|e| {
            warn!(round, error = %e, "Planning round failed");
            FallbackReason::GatewayError
        })
    }
}
