//! Capability traits for text and video providers.

use adreel_core::{ChatMessage, JobId, SceneRequest};
use adreel_error::AdreelResult;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

/// Sends a chat conversation to a language model and returns its text.
///
/// Implementations absorb connectivity failures by answering with a canned
/// mock; any other failure is returned as an error.
#[async_trait]
pub trait PromptGateway: Send + Sync {
    /// Send the ordered messages at the given sampling temperature.
    async fn send(&self, messages: &[ChatMessage], temperature: f32) -> AdreelResult<String>;

    /// Provider name (e.g., "ollama").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "phi3").
    fn model_name(&self) -> &str;
}

/// Produces one local clip file for one scene.
///
/// Every implementation writes to `<job_id>_scene_<index>.mp4` under the
/// clips directory, so concurrent scenes never share a path.
#[async_trait]
pub trait ClipProvider: Send + Sync {
    /// Generate the clip for `scene` and return its local path.
    ///
    /// Long waits observe `cancel` and return a cancellation error once it fires.
    async fn generate(
        &self,
        scene: &SceneRequest,
        job_id: &JobId,
        cancel: &CancellationToken,
    ) -> AdreelResult<PathBuf>;

    /// Provider name (e.g., "mock", "runway").
    fn provider_name(&self) -> &'static str;
}
