//! Generic submit/poll/download driver for remote video services.

use super::polling::{PollPolicy, TaskStatus, poll_until_terminal};
use adreel_core::{JobId, PipelineMetrics, SceneRequest};
use adreel_error::{AdreelResult, CancelledError, HttpError, ProviderError, ProviderErrorKind};
use adreel_interface::ClipProvider;
use adreel_storage::ClipStore;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

/// Wire protocol of one remote video service.
///
/// Implementations only translate requests and responses; waiting,
/// cancellation and downloading are handled by [`RemoteClipProvider`].
#[async_trait]
pub trait RemoteBackend: Send + Sync {
    /// Provider name used in logs, metrics and errors.
    fn name(&self) -> &'static str;

    /// Submit a generation request and return the provider's task id.
    async fn submit(&self, client: &Client, scene: &SceneRequest) -> AdreelResult<String>;

    /// Check the status of a submitted task.
    async fn status(&self, client: &Client, task_id: &str) -> AdreelResult<TaskStatus>;
}

/// Send a request and decode a JSON response, mapping failures to [`ProviderError`].
pub(crate) async fn send_json(request: RequestBuilder) -> AdreelResult<Value> {
    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))?;

    if !response.status().is_success() {
        let status_code = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        return Err(ProviderError::new(ProviderErrorKind::Http {
            status_code,
            message,
        })
        .into());
    }

    response
        .json()
        .await
        .map_err(|e| ProviderError::new(ProviderErrorKind::MalformedResponse(e.to_string())).into())
}

/// Read a string (or number) at a JSON pointer.
pub(crate) fn text_at(body: &Value, pointer: &str) -> Option<String> {
    match body.pointer(pointer)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Error for a field the provider should have sent.
pub(crate) fn missing(field: &str) -> ProviderError {
    ProviderError::new(ProviderErrorKind::MissingField(field.to_string()))
}

/// Run `step` unless `cancel` fires first.
async fn until_cancelled<T>(
    cancel: &CancellationToken,
    what: impl FnOnce() -> String,
    step: impl Future<Output = AdreelResult<T>>,
) -> AdreelResult<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(CancelledError::new(what()).into()),
        result = step => result,
    }
}

/// A [`ClipProvider`] backed by a remote service.
///
/// Skips submission when the clip for `(job, scene)` already exists with
/// content, otherwise submits, polls within `policy` and downloads the
/// result atomically into the clip store.
pub struct RemoteClipProvider<B> {
    backend: B,
    client: Client,
    store: ClipStore,
    policy: PollPolicy,
}

impl<B: RemoteBackend> RemoteClipProvider<B> {
    /// Create a provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(backend: B, store: ClipStore, policy: PollPolicy) -> AdreelResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| HttpError::client_build(backend.name(), e))?;

        Ok(Self {
            backend,
            client,
            store,
            policy,
        })
    }

    async fn produce(
        &self,
        scene: &SceneRequest,
        path: PathBuf,
        cancel: &CancellationToken,
    ) -> AdreelResult<PathBuf> {
        let name = self.backend.name();
        let task_id = until_cancelled(
            cancel,
            || format!("submitting {} scene {}", name, scene.index),
            self.backend.submit(&self.client, scene),
        )
        .await?;
        info!(task_id = %task_id, "Submitted generation task");

        let backend = &self.backend;
        let client = &self.client;
        let task = task_id.as_str();
        let video_url = poll_until_terminal(name, task, &self.policy, cancel, move || {
            backend.status(client, task)
        })
        .await?;

        let bytes = until_cancelled(
            cancel,
            || format!("downloading {} task {}", name, task_id),
            self.download(&video_url),
        )
        .await?;

        self.store.write_clip(&path, &bytes).await?;
        info!(task_id = %task_id, size = bytes.len(), path = %path.display(), "Downloaded clip");
        Ok(path)
    }

    async fn download(&self, video_url: &str) -> AdreelResult<Vec<u8>> {
        let response = self
            .client
            .get(video_url)
            .send()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))?;
        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            return Err(ProviderError::new(ProviderErrorKind::Http {
                status_code,
                message: format!("download of {} failed", video_url),
            })
            .into());
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl<B: RemoteBackend> ClipProvider for RemoteClipProvider<B> {
    #[instrument(skip(self, scene, cancel), fields(provider = self.backend.name(), job_id = %job_id, scene = scene.index))]
    async fn generate(
        &self,
        scene: &SceneRequest,
        job_id: &JobId,
        cancel: &CancellationToken,
    ) -> AdreelResult<PathBuf> {
        let name = self.backend.name();
        let metrics = PipelineMetrics::get();
        let path = self.store.clip_path(job_id, scene.index);

        if self.store.has_content(&path).await {
            info!(path = %path.display(), "Clip already downloaded, skipping submission");
            metrics.record_clip(name, "resumed");
            return Ok(path);
        }

        match self.produce(scene, path, cancel).await {
            Ok(path) => {
                metrics.record_clip(name, "completed");
                Ok(path)
            }
            Err(e) => {
                warn!(error = %e, "Clip generation failed");
                metrics.record_clip(name, "failed");
                Err(e)
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        self.backend.name()
    }
}
