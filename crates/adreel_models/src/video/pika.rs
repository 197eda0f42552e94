//! Pika v2.1 text-to-video through the Fal queue.

use super::polling::TaskStatus;
use super::remote::{RemoteBackend, missing, send_json, text_at};
use adreel_core::SceneRequest;
use adreel_error::AdreelResult;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

/// Fal queue API: `Authorization: Key ...`, submit to the model URL, poll `{url}/{request_id}`.
#[derive(Debug, Clone)]
pub struct PikaBackend {
    queue_url: String,
    api_key: String,
    resolution: String,
}

impl PikaBackend {
    /// Create a backend for the model's queue URL.
    pub fn new(
        queue_url: impl Into<String>,
        api_key: impl Into<String>,
        resolution: impl Into<String>,
    ) -> Self {
        Self {
            queue_url: queue_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            resolution: resolution.into(),
        }
    }

    fn authorization(&self) -> String {
        format!("Key {}", self.api_key)
    }
}

fn request_id(body: &Value) -> AdreelResult<String> {
    text_at(body, "/request_id").ok_or_else(|| missing("request_id").into())
}

fn interpret_status(body: &Value) -> AdreelResult<TaskStatus> {
    let status = body.get("status").and_then(Value::as_str).unwrap_or("UNKNOWN");
    match status {
        "COMPLETED" => {
            let video_url =
                text_at(body, "/data/video_url").ok_or_else(|| missing("data.video_url"))?;
            Ok(TaskStatus::Completed { video_url })
        }
        "FAILED" | "CANCELLED" => Ok(TaskStatus::Failed {
            payload: body.to_string(),
        }),
        other => Ok(TaskStatus::Pending(other.to_string())),
    }
}

#[async_trait]
impl RemoteBackend for PikaBackend {
    fn name(&self) -> &'static str {
        "pika"
    }

    async fn submit(&self, client: &Client, scene: &SceneRequest) -> AdreelResult<String> {
        let payload = json!({
            "input": {
                "prompt": scene.prompt,
                "duration": scene.duration.to_string(),
                "aspect_ratio": scene.aspect_ratio.as_ref(),
                "resolution": self.resolution,
            }
        });
        let body = send_json(
            client
                .post(&self.queue_url)
                .header("Authorization", self.authorization())
                .json(&payload),
        )
        .await?;
        request_id(&body)
    }

    async fn status(&self, client: &Client, task_id: &str) -> AdreelResult<TaskStatus> {
        let body = send_json(
            client
                .get(format!("{}/{}", self.queue_url, task_id))
                .header("Authorization", self.authorization()),
        )
        .await?;
        interpret_status(&body)
    }
}
