//! Runway text-to-video.

use super::polling::TaskStatus;
use super::remote::{RemoteBackend, missing, send_json, text_at};
use adreel_core::SceneRequest;
use adreel_error::AdreelResult;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

/// Runway API: bearer auth, `POST /videos`, `GET /videos/{id}`.
#[derive(Debug, Clone)]
pub struct RunwayBackend {
    base_url: String,
    api_key: String,
}

impl RunwayBackend {
    /// Create a backend for `base_url` (e.g. `https://api.runwayml.com/v1`).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

fn task_id(body: &Value) -> AdreelResult<String> {
    text_at(body, "/id")
        .or_else(|| text_at(body, "/job_id"))
        .ok_or_else(|| missing("id").into())
}

fn interpret_status(body: &Value) -> AdreelResult<TaskStatus> {
    let status = body.get("status").and_then(Value::as_str).unwrap_or("unknown");
    match status {
        "completed" | "succeeded" => {
            let video_url = text_at(body, "/output/url")
                .or_else(|| text_at(body, "/video_url"))
                .ok_or_else(|| missing("output.url"))?;
            Ok(TaskStatus::Completed { video_url })
        }
        "failed" | "error" => Ok(TaskStatus::Failed {
            payload: body.to_string(),
        }),
        other => Ok(TaskStatus::Pending(other.to_string())),
    }
}

#[async_trait]
impl RemoteBackend for RunwayBackend {
    fn name(&self) -> &'static str {
        "runway"
    }

    async fn submit(&self, client: &Client, scene: &SceneRequest) -> AdreelResult<String> {
        let payload = json!({
            "prompt": scene.prompt,
            "duration": scene.duration.secs(),
            "aspect_ratio": scene.aspect_ratio.as_ref(),
        });
        let body = send_json(
            client
                .post(format!("{}/videos", self.base_url))
                .bearer_auth(&self.api_key)
                .json(&payload),
        )
        .await?;
        task_id(&body)
    }

    async fn status(&self, client: &Client, task_id: &str) -> AdreelResult<TaskStatus> {
        let body = send_json(
            client
                .get(format!("{}/videos/{}", self.base_url, task_id))
                .bearer_auth(&self.api_key),
        )
        .await?;
        interpret_status(&body)
    }
}
