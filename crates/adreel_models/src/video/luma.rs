//! Luma Dream Machine through PiAPI.

use super::polling::TaskStatus;
use super::remote::{RemoteBackend, missing, send_json, text_at};
use adreel_core::SceneRequest;
use adreel_error::AdreelResult;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

/// PiAPI task API: `x-api-key` header, `POST /api/v1/task`, `GET /api/v1/task/{id}`.
#[derive(Debug, Clone)]
pub struct LumaBackend {
    base_url: String,
    api_key: String,
    model_name: String,
}

impl LumaBackend {
    /// Create a backend for `base_url` (e.g. `https://api.piapi.ai`) using `model_name`.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model_name: model_name.into(),
        }
    }

    fn task_url(&self) -> String {
        format!("{}/api/v1/task", self.base_url)
    }
}

fn task_id(body: &Value) -> AdreelResult<String> {
    text_at(body, "/data/task_id").ok_or_else(|| missing("data.task_id").into())
}

fn interpret_status(body: &Value) -> AdreelResult<TaskStatus> {
    let status = body
        .pointer("/data/status")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("data.status"))?;
    match status {
        "Completed" => {
            let video_url = text_at(body, "/data/output/video")
                .or_else(|| text_at(body, "/data/output/video_raw"))
                .ok_or_else(|| missing("data.output.video"))?;
            Ok(TaskStatus::Completed { video_url })
        }
        "Failed" => {
            let payload = body
                .pointer("/data/error")
                .filter(|e| !e.is_null())
                .unwrap_or(body)
                .to_string();
            Ok(TaskStatus::Failed { payload })
        }
        other => Ok(TaskStatus::Pending(other.to_string())),
    }
}

#[async_trait]
impl RemoteBackend for LumaBackend {
    fn name(&self) -> &'static str {
        "luma"
    }

    async fn submit(&self, client: &Client, scene: &SceneRequest) -> AdreelResult<String> {
        let payload = json!({
            "model": "luma",
            "task_type": "video_generation",
            "input": {
                "prompt": scene.prompt,
                "model_name": self.model_name,
                "duration": scene.duration.secs(),
                "aspect_ratio": scene.aspect_ratio.as_ref(),
            },
        });
        let body = send_json(
            client
                .post(self.task_url())
                .header("x-api-key", &self.api_key)
                .json(&payload),
        )
        .await?;
        task_id(&body)
    }

    async fn status(&self, client: &Client, task_id: &str) -> AdreelResult<TaskStatus> {
        let body = send_json(
            client
                .get(format!("{}/{}", self.task_url(), task_id))
                .header("x-api-key", &self.api_key),
        )
        .await?;
        interpret_status(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_is_nested_under_data() {
        let body = json!({"code": 200, "data": {"task_id": "t-1", "status": "Pending"}});
        assert_eq!(task_id(&body).unwrap(), "t-1");
        assert!(task_id(&json!({"task_id": "t-1"})).is_err());
    }

    #[test]
    fn test_completed_prefers_video_over_raw() {
        let body = json!({"data": {"status": "Completed", "output": {
            "video": "https://cdn/v.mp4", "video_raw": "https://cdn/raw.mp4"
        }}});
        assert_eq!(
            interpret_status(&body).unwrap(),
            TaskStatus::Completed {
                video_url: "https://cdn/v.mp4".to_string()
            }
        );

        let raw_only = json!({"data": {"status": "Completed", "output": {"video_raw": "https://cdn/raw.mp4"}}});
        assert!(matches!(
            interpret_status(&raw_only).unwrap(),
            TaskStatus::Completed { video_url } if video_url.ends_with("raw.mp4")
        ));
    }

    #[test]
    fn test_failed_carries_error_object() {
        let body = json!({"data": {"status": "Failed", "error": {"message": "nsfw prompt"}}});
        match interpret_status(&body).unwrap() {
            TaskStatus::Failed { payload } => {
                assert!(payload.contains("nsfw prompt"));
                assert!(!payload.contains("status"));
            }
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[test]
    fn test_processing_is_pending() {
        let body = json!({"data": {"status": "Processing"}});
        assert_eq!(
            interpret_status(&body).unwrap(),
            TaskStatus::Pending("Processing".to_string())
        );
    }

    #[test]
    fn test_missing_status_is_an_error() {
        assert!(interpret_status(&json!({"data": {}})).is_err());
    }
}
