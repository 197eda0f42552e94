//! Fakes shared by the pipeline tests.

#![allow(dead_code)]

use adreel_core::{JobId, SceneRequest};
use adreel_error::{
    AdreelResult, CancelledError, GenerationError, ProviderError, ProviderErrorKind,
};
use adreel_interface::ClipProvider;
use adreel_storage::ClipStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Shell stand-in for ffmpeg's concat demuxer.
///
/// Logs each invocation, checks that every manifest entry exists and copies
/// the manifest into the output file so tests can inspect the order.
const FAKE_CONCAT: &str = r#"#!/bin/sh
echo "$@" >> "$(dirname "$0")/invocations.log"
manifest=""
prev=""
out=""
for arg in "$@"; do
  if [ "$prev" = "-i" ]; then manifest="$arg"; fi
  prev="$arg"
  out="$arg"
done
[ -f "$manifest" ] || { echo "missing manifest" >&2; exit 2; }
while IFS= read -r line; do
  path=$(printf '%s' "$line" | sed -e "s/^file '//" -e "s/'\$//" -e "s/'\\\\''/'/g")
  [ -f "$path" ] || { echo "$path: No such file or directory" >&2; exit 1; }
done < "$manifest"
cat "$manifest" > "$out"
"#;

/// Write the fake concat tool into `dir` and return its path.
#[cfg(unix)]
pub fn fake_concat_tool(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-concat");
    std::fs::write(&path, FAKE_CONCAT).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// How many times the fake tool in `dir` was started.
pub fn invocations(dir: &Path) -> usize {
    std::fs::read_to_string(dir.join("invocations.log"))
        .map(|log| log.lines().count())
        .unwrap_or(0)
}

/// A URL on a port nothing listens on.
pub fn closed_url(path: &str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, path)
}

/// Pseudo-random latency between 0 and `max_ms` milliseconds.
pub fn random_latency(max_ms: u64) -> Duration {
    let noise = uuid::Uuid::new_v4().as_u128();
    Duration::from_millis((noise % u128::from(max_ms + 1)) as u64)
}

/// Clip provider with scripted latency and failures that records how it was used.
pub struct ScriptedProvider {
    store: ClipStore,
    latencies: Vec<Duration>,
    fail_scene: Option<usize>,
    transient_failures: Mutex<HashMap<usize, usize>>,
    active: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
    cancelled: AtomicUsize,
}

impl ScriptedProvider {
    /// Every scene succeeds after its latency; scenes past the list take none.
    pub fn new(store: ClipStore, latencies: Vec<Duration>) -> Self {
        Self {
            store,
            latencies,
            fail_scene: None,
            transient_failures: Mutex::new(HashMap::new()),
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            cancelled: AtomicUsize::new(0),
        }
    }

    /// Scene `index` reports a terminal generation failure after its latency.
    pub fn failing_scene(mut self, index: usize) -> Self {
        self.fail_scene = Some(index);
        self
    }

    /// Scene `index` answers HTTP 503 for its first `times` calls.
    pub fn flaky_scene(self, index: usize, times: usize) -> Self {
        self.transient_failures.lock().unwrap().insert(index, times);
        self
    }

    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn cancelled(&self) -> usize {
        self.cancelled.load(Ordering::SeqCst)
    }

    async fn run(
        &self,
        scene: &SceneRequest,
        job_id: &JobId,
        cancel: &CancellationToken,
    ) -> AdreelResult<PathBuf> {
        let flaky = {
            let mut failures = self.transient_failures.lock().unwrap();
            match failures.get_mut(&scene.index) {
                Some(remaining) if *remaining > 0 => {
                    *remaining -= 1;
                    true
                }
                _ => false,
            }
        };
        if flaky {
            return Err(ProviderError::new(ProviderErrorKind::Http {
                status_code: 503,
                message: "Service unavailable".to_string(),
            })
            .into());
        }

        let latency = self
            .latencies
            .get(scene.index)
            .copied()
            .unwrap_or_default();
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                self.cancelled.fetch_add(1, Ordering::SeqCst);
                return Err(CancelledError::new(format!("scene {} cancelled", scene.index)).into());
            }
            _ = tokio::time::sleep(latency) => {}
        }

        if self.fail_scene == Some(scene.index) {
            return Err(GenerationError::new(
                "scripted",
                format!("task-{}", scene.index),
                r#"{"status": "failed", "reason": "content policy"}"#,
            )
            .into());
        }

        let path = self.store.clip_path(job_id, scene.index);
        self.store.write_clip(&path, b"clip").await?;
        Ok(path)
    }
}

#[async_trait]
impl ClipProvider for ScriptedProvider {
    async fn generate(
        &self,
        scene: &SceneRequest,
        job_id: &JobId,
        cancel: &CancellationToken,
    ) -> AdreelResult<PathBuf> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        let result = self.run(scene, job_id, cancel).await;

        self.active.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
