//! Tests for concurrent clip dispatch.

mod test_utils;

use adreel_core::{AspectRatio, ClipDuration, JobId, SceneRequest};
use adreel_error::AdreelErrorKind;
use adreel_pipeline::ClipDispatcher;
use adreel_storage::ClipStore;
use std::sync::Arc;
use std::time::{Duration, Instant};
use test_utils::{ScriptedProvider, random_latency};
use tokio_util::sync::CancellationToken;

fn scenes(count: usize) -> Vec<SceneRequest> {
    (0..count)
        .map(|index| SceneRequest {
            index,
            prompt: format!("scene {index}"),
            duration: ClipDuration::Short,
            aspect_ratio: AspectRatio::Landscape,
        })
        .collect()
}

fn store(dir: &tempfile::TempDir) -> ClipStore {
    ClipStore::new(dir.path()).unwrap()
}

#[tokio::test]
async fn test_results_follow_input_order_despite_random_latency() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    let latencies = (0..8).map(|_| random_latency(40)).collect();
    let provider = Arc::new(ScriptedProvider::new(store.clone(), latencies));
    let dispatcher = ClipDispatcher::new(provider, 4);
    let job_id = JobId::new();

    let paths = dispatcher
        .dispatch_all(&scenes(8), &job_id, &CancellationToken::new())
        .await
        .unwrap();

    let expected: Vec<_> = (0..8).map(|i| store.clip_path(&job_id, i)).collect();
    assert_eq!(paths, expected);
}

#[tokio::test]
async fn test_reverse_completion_order_keeps_alignment() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    let latencies = vec![
        Duration::from_millis(60),
        Duration::from_millis(40),
        Duration::from_millis(20),
        Duration::from_millis(0),
    ];
    let provider = Arc::new(ScriptedProvider::new(store.clone(), latencies));
    let dispatcher = ClipDispatcher::new(provider, 4);
    let job_id = JobId::new();

    let paths = dispatcher
        .dispatch_all(&scenes(4), &job_id, &CancellationToken::new())
        .await
        .unwrap();

    assert!(paths[0].ends_with(format!("{job_id}_scene_0.mp4")));
    assert!(paths[3].ends_with(format!("{job_id}_scene_3.mp4")));
}

#[tokio::test]
async fn test_worker_pool_is_bounded() {
    let dir = tempfile::tempdir().unwrap();
    let latencies = vec![Duration::from_millis(20); 9];
    let provider = Arc::new(ScriptedProvider::new(store(&dir), latencies));
    let dispatcher = ClipDispatcher::new(provider.clone(), 3);

    dispatcher
        .dispatch_all(&scenes(9), &JobId::new(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(provider.peak_concurrency() <= 3);
    assert!(provider.peak_concurrency() >= 2);
    assert_eq!(provider.calls(), 9);
}

#[tokio::test]
async fn test_zero_concurrency_still_makes_progress() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::new(store(&dir), Vec::new()));
    let dispatcher = ClipDispatcher::new(provider.clone(), 0);

    let paths = dispatcher
        .dispatch_all(&scenes(3), &JobId::new(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(paths.len(), 3);
    assert_eq!(provider.peak_concurrency(), 1);
}

#[tokio::test]
async fn test_first_failure_aborts_remaining_scenes() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    let mut latencies = vec![Duration::from_secs(10); 4];
    latencies[1] = Duration::from_millis(10);
    let provider = Arc::new(ScriptedProvider::new(store.clone(), latencies).failing_scene(1));
    let dispatcher = ClipDispatcher::new(provider, 4);
    let job_id = JobId::new();

    let started = Instant::now();
    let err = dispatcher
        .dispatch_all(&scenes(4), &job_id, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(5));
    match err.kind() {
        AdreelErrorKind::Generation(e) => {
            assert_eq!(e.task_id, "task-1");
            assert!(e.payload.contains("content policy"));
        }
        other => panic!("expected generation error, got {other}"),
    }
    for index in [0, 2, 3] {
        assert!(!store.clip_path(&job_id, index).exists());
    }
}

#[tokio::test]
async fn test_caller_cancellation_reaches_providers() {
    let dir = tempfile::tempdir().unwrap();
    let latencies = vec![Duration::from_secs(10); 2];
    let provider = Arc::new(ScriptedProvider::new(store(&dir), latencies));
    let dispatcher = ClipDispatcher::new(provider.clone(), 2);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let err = dispatcher
        .dispatch_all(&scenes(2), &JobId::new(), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), AdreelErrorKind::Cancelled(_)));
    assert!(provider.cancelled() >= 1);
}

#[tokio::test]
async fn test_failures_are_not_retried_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::new(store(&dir), Vec::new()).flaky_scene(0, 1));
    let dispatcher = ClipDispatcher::new(provider.clone(), 1);

    let err = dispatcher
        .dispatch_all(&scenes(1), &JobId::new(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), AdreelErrorKind::Provider(_)));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_retryable_failures_are_retried_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::new(store(&dir), Vec::new()).flaky_scene(1, 2));
    let dispatcher =
        ClipDispatcher::new(provider.clone(), 2).with_retries(2).with_retry_backoff(Duration::from_millis(1));

    let paths = dispatcher
        .dispatch_all(&scenes(2), &JobId::new(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(paths.len(), 2);
    assert_eq!(provider.calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_retry_backoff_follows_the_error_strategy() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::new(store(&dir), Vec::new()).flaky_scene(0, 1));
    let dispatcher = ClipDispatcher::new(provider.clone(), 1).with_retries(1);

    let started = tokio::time::Instant::now();
    let paths = dispatcher
        .dispatch_all(&scenes(1), &JobId::new(), &CancellationToken::new())
        .await
        .unwrap();

    // HTTP 503 backs off from 2s with a 60s cap
    assert_eq!(paths.len(), 1);
    assert_eq!(provider.calls(), 2);
    assert!(started.elapsed() <= Duration::from_secs(60));
}

#[tokio::test]
async fn test_generation_failures_are_never_retried() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::new(store(&dir), Vec::new()).failing_scene(0));
    let dispatcher =
        ClipDispatcher::new(provider.clone(), 1).with_retries(3).with_retry_backoff(Duration::from_millis(1));

    let err = dispatcher
        .dispatch_all(&scenes(1), &JobId::new(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), AdreelErrorKind::Generation(_)));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_no_scenes_yield_no_paths() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::new(store(&dir), Vec::new()));
    let dispatcher = ClipDispatcher::new(provider.clone(), 4);

    let paths = dispatcher
        .dispatch_all(&[], &JobId::new(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(paths.is_empty());
    assert_eq!(provider.calls(), 0);
}
