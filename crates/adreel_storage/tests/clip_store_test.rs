use adreel_core::JobId;
use adreel_storage::ClipStore;
use tempfile::TempDir;

#[test]
fn test_new_creates_layout() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("media");
    let store = ClipStore::new(&root).unwrap();

    assert!(root.join("clips").is_dir());
    assert!(root.join("final").is_dir());
    assert_eq!(store.root(), root.as_path());
}

#[test]
fn test_paths_are_keyed_by_job_and_index() {
    let temp_dir = TempDir::new().unwrap();
    let store = ClipStore::new(temp_dir.path()).unwrap();
    let job_id = JobId::new();

    let clip = store.clip_path(&job_id, 3);
    assert_eq!(clip.parent().unwrap(), store.clips_dir());
    assert_eq!(
        clip.file_name().unwrap().to_str().unwrap(),
        format!("{}_scene_3.mp4", job_id)
    );

    let video = store.final_path(&job_id);
    assert_eq!(video.parent().unwrap(), store.final_dir());
    assert_eq!(
        video.file_name().unwrap().to_str().unwrap(),
        format!("{}_final.mp4", job_id)
    );

    assert_ne!(store.clip_path(&job_id, 0), store.clip_path(&JobId::new(), 0));
}

#[tokio::test]
async fn test_write_clip_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = ClipStore::new(temp_dir.path()).unwrap();
    let path = store.clip_path(&JobId::new(), 0);

    store.write_clip(&path, b"mp4 bytes").await.unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"mp4 bytes");
    let entries: Vec<_> = std::fs::read_dir(store.clips_dir()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_has_content() {
    let temp_dir = TempDir::new().unwrap();
    let store = ClipStore::new(temp_dir.path()).unwrap();
    let job_id = JobId::new();

    let missing = store.clip_path(&job_id, 0);
    assert!(!store.has_content(&missing).await);

    let empty = store.clip_path(&job_id, 1);
    store.write_clip(&empty, b"").await.unwrap();
    assert!(empty.exists());
    assert!(!store.has_content(&empty).await);

    let full = store.clip_path(&job_id, 2);
    store.write_clip(&full, b"x").await.unwrap();
    assert!(store.has_content(&full).await);
}

#[tokio::test]
async fn test_copy_clip() {
    let temp_dir = TempDir::new().unwrap();
    let store = ClipStore::new(temp_dir.path().join("media")).unwrap();
    let sample = temp_dir.path().join("sample.mp4");
    std::fs::write(&sample, b"sample").unwrap();

    let path = store.clip_path(&JobId::new(), 0);
    store.copy_clip(&sample, &path).await.unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"sample");

    let err = store
        .copy_clip(&temp_dir.path().join("absent.mp4"), &path)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to copy"));
}
