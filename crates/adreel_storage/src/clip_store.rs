//! Filesystem clip store.

use adreel_core::JobId;
use adreel_error::{AdreelResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Clip and final-video directories under one media root.
///
/// Writes go to a temporary sibling file that is renamed into place, so a
/// clip path either holds a complete file or nothing.
#[derive(Debug, Clone)]
pub struct ClipStore {
    root: PathBuf,
    clips_dir: PathBuf,
    final_dir: PathBuf,
}

impl ClipStore {
    /// Create the store, creating `clips/` and `final/` under `root` if needed.
    ///
    /// # Errors
    ///
    /// Returns error if a directory cannot be created.
    #[tracing::instrument(skip(root))]
    pub fn new(root: impl Into<PathBuf>) -> AdreelResult<Self> {
        let root = root.into();
        let clips_dir = root.join("clips");
        let final_dir = root.join("final");

        for dir in [&clips_dir, &final_dir] {
            std::fs::create_dir_all(dir).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    dir.display(),
                    e
                )))
            })?;
        }

        tracing::debug!(path = %root.display(), "Opened clip store");
        Ok(Self {
            root,
            clips_dir,
            final_dir,
        })
    }

    /// Media root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding per-scene clips.
    pub fn clips_dir(&self) -> &Path {
        &self.clips_dir
    }

    /// Directory holding assembled videos.
    pub fn final_dir(&self) -> &Path {
        &self.final_dir
    }

    /// Path of the clip for one scene of a job: `clips/<job_id>_scene_<index>.mp4`.
    pub fn clip_path(&self, job_id: &JobId, index: usize) -> PathBuf {
        self.clips_dir.join(format!("{}_scene_{}.mp4", job_id, index))
    }

    /// Path of a job's assembled video: `final/<job_id>_final.mp4`.
    pub fn final_path(&self, job_id: &JobId) -> PathBuf {
        self.final_dir.join(format!("{}_final.mp4", job_id))
    }

    /// True when `path` exists and holds at least one byte.
    pub async fn has_content(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_file() && meta.len() > 0)
            .unwrap_or(false)
    }

    /// Write `data` to `path` atomically.
    #[tracing::instrument(skip(self, data), fields(path = %path.display(), size = data.len()))]
    pub async fn write_clip(&self, path: &Path, data: &[u8]) -> AdreelResult<()> {
        let temp_path = Self::temp_path(path);
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        Self::commit(&temp_path, path).await?;
        tracing::debug!("Stored clip");
        Ok(())
    }

    /// Copy `source` to `path` atomically.
    #[tracing::instrument(skip(self), fields(source = %source.display(), path = %path.display()))]
    pub async fn copy_clip(&self, source: &Path, path: &Path) -> AdreelResult<()> {
        let temp_path = Self::temp_path(path);
        tokio::fs::copy(source, &temp_path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileCopy(format!(
                "{} to {}: {}",
                source.display(),
                temp_path.display(),
                e
            )))
        })?;

        Self::commit(&temp_path, path).await?;
        tracing::debug!("Copied clip");
        Ok(())
    }

    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".part");
        path.with_file_name(name)
    }

    async fn commit(temp_path: &Path, path: &Path) -> AdreelResult<()> {
        if let Err(e) = tokio::fs::rename(temp_path, path).await {
            let _ = tokio::fs::remove_file(temp_path).await;
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
            .into());
        }
        Ok(())
    }
}
