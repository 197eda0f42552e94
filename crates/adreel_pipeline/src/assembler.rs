//! Final video assembly through an external concat tool.

use adreel_config::AssemblerConfig;
use adreel_error::{
    AdreelResult, InputError, InputErrorKind, StorageError, StorageErrorKind, ToolError,
    ToolErrorKind,
};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, instrument};

const STDERR_PREVIEW_CHARS: usize = 2_000;

/// Format one concat-demuxer manifest line for `clip`.
///
/// The path is made absolute and single quotes are escaped as `'\''`.
///
/// # Examples
///
/// ```
/// use adreel_pipeline::manifest_entry;
///
/// let line = manifest_entry("/media/clips/it's_scene_0.mp4".as_ref()).unwrap();
/// assert_eq!(line, "file '/media/clips/it'\\''s_scene_0.mp4'");
/// ```
pub fn manifest_entry(clip: &Path) -> AdreelResult<String> {
    let absolute = std::path::absolute(clip).map_err(|e| {
        StorageError::new(StorageErrorKind::InvalidPath(format!(
            "{}: {}",
            clip.display(),
            e
        )))
    })?;
    let escaped = absolute.to_string_lossy().replace('\'', r"'\''");
    Ok(format!("file '{}'", escaped))
}

/// Manifest file removed when dropped.
struct Manifest {
    path: PathBuf,
}

impl Manifest {
    async fn write(output: &Path, clips: &[PathBuf]) -> AdreelResult<Self> {
        let mut contents = String::new();
        for clip in clips {
            contents.push_str(&manifest_entry(clip)?);
            contents.push('\n');
        }

        let manifest = Self {
            path: output.with_extension("txt"),
        };
        tokio::fs::write(&manifest.path, contents)
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    manifest.path.display(),
                    e
                )))
            })?;
        Ok(manifest)
    }
}

impl Drop for Manifest {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove manifest");
        }
    }
}

/// Concatenates clips into one video without re-encoding.
///
/// Runs `<program> -y -f concat -safe 0 -i <manifest> -c copy <output>`, so
/// any ffmpeg-compatible program works. Clip existence is left to the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAssembler {
    program: String,
}

impl Default for VideoAssembler {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl VideoAssembler {
    /// Create an assembler invoking `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Create an assembler from the `[assembler]` section.
    pub fn from_config(config: &AssemblerConfig) -> Self {
        Self::new(&config.program)
    }

    /// Program invoked for concatenation.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Concatenate `clips` in order into `output`.
    ///
    /// The manifest is written next to `output` with a `.txt` extension and
    /// removed on every exit path.
    ///
    /// # Errors
    ///
    /// - [`InputError`] when `clips` is empty; the tool is not started
    /// - [`ToolError`] when the tool cannot start or exits unsuccessfully
    #[instrument(
        name = "video_assembler.assemble",
        skip(self, clips),
        fields(program = %self.program, clips = clips.len(), output = %output.display())
    )]
    pub async fn assemble(&self, clips: &[PathBuf], output: &Path) -> AdreelResult<()> {
        if clips.is_empty() {
            return Err(InputError::new(InputErrorKind::NoClips).into());
        }

        let manifest = Manifest::write(output, clips).await?;
        debug!(manifest = %manifest.path.display(), "Wrote concat manifest");

        let result = Command::new(&self.program)
            .args(["-y", "-f", "concat", "-safe", "0", "-i"])
            .arg(&manifest.path)
            .args(["-c", "copy"])
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                ToolError::new(ToolErrorKind::Launch {
                    tool: self.program.clone(),
                    message: e.to_string(),
                })
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ToolError::new(ToolErrorKind::Failed {
                tool: self.program.clone(),
                code: result.status.code(),
                stderr: stderr.trim().chars().take(STDERR_PREVIEW_CHARS).collect(),
            })
            .into());
        }

        info!("Assembled final video");
        Ok(())
    }
}
