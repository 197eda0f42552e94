//! Storyboard to scene request compilation.

use adreel_config::VideoConfig;
use adreel_core::{AspectRatio, ClipDuration, SceneRequest, Shot, Storyboard};

/// Build the video prompt for one shot.
///
/// Present fields are joined with `", "` in a fixed order: shot type, camera,
/// context, focus, the product clause, then any on-screen text. Absent fields
/// leave no trace in the prompt.
///
/// # Examples
///
/// ```
/// use adreel_core::{OnScreenText, Shot};
/// use adreel_pipeline::shot_to_prompt;
///
/// assert_eq!(
///     shot_to_prompt(&Shot::new("Close-up"), "a brass lamp"),
///     "Close-up shot, high quality cinematic ad of a brass lamp"
/// );
///
/// let shot = Shot::new("Wide shot")
///     .with_camera("Slow pan")
///     .with_context("a sunlit kitchen")
///     .with_text(OnScreenText::overlay("Shop now"));
/// assert_eq!(
///     shot_to_prompt(&shot, "a brass lamp"),
///     "Wide shot, Slow pan, in a sunlit kitchen, \
///      high quality cinematic ad of a brass lamp, with on-screen text: \"Shop now\""
/// );
/// ```
pub fn shot_to_prompt(shot: &Shot, product_description: &str) -> String {
    let mut parts = Vec::with_capacity(6);

    if let Some(shot_type) = &shot.shot_type {
        // Model output often names the type "Wide shot" already
        if shot_type.to_lowercase().ends_with("shot") {
            parts.push(shot_type.clone());
        } else {
            parts.push(format!("{} shot", shot_type));
        }
    }
    if let Some(camera) = &shot.camera {
        parts.push(camera.clone());
    }
    if let Some(context) = &shot.context {
        parts.push(format!("in {}", context));
    }
    if let Some(focus) = &shot.focus {
        parts.push(format!("focused on {}", focus));
    }
    parts.push(format!("high quality cinematic ad of {}", product_description));
    if let Some(text) = &shot.on_screen_text {
        parts.push(format!("with on-screen text: \"{}\"", text.text));
    }

    parts.join(", ")
}

/// Compiles storyboards into ordered scene requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneCompiler {
    default_aspect_ratio: AspectRatio,
    default_duration: ClipDuration,
}

impl SceneCompiler {
    /// Create a compiler with the given defaults.
    pub fn new(default_aspect_ratio: AspectRatio, default_duration: ClipDuration) -> Self {
        Self {
            default_aspect_ratio,
            default_duration,
        }
    }

    /// Create a compiler from the `[video]` section.
    pub fn from_config(config: &VideoConfig) -> Self {
        Self::new(config.default_aspect_ratio, config.default_duration)
    }

    /// Aspect ratio applied to every scene.
    pub fn default_aspect_ratio(&self) -> AspectRatio {
        self.default_aspect_ratio
    }

    /// Duration used for shots that carry none.
    pub fn default_duration(&self) -> ClipDuration {
        self.default_duration
    }

    /// Compile every shot, in storyboard order.
    ///
    /// Scene `i` comes from shot `i`. Durations are bucketed with
    /// [`ClipDuration::clamp`]. An empty storyboard yields no scenes.
    #[tracing::instrument(skip_all, fields(shots = storyboard.len()))]
    pub fn compile(&self, storyboard: &Storyboard, product_description: &str) -> Vec<SceneRequest> {
        let scenes: Vec<SceneRequest> = storyboard
            .shots
            .iter()
            .enumerate()
            .map(|(index, shot)| SceneRequest {
                index,
                prompt: shot_to_prompt(shot, product_description),
                duration: shot
                    .duration
                    .map(ClipDuration::clamp)
                    .unwrap_or(self.default_duration),
                aspect_ratio: self.default_aspect_ratio,
            })
            .collect();

        tracing::debug!(scenes = scenes.len(), "Compiled storyboard");
        scenes
    }
}
