//! A single planned camera take.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Styling origin of on-screen text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum TextOrigin {
    /// Subtitle-style caption
    #[display("caption")]
    Caption,
    /// Graphic overlay such as a call to action
    #[display("overlay")]
    Overlay,
}

/// Text rendered on screen during a shot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OnScreenText {
    /// Whether the text was planned as a caption or an overlay
    pub origin: TextOrigin,
    /// The text itself
    pub text: String,
}

impl OnScreenText {
    /// Caption text.
    pub fn caption(text: impl Into<String>) -> Self {
        Self {
            origin: TextOrigin::Caption,
            text: text.into(),
        }
    }

    /// Overlay text.
    pub fn overlay(text: impl Into<String>) -> Self {
        Self {
            origin: TextOrigin::Overlay,
            text: text.into(),
        }
    }
}

/// One shot of a storyboard.
///
/// Every field is optional because model output is. On the wire the shot uses
/// the `type`, `duration`, `camera`, `context`, `focus`, `caption` and
/// `overlay` keys; a caption wins over an overlay when both are present.
///
/// # Examples
///
/// ```
/// use adreel_core::{Shot, TextOrigin};
///
/// let shot: Shot = serde_json::from_str(
///     r#"{"type": "Close-up", "duration": "6", "caption": "", "overlay": "Shop Now"}"#,
/// )
/// .unwrap();
/// assert_eq!(shot.shot_type.as_deref(), Some("Close-up"));
/// assert_eq!(shot.duration, Some(6));
/// assert_eq!(shot.on_screen_text.unwrap().origin, TextOrigin::Overlay);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawShot", into = "RawShot")]
pub struct Shot {
    /// Framing, e.g. "Wide shot"
    pub shot_type: Option<String>,
    /// Camera movement
    pub camera: Option<String>,
    /// Planned length in seconds, unclamped
    pub duration: Option<i64>,
    /// Setting of the shot
    pub context: Option<String>,
    /// Subject of the shot
    pub focus: Option<String>,
    /// Caption or overlay text
    pub on_screen_text: Option<OnScreenText>,
}

impl Shot {
    /// Create a shot with only a framing type.
    pub fn new(shot_type: impl Into<String>) -> Self {
        Self {
            shot_type: Some(shot_type.into()),
            ..Self::default()
        }
    }

    /// Set the camera movement.
    pub fn with_camera(mut self, camera: impl Into<String>) -> Self {
        self.camera = Some(camera.into());
        self
    }

    /// Set the planned duration in seconds.
    pub fn with_duration(mut self, seconds: i64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Set the setting.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set the subject.
    pub fn with_focus(mut self, focus: impl Into<String>) -> Self {
        self.focus = Some(focus.into());
        self
    }

    /// Set the on-screen text.
    pub fn with_text(mut self, text: OnScreenText) -> Self {
        self.on_screen_text = Some(text);
        self
    }
}

#[derive(Serialize, Deserialize)]
struct RawShot {
    #[serde(rename = "type", alias = "shot_type", default, skip_serializing_if = "Option::is_none")]
    shot_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    camera: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    focus: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overlay: Option<Value>,
}

/// Accepts strings, numbers and objects carrying a `text` key; blank text and
/// anything else read as absent.
fn lenient_text(value: Option<Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Object(mut map) => match map.remove("text")? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => return None,
        },
        _ => return None,
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(trimmed.to_string())
    }
}

/// Accepts 6, 6.4 or "6"; anything else reads as absent.
fn lenient_seconds(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.round() as i64))
        }
        _ => None,
    }
}

impl From<RawShot> for Shot {
    fn from(raw: RawShot) -> Self {
        let on_screen_text = lenient_text(raw.caption)
            .map(OnScreenText::caption)
            .or_else(|| lenient_text(raw.overlay).map(OnScreenText::overlay));
        Self {
            shot_type: lenient_text(raw.shot_type),
            camera: lenient_text(raw.camera),
            duration: raw.duration.as_ref().and_then(lenient_seconds),
            context: lenient_text(raw.context),
            focus: lenient_text(raw.focus),
            on_screen_text,
        }
    }
}

impl From<Shot> for RawShot {
    fn from(shot: Shot) -> Self {
        let (caption, overlay) = match shot.on_screen_text {
            Some(OnScreenText {
                origin: TextOrigin::Caption,
                text,
            }) => (Some(text), None),
            Some(OnScreenText {
                origin: TextOrigin::Overlay,
                text,
            }) => (None, Some(text)),
            None => (None, None),
        };
        Self {
            shot_type: shot.shot_type.map(Value::from),
            duration: shot.duration.map(Value::from),
            camera: shot.camera.map(Value::from),
            context: shot.context.map(Value::from),
            focus: shot.focus.map(Value::from),
            caption: caption.map(Value::from),
            overlay: overlay.map(Value::from),
        }
    }
}
