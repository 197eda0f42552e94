//! Provider-ready scene requests.

use crate::{AspectRatio, ClipDuration};
use serde::{Deserialize, Serialize};

/// A compiled instruction for generating one clip.
///
/// `index` is the 0-based position of the source shot and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneRequest {
    /// Position in the storyboard
    pub index: usize,
    /// Text prompt for the video model
    pub prompt: String,
    /// Clip length bucket
    pub duration: ClipDuration,
    /// Frame aspect ratio
    pub aspect_ratio: AspectRatio,
}
