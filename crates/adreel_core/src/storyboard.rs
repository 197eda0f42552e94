//! Ordered shot lists.

use crate::Shot;
use serde::{Deserialize, Serialize};

/// The visual plan of an ad: shots in playback order.
///
/// The `shots` key is required when decoding.
///
/// # Examples
///
/// ```
/// use adreel_core::Storyboard;
///
/// let board: Storyboard = serde_json::from_str(
///     r#"{"shots": [{"type": "Wide shot"}, {"type": "Close-up"}]}"#,
/// )
/// .unwrap();
/// assert_eq!(board.len(), 2);
/// assert_eq!(board.truncated(1).len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storyboard {
    /// Shots in playback order
    pub shots: Vec<Shot>,
}

impl Storyboard {
    /// Create a storyboard from shots.
    pub fn new(shots: Vec<Shot>) -> Self {
        Self { shots }
    }

    /// Number of shots.
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    /// True when there are no shots.
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Keep at most `max` shots. Never pads.
    pub fn truncated(mut self, max: usize) -> Self {
        self.shots.truncate(max);
        self
    }
}
