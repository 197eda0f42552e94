//! Handling of storyboards whose shot count differs from the request.

use crate::Storyboard;
use serde::{Deserialize, Serialize};

/// What to do when the model returns a different number of shots than asked.
///
/// # Examples
///
/// ```
/// use adreel_core::{Shot, ShotCountPolicy, Storyboard};
///
/// let board = Storyboard::new(vec![Shot::new("Wide shot"); 3]);
/// let kept = ShotCountPolicy::Truncate.apply(board.clone(), 2).unwrap();
/// assert_eq!(kept.len(), 2);
/// assert!(ShotCountPolicy::Reject.apply(board, 2).is_none());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShotCountPolicy {
    /// Drop surplus shots, keep short lists as they are
    #[default]
    Truncate,
    /// Pass the storyboard through unchanged
    Keep,
    /// Refuse any mismatch
    Reject,
}

impl ShotCountPolicy {
    /// Apply the policy. `None` means the storyboard was rejected.
    pub fn apply(self, storyboard: Storyboard, requested: usize) -> Option<Storyboard> {
        match self {
            Self::Truncate => Some(storyboard.truncated(requested)),
            Self::Keep => Some(storyboard),
            Self::Reject if storyboard.len() == requested => Some(storyboard),
            Self::Reject => None,
        }
    }
}
