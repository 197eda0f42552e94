//! Clip geometry: aspect ratios and supported durations.

use serde::{Deserialize, Serialize};

/// Frame aspect ratio requested from a video provider.
///
/// # Examples
///
/// ```
/// use adreel_core::AspectRatio;
/// use std::str::FromStr;
///
/// assert_eq!(AspectRatio::default().to_string(), "16:9");
/// assert_eq!(AspectRatio::from_str("9:16").unwrap(), AspectRatio::Portrait);
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
    strum::AsRefStr,
)]
pub enum AspectRatio {
    /// 9:16 vertical
    #[strum(serialize = "9:16")]
    #[serde(rename = "9:16")]
    Portrait,
    /// 3:4
    #[strum(serialize = "3:4")]
    #[serde(rename = "3:4")]
    Tall,
    /// 1:1
    #[strum(serialize = "1:1")]
    #[serde(rename = "1:1")]
    Square,
    /// 4:3
    #[strum(serialize = "4:3")]
    #[serde(rename = "4:3")]
    Classic,
    /// 16:9 widescreen
    #[default]
    #[strum(serialize = "16:9")]
    #[serde(rename = "16:9")]
    Landscape,
    /// 21:9
    #[strum(serialize = "21:9")]
    #[serde(rename = "21:9")]
    Cinematic,
}

/// One of the two clip lengths providers support.
///
/// # Examples
///
/// ```
/// use adreel_core::ClipDuration;
///
/// assert_eq!(ClipDuration::clamp(3), ClipDuration::Short);
/// assert_eq!(ClipDuration::clamp(6), ClipDuration::Long);
/// assert_eq!(ClipDuration::Long.secs(), 10);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(into = "u32", from = "i64")]
pub enum ClipDuration {
    /// Five seconds
    #[default]
    #[display("5")]
    Short,
    /// Ten seconds
    #[display("10")]
    Long,
}

impl ClipDuration {
    /// Bucket a planned duration: at most 5 seconds becomes 5, anything longer becomes 10.
    pub fn clamp(seconds: i64) -> Self {
        if seconds <= 5 { Self::Short } else { Self::Long }
    }

    /// Length in seconds.
    pub fn secs(self) -> u32 {
        match self {
            Self::Short => 5,
            Self::Long => 10,
        }
    }
}

impl From<ClipDuration> for u32 {
    fn from(duration: ClipDuration) -> Self {
        duration.secs()
    }
}

impl From<i64> for ClipDuration {
    fn from(seconds: i64) -> Self {
        Self::clamp(seconds)
    }
}
