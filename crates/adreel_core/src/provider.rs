//! Video provider selection.

use serde::{Deserialize, Serialize};

/// Which clip provider a run uses.
///
/// # Examples
///
/// ```
/// use adreel_core::ProviderKind;
/// use std::str::FromStr;
///
/// assert_eq!(ProviderKind::from_str("luma").unwrap(), ProviderKind::Luma);
/// assert_eq!(ProviderKind::default().to_string(), "mock");
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProviderKind {
    /// Local placeholder clips, no network
    #[default]
    Mock,
    /// Runway video API
    Runway,
    /// Luma through PiAPI
    Luma,
    /// Pika through the Fal queue
    Pika,
}
