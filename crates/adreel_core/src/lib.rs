//! Core data types for the adreel ad video pipeline.
//!
//! Storyboards, shots, scene requests and job records shared by the planner,
//! the provider integrations and the pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod job;
mod media;
mod message;
mod metrics;
mod policy;
mod provider;
mod role;
mod scene;
mod shot;
mod storyboard;

pub use job::{Job, JobId, JobSummary};
pub use media::{AspectRatio, ClipDuration};
pub use message::ChatMessage;
pub use metrics::PipelineMetrics;
pub use policy::ShotCountPolicy;
pub use provider::ProviderKind;
pub use role::Role;
pub use scene::SceneRequest;
pub use shot::{OnScreenText, Shot, TextOrigin};
pub use storyboard::Storyboard;
