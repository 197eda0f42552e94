//! Generation pipeline for adreel.
//!
//! A storyboard flows through three strictly sequential stages:
//!
//! 1. [`SceneCompiler`] turns each shot into a provider-ready [`SceneRequest`]
//! 2. [`ClipDispatcher`] generates one clip per scene on a bounded worker pool
//! 3. [`VideoAssembler`] concatenates the clips with an external tool
//!
//! [`PipelineOrchestrator`] runs the stages for one job and attributes any
//! failure to the stage that produced it. [`AdGenerator`] adds storyboard
//! planning in front, turning a product description into a [`JobSummary`].
//!
//! [`SceneRequest`]: adreel_core::SceneRequest
//! [`JobSummary`]: adreel_core::JobSummary

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod compiler;
mod dispatcher;
mod generator;
mod orchestrator;

pub use assembler::{VideoAssembler, manifest_entry};
pub use compiler::{SceneCompiler, shot_to_prompt};
pub use dispatcher::ClipDispatcher;
pub use generator::{AdGenerator, build_planner, plan_ad};
pub use orchestrator::PipelineOrchestrator;
