//! Adreel - product description to ad video
//!
//! Adreel plans a storyboard for a product with a language model, compiles
//! each shot into a video prompt, generates one clip per scene through an
//! interchangeable video provider, and concatenates the clips into a single
//! file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use adreel::{AdGenerator, AdreelConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AdreelConfig::load()?;
//!     let generator = AdGenerator::from_config(&config)?;
//!
//!     let summary = generator.generate("Matte black insulated water bottle", 4).await?;
//!     println!("{}", serde_json::to_string_pretty(&summary)?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Adreel is organized as a workspace with focused crates:
//!
//! - `adreel_error` - Error types with stage attribution
//! - `adreel_core` - Storyboards, scenes, jobs and metrics
//! - `adreel_interface` - `PromptGateway` and `ClipProvider` traits
//! - `adreel_config` - Layered configuration
//! - `adreel_storage` - Media directory layout and atomic clip writes
//! - `adreel_models` - Language model gateway and video providers
//! - `adreel_planner` - Draft, critique and refine storyboard planning
//! - `adreel_pipeline` - Scene compilation, dispatch, assembly and orchestration
//!
//! This crate (`adreel`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod telemetry;

pub use adreel_config::*;
pub use adreel_core::*;
pub use adreel_error::*;
pub use adreel_interface::*;
pub use adreel_models::*;
pub use adreel_pipeline::*;
pub use adreel_planner::*;
pub use adreel_storage::*;
pub use telemetry::init_tracing;
