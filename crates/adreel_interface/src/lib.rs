//! Trait definitions for the adreel ad video pipeline.
//!
//! The pipeline talks to language models through [`PromptGateway`] and to
//! video backends through [`ClipProvider`]. Implementations live in
//! `adreel_models`; tests substitute scripted fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ClipProvider, PromptGateway};
