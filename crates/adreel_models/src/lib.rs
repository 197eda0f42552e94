//! Language model and video provider integrations for adreel.
//!
//! # Text
//!
//! [`OllamaGateway`] implements [`PromptGateway`](adreel_interface::PromptGateway)
//! against an Ollama-style chat endpoint. When the endpoint is unreachable or
//! times out it answers with a canned mock instead of failing.
//!
//! # Video
//!
//! - [`MockClipProvider`] copies a local sample clip (or writes an empty file)
//! - [`RemoteClipProvider`] drives any [`RemoteBackend`] through
//!   submit, bounded polling and download
//! - [`RunwayBackend`], [`LumaBackend`] and [`PikaBackend`] speak each
//!   service's wire format
//!
//! [`build_clip_provider`] picks the implementation from configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod factory;
mod mock_text;
mod ollama;
mod video;

pub use factory::{build_clip_provider, build_gateway};
pub use mock_text::{MOCK_REPLY, mock_reply};
pub use ollama::OllamaGateway;
pub use video::{
    LumaBackend, MockClipProvider, PikaBackend, PollPolicy, RemoteBackend, RemoteClipProvider,
    RunwayBackend, TaskStatus, poll_until_terminal,
};
