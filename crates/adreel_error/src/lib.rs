//! Error types for the adreel ad video pipeline.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Pipeline failures are wrapped in [`StageError`] so callers can tell
//! whether compilation, generation or assembly failed.
//!
//! # Examples
//!
//! ```
//! use adreel_error::{AdreelResult, HttpError};
//!
//! fn fetch_data() -> AdreelResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod http;
mod input;
mod json;
mod provider;
mod retry;
mod stage;
mod storage;
mod timeout;
mod tool;

pub use config::ConfigError;
pub use error::{AdreelError, AdreelErrorKind, AdreelResult};
pub use generation::GenerationError;
pub use http::HttpError;
pub use input::{InputError, InputErrorKind};
pub use json::JsonError;
pub use provider::{ProviderError, ProviderErrorKind};
pub use retry::RetryableError;
pub use stage::{PipelineStage, StageError};
pub use storage::{StorageError, StorageErrorKind};
pub use timeout::{CancelledError, TimeoutError, TimeoutErrorKind};
pub use tool::{ToolError, ToolErrorKind};
