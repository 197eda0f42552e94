//! Layered configuration for the adreel ad video pipeline.
//!
//! Sources, later ones winning:
//! 1. Bundled defaults (`adreel.toml` shipped with the workspace)
//! 2. `~/.config/adreel/adreel.toml`
//! 3. `./adreel.toml`
//! 4. `ADREEL__SECTION__KEY` environment variables
//!
//! API keys are never read from files. Each remote provider names the
//! environment variable holding its key.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;

pub use settings::{
    AdreelConfig, AssemblerConfig, GatewayConfig, MediaConfig, PlannerConfig,
    RemoteProviderConfig, VideoConfig,
};
