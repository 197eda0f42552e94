//! Command-line interface module.

mod commands;
mod generate;
mod plan;

pub use commands::{AdRequestArgs, Cli, Commands};
pub use generate::generate_ad;
pub use plan::plan_storyboard;
