//! CLI command definitions.

use adreel::{AdreelConfig, AdreelResult, ProviderKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Adreel - turn a product description into a short ad video
#[derive(Parser, Debug)]
#[command(name = "adreel")]
#[command(about = "Turn a product description into a short ad video", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

impl Cli {
    /// Load configuration from `--config`, or from the standard locations.
    pub fn load_config(&self) -> AdreelResult<AdreelConfig> {
        match &self.config {
            Some(path) => AdreelConfig::from_file(path),
            None => AdreelConfig::load(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan a storyboard and print it as JSON
    Plan(AdRequestArgs),

    /// Plan, generate and assemble an ad, then print the job summary as JSON
    Generate {
        #[command(flatten)]
        request: AdRequestArgs,

        /// Video provider, overriding the configured one
        #[arg(long)]
        provider: Option<ProviderKind>,
    },
}

/// What to advertise and how many scenes to plan.
#[derive(Args, Debug, Clone)]
pub struct AdRequestArgs {
    /// Product description
    #[arg(short, long)]
    pub description: String,

    /// Number of scenes to plan, defaults to `planner.max_scenes`
    #[arg(long)]
    pub max_scenes: Option<usize>,
}

impl AdRequestArgs {
    /// Requested scene count, falling back to configuration.
    pub fn max_scenes(&self, config: &AdreelConfig) -> usize {
        self.max_scenes.unwrap_or(config.planner.max_scenes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_with_global_flags() {
        let cli = Cli::try_parse_from([
            "adreel",
            "plan",
            "--description",
            "Steel water bottle",
            "--max-scenes",
            "3",
            "--verbose",
            "--json-logs",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.json_logs);
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(args.description, "Steel water bottle");
                assert_eq!(args.max_scenes, Some(3));
            }
            other => panic!("expected plan, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_generate_with_provider() {
        let cli = Cli::try_parse_from([
            "adreel",
            "--config",
            "ads.toml",
            "generate",
            "-d",
            "Walnut desk organizer",
            "--provider",
            "luma",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("ads.toml")));
        match cli.command {
            Commands::Generate { request, provider } => {
                assert_eq!(request.description, "Walnut desk organizer");
                assert_eq!(request.max_scenes(&AdreelConfig::default()), 4);
                assert_eq!(provider, Some(ProviderKind::Luma));
            }
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let result = Cli::try_parse_from([
            "adreel",
            "generate",
            "--description",
            "Walnut desk organizer",
            "--provider",
            "sora",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_description_is_required() {
        assert!(Cli::try_parse_from(["adreel", "plan"]).is_err());
    }
}
