//! Adreel CLI binary.
//!
//! - `plan` prints the planned storyboard as JSON
//! - `generate` runs the whole pipeline and prints the job summary as JSON

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, generate_ad, plan_storyboard};

    // Credentials may live in .env
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    adreel::init_tracing(cli.verbose, cli.json_logs)?;

    let config = cli.load_config()?;

    match cli.command {
        Commands::Plan(args) => {
            plan_storyboard(&config, &args).await?;
        }

        Commands::Generate {
            request,
            provider,
        } => {
            generate_ad(config, &request, provider).await?;
        }
    }

    Ok(())
}
