//! Storyboard planning command handler.

use super::AdRequestArgs;
use adreel::{AdreelConfig, AdreelResult, JsonError, build_planner, plan_ad};

/// Plan a storyboard and print the outcome as JSON.
///
/// The printed document carries the storyboard, its source (`model` or
/// `fallback`) and the fallback reason.
pub async fn plan_storyboard(config: &AdreelConfig, args: &AdRequestArgs) -> AdreelResult<()> {
    let planner = build_planner(config)?;
    let outcome = plan_ad(&planner, &args.description, args.max_scenes(config)).await?;

    let json = serde_json::to_string_pretty(&outcome)
        .map_err(|e| JsonError::serialization("storyboard", e))?;
    println!("{}", json);
    Ok(())
}
