//! Ad generation command handler.

use super::AdRequestArgs;
use adreel::{AdGenerator, AdreelConfig, AdreelResult, JsonError, ProviderKind};
use tokio_util::sync::CancellationToken;

/// Run the whole pipeline and print the job summary as JSON.
///
/// Ctrl-C cancels in-flight clip generation.
pub async fn generate_ad(
    mut config: AdreelConfig,
    args: &AdRequestArgs,
    provider: Option<ProviderKind>,
) -> AdreelResult<()> {
    if let Some(provider) = provider {
        config.video.provider = provider;
    }
    let max_scenes = args.max_scenes(&config);
    let generator = AdGenerator::from_config(&config)?;

    tracing::info!(
        provider = %config.video.provider,
        max_scenes,
        "Generating ad"
    );
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling clip generation");
            on_interrupt.cancel();
        }
    });

    let summary = generator
        .generate_with_cancel(&args.description, max_scenes, &cancel)
        .await?;

    let json = serde_json::to_string_pretty(&summary)
        .map_err(|e| JsonError::serialization("job summary", e))?;
    println!("{}", json);
    Ok(())
}
