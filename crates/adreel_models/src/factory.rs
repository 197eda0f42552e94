//! Provider construction from configuration.

use crate::{
    LumaBackend, MockClipProvider, OllamaGateway, PikaBackend, PollPolicy, RemoteClipProvider,
    RunwayBackend,
};
use adreel_config::AdreelConfig;
use adreel_core::ProviderKind;
use adreel_error::{AdreelResult, ConfigError};
use adreel_interface::ClipProvider;
use adreel_storage::ClipStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Build the text gateway from the `[gateway]` section.
pub fn build_gateway(config: &AdreelConfig) -> AdreelResult<OllamaGateway> {
    OllamaGateway::from_config(&config.gateway)
}

/// Build the clip provider for `kind`.
///
/// A remote provider whose API key variable is unset is replaced by the
/// mock provider.
///
/// # Errors
///
/// Returns a [`ConfigError`] when a remote provider has no `[providers.<name>]`
/// section, or an HTTP error if the client cannot be built.
pub fn build_clip_provider(
    config: &AdreelConfig,
    kind: ProviderKind,
    store: ClipStore,
) -> AdreelResult<Arc<dyn ClipProvider>> {
    let mock = |store| -> Arc<dyn ClipProvider> {
        Arc::new(MockClipProvider::new(store, &config.media.sample_clip))
    };

    if kind == ProviderKind::Mock {
        return Ok(mock(store));
    }

    let settings = config
        .provider(kind)
        .ok_or_else(|| ConfigError::missing_provider(kind))?;

    let Some(api_key) = settings.api_key() else {
        warn!(
            provider = %kind,
            variable = %settings.api_key_env,
            "API key not set, falling back to mock clip provider"
        );
        return Ok(mock(store));
    };

    let policy = PollPolicy::from(settings);
    let provider: Arc<dyn ClipProvider> = match kind {
        ProviderKind::Runway => Arc::new(RemoteClipProvider::new(
            RunwayBackend::new(&settings.base_url, api_key),
            store,
            policy,
        )?),
        ProviderKind::Luma => Arc::new(RemoteClipProvider::new(
            LumaBackend::new(
                &settings.base_url,
                api_key,
                settings.model.as_deref().unwrap_or("ray-v1"),
            ),
            store,
            policy,
        )?),
        ProviderKind::Pika => Arc::new(RemoteClipProvider::new(
            PikaBackend::new(
                &settings.base_url,
                api_key,
                settings.resolution.as_deref().unwrap_or("720p"),
            ),
            store,
            policy,
        )?),
        ProviderKind::Mock => mock(store),
    };

    info!(provider = %kind, "Using remote clip provider");
    Ok(provider)
}
