//! Configuration structures and loaders.

use adreel_core::{AspectRatio, ClipDuration, ProviderKind, ShotCountPolicy};
use adreel_error::{AdreelError, AdreelResult, ConfigError};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../adreel.toml");

/// Language model endpoint used by the planner.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Chat endpoint URL
    pub url: String,
    /// Model identifier
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:11434/api/chat".to_string(),
            model: "phi3".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Storyboard planner settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlannerConfig {
    /// Shots requested when the caller gives no count
    pub max_scenes: usize,
    /// Sampling temperature of the draft round
    pub draft_temperature: f32,
    /// Sampling temperature of the critique round
    pub critique_temperature: f32,
    /// Sampling temperature of the refine round
    pub refine_temperature: f32,
    /// Handling of shot-count mismatches
    #[serde(default)]
    pub shot_count_policy: ShotCountPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_scenes: 4,
            draft_temperature: 0.4,
            critique_temperature: 0.3,
            refine_temperature: 0.2,
            shot_count_policy: ShotCountPolicy::default(),
        }
    }
}

/// Media directory layout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Root holding `clips/` and `final/`
    pub root: PathBuf,
    /// Placeholder copied by the mock provider
    pub sample_clip: PathBuf,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("media"),
            sample_clip: PathBuf::from("media/sample/sample.mp4"),
        }
    }
}

/// Clip generation settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VideoConfig {
    /// Active clip provider
    pub provider: ProviderKind,
    /// Scenes generated at the same time
    pub max_concurrent_scenes: usize,
    /// Extra attempts per scene for retryable failures
    #[serde(default)]
    pub scene_retries: usize,
    /// Aspect ratio of every scene
    #[serde(default)]
    pub default_aspect_ratio: AspectRatio,
    /// Duration used when a shot has none
    #[serde(default)]
    pub default_duration: ClipDuration,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Mock,
            max_concurrent_scenes: 4,
            scene_retries: 0,
            default_aspect_ratio: AspectRatio::default(),
            default_duration: ClipDuration::default(),
        }
    }
}

/// External concatenation tool.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssemblerConfig {
    /// Program name or path
    pub program: String,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
        }
    }
}

/// Connection and polling settings for one remote video provider.
///
/// # Example
///
/// ```toml
/// [providers.luma]
/// base_url = "https://api.piapi.ai"
/// api_key_env = "PIAPI_API_KEY"
/// poll_interval_ms = 3000
/// max_attempts = 200
/// deadline_secs = 600
/// model = "ray-v1"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RemoteProviderConfig {
    /// API base URL
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Delay between status checks in milliseconds
    pub poll_interval_ms: u64,
    /// Maximum status checks per task
    pub max_attempts: usize,
    /// Wall-clock limit per task in seconds
    pub deadline_secs: u64,
    /// Provider-side model name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Output resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl RemoteProviderConfig {
    /// Delay between status checks.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Wall-clock limit per task.
    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.deadline_secs)
    }

    /// The API key, if its environment variable is set and non-empty.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Top-level adreel configuration.
///
/// # Example
///
/// ```no_run
/// use adreel_config::AdreelConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AdreelConfig::load()?;
/// println!("Video provider: {}", config.video.provider);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct AdreelConfig {
    /// Language model endpoint
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Planner settings
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Media layout
    #[serde(default)]
    pub media: MediaConfig,
    /// Clip generation settings
    #[serde(default)]
    pub video: VideoConfig,
    /// Concatenation tool
    #[serde(default)]
    pub assembler: AssemblerConfig,
    /// Remote provider settings keyed by provider name
    #[serde(default)]
    pub providers: HashMap<String, RemoteProviderConfig>,
}

impl AdreelConfig {
    /// Load bundled defaults overlaid by one explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> AdreelResult<Self> {
        debug!("Loading configuration from file");

        let path = path.as_ref();
        let builder = Self::defaults().add_source(File::from(path));
        Self::finish(builder).map_err(|e| {
            AdreelError::from(ConfigError::load(path.display(), e))
        })
    }

    /// Load configuration with precedence: env > current dir > home dir > bundled default.
    ///
    /// User config files are optional and skipped when absent.
    #[instrument]
    pub fn load() -> AdreelResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/adreel/adreel.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("adreel").required(false))
            .add_source(
                Environment::with_prefix("ADREEL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder).map_err(|e| {
            AdreelError::from(ConfigError::load("layered sources", e))
        })
    }

    /// Settings for a remote provider. `None` for the mock provider or an unknown name.
    pub fn provider(&self, kind: ProviderKind) -> Option<&RemoteProviderConfig> {
        self.providers.get(kind.as_ref())
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}
