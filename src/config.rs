use crate::error::{CalmaError, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure loaded from voces_calma.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub privacy: PrivacyConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Tuning for emotion resolution. Defaults match the shipped voces_calma.toml.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Compound score at or beyond which the fallback picks sadness or hope
    pub fallback_threshold: f64,
    /// Confidence reported for the neutral fallback
    pub neutral_confidence: f64,
    /// Words per keyword hit before confidence starts to drop
    pub density_window: usize,
    /// More scored categories than this marks a story as mixed
    pub mixed_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fallback_threshold: 0.3,
            neutral_confidence: 0.5,
            density_window: 20,
            mixed_threshold: 2,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.fallback_threshold > 0.0 && self.fallback_threshold <= 1.0) {
            return Err(CalmaError::Config {
                message: format!(
                    "fallback_threshold must be in (0, 1], got {}",
                    self.fallback_threshold
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.neutral_confidence) {
            return Err(CalmaError::Config {
                message: format!(
                    "neutral_confidence must be in [0, 1], got {}",
                    self.neutral_confidence
                ),
            });
        }
        if self.density_window == 0 {
            return Err(CalmaError::Config {
                message: "density_window must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Story length limits enforced before analysis
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PrivacyConfig {
    pub min_story_chars: usize,
    pub max_story_chars: usize,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            min_story_chars: 20,
            max_story_chars: 700,
        }
    }
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "voces_calma=info".to_string(),
        }
    }
}

impl RuntimeConfig {
    pub fn load_from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "voces_calma=info".to_string()),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => {
            tracing::debug!("{} env override applied", key);
            Some(v)
        }
        Err(_) => {
            tracing::warn!("Ignoring unparsable {}='{}'", key, raw);
            None
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses VOCES_CALMA_CONFIG or defaults to "voces_calma.toml".
    /// Dotenv files are read by `crate::load_env` beforehand.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("VOCES_CALMA_CONFIG")
            .unwrap_or_else(|_| "voces_calma.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            Self::from_toml(&content)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides();
        config.runtime = RuntimeConfig::load_from_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; missing sections and keys fall back to defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse("CALMA_FALLBACK_THRESHOLD") {
            self.engine.fallback_threshold = v;
        }
        if let Some(v) = env_parse("CALMA_NEUTRAL_CONFIDENCE") {
            self.engine.neutral_confidence = v;
        }
        if let Some(v) = env_parse("CALMA_DENSITY_WINDOW") {
            self.engine.density_window = v;
        }
        if let Some(v) = env_parse("CALMA_MIXED_THRESHOLD") {
            self.engine.mixed_threshold = v;
        }
        if let Some(v) = env_parse("CALMA_STORY_MIN_CHARS") {
            self.privacy.min_story_chars = v;
        }
        if let Some(v) = env_parse("CALMA_STORY_MAX_CHARS") {
            self.privacy.max_story_chars = v;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        if self.privacy.min_story_chars > self.privacy.max_story_chars {
            return Err(CalmaError::Config {
                message: format!(
                    "min_story_chars ({}) exceeds max_story_chars ({})",
                    self.privacy.min_story_chars, self.privacy.max_story_chars
                ),
            });
        }
        Ok(())
    }
}
