//! Style configuration (sheen.toml)

use serde::{Deserialize, Serialize};
use sheen_animation::{AnimationConfig, Easing};
use sheen_theme::{ThemeColors, ThemeVariant};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level style configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub variant: ThemeVariant,
    #[serde(default)]
    pub animations: AnimationsConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Transition timing
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AnimationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Hover, press and enable transitions, sub-controls, tabs and headers
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default = "default_focus_duration_ms")]
    pub focus_duration_ms: u64,
    #[serde(default = "default_busy_cycle_ms")]
    pub busy_cycle_ms: u64,
    /// `linear`, `ease-in-out` or `ease-in-out-cubic`
    #[serde(default = "default_easing")]
    pub easing: String,
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    AnimationConfig::DEFAULT_DURATION.as_millis() as u64
}

fn default_focus_duration_ms() -> u64 {
    AnimationConfig::DEFAULT_FOCUS_DURATION.as_millis() as u64
}

fn default_busy_cycle_ms() -> u64 {
    AnimationConfig::DEFAULT_BUSY_CYCLE.as_millis() as u64
}

fn default_easing() -> String {
    Easing::default().id().to_string()
}

impl Default for AnimationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: default_duration_ms(),
            focus_duration_ms: default_focus_duration_ms(),
            busy_cycle_ms: default_busy_cycle_ms(),
            easing: default_easing(),
        }
    }
}

/// Theme definition files replacing the built-in ones
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hc: Option<PathBuf>,
    #[serde(default, rename = "hc-dark", skip_serializing_if = "Option::is_none")]
    pub hc_dark: Option<PathBuf>,
}

impl ThemeConfig {
    pub fn path(&self, variant: ThemeVariant) -> Option<&Path> {
        match variant {
            ThemeVariant::Light => self.light.as_deref(),
            ThemeVariant::Dark => self.dark.as_deref(),
            ThemeVariant::HighContrast => self.hc.as_deref(),
            ThemeVariant::HighContrastInverse => self.hc_dark.as_deref(),
        }
    }

    pub fn set_path(&mut self, variant: ThemeVariant, path: Option<PathBuf>) {
        let slot = match variant {
            ThemeVariant::Light => &mut self.light,
            ThemeVariant::Dark => &mut self.dark,
            ThemeVariant::HighContrast => &mut self.hc,
            ThemeVariant::HighContrastInverse => &mut self.hc_dark,
        };
        *slot = path;
    }

    /// Built-in colors with the configured files laid over them.
    /// Unreadable or empty files keep the built-in definition.
    pub fn load_colors(&self) -> ThemeColors {
        ThemeVariant::ALL
            .into_iter()
            .fold(ThemeColors::builtin(), |colors, variant| match self.path(variant) {
                Some(path) => colors.with_file_or_current(variant, path),
                None => colors,
            })
    }
}

impl StyleConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), variant = %config.variant, "loaded style config");
        Ok(config)
    }

    /// Parse and validate a configuration
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: StyleConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.easing().map(|_| ())
    }

    pub fn easing(&self) -> Result<Easing, ConfigError> {
        self.animations
            .easing
            .parse::<Easing>()
            .map_err(ConfigError::Invalid)
    }

    /// Engine timing derived from the `[animations]` section
    pub fn animation_config(&self) -> Result<AnimationConfig, ConfigError> {
        let animations = &self.animations;
        Ok(AnimationConfig {
            enabled: animations.enabled,
            duration: Duration::from_millis(animations.duration_ms),
            focus_duration: Duration::from_millis(animations.focus_duration_ms),
            busy_cycle: Duration::from_millis(animations.busy_cycle_ms),
            easing: self.easing()?,
        })
    }
}
