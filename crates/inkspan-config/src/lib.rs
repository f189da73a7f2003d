use inkspan_engine::{DelimiterRule, default_rules};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid delimiter rule #{index} in {config_path}: {reason}")]
    InvalidRule {
        config_path: PathBuf,
        index: usize,
        reason: String,
    },
}

/// User configuration for the inline pipeline.
///
/// ```toml
/// [[rules]]
/// marker = "**"
/// style = "bold"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Delimiter passes, applied in order. Omitted means the built-in set.
    #[serde(default = "default_rules")]
    pub rules: Vec<DelimiterRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.validate(config_path)?;
        log::debug!(
            "loaded {} delimiter rules from {}",
            config.rules.len(),
            config_path.display()
        );

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/inkspan");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Markers must be non-empty and unique.
    fn validate(&self, config_path: &Path) -> Result<(), ConfigError> {
        let invalid = |index: usize, reason: String| ConfigError::InvalidRule {
            config_path: config_path.to_path_buf(),
            index,
            reason,
        };

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.marker.is_empty() {
                return Err(invalid(index, "marker is empty".to_string()));
            }
            if self.rules[..index].iter().any(|r| r.marker == rule.marker) {
                return Err(invalid(
                    index,
                    format!("marker {:?} is already used", rule.marker),
                ));
            }
        }
        Ok(())
    }
}
