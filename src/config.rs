use crate::constants::{
    default_excluded_names, DEFAULT_COMPACT_OUTPUT, DEFAULT_CONFIG, DEFAULT_INPUT,
    DEFAULT_PRETTY_OUTPUT,
};
use crate::error::{CatalogError, Result};
use crate::parser::NameRules;
use crate::projection::Viewport;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub viewport: Viewport,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub compact_output: PathBuf,
    pub pretty_output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            compact_output: PathBuf::from(DEFAULT_COMPACT_OUTPUT),
            pretty_output: PathBuf::from(DEFAULT_PRETTY_OUTPUT),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    pub excluded_names: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            excluded_names: default_excluded_names(),
        }
    }
}

/// Everything the pure extraction step needs
#[derive(Debug, Clone)]
pub struct ExtractionSettings {
    pub viewport: Viewport,
    pub names: NameRules,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Config::default().extraction_settings()
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one, `stargazer.toml`
    /// in the working directory is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG), false),
        };

        if !required && !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config = Self::from_toml(&config_content)?;
        debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let Viewport { width, height } = self.viewport;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(CatalogError::Config(format!(
                "viewport must have positive dimensions, got {width} x {height}"
            )));
        }
        Ok(())
    }

    pub fn extraction_settings(&self) -> ExtractionSettings {
        ExtractionSettings {
            viewport: self.viewport,
            names: NameRules::new(self.extraction.excluded_names.clone()),
        }
    }
}
