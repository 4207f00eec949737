use crate::utils::errors::Result;
use crate::utils::output::OutputKind;
use crate::utils::paths::CertCliPaths;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Defaults read from the YAML config file. Command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: Option<OutputKind>,
    pub raw: bool,
    pub details: bool,
}

impl Config {
    /// Load from an explicit path, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => CertCliPaths::expand_home(path)?,
            None => match CertCliPaths::config_file() {
                Ok(path) => path,
                Err(e) => {
                    tracing::debug!("No default config location: {e}");
                    return Ok(Self::default());
                }
            },
        };

        Self::load_from(&path)
    }

    /// A missing or empty file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file not found: {}", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str(&contents)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
