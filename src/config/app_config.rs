use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{ConfigError, Result};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".railsyaml.toml";

/// YAML document loaded when neither `--file` nor the config names one.
pub const DEFAULT_DOCUMENT: &str = "config/database.yml";

/// Tool configuration read from `.railsyaml.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub railsyaml: RailsyamlSection,
}

/// The `[railsyaml]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RailsyamlSection {
    /// Path of the YAML document to load.
    pub file: Option<String>,
    /// Environment used when none is given on the command line.
    pub default_env: Option<String>,
}

impl AppConfig {
    /// Load the tool configuration.
    ///
    /// With `explicit` set, the file must exist. Otherwise the default
    /// file is optional and built-in defaults apply when it is absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::InvalidConfig {
                        detail: format!("config file {} not found", path.display()),
                    });
                }
                path.to_path_buf()
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    tracing::debug!("no {DEFAULT_CONFIG_FILE}, using built-in defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)?;
        let config = Self::parse(&content).map_err(|e| ConfigError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;

        tracing::debug!(path = %path.display(), "loaded tool configuration");
        Ok(config)
    }

    fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The YAML document path: `cli_file` wins over the config file.
    pub fn document_path(&self, cli_file: Option<&str>) -> PathBuf {
        cli_file
            .or(self.railsyaml.file.as_deref())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT))
    }

    /// The environment to select, if any: `cli_env` wins over `default_env`.
    ///
    /// Empty values count as unset.
    pub fn environment<'a>(&'a self, cli_env: Option<&'a str>) -> Option<&'a str> {
        cli_env
            .filter(|env| !env.is_empty())
            .or(self.railsyaml.default_env.as_deref())
    }
}
