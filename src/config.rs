use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleasesError, Result};
use crate::releases::{InvalidTagPolicy, ResolveOptions};

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "releases.toml";

/// Represents the complete configuration for git-releases.
///
/// Contains resolution settings and output formatting options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_true() -> bool {
    true
}

/// Configuration for how tags are turned into versions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolveConfig {
    #[serde(default = "default_true")]
    pub sort: bool,

    #[serde(default = "default_true")]
    pub include_pre_releases: bool,

    #[serde(default)]
    pub invalid_tags: InvalidTagPolicy,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        ResolveConfig {
            sort: true,
            include_pre_releases: true,
            invalid_tags: InvalidTagPolicy::Abort,
        }
    }
}

impl From<&ResolveConfig> for ResolveOptions {
    fn from(config: &ResolveConfig) -> Self {
        ResolveOptions {
            invalid_tags: config.invalid_tags,
            sort: config.sort,
            include_pre_releases: config.include_pre_releases,
        }
    }
}

/// How resolved versions are printed
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One version per line
    #[default]
    Plain,
    /// A JSON array of version strings
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releases.toml` in current directory
/// 3. `.releases.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| ReleasesError::config(e.to_string()))
}
