use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BumpVersionError, Result};

/// Represents the complete configuration for bump-version.
///
/// Everything has a sensible default; a config file is only needed to
/// override the bundle namespace prefix or the excluded directory names.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Package family prefix recognized in `;bundle-version="..."` constraints.
    /// Defaults to the `<groupId>` of the root pom.xml when not set.
    #[serde(default)]
    pub bundle_prefix: Option<String>,

    /// Directory names pruned from the traversal (hidden directories are
    /// always pruned regardless of this list).
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

/// Returns the default list of excluded directory names.
fn default_exclude_dirs() -> Vec<String> {
    vec!["target".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bundle_prefix: None,
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpversion.toml` in current directory
/// 3. `.bumpversion.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./bumpversion.toml").exists() {
        fs::read_to_string("./bumpversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".bumpversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| BumpVersionError::config(format!("invalid config file: {}", e)))?;
    Ok(config)
}
