//! Configuration loading.
//!
//! A YAML file can change pipeline defaults. An explicitly named file must
//! load cleanly; files discovered in the working directory only produce
//! warnings when they are broken, and built-in defaults are used instead.

mod defaults;


pub use defaults::TransformDefaults;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{Error, Result};

/// File names searched for in the working directory.
const CONFIG_FILENAMES: &[&str] = &["tonecurve.yml", "tonecurve.yaml"];

/// Loaded configuration plus where it came from and anything odd found on the way.
#[derive(Debug)]
pub struct ConfigHandle {
    pub config: TransformConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TransformConfig {
    pub defaults: TransformDefaults,
}

impl TransformConfig {
    fn sanitize(mut self) -> Self {
        self.defaults.sanitize();
        self
    }

    /// Parse a YAML document.
    pub fn from_yaml(contents: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str::<TransformConfig>(contents).map(TransformConfig::sanitize)
    }
}

/// Load configuration, preferring `custom_path` when given.
///
/// Errors only when `custom_path` is given and cannot be read or parsed.
pub fn load_config(custom_path: Option<&Path>) -> Result<ConfigHandle> {
    if let Some(path) = custom_path {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config = TransformConfig::from_yaml(&contents).map_err(|e| {
            Error::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        let source = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        return Ok(ConfigHandle {
            config,
            source: Some(source),
            warnings: Vec::new(),
        });
    }

    match std::env::current_dir() {
        Ok(cwd) => Ok(load_config_from_dir(&cwd)),
        Err(err) => Ok(ConfigHandle {
            config: TransformConfig::default(),
            source: None,
            warnings: vec![format!("Cannot determine working directory: {}", err)],
        }),
    }
}

/// Search `dir` for a configuration file and fall back to defaults.
pub fn load_config_from_dir(dir: &Path) -> ConfigHandle {
    let mut warnings = Vec::new();

    for name in CONFIG_FILENAMES {
        let candidate = dir.join(name);
        if !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match TransformConfig::from_yaml(&contents) {
                Ok(config) => {
                    return ConfigHandle {
                        config,
                        source: Some(candidate),
                        warnings,
                    };
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    ConfigHandle {
        config: TransformConfig::default(),
        source: None,
        warnings,
    }
}

/// Report the config source and any warnings through the logger.
pub fn log_config_usage(handle: &ConfigHandle) {
    match &handle.source {
        Some(source) => debug!("Loaded config from {}", source.display()),
        None => debug!("Using built-in defaults"),
    }

    for warning in &handle.warnings {
        warn!("Config warning: {}", warning);
    }
}
