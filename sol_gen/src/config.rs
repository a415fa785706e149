//! Loading generator configuration from YAML files

use sol_types::GeneratorConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid generator configuration
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
}

/// Parse a configuration document; missing keys take their defaults
pub fn from_yaml(yaml: &str) -> Result<GeneratorConfig, serde_yml::Error> {
    if yaml.trim().is_empty() {
        return Ok(GeneratorConfig::default());
    }
    serde_yml::from_str(yaml)
}

/// Load the configuration at `path`, or the defaults when no path is given
pub fn load(path: Option<&Path>) -> Result<GeneratorConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = from_yaml(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded generator config");
    Ok(config)
}
