//! Settings for the command-line front end.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Fractional digits to print. `None` prints the shortest exact form.
    pub precision: Option<usize>,
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Keep evaluating the remaining lines of a session after a failure.
    pub continue_on_error: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            precision: None,
            log_filter: "warn".to_string(),
            continue_on_error: true,
        }
    }
}

impl CalcConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
