//! Loading options from TOML

use std::fs;
use std::path::Path;

use tracing::debug;

use super::options::CommandOptions;
use crate::error::ConfigError;

impl CommandOptions {
    /// Parse options from TOML text. Missing keys keep their defaults and
    /// unknown keys are rejected.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML options file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading command options");
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
