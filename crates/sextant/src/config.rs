//! Configuration loading.
//!
//! Configuration only extends the language tables; rendering is fixed.
//!
//! ```yaml
//! filenames:
//!   Jenkinsfile: groovy
//! extensions:
//!   pyi: python
//! aliases:
//!   py3: python
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// File name looked up by `Config::discover`.
pub const CONFIG_FILE_NAME: &str = ".sextant.yaml";

/// User overrides for language resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Exact file name to grammar id (matched case-insensitively)
    pub filenames: BTreeMap<String, String>,
    /// Extension to grammar id; a leading dot is ignored
    pub extensions: BTreeMap<String, String>,
    /// Grammar id to canonical grammar id
    pub aliases: BTreeMap<String, String>,
}

impl Config {
    /// Parse configuration from YAML text. Empty input yields the default config.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the YAML is malformed or has unknown keys.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, or `Error::Config` if it
    /// cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&yaml).map_err(|e| match e {
            Error::Config(message) => Error::Config(format!("{}: {message}", path.display())),
            other => other,
        })?;
        debug!(
            path = %path.display(),
            filenames = config.filenames.len(),
            extensions = config.extensions.len(),
            aliases = config.aliases.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load `.sextant.yaml` from `dir`, or the default config if there is none.
    ///
    /// # Errors
    ///
    /// Same as `Config::load` when the file exists.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns `true` if no overrides are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filenames.is_empty() && self.extensions.is_empty() && self.aliases.is_empty()
    }
}
