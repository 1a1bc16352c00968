//! Game configuration.
//!
//! Callers configure a session at startup by providing a `GameConfig`:
//! - the RNG seed (random when absent)
//! - how many checked rounds the history keeps
//! - the attribute values players choose from
//!
//! Configuration can be built in code or read from a TOML file:
//!
//! ```toml
//! seed = 42
//! history_limit = 10
//!
//! [attributes]
//! Volume = ["", "Loud", "Quiet", "Silent"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::attributes::{Attribute, AttributeSet};

/// Default number of checked rounds kept in history.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown attribute {0:?}")]
    UnknownAttribute(String),

    #[error("invalid values for attribute {attribute}: {reason}")]
    InvalidAttribute { attribute: Attribute, reason: String },

    #[error("history limit must be at least 1")]
    InvalidHistoryLimit,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed. `None` picks a random seed at controller construction.
    pub seed: Option<u64>,

    /// Maximum number of checked rounds kept in history (at least 1).
    pub history_limit: usize,

    /// Values players choose from.
    pub attributes: AttributeSet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk shape of the configuration. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    seed: Option<u64>,
    history_limit: Option<usize>,
    #[serde(default)]
    attributes: BTreeMap<String, Vec<String>>,
}

impl GameConfig {
    /// Create a configuration with standard attributes and no fixed seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seed: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            attributes: AttributeSet::standard(),
        }
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the history limit.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Replace the attribute catalogue.
    #[must_use]
    pub fn with_attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = attributes;
        self
    }

    /// Parse a TOML document, starting from the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;

        let mut config = Self::new();
        config.seed = file.seed;
        if let Some(limit) = file.history_limit {
            config.history_limit = limit;
        }
        for (name, values) in file.attributes {
            let attribute =
                Attribute::parse(&name).ok_or(ConfigError::UnknownAttribute(name))?;
            config.attributes = config.attributes.with_values(attribute, values);
        }

        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check the configuration for values the round controller cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidHistoryLimit);
        }
        self.attributes.validate()
    }
}
