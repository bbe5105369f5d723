//! Configuration for the text helpers.
//!
//! A `Config` is a small JSON document; every field is optional and falls
//! back to its default, so `{}` is a valid config:
//!
//! ```json
//! {
//!   "slug": { "max_len": 45 },
//!   "truncate": { "trailing": "..." }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Default maximum slug length
pub const DEFAULT_SLUG_MAX_LEN: usize = 45;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugOptions {
    /// Slugs are cut to at most this many characters
    pub max_len: usize,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_SLUG_MAX_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncateOptions {
    /// Appended when text was actually cut, e.g. an ellipsis
    pub trailing: String,
}

impl TruncateOptions {
    pub fn with_trailing(trailing: impl Into<String>) -> Self {
        Self {
            trailing: trailing.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub slug: SlugOptions,
    pub truncate: TruncateOptions,
}

impl Config {
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load a config file, using defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config = Self::from_json(&contents)?;
            debug!(path = %path.display(), "Loaded config");
            Ok(config)
        } else {
            debug!(path = %path.display(), "No config file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
