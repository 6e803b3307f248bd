//! Configuration for cronb.
//!
//! Config file resolution order:
//! 1. Explicit path passed to Config::load_from()
//! 2. CRONB_CONFIG environment variable
//! 3. Default: <platform config dir>/cronb/config.toml
//!
//! A missing file means defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::builder::CronBuilder;
use crate::field::FieldSet;
use crate::{Error, Result};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "CRONB_CONFIG";

/// cronb configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Field layout: `standard` (five fields) or `with-year` (six).
    #[serde(default)]
    pub fields: FieldSet,
}

impl Config {
    pub fn with_fields(fields: FieldSet) -> Self {
        Self { fields }
    }

    /// Load from the resolved config path, or defaults if there is none.
    pub fn load() -> Result<Self> {
        match resolve_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Save to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Empty builder over the configured field set.
    pub fn builder(&self) -> CronBuilder {
        CronBuilder::with_fields(self.fields)
    }

    /// Parse an initial expression with the configured field set.
    pub fn parse(&self, text: &str) -> Result<CronBuilder> {
        CronBuilder::parse_with(text, self.fields)
    }
}

/// Resolve the config file path using the standard resolution order.
pub fn resolve_config_path() -> Option<PathBuf> {
    // 1. Environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    // 2. Platform config directory (via directories crate)
    ProjectDirs::from("", "", "cronb").map(|dirs| dirs.config_dir().join("config.toml"))
}
