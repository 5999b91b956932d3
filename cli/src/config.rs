//! TOML configuration loading and validation.

use std::path::Path;

use feewise::FeeSchedule;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration running the published fee schedule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fee schedule overrides; omitted fields keep the published rates.
    pub schedule: FeeSchedule,
    pub lookup: LookupConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Resolve tickers against Yahoo Finance before prompting.
    pub enabled: bool,
    /// Seconds a fetched quote stays fresh.
    pub cache_ttl_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_ttl_secs: 300,
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    pub fn validate(&self) -> Result<()> {
        self.schedule.validate().map_err(Error::Config)
    }
}
