//! Loader configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `TRIAD_DATA_*` environment variables.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Directory under the user's config dir holding `config.toml`.
pub const CONFIG_DIR: &str = "triad-data";
/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "TRIAD_DATA";

/// Tunables of the game data loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Build attempts per load, the first one included.
    pub max_attempts: u32,
    /// Pause between attempts, in milliseconds.
    pub retry_delay_ms: u64,
    /// Allowed distance between card row ids and catalogue length.
    pub index_drift_slack: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            retry_delay_ms: 2000,
            index_drift_slack: 10,
        }
    }
}

impl LoaderConfig {
    /// Load from the default config file (if present) and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from the given file (if present) and the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Attempts per load, never less than one.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Pause between attempts.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

/// `<config dir>/triad-data/config.toml`, falling back to the working directory.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join("config.toml")
}
