use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "GIG";
const DEFAULT_STORE_PATH: &str = "gigs.json";
const DEFAULT_DELAY_SECS: u64 = 6;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings, overridable through `GIG_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub store_path: PathBuf,
    pub delay_secs: u64,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            delay_secs: DEFAULT_DELAY_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// `env` replaces the process environment when given.
    fn load_from(env: Option<config::Map<String, String>>) -> Result<Self> {
        Config::builder()
            .set_default("store_path", DEFAULT_STORE_PATH)?
            .set_default("delay_secs", DEFAULT_DELAY_SECS)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .context("Invalid GIG_* settings")
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
