use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Runtime settings, overridable via `GROKIPEDIA_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = ::config::Config::builder()
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(::config::Environment::with_prefix("GROKIPEDIA").try_parsing(true))
            .build()
            .context("Failed to load settings")?;
        settings
            .try_deserialize()
            .context("Invalid GROKIPEDIA_* settings")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
