//! Trivia service configuration.
//!
//! Values come from `TRIVIA_`-prefixed environment variables overlaid on
//! the defaults below.

use common::config::ConfigError;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "TRIVIA_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://trivia.db".into(),
            port: 3001,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        common::config::load(ENV_PREFIX)
    }
}
