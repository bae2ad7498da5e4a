//! Cafe service configuration.
//!
//! Values come from `CAFE_`-prefixed environment variables overlaid on
//! the defaults below. `jwt_secret` must be overridden outside of local
//! development.

use common::config::ConfigError;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "CAFE_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://cafe.db".into(),
            port: 3002,
            jwt_secret: "changeme".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        common::config::load(ENV_PREFIX)
    }
}
