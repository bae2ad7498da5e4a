//! Booking service configuration.
//!
//! Values come from `BOOKING_`-prefixed environment variables overlaid on
//! the defaults below.

use common::config::ConfigError;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "BOOKING_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://booking.db".into(),
            port: 3000,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        common::config::load(ENV_PREFIX)
    }
}
