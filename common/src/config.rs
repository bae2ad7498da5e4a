//! Environment-driven configuration loading.
//!
//! Each service defines its own config struct with defaults; values are
//! overridden by environment variables carrying the service's prefix
//! (`BOOKING_PORT`, `CAFE_DATABASE_URL`, ...). A `.env` file in the
//! working directory is honored when present.

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(#[from] figment::Error),
}

/// Loads a config struct from its defaults overlaid with prefixed
/// environment variables.
pub fn load<T>(prefix: &str) -> Result<T, ConfigError>
where
    T: Default + Serialize + DeserializeOwned,
{
    let _ = dotenvy::dotenv();
    let config = Figment::from(Serialized::defaults(T::default()))
        .merge(Env::prefixed(prefix))
        .extract()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct TestConfig {
        port: u16,
        database_url: String,
    }

    #[test]
    fn defaults_survive_when_env_is_empty() {
        figment::Jail::expect_with(|_jail| {
            let config: TestConfig = load("COMMON_TEST_").expect("config");
            assert_eq!(config, TestConfig::default());
            Ok(())
        });
    }

    #[test]
    fn prefixed_env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("COMMON_TEST_PORT", "8081");
            let config: TestConfig = load("COMMON_TEST_").expect("config");
            assert_eq!(config.port, 8081);
            assert_eq!(config.database_url, String::new());
            Ok(())
        });
    }
}
