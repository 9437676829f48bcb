//! Process-level configuration bootstrap
//!
//! Reads `.env` (if any) and the environment into an [`AppConfig`], and sets up
//! `env_logger` from the resulting logging level.

use pc_shared::config::{AppConfig, ConfigError, LoggingConfig};

/// Load and validate the application configuration.
///
/// A missing `.env` file is not an error; variables already present in the
/// process environment take precedence over the file.
pub fn load() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    config.validate()?;
    Ok(config)
}

/// Initialise `env_logger`, honouring `RUST_LOG` when set.
pub fn init_logger(logging: &LoggingConfig) {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(logging.level.as_str()));
}
