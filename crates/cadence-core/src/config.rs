use std::path::Path;

use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, DEFAULT_MAX_COUNT, DEFAULT_NEXT_OCCURRENCE_SCAN,
    ENV_PREFIX,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Safety caps applied to rule expansion.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of dates a single expansion returns.
    pub max_count: usize,
    /// Maximum number of occurrences examined when looking for the next one.
    pub next_scan: usize,
}

impl EngineConfig {
    /// ## Summary
    /// Checks that both caps allow at least one occurrence.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if a cap is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_count == 0 {
            return Err(CoreError::InvalidConfiguration(
                "engine.max_count must be at least 1".to_string(),
            ));
        }
        if self.next_scan == 0 {
            return Err(CoreError::InvalidConfiguration(
                "engine.next_scan must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
            engine: EngineConfig {
                max_count: DEFAULT_MAX_COUNT,
                next_scan: DEFAULT_NEXT_OCCURRENCE_SCAN,
            },
        }
    }
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be stored in the builder.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .set_default("engine.max_count", u64::try_from(DEFAULT_MAX_COUNT)?)?
            .set_default(
                "engine.next_scan",
                u64::try_from(DEFAULT_NEXT_OCCURRENCE_SCAN)?,
            )?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and a TOML file into a `Settings`.
    ///
    /// When `config_file` is given it must exist; otherwise `cadence.toml` in the
    /// working directory is read if present. Environment variables
    /// (`CADENCE_ENGINE__MAX_COUNT`, ...) take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file = match config_file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let config = Self::builder()?
            // TOML file
            .add_source(file)
            // Env vars
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// ## Summary
    /// Deserializes and validates an already built configuration.
    ///
    /// ## Errors
    /// Returns an error if the configuration does not match `Settings` or an
    /// engine cap is zero.
    pub fn from_config(config: Config) -> Result<Self> {
        let settings = config.try_deserialize::<Self>()?;
        settings.engine.validate()?;
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from a `.env` file, environment variables and the
/// optional configuration file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(config_file: Option<&Path>) -> Result<Settings> {
    if let Err(err) = dotenvy::dotenv() {
        tracing::trace!(error = %err, "No .env file loaded");
    }

    Settings::load(config_file)
}
