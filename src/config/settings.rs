//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from an optional TOML file and environment
//! variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    /// Bot access token; the only required secret.
    pub token: String,
    /// Long-poll timeout handed to getUpdates, in seconds.
    pub poll_timeout_secs: u32,
}

/// File storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Append-only assessment results file.
    pub results_path: String,
    /// Append-only event log file.
    pub event_log_path: String,
    /// Directory receiving timestamped result backups.
    pub backup_dir: String,
    /// How often the results file is backed up, in seconds.
    pub backup_interval_secs: u64,
}

/// Session lifecycle configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Sessions idle longer than this are reclaimed by the sweep.
    pub idle_timeout_secs: u64,
    /// How often the idle sweep runs, in seconds.
    pub sweep_interval_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file.
    pub dir: String,
}

impl Settings {
    /// Load settings from the configuration file and environment variables.
    ///
    /// The bot token may be provided either as `STUDYBUDDY_BOT__TOKEN`
    /// (or in `config.toml`) or as a plain `BOT_TOKEN` variable.
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("STUDYBUDDY").separator("__"))
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;

        if settings.bot.token.is_empty() {
            if let Ok(token) = std::env::var("BOT_TOKEN") {
                settings.bot.token = token;
            }
        }

        Ok(settings)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::StudyBuddyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            poll_timeout_secs: 25,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            results_path: "educational_data.csv".to_string(),
            event_log_path: "bot_logs.txt".to_string(),
            backup_dir: "backup".to_string(),
            backup_interval_secs: 3600,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 7200,
            sweep_interval_secs: 600,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
        }
    }
}
