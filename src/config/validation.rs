//! Configuration validation module
//!
//! Validation functions ensuring all required settings are properly
//! configured before the bot starts.

use super::Settings;
use crate::utils::errors::{Result, StudyBuddyError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_storage_config(&settings.storage)?;
    validate_session_config(&settings.session)?;
    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(StudyBuddyError::Config(
            "Bot token is required (set BOT_TOKEN)".to_string(),
        ));
    }

    if config.poll_timeout_secs == 0 {
        return Err(StudyBuddyError::Config(
            "Poll timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.results_path.is_empty() {
        return Err(StudyBuddyError::Config(
            "Results path is required".to_string(),
        ));
    }

    if config.event_log_path.is_empty() {
        return Err(StudyBuddyError::Config(
            "Event log path is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate session configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.idle_timeout_secs == 0 {
        return Err(StudyBuddyError::Config(
            "Session idle timeout must be greater than 0".to_string(),
        ));
    }

    if config.sweep_interval_secs == 0 {
        return Err(StudyBuddyError::Config(
            "Sweep interval must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
