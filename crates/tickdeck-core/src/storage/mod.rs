mod config;

pub use config::{ClockConfig, Config, CountdownConfig, PomodoroConfig, QuoteConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/tickdeck[-dev]/` based on TICKDECK_ENV.
///
/// Set TICKDECK_ENV=dev to use the development config directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TICKDECK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tickdeck-dev")
    } else {
        base_dir.join("tickdeck")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::NoDataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
