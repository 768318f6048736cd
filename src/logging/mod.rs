//! Diagnostic logging to disk.
//!
//! The terminal belongs to the game, so `tracing` output goes to the file
//! named in `[logging]` (default: `~/.local/share/cardflip/cardflip.log`).
//! Nothing is installed when logging is disabled.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;

pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level: LevelFilter = config
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    if let Some(parent) = config.file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .with_context(|| format!("Failed to open log file {}", config.file.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    tracing::info!(file = %config.file.display(), "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_noop() {
        let config = LoggingConfig {
            enabled: false,
            file: "/nonexistent/dir/cardflip.log".into(),
            level: "nonsense".into(),
        };
        assert!(init(&config).is_ok());
    }

    #[test]
    fn test_bad_level_rejected() {
        let config = LoggingConfig {
            enabled: true,
            file: std::env::temp_dir().join("cardflip-bad-level.log"),
            level: "loud".into(),
        };
        assert!(init(&config).is_err());
    }
}
