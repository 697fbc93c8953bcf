//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - A startup banner describing the active configuration

use anyhow::Result;
use simplelog::*;
use std::fs::File;

use crate::core::config;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to initialize logger
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs which settings the bot is starting with.
///
/// The token is only reported as present or missing.
pub fn log_startup_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("📊 Golosovalka configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if config::BOT_TOKEN.is_some() {
        log::info!("✅ BOT_TOKEN: set");
    } else {
        log::error!("❌ BOT_TOKEN: not set (TELOXIDE_TOKEN is accepted too)");
    }

    match *config::BOT_API_URL {
        Some(ref url) => log::info!("✅ BOT_API_URL: {}", url),
        None => log::info!("ℹ️  BOT_API_URL: not set, using api.telegram.org"),
    }

    log::info!("ℹ️  LOG_FILE_PATH: {}", *config::LOG_FILE_PATH);
    log::info!("ℹ️  BOT_LANGUAGE: {}", *config::BOT_LANGUAGE);
    log::info!(
        "ℹ️  Poll limits: {}..={} options, network timeout {}s",
        config::poll::MIN_OPTIONS,
        config::poll::MAX_OPTIONS,
        config::network::REQUEST_TIMEOUT_SECS
    );
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
