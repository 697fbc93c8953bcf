use once_cell::sync::Lazy;
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::time::Duration;

use crate::core::error::{AppError, AppResult};

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
/// Blank values are treated as missing
pub static BOT_TOKEN: Lazy<Option<SecretString>> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .ok()
        .filter(|token| !token.trim().is_empty())
        .map(SecretString::from)
});

/// Custom Bot API server (e.g. a local telegram-bot-api instance)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| {
    env::var("BOT_API_URL").ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: golosovalka.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "golosovalka.log".to_string()));

/// Language used when a user's Telegram locale is not one we translate
/// Read from BOT_LANGUAGE environment variable
/// Default: ru
pub static BOT_LANGUAGE: Lazy<String> =
    Lazy::new(|| env::var("BOT_LANGUAGE").unwrap_or_else(|_| "ru".to_string()));

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    /// Long polling requests hold the connection open, so this stays well above the polling timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Poll command and rendering limits
pub mod poll {
    /// Separator between the question and the options in `/poll`
    pub const DELIMITER: char = '|';

    /// A poll needs at least this many options
    pub const MIN_OPTIONS: usize = 2;

    /// Telegram allows 100 inline buttons per message; one row is the voters button
    pub const MAX_OPTIONS: usize = 99;

    /// Maximum length of a callback query alert in UTF-16 code units (Bot API limit)
    pub const ALERT_TEXT_LIMIT: usize = 200;
}

/// Returns the bot token, or a configuration error when it is not set.
pub fn bot_token() -> AppResult<&'static str> {
    BOT_TOKEN
        .as_ref()
        .map(|token| token.expose_secret())
        .ok_or_else(|| AppError::Config("BOT_TOKEN (or TELOXIDE_TOKEN) is not set".to_string()))
}

/// Checks that everything required to start the bot is present and well-formed.
pub fn validate() -> AppResult<()> {
    bot_token()?;

    if let Some(ref api_url) = *BOT_API_URL {
        url::Url::parse(api_url)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_limits_are_consistent() {
        assert!(poll::MIN_OPTIONS >= 2);
        assert!(poll::MAX_OPTIONS > poll::MIN_OPTIONS);
        // Options plus the voters row must fit into one keyboard
        assert!(poll::MAX_OPTIONS < 100);
    }

    #[test]
    fn test_network_timeout() {
        assert_eq!(network::timeout(), Duration::from_secs(network::REQUEST_TIMEOUT_SECS));
    }
}
