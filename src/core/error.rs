use thiserror::Error;

/// Centralized error types for the application
///
/// Everything that can fail outside of a single poll operation is converted to this enum.
/// Uses `thiserror` for automatic error conversion and display formatting.
///
/// # Example
///
/// ```no_run
/// use golosovalka::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = AppError::Config("BOT_TOKEN is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: BOT_TOKEN is not set");
    }

    #[test]
    fn test_request_error_conversion() {
        let err: AppError = teloxide::RequestError::Api(teloxide::ApiError::MessageNotModified).into();
        assert!(matches!(err, AppError::Telegram(_)));
        assert!(err.to_string().starts_with("Telegram error:"));
    }

    #[test]
    fn test_url_error_conversion() {
        let err: AppError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, AppError::Url(_)));
    }
}
