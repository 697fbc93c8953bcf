use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use golosovalka::cli::{Cli, Commands};
use golosovalka::core::{config, init_logger, log_startup_configuration};
use golosovalka::poll::PollRegistry;
use golosovalka::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, configuration, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env before any config value is read
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run { drop_pending }) => run_bot(drop_pending).await,
        Some(Commands::CheckConfig) => check_config(),
        None => {
            log::info!("No command specified, running bot in default mode");
            run_bot(false).await
        }
    }
}

/// Validates the configuration without connecting to Telegram
fn check_config() -> Result<()> {
    log_startup_configuration();
    config::validate()?;
    log::info!("✅ Configuration is valid");
    Ok(())
}

/// Runs the bot in long polling mode until Ctrl+C
async fn run_bot(drop_pending: bool) -> Result<()> {
    config::validate()?;
    log_startup_configuration();

    let bot = create_bot()?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let registry = Arc::new(PollRegistry::new());
    let handler = schema(HandlerDeps::new(registry));

    let mut listener = Polling::builder(bot.clone());
    if drop_pending {
        listener = listener.drop_pending_updates();
    }
    let listener = listener.build();

    log::info!("Starting bot in long polling mode (drop pending updates: {})", drop_pending);

    Dispatcher::builder(bot, handler)
        .default_handler(|upd| async move {
            log::debug!("Unhandled update: {:?}", upd.kind);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
