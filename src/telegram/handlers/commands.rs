//! Command handler implementations (/start, /poll, /help)

use teloxide::prelude::*;
use teloxide::types::{Message, ParseMode};
use teloxide::utils::command::BotCommands;

use super::types::{HandlerDeps, HandlerError};
use crate::i18n;
use crate::poll::{PollDraft, PollId};
use crate::telegram::bot::Command;
use crate::telegram::render;

/// Handle /start command
pub(super) async fn handle_start_command(bot: &Bot, msg: &Message) -> Result<(), HandlerError> {
    let lang = i18n::lang_for_user(msg.from.as_ref());
    bot.send_message(msg.chat.id, i18n::t(&lang, "start-greeting")).await?;
    Ok(())
}

/// Handle /help command
pub(super) async fn handle_help_command(bot: &Bot, msg: &Message) -> Result<(), HandlerError> {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}

/// Handle /poll command: parse the arguments, register the poll and post its keyboard.
///
/// A malformed command gets an instructive reply and registers nothing.
pub(super) async fn handle_poll_command(
    bot: &Bot,
    msg: &Message,
    args: &str,
    deps: &HandlerDeps,
) -> Result<(), HandlerError> {
    let lang = i18n::lang_for_user(msg.from.as_ref());

    let draft = match PollDraft::parse(args) {
        Ok(draft) => draft,
        Err(reason) => {
            log::info!("Rejected /poll in chat {}: {}", msg.chat.id, reason);
            bot.send_message(msg.chat.id, i18n::malformed_poll_text(&lang, reason))
                .await?;
            return Ok(());
        }
    };

    let id = PollId::from_message(msg);
    let poll = deps.registry.create(id, draft).await;
    log::info!(
        "Created poll {} with {} options in chat {}",
        id,
        poll.option_count(),
        msg.chat.id
    );

    bot.send_message(msg.chat.id, render::creation_text(&lang, &poll))
        .parse_mode(ParseMode::MarkdownV2)
        .reply_markup(render::poll_keyboard(&lang, id, &poll, None))
        .await?;

    Ok(())
}
