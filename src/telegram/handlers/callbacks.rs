//! Poll button presses: voting and the voter list

use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, ParseMode};
use teloxide::{ApiError, RequestError};
use unic_langid::LanguageIdentifier;

use super::types::{HandlerDeps, HandlerError};
use crate::i18n;
use crate::poll::{PollError, PollId, Voter};
use crate::telegram::payload::CallbackPayload;
use crate::telegram::render;

/// Handles a press on any poll button.
///
/// Every query is answered exactly once so the client stops its spinner.
/// Payloads that do not decode are logged and answered with no text.
pub(super) async fn handle_poll_callback(bot: &Bot, q: CallbackQuery, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let Some(data) = q.data.as_deref() else {
        bot.answer_callback_query(q.id.clone()).await?;
        return Ok(());
    };

    let payload = match CallbackPayload::decode(data) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("Ignoring callback from user {}: {}", q.from.id.0, e);
            bot.answer_callback_query(q.id.clone()).await?;
            return Ok(());
        }
    };

    let lang = i18n::lang_for_user(Some(&q.from));
    log::debug!("Callback {:?} from user {}", payload, q.from.id.0);

    match payload {
        CallbackPayload::Vote { poll, option } => handle_vote(bot, &q, deps, &lang, poll, option).await,
        CallbackPayload::ShowVoters { poll } => handle_show_voters(bot, &q, deps, &lang, poll).await,
    }
}

async fn handle_vote(
    bot: &Bot,
    q: &CallbackQuery,
    deps: &HandlerDeps,
    lang: &LanguageIdentifier,
    id: PollId,
    option: usize,
) -> Result<(), HandlerError> {
    let voter = Voter::from_user(&q.from);
    let poll = match deps.registry.vote(id, option, voter).await {
        Ok(poll) => poll,
        Err(e) => return answer_poll_error(bot, q, lang, e).await,
    };

    log::info!("User {} voted for option {} in poll {}", q.from.id.0, option, id);
    bot.answer_callback_query(q.id.clone()).await?;

    // Inline-mode messages are not used by this bot, so there is nothing to edit without a message
    let Some(message) = q.message.as_ref() else {
        return Ok(());
    };

    let result = bot
        .edit_message_text(message.chat().id, message.id(), render::results_text(lang, &poll))
        .parse_mode(ParseMode::MarkdownV2)
        .reply_markup(render::poll_keyboard(lang, id, &poll, Some(option)))
        .await;

    match result {
        Ok(_) => {}
        // Same voter pressed the same option again
        Err(RequestError::Api(ApiError::MessageNotModified)) => {
            log::debug!("Poll {} message unchanged after vote", id);
        }
        // The vote is recorded either way; the next vote redraws the message
        Err(e) => log::error!("Failed to refresh poll {} message: {}", id, e),
    }

    Ok(())
}

async fn handle_show_voters(
    bot: &Bot,
    q: &CallbackQuery,
    deps: &HandlerDeps,
    lang: &LanguageIdentifier,
    id: PollId,
) -> Result<(), HandlerError> {
    let poll = match deps.registry.snapshot(id).await {
        Ok(poll) => poll,
        Err(e) => return answer_poll_error(bot, q, lang, e).await,
    };

    let text = render::truncate_alert(&render::voters_text(lang, &poll));
    bot.answer_callback_query(q.id.clone())
        .text(text)
        .show_alert(true)
        .await?;

    Ok(())
}

/// Unknown polls and stale buttons both end in the "poll is outdated" alert.
async fn answer_poll_error(
    bot: &Bot,
    q: &CallbackQuery,
    lang: &LanguageIdentifier,
    err: PollError,
) -> Result<(), HandlerError> {
    match err {
        PollError::OptionOutOfRange { .. } => log::warn!("Stale poll button from user {}: {}", q.from.id.0, err),
        _ => log::info!("Callback from user {}: {}", q.from.id.0, err),
    }

    bot.answer_callback_query(q.id.clone())
        .text(i18n::t(lang, "poll-expired"))
        .show_alert(true)
        .await?;

    Ok(())
}
