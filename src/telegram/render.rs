//! Message text and inline keyboards for polls

use fluent_templates::fluent_bundle::FluentArgs;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use unic_langid::LanguageIdentifier;

use super::markdown::{bold, escape_markdown_v2};
use super::payload::CallbackPayload;
use crate::core::config;
use crate::i18n;
use crate::poll::{Poll, PollId};

const SELECTED_MARK: &str = "🔵";
const UNSELECTED_MARK: &str = "⚪";

/// Text of a freshly created poll (MarkdownV2).
pub fn creation_text(lang: &LanguageIdentifier, poll: &Poll) -> String {
    format!(
        "📊 {}\n\n{}",
        bold(&escape_markdown_v2(&poll.question)),
        escape_markdown_v2(&i18n::t(lang, "poll-choose"))
    )
}

/// Text of a poll after a vote: question plus the number of people who voted (MarkdownV2).
pub fn results_text(lang: &LanguageIdentifier, poll: &Poll) -> String {
    let mut args = FluentArgs::new();
    args.set("count", poll.total_votes());

    format!(
        "📊 {}\n\n{}",
        bold(&escape_markdown_v2(&poll.question)),
        escape_markdown_v2(&i18n::t_args(lang, "poll-total", &args))
    )
}

/// One button per option with its current count, then the "show voters" button.
///
/// `selected` is drawn with a filled mark.
pub fn poll_keyboard(lang: &LanguageIdentifier, id: PollId, poll: &Poll, selected: Option<usize>) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = poll
        .options()
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let mark = if selected == Some(index) {
                SELECTED_MARK
            } else {
                UNSELECTED_MARK
            };
            let payload = CallbackPayload::Vote { poll: id, option: index };
            vec![InlineKeyboardButton::callback(
                format!("{} {} - {}", mark, option.label, option.vote_count()),
                payload.encode(),
            )]
        })
        .collect();

    rows.push(vec![InlineKeyboardButton::callback(
        i18n::t(lang, "poll-show-voters"),
        CallbackPayload::ShowVoters { poll: id }.encode(),
    )]);

    InlineKeyboardMarkup::new(rows)
}

/// Plain-text voter list for a callback alert.
///
/// Options nobody picked are skipped. Alerts are not parsed as markup, so
/// nothing is escaped here.
pub fn voters_text(lang: &LanguageIdentifier, poll: &Poll) -> String {
    let mut text = i18n::t(lang, "poll-voters-header");
    text.push('\n');

    if !poll.has_votes() {
        text.push('\n');
        text.push_str(&i18n::t(lang, "poll-no-votes"));
        return text;
    }

    for option in poll.options().iter().filter(|option| option.vote_count() > 0) {
        text.push_str(&format!("\n{} ({}):\n", option.label, option.vote_count()));
        for voter in option.voters() {
            text.push_str(&format!("  • {}\n", voter.display_name));
        }
    }

    text
}

/// Cuts `text` to the Bot API limit for callback alerts.
///
/// Telegram measures text length in UTF-16 code units, so emoji in
/// display names count double.
pub fn truncate_alert(text: &str) -> String {
    let limit = config::poll::ALERT_TEXT_LIMIT;
    if text.encode_utf16().count() <= limit {
        return text.to_string();
    }

    let ellipsis = '…';
    let budget = limit - ellipsis.len_utf16();
    let mut used = 0;
    let mut truncated: String = text
        .chars()
        .take_while(|c| {
            used += c.len_utf16();
            used <= budget
        })
        .collect();
    truncated.push(ellipsis);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::{PollDraft, Voter};
    use pretty_assertions::assert_eq;
    use teloxide::types::{ChatId, InlineKeyboardButtonKind, MessageId, UserId};

    fn ru() -> LanguageIdentifier {
        i18n::lang_from_code("ru")
    }

    fn en() -> LanguageIdentifier {
        i18n::lang_from_code("en")
    }

    fn weekend_poll() -> (PollId, Poll) {
        let draft = PollDraft::parse("Where this weekend? | Cinema | Park").unwrap();
        (PollId::new(ChatId(-100), MessageId(5)), Poll::new(draft))
    }

    fn labels(markup: &InlineKeyboardMarkup) -> Vec<String> {
        markup.inline_keyboard.iter().flatten().map(|b| b.text.clone()).collect()
    }

    fn callback_data(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data,
            other => panic!("unexpected button kind {:?}", other),
        }
    }

    #[test]
    fn test_initial_keyboard() {
        let (id, poll) = weekend_poll();
        let markup = poll_keyboard(&ru(), id, &poll, None);

        assert_eq!(
            labels(&markup),
            vec!["⚪ Cinema - 0", "⚪ Park - 0", "👥 Показать список проголосовавших"]
        );
        assert_eq!(markup.inline_keyboard.len(), 3, "one row per button");
        assert_eq!(callback_data(&markup.inline_keyboard[1][0]), "vote_-100_5_1");
        assert_eq!(callback_data(&markup.inline_keyboard[2][0]), "show_-100_5");
    }

    #[test]
    fn test_keyboard_after_vote_marks_selection() {
        let (id, mut poll) = weekend_poll();
        poll.cast_vote(1, Voter::new(UserId(1), "@alice"));

        let markup = poll_keyboard(&en(), id, &poll, Some(1));
        assert_eq!(
            labels(&markup),
            vec!["⚪ Cinema - 0", "🔵 Park - 1", "👥 Show who voted"]
        );
    }

    #[test]
    fn test_creation_and_results_text() {
        let (_, mut poll) = weekend_poll();
        assert_eq!(creation_text(&en(), &poll), "📊 *Where this weekend?*\n\nChoose an option:");

        poll.cast_vote(0, Voter::new(UserId(1), "Bob"));
        poll.cast_vote(1, Voter::new(UserId(2), "Eve"));
        assert_eq!(results_text(&ru(), &poll), "📊 *Where this weekend?*\n\nВсего проголосовало: 2");
    }

    #[test]
    fn test_question_is_escaped() {
        let draft = PollDraft::parse("Pizza or sushi (7 p.m.)? | Pizza | Sushi").unwrap();
        let text = creation_text(&en(), &Poll::new(draft));
        assert!(text.starts_with("📊 *Pizza or sushi \\(7 p\\.m\\.\\)?*"));
    }

    #[test]
    fn test_voters_text_lists_only_chosen_options() {
        let draft = PollDraft::parse("Q | Cinema | Park | Home").unwrap();
        let mut poll = Poll::new(draft);
        poll.cast_vote(0, Voter::new(UserId(1), "@alice"));
        poll.cast_vote(2, Voter::new(UserId(2), "Bob"));
        poll.cast_vote(0, Voter::new(UserId(3), "Carol"));

        assert_eq!(
            voters_text(&en(), &poll),
            "📋 Voters:\n\nCinema (2):\n  • @alice\n  • Carol\n\nHome (1):\n  • Bob\n"
        );
    }

    #[test]
    fn test_voters_text_without_votes() {
        let (_, poll) = weekend_poll();
        assert_eq!(voters_text(&ru(), &poll), "📋 Список проголосовавших:\n\nПока никто не проголосовал.");
    }

    #[test]
    fn test_truncate_alert() {
        assert_eq!(truncate_alert("short"), "short");

        let long = "я".repeat(300);
        let cut = truncate_alert(&long);
        assert_eq!(cut.chars().count(), config::poll::ALERT_TEXT_LIMIT);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_truncate_alert_counts_utf16_units() {
        let draft = PollDraft::parse("Q | Cinema | Park").unwrap();
        let mut poll = Poll::new(draft);
        for id in 0..40 {
            poll.cast_vote(0, Voter::new(UserId(id), "😀😀😀"));
        }

        let text = voters_text(&en(), &poll);
        assert!(text.encode_utf16().count() > config::poll::ALERT_TEXT_LIMIT);

        let cut = truncate_alert(&text);
        assert!(cut.encode_utf16().count() <= config::poll::ALERT_TEXT_LIMIT);
        assert!(cut.ends_with('…'));
        assert!(cut.starts_with("📋 Voters:"));
    }
}
