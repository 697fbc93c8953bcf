use std::fmt;

use teloxide::types::{ChatId, Message, MessageId, User, UserId};

use super::draft::PollDraft;

/// Registry key: the chat and the message that created the poll.
///
/// Rendered as `<chat>_<message>`, which is also how it appears inside
/// callback payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PollId {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

impl PollId {
    pub fn new(chat_id: ChatId, message_id: MessageId) -> Self {
        Self { chat_id, message_id }
    }

    /// Poll id for a poll created by the given `/poll` message.
    pub fn from_message(msg: &Message) -> Self {
        Self::new(msg.chat.id, msg.id)
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.chat_id.0, self.message_id.0)
    }
}

/// A person who pressed an option button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voter {
    pub id: UserId,
    pub display_name: String,
}

impl Voter {
    pub fn new(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }

    /// Builds a voter from a Telegram user, preferring `@username` over the first name.
    pub fn from_user(user: &User) -> Self {
        Self::new(user.id, display_name(user.username.as_deref(), &user.first_name))
    }
}

/// `@handle` when the user has one, otherwise their first name.
pub fn display_name(username: Option<&str>, first_name: &str) -> String {
    match username {
        Some(handle) if !handle.is_empty() => format!("@{}", handle),
        _ => first_name.to_string(),
    }
}

/// One answer of a poll together with the people who picked it.
///
/// Voters are kept in the order they voted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOption {
    pub label: String,
    voters: Vec<Voter>,
}

impl PollOption {
    fn new(label: String) -> Self {
        Self {
            label,
            voters: Vec::new(),
        }
    }

    pub fn voters(&self) -> &[Voter] {
        &self.voters
    }

    pub fn vote_count(&self) -> usize {
        self.voters.len()
    }

    fn has_voter(&self, id: UserId) -> bool {
        self.voters.iter().any(|v| v.id == id)
    }

    fn remove_voter(&mut self, id: UserId) {
        self.voters.retain(|v| v.id != id);
    }
}

/// A single-choice poll.
///
/// Votes are stored per option position, so two options with the same
/// label still count separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub question: String,
    options: Vec<PollOption>,
}

impl Poll {
    pub fn new(draft: PollDraft) -> Self {
        Self {
            question: draft.question,
            options: draft.options.into_iter().map(PollOption::new).collect(),
        }
    }

    pub fn options(&self) -> &[PollOption] {
        &self.options
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Records `voter` under option `index`, dropping any earlier vote of theirs.
    ///
    /// Returns `false` without touching anything when `index` is out of range.
    pub fn cast_vote(&mut self, index: usize, voter: Voter) -> bool {
        if index >= self.options.len() {
            return false;
        }

        for option in &mut self.options {
            option.remove_voter(voter.id);
        }
        self.options[index].voters.push(voter);
        true
    }

    /// Index of the option `user` currently votes for, if any.
    pub fn choice_of(&self, user: UserId) -> Option<usize> {
        self.options.iter().position(|option| option.has_voter(user))
    }

    pub fn vote_counts(&self) -> Vec<usize> {
        self.options.iter().map(PollOption::vote_count).collect()
    }

    pub fn total_votes(&self) -> usize {
        self.options.iter().map(PollOption::vote_count).sum()
    }

    pub fn has_votes(&self) -> bool {
        self.options.iter().any(|option| !option.voters.is_empty())
    }
}
