use thiserror::Error;

use super::model::PollId;

/// Why a `/poll` command could not be turned into a poll.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("no question or options given")]
    MissingArguments,
    #[error("the question is empty")]
    EmptyQuestion,
    #[error("fewer than two options given")]
    TooFewOptions,
    #[error("more options than fit into one keyboard")]
    TooManyOptions,
}

/// Failures of poll operations.
///
/// None of these are fatal: each one ends in a short reply to the user
/// and leaves the registry untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error("malformed /poll command: {0}")]
    MalformedCommand(#[from] MalformedReason),

    #[error("poll {0} is unknown or expired")]
    UnknownOrExpiredPoll(PollId),

    /// Stale or forged button pointing past the last option
    #[error("option {index} is out of range for poll {poll} ({len} options)")]
    OptionOutOfRange { poll: PollId, index: usize, len: usize },
}
