use std::str::FromStr;

use itertools::Itertools;

use super::error::MalformedReason;
use crate::core::config::poll::{DELIMITER, MAX_OPTIONS, MIN_OPTIONS};

/// Question and options parsed from `/poll` arguments, not yet registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollDraft {
    pub question: String,
    pub options: Vec<String>,
}

impl PollDraft {
    /// Parses `question | option1 | option2 [| optionN...]`.
    ///
    /// Whitespace runs inside the text collapse to a single space. Every
    /// segment is trimmed; empty options are kept as given.
    pub fn parse(args: &str) -> Result<Self, MalformedReason> {
        let text = args.split_whitespace().join(" ");
        if text.is_empty() {
            return Err(MalformedReason::MissingArguments);
        }

        let mut parts = text.split(DELIMITER).map(|part| part.trim().to_string());
        let question = parts.next().unwrap_or_default();
        let options: Vec<String> = parts.collect();

        if options.len() < MIN_OPTIONS {
            return Err(MalformedReason::TooFewOptions);
        }
        if question.is_empty() {
            return Err(MalformedReason::EmptyQuestion);
        }
        if options.len() > MAX_OPTIONS {
            return Err(MalformedReason::TooManyOptions);
        }

        Ok(Self { question, options })
    }
}

impl FromStr for PollDraft {
    type Err = MalformedReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
