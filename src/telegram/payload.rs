//! Callback data carried by poll buttons
//!
//! Wire format:
//! - `vote_<chat>_<message>_<option>`
//! - `show_<chat>_<message>`
//!
//! Chat ids of groups are negative (`-100…`), which is fine because the
//! minus sign never collides with the `_` separator.

use std::fmt;
use std::str::FromStr;

use teloxide::types::{ChatId, MessageId};
use thiserror::Error;

use crate::poll::PollId;

const VOTE_TAG: &str = "vote";
const SHOW_TAG: &str = "show";
const SEPARATOR: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackPayload {
    Vote { poll: PollId, option: usize },
    ShowVoters { poll: PollId },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("unknown callback action in {0:?}")]
    UnknownAction(String),
    #[error("malformed callback payload {0:?}")]
    Malformed(String),
}

impl CallbackPayload {
    pub fn poll_id(&self) -> PollId {
        match *self {
            Self::Vote { poll, .. } | Self::ShowVoters { poll } => poll,
        }
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }

    pub fn decode(data: &str) -> Result<Self, PayloadError> {
        let malformed = || PayloadError::Malformed(data.to_string());

        let (tag, rest) = data.split_once(SEPARATOR).ok_or_else(malformed)?;
        let fields: Vec<&str> = rest.split(SEPARATOR).collect();

        match (tag, fields.as_slice()) {
            (VOTE_TAG, [chat, message, option]) => Ok(Self::Vote {
                poll: parse_poll_id(chat, message).ok_or_else(malformed)?,
                option: option.parse().map_err(|_| malformed())?,
            }),
            (SHOW_TAG, [chat, message]) => Ok(Self::ShowVoters {
                poll: parse_poll_id(chat, message).ok_or_else(malformed)?,
            }),
            (VOTE_TAG | SHOW_TAG, _) => Err(malformed()),
            _ => Err(PayloadError::UnknownAction(data.to_string())),
        }
    }
}

fn parse_poll_id(chat: &str, message: &str) -> Option<PollId> {
    let chat = chat.parse::<i64>().ok()?;
    let message = message.parse::<i32>().ok()?;
    Some(PollId::new(ChatId(chat), MessageId(message)))
}

impl fmt::Display for CallbackPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vote { poll, option } => write!(f, "{VOTE_TAG}{SEPARATOR}{poll}{SEPARATOR}{option}"),
            Self::ShowVoters { poll } => write!(f, "{SHOW_TAG}{SEPARATOR}{poll}"),
        }
    }
}

impl FromStr for CallbackPayload {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn group_poll() -> PollId {
        PollId::new(ChatId(-1001234567890), MessageId(815))
    }

    #[test]
    fn test_encode_matches_wire_format() {
        let vote = CallbackPayload::Vote {
            poll: group_poll(),
            option: 3,
        };
        assert_eq!(vote.encode(), "vote_-1001234567890_815_3");

        let show = CallbackPayload::ShowVoters { poll: group_poll() };
        assert_eq!(show.encode(), "show_-1001234567890_815");
    }

    #[test]
    fn test_decode_group_and_private_chats() {
        assert_eq!(
            "vote_-1001234567890_815_3".parse::<CallbackPayload>(),
            Ok(CallbackPayload::Vote {
                poll: group_poll(),
                option: 3
            })
        );
        assert_eq!(
            CallbackPayload::decode("show_42_7"),
            Ok(CallbackPayload::ShowVoters {
                poll: PollId::new(ChatId(42), MessageId(7))
            })
        );
    }

    #[test]
    fn test_poll_id_accessor() {
        let payload = CallbackPayload::Vote {
            poll: group_poll(),
            option: 0,
        };
        assert_eq!(payload.poll_id(), group_poll());
    }

    #[test]
    fn test_decode_rejects_malformed_payloads() {
        for data in ["vote_1_2", "vote_a_2_3", "vote_1_2_x", "vote_1_2_-1", "show_1", "vote_1_2_3_4", "show_1_2_3", "vote", ""] {
            assert!(
                matches!(CallbackPayload::decode(data), Err(PayloadError::Malformed(_))),
                "{data:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn test_decode_rejects_unknown_actions() {
        assert_eq!(
            CallbackPayload::decode("foo_1_2"),
            Err(PayloadError::UnknownAction("foo_1_2".to_string()))
        );
    }

    #[test]
    fn test_payload_fits_callback_data_limit() {
        let worst = CallbackPayload::Vote {
            poll: PollId::new(ChatId(i64::MIN), MessageId(i32::MIN)),
            option: 98,
        };
        // Bot API limit for callback_data
        assert!(worst.encode().len() <= 64);
    }
}
