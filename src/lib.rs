//! Golosovalka - Telegram bot for quick multiple-choice polls
//!
//! Users create a poll with `/poll Question? | Option 1 | Option 2` and vote
//! with inline buttons. Polls live in memory for the lifetime of the process.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors and logging
//! - `poll`: command parsing, the poll model and the in-memory registry
//! - `telegram`: bot setup, callback payloads, rendering and handlers
//! - `i18n`: translations

pub mod cli;
pub mod core;
pub mod i18n;
pub mod poll;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use poll::{Poll, PollError, PollId, PollRegistry};
pub use telegram::{schema, HandlerDeps};
