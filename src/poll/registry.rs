use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::draft::PollDraft;
use super::error::PollError;
use super::model::{Poll, PollId, Voter};

/// In-memory store of every poll created since the process started.
///
/// Constructed once at startup and shared by the handlers. Entries are never
/// removed. Every method hands back a snapshot, so callers render and talk to
/// Telegram without holding the lock.
#[derive(Clone, Default)]
pub struct PollRegistry {
    polls: Arc<Mutex<HashMap<PollId, Poll>>>,
}

impl PollRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a poll under `id`. An existing poll with the same id is replaced.
    pub async fn create(&self, id: PollId, draft: PollDraft) -> Poll {
        let poll = Poll::new(draft);
        let mut polls = self.polls.lock().await;
        if polls.insert(id, poll.clone()).is_some() {
            log::warn!("Poll {} was registered twice, keeping the newer one", id);
        }
        poll
    }

    /// Moves `voter`'s single vote to option `option` of poll `id`.
    pub async fn vote(&self, id: PollId, option: usize, voter: Voter) -> Result<Poll, PollError> {
        let mut polls = self.polls.lock().await;
        let poll = polls.get_mut(&id).ok_or(PollError::UnknownOrExpiredPoll(id))?;

        let len = poll.option_count();
        if !poll.cast_vote(option, voter) {
            return Err(PollError::OptionOutOfRange {
                poll: id,
                index: option,
                len,
            });
        }

        Ok(poll.clone())
    }

    /// Current state of poll `id`, used to list its voters.
    pub async fn snapshot(&self, id: PollId) -> Result<Poll, PollError> {
        let polls = self.polls.lock().await;
        polls.get(&id).cloned().ok_or(PollError::UnknownOrExpiredPoll(id))
    }

    pub async fn len(&self) -> usize {
        self.polls.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.polls.lock().await.is_empty()
    }
}
