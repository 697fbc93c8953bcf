//! Poll domain: parsing `/poll` arguments, the poll model and the registry

pub mod draft;
pub mod error;
pub mod model;
pub mod registry;

pub use draft::PollDraft;
pub use error::{MalformedReason, PollError};
pub use model::{display_name, Poll, PollId, PollOption, Voter};
pub use registry::PollRegistry;
