//! Handler types and dependencies

use std::sync::Arc;

use crate::poll::PollRegistry;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub registry: Arc<PollRegistry>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(registry: Arc<PollRegistry>) -> Self {
        Self { registry }
    }
}
