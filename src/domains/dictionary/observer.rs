//! Observability seam for the dictionary core.
//!
//! The lookup and search logic report what they do through a
//! [`LookupObserver`] handed in at construction time rather than through
//! global logger state. Production code uses [`TracingObserver`].

use tracing::{error, info, warn};

/// Receives log events from the dictionary core.
pub trait LookupObserver: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Observer that forwards every event to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LookupObserver for TracingObserver {
    fn info(&self, message: &str) {
        info!(target: "dictionary", "{}", message);
    }

    fn warn(&self, message: &str) {
        warn!(target: "dictionary", "{}", message);
    }

    fn error(&self, message: &str) {
        error!(target: "dictionary", "{}", message);
    }
}
