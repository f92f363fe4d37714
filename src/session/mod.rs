//! Session-scoped state: the credential gate and the interaction log.
//!
//! Nothing here is global.  The orchestrator owns one [`SessionState`] and
//! passes it by `&mut` into each dispatcher entry point.

pub mod credential;
pub mod history;

pub use credential::{Credential, CredentialGate};
pub use history::{InteractionRecord, SessionLog};

/// Everything one user session holds in memory.
#[derive(Debug, Default)]
pub struct SessionState {
    pub gate: CredentialGate,
    pub log: SessionLog,
    /// Result of the most recent successful translate action, shown above the
    /// history.  Cleared by a log reset.
    pub current: Option<InteractionRecord>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}
