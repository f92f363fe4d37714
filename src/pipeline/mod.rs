//! Command pipeline between the egui front end and the language service.
//!
//! # Architecture
//!
//! ```text
//! TutorApp (egui thread)
//!        │  SessionCommand (mpsc)
//!        ▼
//! SessionOrchestrator::run()  ← tokio task, owns SessionState
//!        │
//!        └─ Dispatcher::dispatch
//!              ├─ SetCredential → CredentialGate::set
//!              ├─ Translate     → translate → explain → grammar check → SessionLog::append
//!              ├─ ResetLog      → SessionLog::clear
//!              └─ ExportLog     → write translation_history.txt
//!        │
//!        │  SessionEvent::{Progress, View} (mpsc)
//!        ▼
//! TutorApp::poll_events() ← every frame
//! ```

pub mod dispatch;
pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use dispatch::{Dispatcher, Notice, ProgressFn, SessionCommand, SessionError, SessionView};
pub use runner::{SessionEvent, SessionOrchestrator};
pub use state::ActionState;
