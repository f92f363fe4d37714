//! Session orchestrator: owns the session and serves UI commands.
//!
//! [`SessionOrchestrator`] runs as a tokio task.  It receives
//! [`SessionCommand`]s from the egui thread, hands each one to the
//! [`Dispatcher`], and sends back [`SessionEvent`]s:
//!
//! ```text
//! SessionCommand::Translate
//!   └─▶ Progress(Translating) ─▶ Progress(Explaining)
//!         ─▶ Progress(CheckingGrammar) ─▶ Progress(Idle) ─▶ View(..)
//! SessionCommand::{SetCredential, ResetLog}
//!   └─▶ View(..)
//! SessionCommand::ExportLog
//!   └─▶ Progress(Exporting) ─▶ Progress(Idle) ─▶ View(..)
//! ```
//!
//! Commands are handled one at a time, so the three completion calls of a
//! translate action never interleave with anything else.

use tokio::sync::mpsc;

use super::dispatch::{Dispatcher, SessionCommand, SessionView};
use super::state::ActionState;
use crate::session::SessionState;

/// Events delivered from the orchestrator to the UI.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The action moved to a new step.
    Progress(ActionState),
    /// The command finished; draw this.
    View(SessionView),
}

/// Drives one user session.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use ko_vi_tutor::config::AppConfig;
/// use ko_vi_tutor::llm::ApiClient;
/// use ko_vi_tutor::pipeline::{Dispatcher, SessionOrchestrator};
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let dispatcher = Dispatcher::new(
///     Arc::new(ApiClient::from_config(&config.llm)),
///     config.export.resolve_dir(),
/// );
/// let (command_tx, command_rx) = tokio::sync::mpsc::channel(16);
/// let (event_tx, event_rx) = tokio::sync::mpsc::channel(32);
/// tokio::spawn(SessionOrchestrator::new(dispatcher).run(command_rx, event_tx));
/// # drop((command_tx, event_rx));
/// # }
/// ```
pub struct SessionOrchestrator {
    state: SessionState,
    dispatcher: Dispatcher,
}

impl SessionOrchestrator {
    /// Start a fresh session: locked gate, empty log.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            state: SessionState::new(),
            dispatcher,
        }
    }

    /// Serve commands until `command_rx` is closed.
    pub async fn run(
        mut self,
        mut command_rx: mpsc::Receiver<SessionCommand>,
        event_tx: mpsc::Sender<SessionEvent>,
    ) {
        while let Some(command) = command_rx.recv().await {
            log::debug!("session: {}", command_name(&command));

            let progress_tx = event_tx.clone();
            let mut progress = move |state: ActionState| {
                if progress_tx.try_send(SessionEvent::Progress(state)).is_err() {
                    log::debug!("session: progress event dropped ({state:?})");
                }
            };

            let view = self
                .dispatcher
                .dispatch(&mut self.state, command, &mut progress)
                .await;

            if event_tx.send(SessionEvent::View(view)).await.is_err() {
                log::info!("session: UI has gone away, stopping");
                return;
            }
        }

        log::info!("session: command channel closed, orchestrator shutting down");
    }

    /// Read-only access to the session (tests and diagnostics).
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

/// Command name without its payload; the credential must never reach a log.
fn command_name(command: &SessionCommand) -> &'static str {
    match command {
        SessionCommand::SetCredential(_) => "set-credential",
        SessionCommand::Translate { .. } => "translate",
        SessionCommand::ResetLog => "reset-log",
        SessionCommand::ExportLog => "export-log",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::llm::{LanguageService, LlmError};
    use crate::session::Credential;

    /// Echoes the user content back, prefixed.
    struct EchoService;

    #[async_trait]
    impl LanguageService for EchoService {
        async fn complete(
            &self,
            _credential: &Credential,
            _system: &str,
            user: &str,
        ) -> Result<String, LlmError> {
            Ok(format!("echo:{user}"))
        }
    }

    /// Rejects every credential.
    struct RejectingService;

    #[async_trait]
    impl LanguageService for RejectingService {
        async fn complete(&self, _: &Credential, _: &str, _: &str) -> Result<String, LlmError> {
            Err(LlmError::Unauthorized)
        }
    }

    fn orchestrator(service: Arc<dyn LanguageService>) -> SessionOrchestrator {
        SessionOrchestrator::new(Dispatcher::new(service, std::env::temp_dir()))
    }

    async fn run_commands(
        service: Arc<dyn LanguageService>,
        commands: Vec<SessionCommand>,
    ) -> Vec<SessionEvent> {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, mut event_rx) = mpsc::channel(64);

        for c in commands {
            cmd_tx.send(c).await.unwrap();
        }
        drop(cmd_tx);

        orchestrator(service).run(cmd_rx, event_tx).await;

        let mut events = Vec::new();
        while let Ok(e) = event_rx.try_recv() {
            events.push(e);
        }
        events
    }

    fn views(events: &[SessionEvent]) -> Vec<&SessionView> {
        events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::View(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn every_command_yields_one_view() {
        let events = run_commands(
            Arc::new(EchoService),
            vec![
                SessionCommand::SetCredential("sk".into()),
                SessionCommand::Translate {
                    input: "안녕".into(),
                },
                SessionCommand::ResetLog,
            ],
        )
        .await;

        let views = views(&events);
        assert_eq!(views.len(), 3);
        assert!(views[0].unlocked);
        assert_eq!(views[1].history.len(), 1);
        assert_eq!(views[1].history[0].translation, "echo:안녕");
        assert_eq!(views[1].history[0].explanation, "echo:echo:안녕");
        assert!(views[2].history.is_empty());
    }

    #[tokio::test]
    async fn translate_reports_progress_before_view() {
        let events = run_commands(
            Arc::new(EchoService),
            vec![
                SessionCommand::SetCredential("sk".into()),
                SessionCommand::Translate {
                    input: "xin chào".into(),
                },
            ],
        )
        .await;

        let progress: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::Progress(s) => Some(*s),
                _ => None,
            })
            .collect();
        assert_eq!(
            progress,
            [
                ActionState::Translating,
                ActionState::Explaining,
                ActionState::CheckingGrammar,
                ActionState::Idle,
            ]
        );
        assert!(matches!(events.last(), Some(SessionEvent::View(_))));
    }

    #[tokio::test]
    async fn rejected_credential_leaves_log_empty() {
        let events = run_commands(
            Arc::new(RejectingService),
            vec![
                SessionCommand::SetCredential("sk-bad".into()),
                SessionCommand::Translate {
                    input: "안녕".into(),
                },
            ],
        )
        .await;

        let views = views(&events);
        let last = views.last().unwrap();
        assert!(last.history.is_empty());
        assert!(!last.export_available);
        assert!(last.notice.is_some());
    }

    #[tokio::test]
    async fn closed_ui_stops_the_orchestrator() {
        let (cmd_tx, cmd_rx) = mpsc::channel(4);
        let (event_tx, event_rx) = mpsc::channel(4);
        drop(event_rx);

        cmd_tx.send(SessionCommand::ResetLog).await.unwrap();
        // Sender stays open: run() must return because the UI side is gone.
        orchestrator(Arc::new(EchoService)).run(cmd_rx, event_tx).await;
        drop(cmd_tx);
    }

    #[test]
    fn new_session_is_locked_and_empty() {
        let orc = orchestrator(Arc::new(EchoService));
        assert!(!orc.state().gate.is_unlocked());
        assert!(orc.state().log.is_empty());
    }

    #[test]
    fn command_names_hide_payloads() {
        let name = command_name(&SessionCommand::SetCredential("sk-secret".into()));
        assert_eq!(name, "set-credential");
    }
}
