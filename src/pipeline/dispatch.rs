//! Command dispatcher: one entry point per user action.
//!
//! Every handler takes the session state by `&mut`, performs the action and
//! returns a [`SessionView`]: the complete set of things the UI should draw
//! next.  The UI never reads [`SessionState`] directly.
//!
//! A translate action is all-or-nothing: the record is assembled from all
//! three completions before it is appended, so any failure leaves the log
//! exactly as it was.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use super::state::ActionState;
use crate::llm::{LanguageService, LlmError, Task};
use crate::present::{self, ExportError, RecordView, RenderBlock};
use crate::session::{Credential, InteractionRecord, SessionState};

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// User actions sent from the UI.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// The credential field changed.
    SetCredential(String),
    /// Translate, explain and grammar-check `input`.
    Translate { input: String },
    /// Clear the history.
    ResetLog,
    /// Write `translation_history.txt`.
    ExportLog,
}

// ---------------------------------------------------------------------------
// SessionError / Notice
// ---------------------------------------------------------------------------

/// Everything a command can fail with, phrased for the user.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("API 키를 입력하세요.")]
    MissingCredential,

    #[error("번역할 텍스트를 입력하세요.")]
    MissingInput,

    #[error("API 키가 올바르지 않습니다. 다시 확인해 주세요.")]
    InvalidCredential,

    #[error("요청을 처리하지 못했습니다: {0}")]
    Service(LlmError),

    #[error("대화 기록을 저장하지 못했습니다: {0}")]
    Export(#[from] ExportError),
}

impl From<LlmError> for SessionError {
    fn from(e: LlmError) -> Self {
        if e.is_unauthorized() {
            SessionError::InvalidCredential
        } else {
            SessionError::Service(e)
        }
    }
}

impl SessionError {
    pub fn notice(&self) -> Notice {
        match self {
            SessionError::MissingCredential | SessionError::MissingInput => {
                Notice::Warning(self.to_string())
            }
            _ => Notice::Error(self.to_string()),
        }
    }
}

/// A one-line message shown above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(t) | Notice::Warning(t) | Notice::Error(t) => t,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionView
// ---------------------------------------------------------------------------

/// Rendering instructions produced after every command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionView {
    /// `false` means only the credential field is usable.
    pub unlocked: bool,
    pub notice: Option<Notice>,
    /// Result boxes of the last successful translate action.
    pub current: Vec<RenderBlock>,
    /// The whole log, numbered from 1.
    pub history: Vec<RecordView>,
    /// Whether the download button is offered.
    pub export_available: bool,
}

impl SessionView {
    pub fn snapshot(state: &SessionState, notice: Option<Notice>) -> Self {
        let unlocked = state.gate.is_unlocked();
        Self {
            unlocked,
            notice,
            current: state
                .current
                .as_ref()
                .map(present::result_blocks)
                .unwrap_or_default(),
            history: present::render_history(&state.log),
            export_available: unlocked && !state.log.is_empty(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Callback told which step is about to run.
pub type ProgressFn<'a> = &'a mut (dyn FnMut(ActionState) + Send);

/// Runs user commands against a [`SessionState`].
pub struct Dispatcher {
    service: Arc<dyn LanguageService>,
    export_dir: PathBuf,
}

impl Dispatcher {
    pub fn new(service: Arc<dyn LanguageService>, export_dir: PathBuf) -> Self {
        Self {
            service,
            export_dir,
        }
    }

    /// Route `command` to its handler.
    pub async fn dispatch(
        &self,
        state: &mut SessionState,
        command: SessionCommand,
        progress: ProgressFn<'_>,
    ) -> SessionView {
        match command {
            SessionCommand::SetCredential(secret) => self.set_credential(state, &secret),
            SessionCommand::Translate { input } => self.translate(state, &input, progress).await,
            SessionCommand::ResetLog => self.reset_log(state),
            SessionCommand::ExportLog => self.export_log(state, progress).await,
        }
    }

    pub fn set_credential(&self, state: &mut SessionState, secret: &str) -> SessionView {
        state.gate.set(secret);
        let notice = (!state.gate.is_unlocked()).then(|| SessionError::MissingCredential.notice());
        SessionView::snapshot(state, notice)
    }

    /// Run the three completions for `input` and append the finished record.
    pub async fn translate(
        &self,
        state: &mut SessionState,
        input: &str,
        progress: ProgressFn<'_>,
    ) -> SessionView {
        let outcome = match state.gate.credential() {
            None => Err(SessionError::MissingCredential),
            Some(_) if input.is_empty() => Err(SessionError::MissingInput),
            Some(credential) => self.run_steps(credential, input, progress).await,
        };
        progress(ActionState::Idle);

        match outcome {
            Ok(record) => {
                log::info!("translate: record #{} appended", state.log.len() + 1);
                state.log.append(record.clone());
                state.current = Some(record);
                SessionView::snapshot(state, None)
            }
            Err(e) => {
                log::warn!("translate: {e}");
                SessionView::snapshot(state, Some(e.notice()))
            }
        }
    }

    pub fn reset_log(&self, state: &mut SessionState) -> SessionView {
        log::info!("reset: dropping {} record(s)", state.log.len());
        state.log.clear();
        state.current = None;
        SessionView::snapshot(state, None)
    }

    pub async fn export_log(&self, state: &mut SessionState, progress: ProgressFn<'_>) -> SessionView {
        if !state.gate.is_unlocked() {
            return SessionView::snapshot(state, Some(SessionError::MissingCredential.notice()));
        }

        progress(ActionState::Exporting);
        let result = present::write_export(&state.log, &self.export_dir).await;
        progress(ActionState::Idle);

        let notice = match result {
            Ok(path) => Notice::Info(format!("대화 기록을 저장했습니다: {}", path.display())),
            Err(e) => {
                log::warn!("export failed: {e}");
                SessionError::from(e).notice()
            }
        };
        SessionView::snapshot(state, Some(notice))
    }

    async fn run_steps(
        &self,
        credential: &Credential,
        input: &str,
        progress: ProgressFn<'_>,
    ) -> Result<InteractionRecord, SessionError> {
        progress(ActionState::Translating);
        let translation = self.step(credential, Task::Translate, input).await?;

        progress(ActionState::Explaining);
        let explanation = self.step(credential, Task::Explain, &translation).await?;

        progress(ActionState::CheckingGrammar);
        let grammar_notes = self.step(credential, Task::GrammarCheck, input).await?;

        Ok(InteractionRecord::new(input, translation)
            .with_explanation(explanation)
            .with_grammar_notes(grammar_notes))
    }

    async fn step(
        &self,
        credential: &Credential,
        task: Task,
        content: &str,
    ) -> Result<String, SessionError> {
        log::debug!("{}: sending {} chars", task.name(), content.chars().count());
        self.service
            .complete(credential, task.system_instruction(), content)
            .await
            .map_err(|e| {
                log::warn!("{} failed: {e}", task.name());
                SessionError::from(e)
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
