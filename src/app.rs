//! Korean ↔ Vietnamese tutor window: egui/eframe application.
//!
//! # Architecture
//!
//! [`TutorApp`] is the top-level [`eframe::App`].  It owns only widget state
//! (the text being typed) and two channel endpoints:
//!
//! * `command_tx`: sends [`SessionCommand`] to the session orchestrator.
//! * `event_rx`  : receives [`SessionEvent`] progress and views back.
//!
//! Everything it draws below the input area comes from the latest
//! [`SessionView`]; the session itself lives in the orchestrator task.
//!
//! # Layout
//!
//! | Section | Shown when |
//! |---------|------------|
//! | Title + masked credential field | always |
//! | "API 키를 입력하세요." warning | credential empty |
//! | Input area, 번역하기 / 대화 기록 초기화 buttons | credential set |
//! | 대화 기록 다운로드 button | log non-empty |
//! | Three result boxes | after a successful translate |
//! | Numbered history | log non-empty |

use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::pipeline::{ActionState, Notice, SessionCommand, SessionEvent, SessionView};
use crate::present::{BlockKind, RecordView, RenderBlock, HISTORY_FILL};

const TITLE: &str = "한국어 ↔ 베트남어 번역 및 문법 검사 서비스";

/// Body text on the light result tints stays dark in either theme.
const BOX_TEXT: egui::Color32 = egui::Color32::from_rgb(30, 30, 30);

fn rgb(c: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(c[0], c[1], c[2])
}

// ---------------------------------------------------------------------------
// TutorApp
// ---------------------------------------------------------------------------

/// eframe application: the single-page tutor.
pub struct TutorApp {
    // ── Widget state ─────────────────────────────────────────────────────
    /// Contents of the masked credential field.
    credential_input: String,
    /// Latest credential edit not yet handed to the orchestrator.
    pending_credential: Option<String>,
    /// Contents of the multi-line input area.
    input_text: String,

    // ── Session mirror ───────────────────────────────────────────────────
    /// Step of the command currently running in the orchestrator.
    action: ActionState,
    /// Latest rendering instructions from the orchestrator.
    view: SessionView,
    /// A command was sent and its view has not arrived yet.
    awaiting_view: bool,

    // ── Channels ─────────────────────────────────────────────────────────
    command_tx: mpsc::Sender<SessionCommand>,
    event_rx: mpsc::Receiver<SessionEvent>,

    // ── Configuration ────────────────────────────────────────────────────
    config: AppConfig,
}

impl TutorApp {
    /// Create a new [`TutorApp`].
    ///
    /// * `command_tx`: sender end of the session command channel.
    /// * `event_rx`  : receiver end of the session event channel.
    /// * `config`    : loaded application configuration.
    pub fn new(
        command_tx: mpsc::Sender<SessionCommand>,
        event_rx: mpsc::Receiver<SessionEvent>,
        config: AppConfig,
    ) -> Self {
        Self {
            credential_input: String::new(),
            pending_credential: None,
            input_text: String::new(),
            action: ActionState::Idle,
            view: SessionView::default(),
            awaiting_view: false,
            command_tx,
            event_rx,
            config,
        }
    }

    // ── Channel plumbing ─────────────────────────────────────────────────

    fn send(&mut self, command: SessionCommand) -> bool {
        match self.command_tx.try_send(command) {
            Ok(()) => {
                self.awaiting_view = true;
                true
            }
            Err(e) => {
                log::warn!("ui: could not queue command: {e}");
                false
            }
        }
    }

    /// Record a credential edit.  Only the newest value is kept; it is sent
    /// once no other command is in flight.
    fn credential_edited(&mut self) {
        self.pending_credential = Some(self.credential_input.clone());
        self.flush_credential();
    }

    fn flush_credential(&mut self) {
        if self.awaiting_view {
            return;
        }
        if let Some(secret) = self.pending_credential.take() {
            if !self.send(SessionCommand::SetCredential(secret.clone())) {
                self.pending_credential = Some(secret);
            }
        }
    }

    /// Drain all pending session events (non-blocking).
    fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                SessionEvent::Progress(state) => self.action = state,
                SessionEvent::View(view) => {
                    // A view always ends its command, even if the final
                    // progress event was dropped.
                    self.view = view;
                    self.action = ActionState::Idle;
                    self.awaiting_view = false;
                }
            }
        }
        self.flush_credential();
    }

    fn is_busy(&self) -> bool {
        self.awaiting_view || self.action.is_busy()
    }

    // ── Sections ─────────────────────────────────────────────────────────

    fn draw_credential(&mut self, ui: &mut egui::Ui) {
        ui.label("OpenAI API 키를 입력하세요");
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.credential_input)
                .password(true)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.credential_edited();
        }
    }

    fn draw_input(&mut self, ui: &mut egui::Ui) {
        ui.label("번역할 한국어 또는 베트남어 텍스트를 입력하세요");
        ui.add(
            egui::TextEdit::multiline(&mut self.input_text)
                .desired_rows(7)
                .desired_width(f32::INFINITY),
        );
    }

    fn draw_actions(&mut self, ui: &mut egui::Ui) {
        let enabled = !self.is_busy();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(enabled, egui::Button::new("번역하기"))
                .clicked()
            {
                let input = self.input_text.clone();
                self.send(SessionCommand::Translate { input });
            }
            if ui
                .add_enabled(enabled, egui::Button::new("대화 기록 초기화"))
                .clicked()
            {
                self.send(SessionCommand::ResetLog);
            }
            if self.view.export_available
                && ui
                    .add_enabled(enabled, egui::Button::new("대화 기록 다운로드"))
                    .clicked()
            {
                self.send(SessionCommand::ExportLog);
            }

            if self.action.is_busy() {
                ui.add(egui::Spinner::new());
                ui.label(self.action.label());
            }
        });
    }

    fn draw_notice(ui: &mut egui::Ui, notice: &Notice) {
        let color = match notice {
            Notice::Info(_) => egui::Color32::from_rgb(40, 140, 80),
            Notice::Warning(_) => egui::Color32::from_rgb(200, 140, 0),
            Notice::Error(_) => egui::Color32::from_rgb(210, 60, 60),
        };
        ui.label(egui::RichText::new(notice.text()).color(color).strong());
    }

    fn draw_box(ui: &mut egui::Ui, fill: [u8; 3], text: &str, size: f32) {
        egui::Frame::new()
            .fill(rgb(fill))
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                // Plain label: model output is never interpreted as markup.
                ui.add(
                    egui::Label::new(egui::RichText::new(text).color(BOX_TEXT).size(size))
                        .selectable(true),
                );
            });
    }

    fn draw_result_block(ui: &mut egui::Ui, ctx: &egui::Context, block: &RenderBlock) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.heading(block.kind.heading());
            if block.kind == BlockKind::Translation && ui.small_button("복사").clicked() {
                ctx.copy_text(block.body.clone());
            }
        });
        Self::draw_box(ui, block.kind.fill(), &block.body, block.kind.text_size());
    }

    fn draw_history_entry(ui: &mut egui::Ui, entry: &RecordView) {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(format!("{}. 입력:", entry.number)).strong());
            ui.add(egui::Label::new(entry.input.as_str()).selectable(true));
        });
        Self::draw_box(ui, HISTORY_FILL, &entry.translation, 14.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("설명:").strong());
            ui.add(egui::Label::new(entry.explanation.as_str()).selectable(true));
        });
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("문법 오류 검사 및 문장 다듬기:").strong());
            ui.add(egui::Label::new(entry.grammar_notes.as_str()).selectable(true));
        });
        ui.separator();
    }
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for TutorApp {
    /// Called every frame by eframe.  Polls the event channel, then renders.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events();

        // Keep polling while the orchestrator is working.
        if self.is_busy() || self.pending_credential.is_some() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading(TITLE);
                    ui.add_space(8.0);

                    self.draw_credential(ui);
                    ui.add_space(8.0);

                    if !self.view.unlocked {
                        Self::draw_notice(
                            ui,
                            &Notice::Warning("API 키를 입력하세요.".into()),
                        );
                        return;
                    }

                    self.draw_input(ui);
                    self.draw_actions(ui);

                    if let Some(notice) = &self.view.notice {
                        Self::draw_notice(ui, notice);
                    }

                    for block in &self.view.current {
                        Self::draw_result_block(ui, ctx, block);
                    }

                    if !self.view.history.is_empty() {
                        ui.add_space(16.0);
                        ui.heading(egui::RichText::new("대화 기록").size(22.0));
                        ui.separator();
                        for entry in &self.view.history {
                            Self::draw_history_entry(ui, entry);
                        }
                    }
                });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!(
            "tutor window closing ({} record(s) discarded, model {})",
            self.view.history.len(),
            self.config.llm.model
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> (
        TutorApp,
        mpsc::Receiver<SessionCommand>,
        mpsc::Sender<SessionEvent>,
    ) {
        let (command_tx, command_rx) = mpsc::channel(8);
        let (event_tx, event_rx) = mpsc::channel(8);
        let app = TutorApp::new(command_tx, event_rx, AppConfig::default());
        (app, command_rx, event_tx)
    }

    #[test]
    fn starts_locked_and_idle() {
        let (app, _rx, _tx) = make_app();
        assert!(!app.view.unlocked);
        assert!(!app.is_busy());
    }

    #[test]
    fn sending_marks_busy_until_view_arrives() {
        let (mut app, mut command_rx, event_tx) = make_app();

        app.send(SessionCommand::ResetLog);
        assert!(app.is_busy());
        assert!(matches!(command_rx.try_recv(), Ok(SessionCommand::ResetLog)));

        event_tx
            .try_send(SessionEvent::View(SessionView {
                unlocked: true,
                ..SessionView::default()
            }))
            .unwrap();
        app.poll_events();

        assert!(!app.is_busy());
        assert!(app.view.unlocked);
    }

    #[test]
    fn progress_events_update_action_state() {
        let (mut app, _rx, event_tx) = make_app();

        event_tx
            .try_send(SessionEvent::Progress(ActionState::Explaining))
            .unwrap();
        app.poll_events();
        assert_eq!(app.action, ActionState::Explaining);
        assert!(app.is_busy());
    }

    fn unlocked_view() -> SessionEvent {
        SessionEvent::View(SessionView {
            unlocked: true,
            ..SessionView::default()
        })
    }

    #[test]
    fn view_ends_the_action_without_final_progress() {
        let (mut app, _rx, event_tx) = make_app();
        app.send(SessionCommand::Translate {
            input: "안녕".into(),
        });

        event_tx
            .try_send(SessionEvent::Progress(ActionState::CheckingGrammar))
            .unwrap();
        event_tx.try_send(unlocked_view()).unwrap();
        app.poll_events();

        assert_eq!(app.action, ActionState::Idle);
        assert!(!app.is_busy());
    }

    #[test]
    fn credential_typed_while_busy_is_sent_in_full_afterwards() {
        let (mut app, mut command_rx, event_tx) = make_app();
        app.send(SessionCommand::Translate {
            input: "안녕".into(),
        });

        // More edits than the command channel can hold.
        for c in "sk-abcdefghijklmnopqrstuvwxyz".chars() {
            app.credential_input.push(c);
            app.credential_edited();
        }

        assert!(matches!(
            command_rx.try_recv(),
            Ok(SessionCommand::Translate { .. })
        ));
        assert!(command_rx.try_recv().is_err());

        event_tx.try_send(unlocked_view()).unwrap();
        app.poll_events();

        let mut last = None;
        while let Ok(command) = command_rx.try_recv() {
            if let SessionCommand::SetCredential(secret) = command {
                last = Some(secret);
            }
        }
        assert_eq!(last.as_deref(), Some(app.credential_input.as_str()));
        assert!(app.pending_credential.is_none());
    }

    #[test]
    fn idle_credential_edit_is_sent_immediately() {
        let (mut app, mut command_rx, _tx) = make_app();

        app.credential_input = "sk-a".into();
        app.credential_edited();

        match command_rx.try_recv() {
            Ok(SessionCommand::SetCredential(secret)) => assert_eq!(secret, "sk-a"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(app.pending_credential.is_none());
    }
}
