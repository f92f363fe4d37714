//! Rendering instructions for records.
//!
//! These types describe *what* the UI draws (headings, bodies, tints) without
//! touching egui, so they can be asserted on in tests.  Bodies are plain text;
//! the UI draws them as labels and never interprets them as markup.

use crate::session::{InteractionRecord, SessionLog};

/// Shown in place of a derived field that has no value.
pub const PLACEHOLDER: &str = "없음";

// ---------------------------------------------------------------------------
// BlockKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Translation,
    Explanation,
    GrammarNotes,
}

impl BlockKind {
    pub fn heading(self) -> &'static str {
        match self {
            BlockKind::Translation => "번역된 결과:",
            BlockKind::Explanation => "추가 정보:",
            BlockKind::GrammarNotes => "문법 오류 검사 및 문장 다듬기:",
        }
    }

    /// Background tint as RGB.
    pub fn fill(self) -> [u8; 3] {
        match self {
            BlockKind::Translation => [0xF0, 0xF0, 0xF0],
            BlockKind::Explanation => [0xE9, 0xF7, 0xEF],
            BlockKind::GrammarNotes => [0xFF, 0xEF, 0xD5],
        }
    }

    /// Body text size in points; the translation is emphasised.
    pub fn text_size(self) -> f32 {
        match self {
            BlockKind::Translation => 20.0,
            _ => 14.0,
        }
    }
}

/// Tint behind each history entry's translation.
pub const HISTORY_FILL: [u8; 3] = [0xF9, 0xF9, 0xF9];

// ---------------------------------------------------------------------------
// RenderBlock / RecordView
// ---------------------------------------------------------------------------

/// One styled result box.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBlock {
    pub kind: BlockKind,
    pub body: String,
}

/// A record with placeholders substituted, ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    /// 1-based position in the log.
    pub number: usize,
    pub input: String,
    pub translation: String,
    pub explanation: String,
    pub grammar_notes: String,
}

fn or_placeholder(field: &Option<String>) -> String {
    field.as_deref().unwrap_or(PLACEHOLDER).to_string()
}

/// Display form of a single record.
pub fn render(record: &InteractionRecord, number: usize) -> RecordView {
    RecordView {
        number,
        input: record.input.clone(),
        translation: record.translation.clone(),
        explanation: or_placeholder(&record.explanation),
        grammar_notes: or_placeholder(&record.grammar_notes),
    }
}

/// The three result boxes for the action that just finished.
pub fn result_blocks(record: &InteractionRecord) -> Vec<RenderBlock> {
    vec![
        RenderBlock {
            kind: BlockKind::Translation,
            body: record.translation.clone(),
        },
        RenderBlock {
            kind: BlockKind::Explanation,
            body: or_placeholder(&record.explanation),
        },
        RenderBlock {
            kind: BlockKind::GrammarNotes,
            body: or_placeholder(&record.grammar_notes),
        },
    ]
}

/// Every record in log order, numbered from 1.
pub fn render_history(log: &SessionLog) -> Vec<RecordView> {
    log.all()
        .iter()
        .enumerate()
        .map(|(idx, rec)| render(rec, idx + 1))
        .collect()
}
