//! Flat-text export of the session log.
//!
//! Each record becomes one block:
//!
//! ```text
//! 대화 1:
//! 입력: 안녕하세요
//! 번역: Xin chào
//! 설명: ...
//! 문법 오류 검사 및 문장 다듬기: ...
//!
//! --------------------------------------------------
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::render::PLACEHOLDER;
use crate::session::SessionLog;

/// Fixed name of the downloaded document.
pub const EXPORT_FILE_NAME: &str = "translation_history.txt";

const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("there is no history to export")]
    EmptyLog,

    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Serialise `log` in display order.  An empty log yields an empty string.
pub fn export_text(log: &SessionLog) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();

    for (idx, rec) in log.all().iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "대화 {}:\n입력: {}\n번역: {}\n설명: {}\n문법 오류 검사 및 문장 다듬기: {}\n\n{}\n",
            idx + 1,
            rec.input,
            rec.translation,
            rec.explanation.as_deref().unwrap_or(PLACEHOLDER),
            rec.grammar_notes.as_deref().unwrap_or(PLACEHOLDER),
            separator,
        );
    }

    out
}

/// Write the export document into `dir`, replacing any previous file.
///
/// Returns the full path written.  Refuses an empty log.
pub async fn write_export(history: &SessionLog, dir: &Path) -> Result<PathBuf, ExportError> {
    if history.is_empty() {
        return Err(ExportError::EmptyLog);
    }

    let path = dir.join(EXPORT_FILE_NAME);
    let io_err = |source| ExportError::Io {
        path: path.clone(),
        source,
    };

    tokio::fs::create_dir_all(dir).await.map_err(io_err)?;
    tokio::fs::write(&path, export_text(history))
        .await
        .map_err(io_err)?;

    log::info!("exported {} record(s) to {}", history.len(), path.display());
    Ok(path)
}
