//! Presenter and exporter.
//!
//! * [`render`]: display forms of records and the three result boxes.
//! * [`export`]: the `translation_history.txt` document.

pub mod export;
pub mod render;

pub use export::{export_text, write_export, ExportError, EXPORT_FILE_NAME};
pub use render::{
    render, render_history, result_blocks, BlockKind, RecordView, RenderBlock, HISTORY_FILL,
    PLACEHOLDER,
};
