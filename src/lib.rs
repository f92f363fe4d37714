//! Korean ↔ Vietnamese translation, vocabulary and grammar helper.
//!
//! The crate is split the same way the running program is wired:
//!
//! * [`config`]  : `settings.toml` persistence and platform paths.
//! * [`llm`]     : OpenAI-compatible completion client and fixed instructions.
//! * [`session`] : credential gate and the in-memory interaction log.
//! * [`present`] : render blocks for the UI and the flat-text export.
//! * [`pipeline`]: command dispatcher and the async orchestrator task.
//! * [`app`]     : the egui/eframe front end.

pub mod app;
pub mod config;
pub mod fonts;
pub mod llm;
pub mod pipeline;
pub mod present;
pub mod session;
