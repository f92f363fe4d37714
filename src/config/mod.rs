//! Configuration module.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the completion
//! endpoint, the window and the export target, `AppPaths` for cross-platform
//! directories, and TOML persistence via `AppConfig::load` / `AppConfig::save`.
//!
//! The API credential is deliberately absent: it lives only in the session.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, ExportConfig, LlmConfig, UiConfig};
