//! Language service module.
//!
//! This module provides:
//! * [`LanguageService`]: async trait implemented by completion backends.
//! * [`ApiClient`]: OpenAI-compatible REST backend.
//! * [`Task`]: the three fixed steps (translate, explain, grammar check).
//! * [`LlmError`]: error variants for completion calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use ko_vi_tutor::config::AppConfig;
//! use ko_vi_tutor::llm::{ApiClient, LanguageService, Task};
//! use ko_vi_tutor::session::Credential;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let client = ApiClient::from_config(&config.llm);
//!     let key = Credential::new("sk-...").unwrap();
//!
//!     let translation = client
//!         .complete(&key, Task::Translate.system_instruction(), "안녕하세요")
//!         .await
//!         .unwrap();
//!     println!("{translation}");
//! }
//! ```

pub mod client;
pub mod prompt;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{parse_completion, ApiClient, LanguageService, LlmError};
pub use prompt::Task;
