//! Where the tutor reads settings from and writes exports to.
//!
//! `settings.toml` lives in the platform config dir under `ko-vi-tutor/`
//! (`%APPDATA%`, `~/Library/Application Support`, `~/.config`).  The history
//! export goes to the user's Downloads folder unless `[export] directory`
//! overrides it.  Either root falls back to the working directory when the
//! platform has none.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "ko-vi-tutor";
const SETTINGS_FILE: &str = "settings.toml";

/// Resolved locations for one run of the app.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Default directory the history export is written to.
    pub download_dir: PathBuf,
}

impl AppPaths {
    /// Resolve against the platform directories from `dirs`.
    pub fn new() -> Self {
        let here = || PathBuf::from(".");
        Self::under(
            &dirs::config_dir().unwrap_or_else(here),
            dirs::download_dir().unwrap_or_else(here),
        )
    }

    /// Lay the app out beneath explicit roots.
    pub fn under(config_root: &Path, download_dir: PathBuf) -> Self {
        Self {
            settings_file: config_root.join(APP_DIR).join(SETTINGS_FILE),
            download_dir,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
