//! Hangul-capable font installation.
//!
//! egui's bundled fonts cover Latin (so Vietnamese diacritics render) but not
//! Hangul.  At startup we look for a font with Korean glyphs and register it
//! as a fallback after the default fonts for both families.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui;

use crate::config::UiConfig;

const FONT_NAME: &str = "hangul-fallback";

/// Well-known system fonts with Hangul coverage, probed in order.
const SYSTEM_CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\malgun.ttf",
    "C:\\Windows\\Fonts\\gulim.ttc",
    // macOS
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/nanum/NanumGothic.ttf",
];

/// Pick the font file to load: the configured one if it exists, else the
/// first existing entry of `candidates`.
pub fn find_font(configured: Option<&Path>, candidates: &[&str]) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        log::warn!("configured font {} not found, probing system fonts", path.display());
    }

    candidates
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Load a Hangul font into `ctx`.  Returns `false` when none could be loaded;
/// the app still runs, Korean text just shows as boxes.
pub fn install(ctx: &egui::Context, ui: &UiConfig) -> bool {
    let Some(path) = find_font(ui.font_path.as_deref(), SYSTEM_CANDIDATES) else {
        log::warn!("no Hangul font found; set [ui] font_path in settings.toml");
        return false;
    };

    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            log::warn!("cannot read font {}: {e}", path.display());
            return false;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);

    log::info!("Hangul font loaded: {}", path.display());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn configured_font_wins() {
        let dir = tempdir().unwrap();
        let configured = dir.path().join("mine.ttf");
        let other = dir.path().join("other.ttf");
        std::fs::write(&configured, b"x").unwrap();
        std::fs::write(&other, b"x").unwrap();

        let other_str = other.to_str().unwrap();
        let found = find_font(Some(configured.as_path()), &[other_str]);
        assert_eq!(found, Some(configured));
    }

    #[test]
    fn missing_configured_font_falls_back_to_candidates() {
        let dir = tempdir().unwrap();
        let present = dir.path().join("present.ttf");
        std::fs::write(&present, b"x").unwrap();

        let missing = dir.path().join("missing.ttf");
        let absent = dir.path().join("absent.ttf");
        let found = find_font(
            Some(missing.as_path()),
            &[absent.to_str().unwrap(), present.to_str().unwrap()],
        );
        assert_eq!(found, Some(present));
    }

    #[test]
    fn nothing_found_is_none() {
        let dir = tempdir().unwrap();
        let absent = dir.path().join("absent.ttf");
        assert_eq!(find_font(None, &[absent.to_str().unwrap()]), None);
    }
}
