use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

/// Key of the fallback face inside [`FontDefinitions::font_data`].
pub const FALLBACK_FONT_NAME: &str = "arabic-fallback";

/// System faces known to carry Arabic glyphs, tried in order.
const SYSTEM_FONTS: &[&str] = &[
    // Linux (Debian/Ubuntu, Arch, Fedora)
    "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\tahoma.ttf",
];

// ---------------------------------------------------------------------------
// Candidate discovery
// ---------------------------------------------------------------------------

/// Paths to try, the user-supplied one first.
pub fn font_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from))
        .collect()
}

/// Header tags of TrueType, OpenType and collection files.
const FONT_TAGS: [&[u8]; 4] = [&[0x00, 0x01, 0x00, 0x00], b"OTTO", b"true", b"ttcf"];

fn looks_like_font(bytes: &[u8]) -> bool {
    bytes.get(..4).is_some_and(|tag| FONT_TAGS.contains(&tag))
}

/// Read the first candidate that exists and holds font data.
pub fn read_first_font(candidates: &[PathBuf]) -> Option<(PathBuf, Vec<u8>)> {
    candidates.iter().find_map(|path| match std::fs::read(path) {
        Ok(bytes) if looks_like_font(&bytes) => Some((path.clone(), bytes)),
        Ok(_) => {
            log::warn!("Skipping {}: not a TrueType/OpenType font", path.display());
            None
        }
        Err(e) => {
            log::debug!("Font {} unavailable: {e}", path.display());
            None
        }
    })
}

// ---------------------------------------------------------------------------
// Installation
// ---------------------------------------------------------------------------

/// Append `bytes` as the last-resort face of both text families, so the
/// bundled fonts still draw Latin text and the fallback only fills gaps.
pub fn with_fallback(mut fonts: FontDefinitions, bytes: Vec<u8>) -> FontDefinitions {
    fonts.font_data.insert(
        FALLBACK_FONT_NAME.to_owned(),
        Arc::new(FontData::from_owned(bytes)),
    );
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FALLBACK_FONT_NAME.to_owned());
    }
    fonts
}

/// Install an Arabic-capable fallback face on `ctx`. Returns the file used.
pub fn install_fallback_font(ctx: &egui::Context, explicit: Option<&Path>) -> Option<PathBuf> {
    let Some((path, bytes)) = read_first_font(&font_candidates(explicit)) else {
        log::warn!("No Arabic-capable font found; pass --font to supply one");
        return None;
    };
    ctx.set_fonts(with_fallback(FontDefinitions::default(), bytes));
    log::info!("Using {} as fallback font", path.display());
    Some(path)
}
