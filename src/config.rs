use std::path::PathBuf;

use clap::Parser;

use crate::indicators::Locale;

/// Initial window size in points.
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 820.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 480.0];

pub const DEFAULT_DATA_PATH: &str = "data/programs.json";

/// Startup settings, from the command line or the environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "quality-dashboard",
    about = "Program quality-indicator dashboard"
)]
pub struct DashboardConfig {
    /// Program dataset (JSON array of programs).
    #[arg(long, env = "QUALITY_DASHBOARD_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Label language.
    #[arg(long, env = "QUALITY_DASHBOARD_LOCALE", value_enum, default_value_t = Locale::English)]
    pub locale: Locale,

    /// Font with Arabic glyphs, tried before the usual system locations.
    #[arg(long, env = "QUALITY_DASHBOARD_FONT")]
    pub font: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = DashboardConfig::try_parse_from([
            "quality-dashboard",
            "--data",
            "/tmp/other.json",
            "--locale",
            "ar",
        ])
        .unwrap();
        assert_eq!(config.data, PathBuf::from("/tmp/other.json"));
        assert_eq!(config.locale, Locale::Arabic);
    }

    #[test]
    fn font_path_is_optional() {
        let config = DashboardConfig::try_parse_from([
            "quality-dashboard",
            "--font",
            "/usr/share/fonts/Amiri-Regular.ttf",
        ])
        .unwrap();
        assert_eq!(
            config.font.as_deref(),
            Some(std::path::Path::new("/usr/share/fonts/Amiri-Regular.ttf"))
        );
        assert_eq!(config.data, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(DashboardConfig::try_parse_from(["quality-dashboard", "--locale", "fr"]).is_err());
    }
}
