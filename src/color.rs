use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::DegreeLevel;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.55, 0.42);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Degree badge colours
// ---------------------------------------------------------------------------

/// Badge colour per degree level.
#[derive(Debug, Clone)]
pub struct DegreePalette {
    mapping: BTreeMap<DegreeLevel, Color32>,
    default_color: Color32,
}

impl Default for DegreePalette {
    fn default() -> Self {
        // `Other` stays on the neutral default.
        let levels = [DegreeLevel::Bachelor, DegreeLevel::Master, DegreeLevel::Doctorate];
        let mapping = levels
            .into_iter()
            .zip(generate_palette(levels.len()))
            .collect();

        DegreePalette {
            mapping,
            default_color: Color32::GRAY,
        }
    }
}

impl DegreePalette {
    pub fn color_for(&self, level: DegreeLevel) -> Color32 {
        self.mapping
            .get(&level)
            .copied()
            .unwrap_or(self.default_color)
    }
}

/// Accent for an indicator card: muted when the value is unavailable.
pub fn card_accent(available: bool) -> Color32 {
    if available {
        Color32::from_rgb(0x1f, 0x6f, 0x5c)
    } else {
        Color32::from_gray(140)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(3).len(), 3);
    }

    #[test]
    fn degree_levels_get_distinct_colours() {
        let palette = DegreePalette::default();
        let colours: Vec<Color32> = [
            DegreeLevel::Bachelor,
            DegreeLevel::Master,
            DegreeLevel::Doctorate,
            DegreeLevel::Other,
        ]
        .into_iter()
        .map(|level| palette.color_for(level))
            .collect();
        assert_ne!(colours[0], colours[1]);
        assert_ne!(colours[1], colours[2]);
        assert_ne!(colours[0], colours[2]);
        assert_eq!(colours[3], Color32::GRAY);
    }
}
