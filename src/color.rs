use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::schema;
use crate::data::stats::Breakdown;

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
            let hsl = Hsl::new(hue, 0.75, 0.55);
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
// Color mapping: answer label → Color32
// ---------------------------------------------------------------------------

/// Maps the answers of one chart to distinct colours.
///
/// "Sim" and "Não" always get fixed green / red so every Yes/No chart reads
/// the same way; other answers share the evenly spaced palette.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new<'a>(answers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut mapping = BTreeMap::new();
        let mut others = Vec::new();
        for answer in answers {
            match answer {
                schema::YES => {
                    mapping.insert(answer.to_string(), Color32::from_rgb(76, 175, 80));
                }
                schema::NO => {
                    mapping.insert(answer.to_string(), Color32::from_rgb(229, 57, 53));
                }
                other => others.push(other),
            }
        }

        let palette = generate_palette(others.len());
        mapping.extend(
            others
                .into_iter()
                .zip(palette)
                .map(|(answer, c)| (answer.to_string(), c)),
        );

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn for_breakdown(breakdown: &Breakdown) -> Self {
        Self::new(breakdown.groups.iter().map(|g| g.answer.as_str()))
    }

    /// Look up the colour for a given answer.
    pub fn color_for(&self, answer: &str) -> Color32 {
        self.mapping
            .get(answer)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(5);
        assert_eq!(p.len(), 5);
        assert_ne!(p[0], p[1]);
    }

    #[test]
    fn yes_and_no_keep_fixed_colours() {
        let a = ColorMap::new(["Sim", "Não"]);
        let b = ColorMap::new(["Não", "Talvez", "Sim"]);
        assert_eq!(a.color_for("Sim"), b.color_for("Sim"));
        assert_eq!(a.color_for("Não"), b.color_for("Não"));
        assert_ne!(b.color_for("Talvez"), Color32::GRAY);
        assert_eq!(a.color_for("Talvez"), Color32::GRAY);
    }
}
