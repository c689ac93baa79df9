use serde::{Serialize, Serializer};
use std::fmt;

use crate::complexity::class::ComplexityClass;

/// Stroke color for a class, stored as CSS HSL components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken {
    /// Degrees, 0..360.
    pub hue: u16,
    /// Percent, 0..=100.
    pub saturation: u8,
    /// Percent, 0..=100.
    pub lightness: u8,
}

impl ColorToken {
    pub const fn hsl(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Gray used for anything that is not one of the seven classes.
    pub const NEUTRAL: ColorToken = ColorToken::hsl(240, 5, 64);

    /// Convert to 8-bit RGB for raster backends.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let s = f64::from(self.saturation.min(100)) / 100.0;
        let l = f64::from(self.lightness.min(100)) / 100.0;
        let h = f64::from(self.hue % 360) / 60.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |c: f64| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r1), channel(g1), channel(b1))
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fixed stroke color per class, green for the cheapest through red for the
/// most explosive.
pub fn color_of(class: ComplexityClass) -> ColorToken {
    match class {
        ComplexityClass::Constant => ColorToken::hsl(142, 76, 36),     // green-600
        ComplexityClass::Logarithmic => ColorToken::hsl(217, 91, 60),  // blue-500
        ComplexityClass::Linear => ColorToken::hsl(48, 96, 53),        // yellow-500
        ComplexityClass::Linearithmic => ColorToken::hsl(25, 95, 53),  // orange-500
        ComplexityClass::Quadratic => ColorToken::hsl(20, 79, 45),     // orange-600
        ComplexityClass::Exponential => ColorToken::hsl(0, 84, 60),    // red-500
        ComplexityClass::Factorial => ColorToken::hsl(0, 72, 51),      // red-600
    }
}

/// Color for a raw label. Never fails: unknown labels get [`ColorToken::NEUTRAL`].
pub fn color_of_label(label: &str) -> ColorToken {
    ComplexityClass::from_label(label)
        .map(color_of)
        .unwrap_or(ColorToken::NEUTRAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(color_of(ComplexityClass::Constant).to_string(), "hsl(142, 76%, 36%)");
        assert_eq!(color_of(ComplexityClass::Exponential).to_string(), "hsl(0, 84%, 60%)");
        assert_eq!(ColorToken::NEUTRAL.to_string(), "hsl(240, 5%, 64%)");
    }

    #[test]
    fn test_unknown_label_is_neutral() {
        assert_eq!(color_of_label("bogus"), ColorToken::NEUTRAL);
        assert_eq!(color_of_label(""), ColorToken::NEUTRAL);
        assert_eq!(color_of_label("O(n!)"), color_of(ComplexityClass::Factorial));
    }

    #[test]
    fn test_colors_are_distinct() {
        let mut seen: Vec<ColorToken> = ComplexityClass::ALL.iter().map(|c| color_of(*c)).collect();
        seen.push(ColorToken::NEUTRAL);
        for (i, a) in seen.iter().enumerate() {
            for b in &seen[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_to_rgb_anchors() {
        assert_eq!(ColorToken::hsl(0, 100, 50).to_rgb(), (255, 0, 0));
        assert_eq!(ColorToken::hsl(120, 100, 50).to_rgb(), (0, 255, 0));
        assert_eq!(ColorToken::hsl(240, 100, 50).to_rgb(), (0, 0, 255));
        assert_eq!(ColorToken::hsl(0, 0, 100).to_rgb(), (255, 255, 255));
        assert_eq!(ColorToken::hsl(0, 0, 0).to_rgb(), (0, 0, 0));
        assert_eq!(ColorToken::NEUTRAL.to_rgb(), (159, 159, 168));
    }

    #[test]
    fn test_serializes_as_css() {
        let json = serde_json::to_string(&color_of(ComplexityClass::Linear)).unwrap();
        assert_eq!(json, "\"hsl(48, 96%, 53%)\"");
    }
}
