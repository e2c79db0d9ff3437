//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// committed_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// committed_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Unknown color names resolve to `fallback` with a warning.
    pub fn to_color(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => Color::from_name(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using {}", name, fallback.name());
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Returns true if the spec resolves without falling back.
    pub fn is_known(&self) -> bool {
        match self {
            ColorSpec::Name(name) => Color::from_name(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED};

    #[test]
    fn named_colors_resolve_case_insensitively() {
        assert_eq!(ColorSpec::from("Red").to_color(BLACK), RED);
        assert_eq!(ColorSpec::from("BLACK").to_color(RED), BLACK);
    }

    #[test]
    fn unknown_name_uses_fallback() {
        let spec = ColorSpec::from("mauve");
        assert!(!spec.is_known());
        assert_eq!(spec.to_color(BLACK), BLACK);
    }

    #[test]
    fn rgb_triples_are_scaled() {
        let color = ColorSpec::Rgb([255, 0, 0]).to_color(BLACK);
        assert_eq!(color, RED);
    }

    #[test]
    fn parses_both_forms_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            a: ColorSpec,
            b: ColorSpec,
        }
        let parsed: Wrapper = toml::from_str("a = \"blue\"\nb = [0, 255, 0]").unwrap();
        assert_eq!(parsed.a, ColorSpec::from("blue"));
        assert_eq!(parsed.b, ColorSpec::Rgb([0, 255, 0]));
    }
}
