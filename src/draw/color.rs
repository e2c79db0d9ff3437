//! RGBA stroke color type and the named palette.


/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use polyscribe::draw::Color;
/// let red = Color::new(1.0, 0.0, 0.0, 1.0);
/// assert_eq!(red.name(), "Red");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from 0-255 channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Looks up a palette color by name (case-insensitive).
    ///
    /// Supported names: red, green, blue, yellow, orange, pink, white, black.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "red" => Some(RED),
            "green" => Some(GREEN),
            "blue" => Some(BLUE),
            "yellow" => Some(YELLOW),
            "orange" => Some(ORANGE),
            "pink" => Some(PINK),
            "white" => Some(WHITE),
            "black" => Some(BLACK),
            _ => None,
        }
    }

    /// Maps this color to its human-readable palette name.
    ///
    /// Uses approximate matching with a 0.1 tolerance per channel, so colors
    /// parsed from `[r, g, b]` triples still resolve to the nearest palette
    /// entry. Returns "Custom" when nothing matches.
    pub fn name(&self) -> &'static str {
        if self.r > 0.9 && self.g < 0.1 && self.b < 0.1 {
            "Red"
        } else if self.r < 0.1 && self.g > 0.9 && self.b < 0.1 {
            "Green"
        } else if self.r < 0.1 && self.g < 0.1 && self.b > 0.9 {
            "Blue"
        } else if self.r > 0.9 && self.g > 0.9 && self.b < 0.1 {
            "Yellow"
        } else if self.r > 0.9 && (0.4..=0.6).contains(&self.g) && self.b < 0.1 {
            "Orange"
        } else if self.r > 0.9 && self.g < 0.1 && self.b > 0.9 {
            "Pink"
        } else if self.r > 0.9 && self.g > 0.9 && self.b > 0.9 {
            "White"
        } else if self.r < 0.1 && self.g < 0.1 && self.b < 0.1 {
            "Black"
        } else {
            "Custom"
        }
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
