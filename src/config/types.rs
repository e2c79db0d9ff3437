//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::machine::DEFAULT_MAX_POINTS;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Polyline construction settings.
///
/// Controls how many points a polyline may hold and how it is stroked while
/// being built and after it is committed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Maximum real points per polyline; the click that reaches it commits
    /// (valid range: 3 - 100)
    #[serde(default = "default_max_points")]
    pub max_points: usize,

    /// Stroke color of the polyline under construction - a named color
    /// (red, green, blue, yellow, orange, pink, white, black) or an RGB array
    #[serde(default = "default_transient_color")]
    pub transient_color: ColorSpec,

    /// Stroke color given to a polyline when it is committed
    #[serde(default = "default_committed_color")]
    pub committed_color: ColorSpec,

    /// Stroke width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            max_points: default_max_points(),
            transient_color: default_transient_color(),
            committed_color: default_committed_color(),
            stroke_width: default_stroke_width(),
        }
    }
}

/// Selection emphasis and hit testing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SelectionConfig {
    /// Stroke width of the selected polyline (valid range: 0.5 - 50.0)
    #[serde(default = "default_selected_width")]
    pub selected_width: f64,

    /// Extra pick distance in pixels beyond half the stroke width
    /// (valid range: 0.0 - 50.0)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            selected_width: default_selected_width(),
            tolerance: default_tolerance(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum undo entries kept; 0 keeps everything
    #[serde(default)]
    pub max_depth: usize,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_max_points() -> usize {
    DEFAULT_MAX_POINTS
}

fn default_transient_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_committed_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_selected_width() -> f64 {
    4.0
}

fn default_tolerance() -> f64 {
    3.0
}
