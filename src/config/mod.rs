//! Configuration file support for polyscribe.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/polyscribe/config.toml`. Settings include polyline limits and
//! styling, selection emphasis, undo history depth and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeyBindingError, KeybindingsConfig};
pub use types::{DrawingConfig, HistoryConfig, SelectionConfig};

use crate::draw::{BLACK, RED};
use crate::input::MachineSettings;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_POINTS_RANGE: (usize, usize) = (crate::input::machine::MIN_MAX_POINTS, 100);
const WIDTH_RANGE: (f64, f64) = (0.5, 50.0);
const TOLERANCE_RANGE: (f64, f64) = (0.0, 50.0);

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// max_points = 10
/// transient_color = "red"
/// committed_color = "black"
/// stroke_width = 2.0
///
/// [selection]
/// selected_width = 4.0
/// tolerance = 3.0
///
/// [history]
/// max_depth = 0
///
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// redo = ["Ctrl+Y", "Ctrl+Shift+Z"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Polyline limits and stroke styling
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Selection emphasis and hit testing
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Undo history settings
    #[serde(default)]
    pub history: HistoryConfig,

    /// Keyboard shortcuts for editor actions
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `drawing.max_points`: 3 - 100
    /// - `drawing.stroke_width`, `selection.selected_width`: 0.5 - 50.0
    /// - `selection.tolerance`: 0.0 - 50.0
    pub fn validate_and_clamp(&mut self) {
        let (min, max) = MAX_POINTS_RANGE;
        if !(min..=max).contains(&self.drawing.max_points) {
            warn!(
                "Invalid max_points {}, clamping to {}-{} range",
                self.drawing.max_points, min, max
            );
            self.drawing.max_points = self.drawing.max_points.clamp(min, max);
        }

        let (min, max) = WIDTH_RANGE;
        if !(min..=max).contains(&self.drawing.stroke_width) {
            warn!(
                "Invalid stroke_width {:.1}, clamping to {:.1}-{:.1} range",
                self.drawing.stroke_width, min, max
            );
            self.drawing.stroke_width = clamp_f64(self.drawing.stroke_width, min, max);
        }

        if !(min..=max).contains(&self.selection.selected_width) {
            warn!(
                "Invalid selected_width {:.1}, clamping to {:.1}-{:.1} range",
                self.selection.selected_width, min, max
            );
            self.selection.selected_width = clamp_f64(self.selection.selected_width, min, max);
        }

        let (min, max) = TOLERANCE_RANGE;
        if !(min..=max).contains(&self.selection.tolerance) {
            warn!(
                "Invalid selection tolerance {:.1}, clamping to {:.1}-{:.1} range",
                self.selection.tolerance, min, max
            );
            self.selection.tolerance = clamp_f64(self.selection.tolerance, min, max);
        }

        // Unknown names fall back to the defaults when resolved; warn once here.
        for (field, spec) in [
            ("transient_color", &self.drawing.transient_color),
            ("committed_color", &self.drawing.committed_color),
        ] {
            if !spec.is_known() {
                warn!("Invalid {} {:?}, the default will be used", field, spec);
            }
        }
    }

    /// Settings for the polyline state machine derived from `[drawing]`.
    pub fn machine_settings(&self) -> MachineSettings {
        MachineSettings {
            max_points: self.drawing.max_points,
            transient_color: self.drawing.transient_color.to_color(RED),
            committed_color: self.drawing.committed_color.to_color(BLACK),
            stroke_width: self.drawing.stroke_width,
        }
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/polyscribe/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("polyscribe");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates the configuration file at `path`.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}

fn clamp_f64(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() { min } else { value.clamp(min, max) }
}
