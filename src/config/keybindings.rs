//! Keybinding configuration types and parsing.
//!
//! Editor-level shortcuts (undo, redo, recoloring the selection) are
//! configurable. Unmodified keys that match no binding fall through to the
//! polyline state machine.

use crate::input::{Key, Modifiers};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // History
    Undo,
    Redo,

    // Color of the selected polyline
    SetColorRed,
    SetColorGreen,
    SetColorBlue,
    SetColorBlack,
}

/// Errors raised while parsing keybindings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyBindingError {
    #[error("empty keybinding string")]
    Empty,

    #[error("no key specified in '{0}'")]
    MissingKey(String),

    #[error("duplicate keybinding '{binding}' assigned to both {first:?} and {second:?}")]
    Duplicate {
        binding: String,
        first: Action,
        second: Action,
    },
}

/// A single keybinding: a key with optional modifiers.
///
/// Single-character keys are stored lowercase and named keys in their
/// canonical spelling, so "Ctrl+Z" and "ctrl+z" are the same binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+Z" or "Escape".
    /// Modifiers can appear in any order and spaces around '+' are allowed.
    pub fn parse(s: &str) -> Result<Self, KeyBindingError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeyBindingError::Empty);
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(KeyBindingError::MissingKey(s.to_string()));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]: the key is '+' itself
        let key = key_parts.join("+");
        let key = if key.is_empty() { "+".to_string() } else { key };

        Ok(Self {
            key: canonical_key_name(&key),
            ctrl,
            shift,
            alt,
        })
    }

    /// Builds the binding produced by pressing `key` with `modifiers` held.
    pub fn from_input(key: Key, modifiers: Modifiers) -> Option<Self> {
        Some(Self {
            key: canonical_key_name(&key.binding_name()?),
            ctrl: modifiers.ctrl,
            shift: modifiers.shift,
            alt: modifiers.alt,
        })
    }
}

fn canonical_key_name(key: &str) -> String {
    match Key::from_name(key) {
        Some(Key::Char(c)) => c.to_lowercase().collect(),
        Some(named) => named
            .binding_name()
            .unwrap_or_else(|| key.to_lowercase()),
        None => key.to_lowercase(),
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// redo = ["Ctrl+Y", "Ctrl+Shift+Z"]
/// set_color_red = ["Ctrl+R"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,

    #[serde(default = "default_set_color_red")]
    pub set_color_red: Vec<String>,

    #[serde(default = "default_set_color_green")]
    pub set_color_green: Vec<String>,

    #[serde(default = "default_set_color_blue")]
    pub set_color_blue: Vec<String>,

    #[serde(default = "default_set_color_black")]
    pub set_color_black: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            undo: default_undo(),
            redo: default_redo(),
            set_color_red: default_set_color_red(),
            set_color_green: default_set_color_green(),
            set_color_blue: default_set_color_blue(),
            set_color_black: default_set_color_black(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, KeyBindingError> {
        let mut map = HashMap::new();

        let groups = [
            (&self.undo, Action::Undo),
            (&self.redo, Action::Redo),
            (&self.set_color_red, Action::SetColorRed),
            (&self.set_color_green, Action::SetColorGreen),
            (&self.set_color_blue, Action::SetColorBlue),
            (&self.set_color_black, Action::SetColorBlack),
        ];

        for (bindings, action) in groups {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing) = map.insert(binding, action) {
                    return Err(KeyBindingError::Duplicate {
                        binding: binding_str.clone(),
                        first: existing,
                        second: action,
                    });
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Y".to_string(), "Ctrl+Shift+Z".to_string()]
}

fn default_set_color_red() -> Vec<String> {
    vec!["Ctrl+R".to_string()]
}

fn default_set_color_green() -> Vec<String> {
    vec!["Ctrl+G".to_string()]
}

fn default_set_color_blue() -> Vec<String> {
    vec!["Ctrl+B".to_string()]
}

fn default_set_color_black() -> Vec<String> {
    vec!["Ctrl+K".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_ctrl_key() {
        let binding = KeyBinding::parse("Ctrl+Z").unwrap();
        assert_eq!(binding.key, "z");
        assert!(binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_all_modifiers() {
        let binding = KeyBinding::parse("Ctrl+Shift+Alt+A").unwrap();
        assert_eq!(binding.key, "a");
        assert!(binding.ctrl && binding.shift && binding.alt);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            KeyBinding::parse("ctrl+shift+z").unwrap(),
            KeyBinding::parse("Ctrl+Shift+Z").unwrap()
        );
        assert_eq!(
            KeyBinding::parse("enter").unwrap(),
            KeyBinding::parse("Return").unwrap()
        );
    }

    #[test]
    fn test_parse_with_spaces() {
        let binding = KeyBinding::parse("Ctrl + Shift + Z").unwrap();
        assert_eq!(binding.key, "z");
        assert!(binding.ctrl);
        assert!(binding.shift);
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(KeyBinding::parse("  "), Err(KeyBindingError::Empty));
        assert_eq!(
            KeyBinding::parse("Ctrl+Shift"),
            Err(KeyBindingError::MissingKey("Ctrl+Shift".to_string()))
        );
    }

    #[test]
    fn test_from_input() {
        let binding = KeyBinding::parse("Ctrl+Shift+Z").unwrap();
        let ctrl_shift = Modifiers {
            ctrl: true,
            shift: true,
            alt: false,
        };
        assert_eq!(KeyBinding::from_input(Key::Char('Z'), ctrl_shift), Some(binding.clone()));
        assert_eq!(KeyBinding::from_input(Key::Char('z'), ctrl_shift), Some(binding.clone()));
        assert_ne!(KeyBinding::from_input(Key::Char('Z'), Modifiers::ctrl()), Some(binding.clone()));
        assert_ne!(KeyBinding::from_input(Key::Char('Y'), ctrl_shift), Some(binding));
        assert_eq!(KeyBinding::from_input(Key::Unknown, ctrl_shift), None);
    }

    #[test]
    fn test_parse_modifier_order_independence() {
        assert_eq!(
            KeyBinding::parse("Ctrl+Alt+Shift+W").unwrap(),
            KeyBinding::parse("Shift+Alt+Ctrl+W").unwrap()
        );
    }

    #[test]
    fn test_build_action_map() {
        let map = KeybindingsConfig::default().build_action_map().unwrap();

        let ctrl_z = KeyBinding::parse("Ctrl+Z").unwrap();
        assert_eq!(map.get(&ctrl_z), Some(&Action::Undo));

        let ctrl_shift_z = KeyBinding::parse("Ctrl+Shift+Z").unwrap();
        assert_eq!(map.get(&ctrl_shift_z), Some(&Action::Redo));

        let escape = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&escape), None);
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let config = KeybindingsConfig {
            redo: vec!["Ctrl+Z".to_string()],
            ..KeybindingsConfig::default()
        };

        let err = config.build_action_map().unwrap_err();
        assert_eq!(
            err,
            KeyBindingError::Duplicate {
                binding: "Ctrl+Z".to_string(),
                first: Action::Undo,
                second: Action::Redo,
            }
        );
        assert!(err.to_string().contains("Ctrl+Z"));
    }

    #[test]
    fn test_duplicate_with_different_modifier_order() {
        let config = KeybindingsConfig {
            set_color_red: vec!["Ctrl+Shift+W".to_string()],
            set_color_blue: vec!["Shift+Ctrl+w".to_string()],
            ..KeybindingsConfig::default()
        };
        assert!(matches!(
            config.build_action_map(),
            Err(KeyBindingError::Duplicate { .. })
        ));
    }
}
