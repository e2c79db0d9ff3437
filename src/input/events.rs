//! Abstract input signals consumed by the polyline state machine.

use std::fmt;

/// Generic key representation for cross-backend compatibility.
///
/// Backend implementations map their native key codes to these generic
/// key values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key (abandon the polyline under construction)
    Escape,
    /// Return/Enter key (commit the polyline under construction)
    Return,
    /// Backspace key (remove the last placed point)
    Backspace,
    /// Tab key
    Tab,
    /// Space bar
    Space,
    /// Delete key
    Delete,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Parses a key name as used in keybindings and event scripts.
    ///
    /// Named keys are case-insensitive ("Escape", "esc", "Return", "Enter",
    /// "Backspace", ...). Any other single character maps to [`Key::Char`].
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name.to_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "tab" => Key::Tab,
            "space" => Key::Space,
            "delete" | "del" => Key::Delete,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }

    /// Name used when matching the key against configured keybindings.
    pub fn binding_name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Tab => Some("Tab".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Delete => Some("Delete".to_string()),
            Key::Unknown => None,
        }
    }
}

/// Input signals delivered to the state machine.
///
/// Pointer signals carry no payload: the position is read from the surface
/// when the signal is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Primary button click on the canvas
    Click,
    /// Pointer motion over the canvas
    Move,
    /// Key press
    Key(Key),
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Click => f.write_str("click"),
            Signal::Move => f.write_str("move"),
            Signal::Key(key) => match key.binding_name() {
                Some(name) => write!(f, "key {name}"),
                None => f.write_str("key ?"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_parse_case_insensitively() {
        assert_eq!(Key::from_name("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_name("ENTER"), Some(Key::Return));
        assert_eq!(Key::from_name("return"), Some(Key::Return));
        assert_eq!(Key::from_name("Backspace"), Some(Key::Backspace));
    }

    #[test]
    fn single_characters_become_char_keys() {
        assert_eq!(Key::from_name("z"), Some(Key::Char('z')));
        assert_eq!(Key::from_name("+"), Some(Key::Char('+')));
        assert_eq!(Key::from_name("nope"), None);
        assert_eq!(Key::from_name(""), None);
    }

    #[test]
    fn signals_display_for_diagnostics() {
        assert_eq!(Signal::Click.to_string(), "click");
        assert_eq!(Signal::Key(Key::Return).to_string(), "key Return");
        assert_eq!(Signal::Key(Key::Unknown).to_string(), "key ?");
    }
}
