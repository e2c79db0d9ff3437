//! Keyboard modifier state.

/// Keyboard modifier state.
///
/// Tracks which modifier keys (Shift, Ctrl, Alt) were held when a key was
/// pressed. Used to match keyboard shortcuts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub const fn new() -> Self {
        Self {
            shift: false,
            ctrl: false,
            alt: false,
        }
    }

    /// Only Ctrl held.
    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::new()
        }
    }

    /// Returns true when no modifier is held.
    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt)
    }
}
