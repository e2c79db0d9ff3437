use crate::draw::Surface;
use crate::history::History;
use crate::input::events::Key;

use super::{Building, DrawingState, PolylineMachine};

impl PolylineMachine {
    /// Processes a key press.
    ///
    /// - Escape (OnePoint, ManyPoints): abandon the transient polyline
    /// - Return (ManyPoints): commit the placed points
    /// - Backspace (ManyPoints): remove the last placed point, falling back
    ///   to OnePoint when only one would remain
    ///
    /// Every other key, and these keys in other states, is ignored.
    pub(super) fn on_key(
        &mut self,
        key: Key,
        surface: &mut dyn Surface,
        history: &mut History,
    ) -> bool {
        match (key, self.state) {
            (Key::Escape, DrawingState::OnePoint(building))
            | (Key::Escape, DrawingState::ManyPoints(building)) => {
                self.abandon(building, surface);
                true
            }
            (Key::Return, DrawingState::ManyPoints(building)) => {
                self.commit(building, surface, history);
                true
            }
            (Key::Backspace, DrawingState::ManyPoints(building)) => {
                self.remove_last_point(building, surface);
                true
            }
            _ => false,
        }
    }

    fn remove_last_point(&mut self, building: Building, surface: &mut dyn Surface) {
        if !self.edit_transient(building, surface, |line| {
            line.remove_last_real();
        }) {
            return;
        }

        let trimmed = Building {
            real_points: building.real_points - 1,
            ..building
        };
        // Guard on the count before removal: more than two stays in ManyPoints.
        self.state = if building.real_points > 2 {
            DrawingState::ManyPoints(trimmed)
        } else {
            DrawingState::OnePoint(trimmed)
        };
    }
}
