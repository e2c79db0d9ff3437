use crate::draw::{Layer, Polyline, Surface};
use crate::history::History;

use super::{Building, DrawingState, PolylineMachine};

impl PolylineMachine {
    /// Processes a click at the current pointer position.
    ///
    /// # Behavior
    /// - Idle: starts a transient polyline (real point + provisional copy)
    /// - OnePoint: pins the provisional point, moving to ManyPoints
    /// - ManyPoints: pins the provisional point; the click that reaches
    ///   `max_points` also commits the polyline
    ///
    /// Returns true (clicks are listed for every state).
    pub(super) fn on_click(&mut self, surface: &mut dyn Surface, history: &mut History) -> bool {
        let pointer = surface.pointer_position();

        match self.state {
            DrawingState::Idle => {
                let id = surface.allocate_id();
                let line = Polyline::starting_at(
                    pointer,
                    self.settings.transient_color,
                    self.settings.stroke_width,
                );
                surface.add_shape(Layer::Temporary, id, line);
                surface.request_repaint(Layer::Temporary);
                self.state = DrawingState::OnePoint(Building { id, real_points: 1 });
            }
            DrawingState::OnePoint(building) => {
                if self.edit_transient(building, surface, |line| line.commit_provisional(pointer)) {
                    self.state = DrawingState::ManyPoints(Building {
                        real_points: 2,
                        ..building
                    });
                }
            }
            DrawingState::ManyPoints(building) => {
                if !self.edit_transient(building, surface, |line| line.commit_provisional(pointer)) {
                    return true;
                }
                let placed = Building {
                    real_points: building.real_points + 1,
                    ..building
                };
                if placed.real_points < self.settings.max_points {
                    self.state = DrawingState::ManyPoints(placed);
                } else {
                    self.commit(placed, surface, history);
                }
            }
        }
        true
    }

    /// Processes pointer motion: the provisional point follows the pointer.
    ///
    /// Ignored while idle; never changes the real-point count.
    pub(super) fn on_move(&mut self, surface: &mut dyn Surface) -> bool {
        let Some(building) = self.state.building() else {
            return false;
        };
        let pointer = surface.pointer_position();
        self.edit_transient(building, surface, |line| line.track_pointer(pointer));
        true
    }
}
