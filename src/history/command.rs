//! Reversible commands over the drawing surface.

use crate::draw::{Color, Layer, Polyline, ShapeId, Surface};
use log::{debug, warn};

/// A self-contained, reversible unit of surface mutation.
///
/// Each variant carries exactly what it needs to apply and to reverse its
/// effect. `undo` after `execute` restores the affected shape and layer to
/// their pre-execute state; `execute` after `undo` restores the
/// post-execute state.
#[derive(Debug, Clone)]
pub enum Command {
    AddShape(AddShape),
    ChangeColor(ChangeColor),
}

impl Command {
    /// Builds a command placing `shape` on `layer` under `id`.
    pub fn add_shape(id: ShapeId, shape: Polyline, layer: Layer) -> Self {
        Command::AddShape(AddShape::new(id, shape, layer))
    }

    /// Builds a recolor command, capturing the shape's current color now.
    pub fn change_color(surface: &dyn Surface, id: ShapeId, new_color: Color) -> Self {
        Command::ChangeColor(ChangeColor::new(surface, id, new_color))
    }

    /// Applies the command to the surface.
    pub fn execute(&mut self, surface: &mut dyn Surface) {
        match self {
            Command::AddShape(cmd) => cmd.execute(surface),
            Command::ChangeColor(cmd) => cmd.execute(surface),
        }
    }

    /// Reverses a previous [`execute`](Self::execute).
    pub fn undo(&mut self, surface: &mut dyn Surface) {
        match self {
            Command::AddShape(cmd) => cmd.undo(surface),
            Command::ChangeColor(cmd) => cmd.undo(surface),
        }
    }

    /// Human-readable description for logs and UI (e.g. "Undo: add polyline #3").
    pub fn description(&self) -> String {
        match self {
            Command::AddShape(cmd) => format!("add polyline {}", cmd.id),
            Command::ChangeColor(cmd) => {
                format!("change color of {} to {}", cmd.id, cmd.new_color.name())
            }
        }
    }
}

/// Inserts a shape into a layer; reversal takes it back out.
///
/// While the shape is not on the surface the command owns it, so a redo
/// re-inserts exactly what the undo removed.
#[derive(Debug, Clone)]
pub struct AddShape {
    id: ShapeId,
    layer: Layer,
    detached: Option<Polyline>,
}

impl AddShape {
    pub fn new(id: ShapeId, shape: Polyline, layer: Layer) -> Self {
        Self {
            id,
            layer,
            detached: Some(shape),
        }
    }

    fn execute(&mut self, surface: &mut dyn Surface) {
        let Some(shape) = self.detached.take() else {
            warn!("Add {}: shape already on the {} layer", self.id, self.layer);
            return;
        };
        surface.add_shape(self.layer, self.id, shape);
        surface.request_repaint(self.layer);
        debug!("Added {} to {} layer", self.id, self.layer);
    }

    fn undo(&mut self, surface: &mut dyn Surface) {
        match surface.remove_shape(self.layer, self.id) {
            Some(shape) => {
                self.detached = Some(shape);
                surface.request_repaint(self.layer);
                debug!("Removed {} from {} layer", self.id, self.layer);
            }
            None => warn!("Undo add {}: shape not found on {} layer", self.id, self.layer),
        }
    }
}

/// Changes a shape's stroke color.
///
/// The previous color is captured when the command is built, not when it
/// runs, so every redo/undo pair toggles between the same two colors.
#[derive(Debug, Clone)]
pub struct ChangeColor {
    id: ShapeId,
    new_color: Color,
    old_color: Option<Color>,
}

impl ChangeColor {
    pub fn new(surface: &dyn Surface, id: ShapeId, new_color: Color) -> Self {
        let old_color = surface.shape(id).map(|shape| shape.color);
        if old_color.is_none() {
            warn!("Change color: {id} is not on the surface, command will be a no-op");
        }
        Self {
            id,
            new_color,
            old_color,
        }
    }

    /// Color restored by undo; `None` when the shape was absent at construction.
    pub fn old_color(&self) -> Option<Color> {
        self.old_color
    }

    fn execute(&mut self, surface: &mut dyn Surface) {
        if self.old_color.is_some() {
            self.paint(surface, self.new_color);
        }
    }

    fn undo(&mut self, surface: &mut dyn Surface) {
        if let Some(old_color) = self.old_color {
            self.paint(surface, old_color);
        }
    }

    fn paint(&self, surface: &mut dyn Surface, color: Color) {
        let Some(shape) = surface.shape_mut(self.id) else {
            warn!("Change color: {} is no longer on the surface", self.id);
            return;
        };
        shape.color = color;
        debug!("Set color of {} to {}", self.id, color.name());
        if let Some(layer) = surface.layer_of(self.id) {
            surface.request_repaint(layer);
        }
    }
}
