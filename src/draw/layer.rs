//! Layer identifiers and the per-layer shape container.

use super::shape::{Polyline, ShapeId};
use std::fmt;

/// Named layers of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Committed shapes (owned by the surface, mutated through commands)
    Drawing,
    /// The polyline currently under construction
    Temporary,
}

impl Layer {
    pub const ALL: [Layer; 2] = [Layer::Drawing, Layer::Temporary];
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Drawing => f.write_str("drawing"),
            Layer::Temporary => f.write_str("temporary"),
        }
    }
}

/// Container for all shapes on one layer.
///
/// Shapes are kept in draw order (first = bottom, last = top).
#[derive(Debug, Clone, Default)]
pub struct Frame {
    shapes: Vec<(ShapeId, Polyline)>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub const fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a shape on top of existing shapes.
    ///
    /// An existing entry with the same id is replaced in place instead.
    pub fn insert(&mut self, id: ShapeId, shape: Polyline) {
        match self.position(id) {
            Some(index) => self.shapes[index].1 = shape,
            None => self.shapes.push((id, shape)),
        }
    }

    /// Removes and returns the shape with the given id, if present.
    pub fn remove(&mut self, id: ShapeId) -> Option<Polyline> {
        let index = self.position(id)?;
        Some(self.shapes.remove(index).1)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Polyline> {
        self.shapes
            .iter()
            .find(|(shape_id, _)| *shape_id == id)
            .map(|(_, shape)| shape)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Polyline> {
        self.shapes
            .iter_mut()
            .find(|(shape_id, _)| *shape_id == id)
            .map(|(_, shape)| shape)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.position(id).is_some()
    }

    /// Iterates shapes in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Polyline)> + '_ {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn position(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|(shape_id, _)| *shape_id == id)
    }
}
