//! The drawing surface abstraction and its in-memory implementation.

use super::dirty::RepaintTracker;
use super::layer::{Frame, Layer};
use super::shape::{Point, Polyline, ShapeId};

/// Rendering collaborator consumed by the editor core.
///
/// Implementations own the shapes of every layer. The core only mutates
/// point lists and stroke properties, moves shapes between layers and asks
/// for repaints; how and when pixels are produced is up to the implementor.
pub trait Surface {
    /// Reserves a fresh shape id. Ids are never reused.
    fn allocate_id(&mut self) -> ShapeId;

    /// Inserts `shape` on top of `layer` under `id`.
    fn add_shape(&mut self, layer: Layer, id: ShapeId, shape: Polyline);

    /// Removes the shape from `layer`, handing ownership back to the caller.
    fn remove_shape(&mut self, layer: Layer, id: ShapeId) -> Option<Polyline>;

    fn shape(&self, id: ShapeId) -> Option<&Polyline>;

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Polyline>;

    /// Layer currently owning the shape, if it is on the surface at all.
    fn layer_of(&self, id: ShapeId) -> Option<Layer>;

    /// Shape ids on `layer` in draw order (bottom first).
    fn shapes(&self, layer: Layer) -> Vec<ShapeId>;

    /// Queues a repaint of `layer`. Requests are batched by the implementation.
    fn request_repaint(&mut self, layer: Layer);

    /// Last known pointer position in canvas coordinates.
    fn pointer_position(&self) -> Point;

    /// Records the pointer position reported by the input backend.
    fn set_pointer_position(&mut self, point: Point);
}

/// In-memory surface with one [`Frame`] per [`Layer`].
///
/// Used by the CLI and tests; a windowing backend would wrap its own canvas
/// in a [`Surface`] implementation instead.
#[derive(Debug, Default)]
pub struct Scene {
    drawing: Frame,
    temporary: Frame,
    next_id: u64,
    pointer: Point,
    repaints: RepaintTracker,
}

impl Scene {
    /// Creates an empty scene with the pointer at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the frame backing `layer`.
    pub fn frame(&self, layer: Layer) -> &Frame {
        match layer {
            Layer::Drawing => &self.drawing,
            Layer::Temporary => &self.temporary,
        }
    }

    fn frame_mut(&mut self, layer: Layer) -> &mut Frame {
        match layer {
            Layer::Drawing => &mut self.drawing,
            Layer::Temporary => &mut self.temporary,
        }
    }

    /// Returns true if a repaint of `layer` is pending.
    pub fn needs_repaint(&self, layer: Layer) -> bool {
        self.repaints.is_dirty(layer)
    }

    /// Drains pending repaint requests, one entry per dirty layer.
    pub fn take_repaints(&mut self) -> Vec<Layer> {
        self.repaints.take_layers()
    }
}

impl Surface for Scene {
    fn allocate_id(&mut self) -> ShapeId {
        self.next_id += 1;
        ShapeId(self.next_id)
    }

    fn add_shape(&mut self, layer: Layer, id: ShapeId, shape: Polyline) {
        self.frame_mut(layer).insert(id, shape);
    }

    fn remove_shape(&mut self, layer: Layer, id: ShapeId) -> Option<Polyline> {
        self.frame_mut(layer).remove(id)
    }

    fn shape(&self, id: ShapeId) -> Option<&Polyline> {
        self.drawing.get(id).or_else(|| self.temporary.get(id))
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Polyline> {
        if self.drawing.contains(id) {
            self.drawing.get_mut(id)
        } else {
            self.temporary.get_mut(id)
        }
    }

    fn layer_of(&self, id: ShapeId) -> Option<Layer> {
        Layer::ALL
            .into_iter()
            .find(|layer| self.frame(*layer).contains(id))
    }

    fn shapes(&self, layer: Layer) -> Vec<ShapeId> {
        self.frame(layer).iter().map(|(id, _)| id).collect()
    }

    fn request_repaint(&mut self, layer: Layer) {
        self.repaints.mark_layer(layer);
    }

    fn set_pointer_position(&mut self, point: Point) {
        self.pointer = point;
    }

    fn pointer_position(&self) -> Point {
        self.pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED};

    fn line() -> Polyline {
        Polyline::new(vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)], BLACK, 2.0)
    }

    #[test]
    fn allocated_ids_are_unique() {
        let mut scene = Scene::new();
        let a = scene.allocate_id();
        let b = scene.allocate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn shapes_move_between_layers() {
        let mut scene = Scene::new();
        let id = scene.allocate_id();
        scene.add_shape(Layer::Temporary, id, line());
        assert_eq!(scene.layer_of(id), Some(Layer::Temporary));

        let shape = scene.remove_shape(Layer::Temporary, id).unwrap();
        assert_eq!(scene.layer_of(id), None);

        scene.add_shape(Layer::Drawing, id, shape);
        assert_eq!(scene.layer_of(id), Some(Layer::Drawing));
        assert_eq!(scene.shapes(Layer::Drawing), vec![id]);
        assert!(scene.shapes(Layer::Temporary).is_empty());
    }

    #[test]
    fn remove_from_wrong_layer_is_none() {
        let mut scene = Scene::new();
        let id = scene.allocate_id();
        scene.add_shape(Layer::Drawing, id, line());
        assert!(scene.remove_shape(Layer::Temporary, id).is_none());
        assert!(scene.shape(id).is_some());
    }

    #[test]
    fn shape_mut_edits_in_place() {
        let mut scene = Scene::new();
        let id = scene.allocate_id();
        scene.add_shape(Layer::Drawing, id, line());
        scene.shape_mut(id).unwrap().color = RED;
        assert_eq!(scene.shape(id).unwrap().color, RED);
    }

    #[test]
    fn repaint_requests_are_batched() {
        let mut scene = Scene::new();
        scene.request_repaint(Layer::Drawing);
        scene.request_repaint(Layer::Drawing);
        assert!(scene.needs_repaint(Layer::Drawing));
        assert!(!scene.needs_repaint(Layer::Temporary));
        assert_eq!(scene.take_repaints(), vec![Layer::Drawing]);
        assert!(!scene.needs_repaint(Layer::Drawing));
    }
}
