//! History - manages the undo/redo stacks.

use super::command::Command;
use crate::draw::Surface;
use log::debug;
use std::collections::VecDeque;

/// Manages command execution and undo/redo functionality.
///
/// The history maintains two stacks:
/// - Undo stack: commands that have been executed and can be undone
/// - Redo stack: commands that have been undone and can be redone
///
/// Executing a new command clears the redo stack; history is linear.
///
/// # Depth limit
/// A non-zero `max_depth` bounds the undo stack. When the limit is exceeded
/// the oldest command is dropped and can no longer be undone. The default
/// (`0`) keeps every command.
#[derive(Debug, Default)]
pub struct History {
    /// Commands that can be undone (most recent at the back)
    undo_stack: VecDeque<Command>,
    /// Commands that can be redone (most recent at the back)
    redo_stack: Vec<Command>,
    /// Maximum undo entries to keep (0 = unlimited)
    max_depth: usize,
}

impl History {
    /// Creates an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history keeping at most `max_depth` undo entries (0 = unlimited).
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Executes a command and records it for undo.
    ///
    /// Clears the redo stack: a new forward action invalidates redo history.
    pub fn execute(&mut self, mut command: Command, surface: &mut dyn Surface) {
        command.execute(surface);
        debug!("Executed: {}", command.description());

        self.undo_stack.push_back(command);
        self.redo_stack.clear();

        if self.max_depth > 0
            && self.undo_stack.len() > self.max_depth
            && let Some(dropped) = self.undo_stack.pop_front()
        {
            debug!("History full, dropped: {}", dropped.description());
        }
    }

    /// Undoes the most recent command.
    ///
    /// Returns the description of the undone command, or `None` (doing
    /// nothing) when the undo stack is empty.
    pub fn undo(&mut self, surface: &mut dyn Surface) -> Option<String> {
        let mut command = self.undo_stack.pop_back()?;
        command.undo(surface);

        let description = command.description();
        debug!("Undo: {description}");
        self.redo_stack.push(command);
        Some(description)
    }

    /// Re-applies the most recently undone command.
    ///
    /// Returns the description of the redone command, or `None` (doing
    /// nothing) when the redo stack is empty.
    pub fn redo(&mut self, surface: &mut dyn Surface) -> Option<String> {
        let mut command = self.redo_stack.pop()?;
        command.execute(surface);

        let description = command.description();
        debug!("Redo: {description}");
        self.undo_stack.push_back(command);
        Some(description)
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Forgets all recorded commands without touching the surface.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Layer, Point, Polyline, RED, Scene, ShapeId};

    fn polyline(offset: f64) -> Polyline {
        Polyline::new(
            vec![Point::new(offset, 0.0), Point::new(offset, 10.0)],
            BLACK,
            2.0,
        )
    }

    fn add(scene: &mut Scene, offset: f64) -> (Command, ShapeId) {
        let id = scene.allocate_id();
        (Command::add_shape(id, polyline(offset), Layer::Drawing), id)
    }

    #[test]
    fn execute_pushes_undo_and_clears_redo() {
        let mut history = History::new();
        let mut scene = Scene::new();

        let (cmd, id) = add(&mut scene, 1.0);
        history.execute(cmd, &mut scene);

        assert_eq!(history.undo_count(), 1);
        assert_eq!(history.redo_count(), 0);
        assert!(history.can_undo());
        assert!(!history.can_redo());
        assert!(scene.shape(id).is_some());
    }

    #[test]
    fn undo_moves_command_to_redo_stack() {
        let mut history = History::new();
        let mut scene = Scene::new();

        let (cmd, id) = add(&mut scene, 1.0);
        history.execute(cmd, &mut scene);

        let description = history.undo(&mut scene);
        assert_eq!(description, Some(format!("add polyline {id}")));
        assert_eq!(history.undo_count(), 0);
        assert_eq!(history.redo_count(), 1);
        assert!(scene.shape(id).is_none());
    }

    #[test]
    fn redo_reapplies_command() {
        let mut history = History::new();
        let mut scene = Scene::new();

        let (cmd, id) = add(&mut scene, 1.0);
        history.execute(cmd, &mut scene);
        history.undo(&mut scene);

        assert!(history.redo(&mut scene).is_some());
        assert_eq!(history.undo_count(), 1);
        assert_eq!(history.redo_count(), 0);
        assert_eq!(scene.shape(id), Some(&polyline(1.0)));
    }

    #[test]
    fn new_command_after_undo_discards_redo() {
        let mut history = History::new();
        let mut scene = Scene::new();

        let (c1, _) = add(&mut scene, 1.0);
        let (c2, id2) = add(&mut scene, 2.0);
        let (c3, id3) = add(&mut scene, 3.0);

        history.execute(c1, &mut scene);
        history.execute(c2, &mut scene);
        history.undo(&mut scene);
        history.execute(c3, &mut scene);

        assert!(!history.can_redo());
        assert_eq!(history.redo(&mut scene), None);
        assert!(scene.shape(id2).is_none());
        assert!(scene.shape(id3).is_some());
    }

    #[test]
    fn undo_and_redo_on_empty_stacks_are_noops() {
        let mut history = History::new();
        let mut scene = Scene::new();

        assert_eq!(history.undo(&mut scene), None);
        assert_eq!(history.redo(&mut scene), None);
        assert!(scene.take_repaints().is_empty());
    }

    #[test]
    fn recolor_undo_redo_cycle() {
        let mut history = History::new();
        let mut scene = Scene::new();

        let (cmd, id) = add(&mut scene, 1.0);
        history.execute(cmd, &mut scene);
        let recolor = Command::change_color(&scene, id, RED);
        history.execute(recolor, &mut scene);
        assert_eq!(scene.shape(id).unwrap().color, RED);

        history.undo(&mut scene);
        assert_eq!(scene.shape(id).unwrap().color, BLACK);

        assert_eq!(
            history.redo(&mut scene),
            Some(format!("change color of {id} to Red"))
        );
        assert_eq!(scene.shape(id).unwrap().color, RED);
    }

    #[test]
    fn depth_limit_drops_oldest_entries() {
        let mut history = History::with_max_depth(3);
        let mut scene = Scene::new();

        let mut ids = Vec::new();
        for i in 0..5 {
            let (cmd, id) = add(&mut scene, i as f64);
            history.execute(cmd, &mut scene);
            ids.push(id);
        }

        assert_eq!(history.undo_count(), 3);
        assert_eq!(history.max_depth(), 3);

        // Only the three newest adds can be reverted.
        while history.undo(&mut scene).is_some() {}
        assert!(!history.can_undo());
        assert_eq!(history.redo_count(), 3);
        assert_eq!(scene.shapes(Layer::Drawing), vec![ids[0], ids[1]]);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut history = History::new();
        let mut scene = Scene::new();

        let (c1, _) = add(&mut scene, 1.0);
        let (c2, _) = add(&mut scene, 2.0);
        history.execute(c1, &mut scene);
        history.execute(c2, &mut scene);
        history.undo(&mut scene);

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(scene.shapes(Layer::Drawing).len(), 1);
    }
}
