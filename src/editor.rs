//! Editor glue: pointer and keyboard entry points over a [`Surface`].
//!
//! The [`Editor`] owns the polyline machine, the undo history and the
//! current selection. A windowing shell forwards its events here and reads
//! `can_undo`/`can_redo`/`can_change_color` to enable its controls.

use crate::config::{Action, Config, KeyBinding, KeyBindingError};
use crate::draw::{BLACK, BLUE, Color, GREEN, Layer, Point, RED, ShapeId, Surface};
use crate::history::{Command, History};
use crate::input::{Key, Modifiers, PolylineMachine, PolylineState, Signal, StateTransition};
use log::{debug, info, warn};
use std::collections::HashMap;

/// Selection emphasis settings.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SelectionStyle {
    /// Width of the selected polyline
    selected_width: f64,
    /// Width every other committed polyline is reset to
    normal_width: f64,
    /// Pick distance beyond half the stroke width
    tolerance: f64,
}

/// Interactive polyline editor over a drawing surface.
pub struct Editor<S: Surface> {
    surface: S,
    machine: PolylineMachine,
    history: History,
    selected: Option<ShapeId>,
    style: SelectionStyle,
    action_map: HashMap<KeyBinding, Action>,
}

impl<S: Surface> Editor<S> {
    /// Builds an editor from a validated configuration.
    ///
    /// # Errors
    /// Fails when a configured keybinding cannot be parsed or is bound twice.
    pub fn new(surface: S, config: &Config) -> Result<Self, KeyBindingError> {
        let action_map = config.keybindings.build_action_map()?;
        let machine = PolylineMachine::new(config.machine_settings());
        info!(
            "Editor ready (max_points={}, history depth={})",
            machine.settings().max_points,
            config.history.max_depth
        );

        Ok(Self {
            surface,
            machine,
            history: History::with_max_depth(config.history.max_depth),
            selected: None,
            style: SelectionStyle {
                selected_width: config.selection.selected_width,
                normal_width: config.drawing.stroke_width,
                tolerance: config.selection.tolerance,
            },
            action_map,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn machine(&self) -> &PolylineMachine {
        &self.machine
    }

    /// Current state of the polyline machine.
    pub fn state(&self) -> PolylineState {
        self.machine.state()
    }

    /// The selected committed polyline, if any.
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Forwards every handled machine transition to `observer`.
    pub fn set_observer(&mut self, observer: impl FnMut(&StateTransition) + 'static) {
        self.machine.set_observer(observer);
    }

    pub fn pointer_moved(&mut self, point: Point) -> PolylineState {
        self.pointer_signal(point, Signal::Move)
    }

    pub fn pointer_clicked(&mut self, point: Point) -> PolylineState {
        self.pointer_signal(point, Signal::Click)
    }

    /// Handles a key press.
    ///
    /// Configured keybindings win. Unbound keys pressed without modifiers go
    /// to the polyline machine; unbound chords such as Ctrl+Return are ignored.
    /// Returns the bound action that was triggered, if any.
    pub fn key_pressed(&mut self, key: Key, modifiers: Modifiers) -> Option<Action> {
        let action = KeyBinding::from_input(key, modifiers)
            .and_then(|binding| self.action_map.get(&binding).copied());

        match action {
            Some(action) => {
                debug!("Key {:?} triggers {:?}", key, action);
                self.handle_action(action);
                Some(action)
            }
            None if modifiers.is_empty() => {
                self.machine
                    .send(Signal::Key(key), &mut self.surface, &mut self.history);
                None
            }
            None => {
                debug!("Ignoring unbound chord {:?} with {:?}", key, modifiers);
                None
            }
        }
    }

    /// Runs a bound action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Undo => {
                self.undo();
            }
            Action::Redo => {
                self.redo();
            }
            Action::SetColorRed => {
                self.change_selected_color(RED);
            }
            Action::SetColorGreen => {
                self.change_selected_color(GREEN);
            }
            Action::SetColorBlue => {
                self.change_selected_color(BLUE);
            }
            Action::SetColorBlack => {
                self.change_selected_color(BLACK);
            }
        }
    }

    /// Selects the topmost committed polyline under `point`.
    ///
    /// A miss clears the selection. Returns the new selection.
    pub fn select_at(&mut self, point: Point) -> Option<ShapeId> {
        let tolerance = self.style.tolerance;
        let hit = self
            .surface
            .shapes(Layer::Drawing)
            .into_iter()
            .rev()
            .find(|id| {
                self.surface
                    .shape(*id)
                    .is_some_and(|line| line.hit_test(point, tolerance))
            });

        match hit {
            Some(id) => debug!("Selected {} at {}", id, point),
            None if self.selected.is_some() => debug!("Selection cleared at {}", point),
            None => {}
        }

        self.selected = hit;
        self.apply_emphasis();
        hit
    }

    /// Recolors the selected polyline through the history.
    ///
    /// Returns false (and logs) when nothing is selected.
    pub fn change_selected_color(&mut self, color: Color) -> bool {
        let Some(id) = self.selected else {
            warn!("Cannot change color to {}: no polyline selected", color.name());
            return false;
        };

        let command = Command::change_color(&self.surface, id, color);
        self.history.execute(command, &mut self.surface);
        true
    }

    /// Undoes the last command. Returns its description, or None if there was nothing to undo.
    pub fn undo(&mut self) -> Option<String> {
        let description = self.history.undo(&mut self.surface);
        if description.is_some() {
            self.sync_selection();
        }
        description
    }

    /// Redoes the last undone command. Returns its description, or None if there was nothing to redo.
    pub fn redo(&mut self) -> Option<String> {
        let description = self.history.redo(&mut self.surface);
        if description.is_some() {
            self.sync_selection();
        }
        description
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Whether a recolor would apply (a polyline is selected).
    pub fn can_change_color(&self) -> bool {
        self.selected.is_some()
    }

    fn pointer_signal(&mut self, point: Point, signal: Signal) -> PolylineState {
        self.surface.set_pointer_position(point);
        self.machine
            .send(signal, &mut self.surface, &mut self.history)
    }

    /// Drops a selection whose shape left the drawing layer, then re-applies emphasis.
    fn sync_selection(&mut self) {
        if let Some(id) = self.selected
            && self.surface.layer_of(id) != Some(Layer::Drawing)
        {
            debug!("Selected {} is no longer drawn, clearing selection", id);
            self.selected = None;
        }
        self.apply_emphasis();
    }

    fn apply_emphasis(&mut self) {
        let mut repaint = false;
        for id in self.surface.shapes(Layer::Drawing) {
            let width = if Some(id) == self.selected {
                self.style.selected_width
            } else {
                self.style.normal_width
            };
            if let Some(line) = self.surface.shape_mut(id)
                && line.width != width
            {
                line.width = width;
                repaint = true;
            }
        }
        if repaint {
            self.surface.request_repaint(Layer::Drawing);
        }
    }
}

impl<S: Surface + std::fmt::Debug> std::fmt::Debug for Editor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("surface", &self.surface)
            .field("machine", &self.machine)
            .field("history", &self.history)
            .field("selected", &self.selected)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Scene;

    fn editor() -> Editor<Scene> {
        Editor::new(Scene::new(), &Config::default()).unwrap()
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Draws (10,10) (20,20) (30,30) and commits with Return.
    fn draw_diagonal(editor: &mut Editor<Scene>) -> ShapeId {
        editor.pointer_clicked(p(10.0, 10.0));
        editor.pointer_clicked(p(20.0, 20.0));
        editor.pointer_clicked(p(30.0, 30.0));
        editor.key_pressed(Key::Return, Modifiers::new());
        let ids = editor.surface().shapes(Layer::Drawing);
        assert_eq!(ids.len(), 1);
        ids[0]
    }

    #[test]
    fn enter_commits_a_black_polyline() {
        let mut editor = editor();
        let id = draw_diagonal(&mut editor);

        assert_eq!(editor.state(), PolylineState::Idle);
        let line = editor.surface().shape(id).unwrap();
        assert_eq!(line.color, BLACK);
        assert_eq!(line.points(), &[p(10.0, 10.0), p(20.0, 20.0), p(30.0, 30.0)]);
        assert!(editor.can_undo());
        assert!(!editor.can_redo());
    }

    #[test]
    fn select_recolor_undo_redo() {
        let mut editor = editor();
        let id = draw_diagonal(&mut editor);

        assert_eq!(editor.select_at(p(15.0, 15.0)), Some(id));
        assert!(editor.can_change_color());
        assert_eq!(editor.surface().shape(id).unwrap().width, 4.0);

        assert!(editor.change_selected_color(RED));
        assert_eq!(editor.surface().shape(id).unwrap().color, RED);

        assert_eq!(editor.undo().as_deref(), Some("change color of #1 to Red"));
        assert_eq!(editor.surface().shape(id).unwrap().color, BLACK);

        editor.redo();
        assert_eq!(editor.surface().shape(id).unwrap().color, RED);
        assert_eq!(editor.selected(), Some(id));
    }

    #[test]
    fn recolor_without_selection_is_rejected() {
        let mut editor = editor();
        draw_diagonal(&mut editor);

        assert!(!editor.can_change_color());
        assert!(!editor.change_selected_color(RED));
        assert_eq!(editor.history().undo_count(), 1);
    }

    #[test]
    fn miss_clears_selection_and_emphasis() {
        let mut editor = editor();
        let id = draw_diagonal(&mut editor);
        editor.select_at(p(20.0, 20.0));

        assert_eq!(editor.select_at(p(200.0, 5.0)), None);
        assert_eq!(editor.selected(), None);
        assert_eq!(editor.surface().shape(id).unwrap().width, 2.0);
    }

    #[test]
    fn selection_picks_topmost_and_moves_emphasis() {
        let mut editor = editor();
        let first = draw_diagonal(&mut editor);
        editor.pointer_clicked(p(10.0, 30.0));
        editor.pointer_clicked(p(30.0, 10.0));
        editor.key_pressed(Key::Return, Modifiers::new());
        let second = *editor.surface().shapes(Layer::Drawing).last().unwrap();

        // Both lines cross at (20, 20); the later one is on top.
        assert_eq!(editor.select_at(p(20.0, 20.0)), Some(second));
        assert_eq!(editor.select_at(p(11.0, 11.0)), Some(first));
        assert_eq!(editor.surface().shape(first).unwrap().width, 4.0);
        assert_eq!(editor.surface().shape(second).unwrap().width, 2.0);
    }

    #[test]
    fn undoing_the_selected_shape_clears_selection() {
        let mut editor = editor();
        let id = draw_diagonal(&mut editor);
        editor.select_at(p(20.0, 20.0));

        editor.undo();
        assert_eq!(editor.selected(), None);
        assert!(!editor.can_change_color());

        editor.redo();
        assert_eq!(editor.surface().shape(id).unwrap().width, 2.0);
    }

    #[test]
    fn keybindings_drive_history_and_color() {
        let mut editor = editor();
        let id = draw_diagonal(&mut editor);
        editor.select_at(p(20.0, 20.0));

        assert_eq!(
            editor.key_pressed(Key::Char('b'), Modifiers::ctrl()),
            Some(Action::SetColorBlue)
        );
        assert_eq!(editor.surface().shape(id).unwrap().color, BLUE);

        assert_eq!(
            editor.key_pressed(Key::Char('z'), Modifiers::ctrl()),
            Some(Action::Undo)
        );
        assert_eq!(editor.surface().shape(id).unwrap().color, BLACK);

        let ctrl_shift = Modifiers {
            ctrl: true,
            shift: true,
            alt: false,
        };
        assert_eq!(
            editor.key_pressed(Key::Char('Z'), ctrl_shift),
            Some(Action::Redo)
        );
        assert_eq!(editor.surface().shape(id).unwrap().color, BLUE);
    }

    #[test]
    fn unbound_keys_reach_the_machine() {
        let mut editor = editor();
        editor.pointer_clicked(p(0.0, 0.0));
        assert_eq!(editor.key_pressed(Key::Escape, Modifiers::new()), None);
        assert_eq!(editor.state(), PolylineState::Idle);
        assert!(!editor.can_undo());
        assert_eq!(editor.undo(), None);
    }

    #[test]
    fn unbound_chords_do_not_reach_the_machine() {
        let mut editor = editor();
        editor.pointer_clicked(p(0.0, 0.0));
        editor.pointer_clicked(p(5.0, 0.0));

        assert_eq!(editor.key_pressed(Key::Return, Modifiers::ctrl()), None);
        assert_eq!(editor.state(), PolylineState::ManyPoints);
        assert!(!editor.can_undo());

        assert_eq!(editor.key_pressed(Key::Escape, Modifiers::ctrl()), None);
        assert_eq!(editor.state(), PolylineState::ManyPoints);
        assert_eq!(editor.machine().real_points(), 2);

        editor.key_pressed(Key::Return, Modifiers::new());
        assert_eq!(editor.state(), PolylineState::Idle);
        assert_eq!(editor.surface().shapes(Layer::Drawing).len(), 1);
    }

    #[test]
    fn backspace_walks_back_through_states() {
        let mut editor = editor();
        editor.pointer_clicked(p(0.0, 0.0));
        editor.pointer_clicked(p(10.0, 0.0));
        editor.pointer_clicked(p(10.0, 10.0));

        editor.key_pressed(Key::Backspace, Modifiers::new());
        assert_eq!(editor.state(), PolylineState::ManyPoints);
        assert_eq!(editor.machine().real_points(), 2);

        editor.key_pressed(Key::Backspace, Modifiers::new());
        assert_eq!(editor.state(), PolylineState::OnePoint);
        assert_eq!(editor.machine().real_points(), 1);
    }

    #[test]
    fn invalid_keybindings_fail_construction() {
        let mut config = Config::default();
        config.keybindings.redo = vec!["Ctrl+Z".to_string()];
        assert!(Editor::new(Scene::new(), &config).is_err());
    }
}
