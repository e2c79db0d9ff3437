//! Polyline construction state machine.

use crate::draw::{BLACK, Color, Layer, Polyline, RED, ShapeId, Surface};
use crate::history::{Command, History};
use crate::input::events::Signal;
use log::{debug, warn};
use std::fmt;

/// Default cap on real points per polyline.
pub const DEFAULT_MAX_POINTS: usize = 10;

/// Smallest usable cap: one click to start, one to reach ManyPoints, one to commit.
pub const MIN_MAX_POINTS: usize = 3;

/// Observable state of the machine, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolylineState {
    /// No polyline in progress
    Idle,
    /// First real point placed, provisional point tracks the pointer
    OnePoint,
    /// Two or more real points placed
    ManyPoints,
}

impl fmt::Display for PolylineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolylineState::Idle => f.write_str("idle"),
            PolylineState::OnePoint => f.write_str("onePoint"),
            PolylineState::ManyPoints => f.write_str("manyPoints"),
        }
    }
}

/// The polyline under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Building {
    /// Transient shape on the temporary layer
    pub id: ShapeId,
    /// Placed vertices, excluding the provisional point
    pub real_points: usize,
}

/// Current drawing mode state machine.
///
/// The transient polyline lives on the surface's temporary layer; the state
/// carries its id and real-point count so guards never inspect raw point
/// lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not drawing - waiting for the first click
    Idle,
    /// One real point placed
    OnePoint(Building),
    /// Two or more real points placed
    ManyPoints(Building),
}

impl DrawingState {
    pub fn kind(&self) -> PolylineState {
        match self {
            DrawingState::Idle => PolylineState::Idle,
            DrawingState::OnePoint(_) => PolylineState::OnePoint,
            DrawingState::ManyPoints(_) => PolylineState::ManyPoints,
        }
    }

    pub fn building(&self) -> Option<Building> {
        match self {
            DrawingState::Idle => None,
            DrawingState::OnePoint(building) | DrawingState::ManyPoints(building) => {
                Some(*building)
            }
        }
    }
}

/// One handled signal, as reported to the transition observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: PolylineState,
    pub signal: Signal,
    pub to: PolylineState,
}

/// Styling and capacity used while building polylines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineSettings {
    /// Maximum real points; the click reaching it commits the polyline
    pub max_points: usize,
    /// Stroke color of the polyline under construction
    pub transient_color: Color,
    /// Stroke color given to a polyline on commit
    pub committed_color: Color,
    /// Stroke width for transient and committed polylines
    pub stroke_width: f64,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            transient_color: RED,
            committed_color: BLACK,
            stroke_width: 2.0,
        }
    }
}

type Observer = Box<dyn FnMut(&StateTransition)>;

/// Turns click, move and key signals into polylines.
///
/// Signals that are not listed for the current state are ignored. Committing
/// a polyline always goes through an AddShape command on the [`History`];
/// the machine never writes to the drawing layer itself.
pub struct PolylineMachine {
    pub(super) state: DrawingState,
    pub(super) settings: MachineSettings,
    observer: Option<Observer>,
}

impl PolylineMachine {
    pub fn new(settings: MachineSettings) -> Self {
        let max_points = settings.max_points.max(MIN_MAX_POINTS);
        if max_points != settings.max_points {
            warn!(
                "Requested max_points {} is below {}, using {}",
                settings.max_points, MIN_MAX_POINTS, max_points
            );
        }
        Self {
            state: DrawingState::Idle,
            settings: MachineSettings {
                max_points,
                ..settings
            },
            observer: None,
        }
    }

    pub fn state(&self) -> PolylineState {
        self.state.kind()
    }

    pub fn settings(&self) -> &MachineSettings {
        &self.settings
    }

    /// Id of the transient polyline, if one is being built.
    pub fn transient(&self) -> Option<ShapeId> {
        self.state.building().map(|building| building.id)
    }

    /// Real points placed so far (0 when idle).
    pub fn real_points(&self) -> usize {
        self.state
            .building()
            .map_or(0, |building| building.real_points)
    }

    /// Installs a callback fired on every handled signal, self-transitions included.
    pub fn set_observer(&mut self, observer: impl FnMut(&StateTransition) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Feeds one signal through the machine and returns the resulting state.
    ///
    /// Pointer signals read the position from `surface`. Commits are executed
    /// on `history`.
    pub fn send(
        &mut self,
        signal: Signal,
        surface: &mut dyn Surface,
        history: &mut History,
    ) -> PolylineState {
        let from = self.state();
        let handled = match signal {
            Signal::Click => self.on_click(surface, history),
            Signal::Move => self.on_move(surface),
            Signal::Key(key) => self.on_key(key, surface, history),
        };

        if handled {
            let transition = StateTransition {
                from,
                signal,
                to: self.state(),
            };
            debug!("{} --{}--> {}", transition.from, signal, transition.to);
            if let Some(observer) = self.observer.as_mut() {
                observer(&transition);
            }
        }

        self.state()
    }

    /// Applies `edit` to the transient polyline and queues a repaint.
    ///
    /// Returns false (and falls back to Idle) when the shape has vanished
    /// from the temporary layer.
    pub(super) fn edit_transient(
        &mut self,
        building: Building,
        surface: &mut dyn Surface,
        edit: impl FnOnce(&mut Polyline),
    ) -> bool {
        if surface.layer_of(building.id) != Some(Layer::Temporary) {
            return self.lose_transient(building);
        }
        let Some(line) = surface.shape_mut(building.id) else {
            return self.lose_transient(building);
        };
        edit(line);
        surface.request_repaint(Layer::Temporary);
        true
    }

    /// Strips the provisional point and commits the polyline through the history.
    pub(super) fn commit(
        &mut self,
        building: Building,
        surface: &mut dyn Surface,
        history: &mut History,
    ) {
        let Some(mut line) = surface.remove_shape(Layer::Temporary, building.id) else {
            self.lose_transient(building);
            return;
        };
        surface.request_repaint(Layer::Temporary);

        line.strip_provisional();
        line.color = self.settings.committed_color;
        line.width = self.settings.stroke_width;
        self.state = DrawingState::Idle;

        debug!(
            "Committing {} with {} points",
            building.id,
            line.points().len()
        );
        history.execute(
            Command::add_shape(building.id, line, Layer::Drawing),
            surface,
        );
    }

    /// Removes the transient polyline without committing it.
    pub(super) fn abandon(&mut self, building: Building, surface: &mut dyn Surface) {
        if surface.remove_shape(Layer::Temporary, building.id).is_some() {
            surface.request_repaint(Layer::Temporary);
        }
        self.state = DrawingState::Idle;
    }

    fn lose_transient(&mut self, building: Building) -> bool {
        warn!(
            "Transient polyline {} disappeared from the temporary layer, resetting",
            building.id
        );
        self.state = DrawingState::Idle;
        false
    }
}

impl Default for PolylineMachine {
    fn default() -> Self {
        Self::new(MachineSettings::default())
    }
}

impl fmt::Debug for PolylineMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolylineMachine")
            .field("state", &self.state)
            .field("settings", &self.settings)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
