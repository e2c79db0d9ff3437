mod core;
mod keys;
mod pointer;

pub use self::core::{
    Building, DEFAULT_MAX_POINTS, DrawingState, MIN_MAX_POINTS, MachineSettings, PolylineMachine,
    PolylineState, StateTransition,
};
