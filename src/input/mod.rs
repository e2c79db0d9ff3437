//! Input handling and the polyline state machine.
//!
//! Backend pointer and keyboard events are reduced to [`Signal`]s and fed to
//! the [`PolylineMachine`], which builds polylines on the temporary layer and
//! commits them through the undo history.

pub mod events;
pub mod machine;
pub mod modifiers;

pub use events::{Key, Signal};
pub use machine::{
    DrawingState, MachineSettings, PolylineMachine, PolylineState, StateTransition,
};
pub use modifiers::Modifiers;
