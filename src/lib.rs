//! Library exports for the polyscribe polyline editor.
//!
//! The core is a three-state machine that builds polylines on a temporary
//! layer and commits them through a command-based undo/redo history. The
//! [`editor::Editor`] wires both to a [`draw::Surface`] together with
//! selection and configurable keybindings.

pub mod config;
pub mod draw;
pub mod editor;
pub mod history;
pub mod input;
pub mod script;

pub use config::Config;
pub use editor::Editor;
