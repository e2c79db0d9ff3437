//! Command pattern for undo/redo.
//!
//! Every mutation of committed shapes goes through a [`Command`] executed by
//! the [`History`]:
//! - [`Command`]: reversible unit of work ({AddShape, ChangeColor})
//! - [`History`]: linear undo/redo stacks

pub mod command;
pub mod manager;

pub use command::{AddShape, ChangeColor, Command};
pub use manager::History;
