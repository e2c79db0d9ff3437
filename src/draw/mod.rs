//! Shape model and drawing surface abstraction.
//!
//! This module defines the core drawing types used by the editor:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Polyline`]: the only shape kind, with [`Point`] vertices
//! - [`Layer`] / [`Frame`]: named layers and their ordered shape lists
//! - [`Surface`]: the rendering collaborator, with [`Scene`] as the in-memory implementation

pub mod color;
pub mod dirty;
pub mod layer;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use dirty::RepaintTracker;
pub use layer::{Frame, Layer};
pub use shape::{Bounds, Point, Polyline, ShapeId};
pub use surface::{Scene, Surface};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
