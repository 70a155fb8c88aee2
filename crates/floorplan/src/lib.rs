//! Layout engine for a grid-snapped 2D floor plan editor.
//!
//! Rooms are axis-aligned rectangles on a fixed-size canvas. Doors and windows
//! hang off a room's edges, furniture sits at explicit positions inside it.
//! [`Editor`] is the entry point: it owns the [`Scene`], enforces the overlap
//! rules, and runs the pointer state machine for moving and resizing rooms.

pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod model;
pub mod overlap;
pub mod persist;
pub mod placement;

pub use editor::{Editor, EditorSettings, NewRoom, Placement};
pub use error::{EditorError, Result};
pub use geometry::{Point, Rect};
pub use model::{Color, FurnitureKind, NamedColor, Room, RoomId, RoomKind, Scene};
pub use placement::Edge;
