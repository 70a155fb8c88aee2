//! Conflict checks between rooms and between the elements inside a room.
//!
//! Only the pairs below are ever compared:
//! - a new door against the room's windows
//! - a new window against the room's doors
//! - new furniture against the room's furniture
//! - a room against every other room
//!
//! Doors never conflict with doors, windows never with windows, and furniture
//! never with doors or windows.

use tracing::debug;

use crate::geometry::Rect;
use crate::model::{Room, RoomId, Scene};
use crate::placement::{self, Edge};

pub fn door_hits_window(room: &Room, door: &Rect) -> bool {
    room.windows().iter().any(|w| w.rect.intersects(door))
}

pub fn window_hits_door(room: &Room, window: &Rect) -> bool {
    room.doors().iter().any(|d| d.rect.intersects(window))
}

pub fn furniture_hits_furniture(room: &Room, piece: &Rect) -> bool {
    room.furniture().iter().any(|f| f.rect.intersects(piece))
}

/// First room in creation order, other than `exclude`, whose bounds intersect `bounds`.
pub fn first_conflict<'a>(scene: &'a Scene, exclude: Option<RoomId>, bounds: &Rect) -> Option<&'a Room> {
    scene
        .rooms()
        .iter()
        .filter(|room| Some(room.id()) != exclude)
        .find(|room| room.bounds.intersects(bounds))
}

/// Whether `bounds` would overlap any room other than `exclude`.
pub fn overlaps(scene: &Scene, exclude: Option<RoomId>, bounds: &Rect) -> bool {
    first_conflict(scene, exclude, bounds).is_some()
}

/// What happened to a room that was dropped after a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The room did not overlap anything and stayed put.
    Clear,
    /// The room overlapped `conflictor` and was moved to its `edge` side.
    Relocated {
        conflictor: RoomId,
        edge: Edge,
        bounds: Rect,
    },
    /// No fallback slot was free; the room still overlaps something.
    Unresolved { conflictor: RoomId, bounds: Rect },
}

/// Move room `id` out of the way of the first room it overlaps.
///
/// Tries the east, west, south and north side of that room in turn, each one
/// `gap` away from it. A slot is taken only if it lies on `canvas` and does
/// not overlap any other room. When every slot fails the room is left at the
/// north slot, pulled back onto the canvas.
pub fn resolve_drop(scene: &mut Scene, id: RoomId, canvas: &Rect, gap: i32) -> Resolution {
    let Some(bounds) = scene.room(id).map(|r| r.bounds) else {
        return Resolution::Clear;
    };
    let Some(conflictor) = first_conflict(scene, Some(id), &bounds) else {
        return Resolution::Clear;
    };
    let (conflictor, anchor) = (conflictor.id(), conflictor.bounds);

    let mut last = bounds;
    for edge in Edge::FALLBACK_ORDER {
        let candidate = placement::beside(anchor, bounds.width, bounds.height, edge, gap);
        last = candidate;
        if !canvas.contains_rect(&candidate) {
            debug!(room = %id, %edge, %candidate, "fallback slot leaves the canvas");
            continue;
        }
        if overlaps(scene, Some(id), &candidate) {
            debug!(room = %id, %edge, %candidate, "fallback slot is taken");
            continue;
        }
        scene.set_bounds(id, candidate);
        return Resolution::Relocated {
            conflictor,
            edge,
            bounds: candidate,
        };
    }

    let parked = last.clamped_within(canvas);
    scene.set_bounds(id, parked);
    Resolution::Unresolved {
        conflictor,
        bounds: parked,
    }
}
