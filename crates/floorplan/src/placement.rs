use std::fmt;

use crate::geometry::Rect;

/// One of the four sides of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    North,
    South,
    East,
    West,
}

impl Edge {
    /// All four edges, in the order they are offered to the user.
    pub const ALL: [Edge; 4] = [Edge::North, Edge::South, Edge::East, Edge::West];

    /// Fallback order used when a dropped room has to be moved out of the way.
    pub const FALLBACK_ORDER: [Edge; 4] = [Edge::East, Edge::West, Edge::South, Edge::North];

    pub fn label(self) -> &'static str {
        match self {
            Edge::North => "North",
            Edge::South => "South",
            Edge::East => "East",
            Edge::West => "West",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Local rectangle for a `width`×`height` element flush against `edge` of a
/// `room_width`×`room_height` room, centered along that edge.
///
/// The result is in the room's own frame, with (0,0) at its top-left corner.
/// This is pure: it is used both to place new doors/windows and to test a
/// hypothetical element for conflicts before anything is added.
pub fn anchor_on_edge(room_width: i32, room_height: i32, width: i32, height: i32, edge: Edge) -> Rect {
    let spare_x = room_width.saturating_sub(width);
    let spare_y = room_height.saturating_sub(height);
    let (centered_x, centered_y) = (spare_x.div_euclid(2), spare_y.div_euclid(2));
    let (x, y) = match edge {
        Edge::North => (centered_x, 0),
        Edge::South => (centered_x, spare_y),
        Edge::East => (spare_x, centered_y),
        Edge::West => (0, centered_y),
    };
    Rect::new(x, y, width, height)
}

/// A `width`×`height` rectangle placed on the `edge` side of `anchor`, aligned
/// with its top or left side and separated from it by `gap`.
pub fn beside(anchor: Rect, width: i32, height: i32, edge: Edge, gap: i32) -> Rect {
    let (x, y) = match edge {
        Edge::North => (anchor.x, anchor.y.saturating_sub(height).saturating_sub(gap)),
        Edge::South => (anchor.x, anchor.bottom().saturating_add(gap)),
        Edge::East => (anchor.right().saturating_add(gap), anchor.y),
        Edge::West => (anchor.x.saturating_sub(width).saturating_sub(gap), anchor.y),
    };
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_door_is_centered_at_top() {
        assert_eq!(anchor_on_edge(100, 60, 30, 10, Edge::North), Rect::new(35, 0, 30, 10));
    }

    #[test]
    fn south_door_sits_on_bottom_edge() {
        assert_eq!(anchor_on_edge(100, 60, 30, 10, Edge::South), Rect::new(35, 50, 30, 10));
    }

    #[test]
    fn east_and_west_are_vertically_centered() {
        assert_eq!(anchor_on_edge(100, 60, 10, 30, Edge::East), Rect::new(90, 15, 10, 30));
        assert_eq!(anchor_on_edge(100, 60, 10, 30, Edge::West), Rect::new(0, 15, 10, 30));
    }

    #[test]
    fn odd_remainder_floors() {
        assert_eq!(anchor_on_edge(100, 60, 25, 10, Edge::North).x, 37);
        assert_eq!(anchor_on_edge(100, 61, 10, 10, Edge::West).y, 25);
    }

    #[test]
    fn oversized_element_floors_toward_negative() {
        assert_eq!(anchor_on_edge(20, 20, 25, 10, Edge::North).x, -3);
    }

    #[test]
    fn beside_leaves_one_gap() {
        let a = Rect::new(0, 0, 100, 100);
        assert_eq!(beside(a, 100, 100, Edge::East, 20), Rect::new(120, 0, 100, 100));
        assert_eq!(beside(a, 60, 80, Edge::West, 20), Rect::new(-80, 0, 60, 80));
        assert_eq!(beside(a, 60, 80, Edge::South, 20), Rect::new(0, 120, 60, 80));
        assert_eq!(beside(a, 60, 80, Edge::North, 20), Rect::new(0, -100, 60, 80));
    }

    #[test]
    fn beside_never_touches_anchor() {
        let a = Rect::new(200, 200, 100, 60);
        for edge in Edge::ALL {
            assert!(!beside(a, 40, 40, edge, 20).intersects(&a), "{edge}");
        }
    }
}
