use proptest::prelude::*;

use super::*;
use crate::grid::Grid;
use crate::placement::{self, Edge};
use crate::persist;

fn edge_strategy() -> impl Strategy<Value = Edge> {
    prop_oneof![
        Just(Edge::North),
        Just(Edge::South),
        Just(Edge::East),
        Just(Edge::West),
    ]
}

/// Names that survive the plan format: no separators, no line breaks.
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ()'-]{0,16}"
}

proptest! {
    #[test]
    fn quantize_is_idempotent(v in any::<i32>(), spacing in 1i32..200) {
        let grid = Grid::new(spacing);
        let once = grid.quantize(v);
        prop_assert_eq!(grid.quantize(once), once);
    }

    #[test]
    fn quantize_moves_at_most_half_a_step(v in -1_000_000i32..1_000_000, spacing in 1i32..200) {
        let grid = Grid::new(spacing);
        let q = grid.quantize(v);
        prop_assert!(grid.is_aligned(q));
        prop_assert!((q - v).abs() * 2 <= spacing);
    }

    #[test]
    fn rooms_a_grid_step_apart_do_not_overlap(
        x in 0i32..400, y in 0i32..400,
        w in 1i32..300, h in 1i32..300,
        w2 in 1i32..300, h2 in 1i32..300,
        dy in -300i32..300,
        extra in 0i32..100,
    ) {
        let b = Rect::new(x, y, w, h);
        let a = Rect::new(b.right() + 20 + extra, y + dy, w2, h2);
        prop_assert!(!a.intersects(&b));
        prop_assert!(!b.intersects(&a));
    }

    #[test]
    fn edge_slot_stays_inside_room(
        room_w in 1i32..500, room_h in 1i32..500,
        fw in 0.0f64..=1.0, fh in 0.0f64..=1.0,
        edge in edge_strategy(),
    ) {
        let w = ((room_w as f64) * fw) as i32;
        let h = ((room_h as f64) * fh) as i32;
        let slot = placement::anchor_on_edge(room_w, room_h, w, h, edge);
        prop_assert!(Rect::new(0, 0, room_w, room_h).contains_rect(&slot), "{slot}");
    }

    #[test]
    fn plan_text_round_trips(
        rooms in prop::collection::vec(
            (name_strategy(), any::<i32>(), any::<i32>(), any::<i32>(), any::<i32>(), any::<i32>()),
            0..12,
        )
    ) {
        let mut ed = editor();
        let text: String = rooms
            .iter()
            .map(|(n, x, y, w, h, c)| format!("{n},{x},{y},{w},{h},{c}\n"))
            .collect();
        prop_assert_eq!(ed.deserialize(&text).unwrap(), rooms.len());

        let saved = ed.serialize();
        prop_assert_eq!(&saved, &text);

        let records = persist::decode(&saved).unwrap();
        for (record, (n, x, y, w, h, c)) in records.iter().zip(&rooms) {
            prop_assert_eq!(&record.name, n);
            prop_assert_eq!(record.bounds, Rect::new(*x, *y, *w, *h));
            prop_assert_eq!(record.color.to_argb(), *c);
        }
    }

    #[test]
    fn drops_keep_rooms_on_grid(
        starts in prop::collection::vec((0i32..30, 0i32..25), 1..5),
        target in (0i32..800, 0i32..640),
    ) {
        let mut ed = editor();
        let mut ids = Vec::new();
        for (cx, cy) in starts {
            if let Ok(id) = ed.add_room(NewRoom::at("R", cx * 20, cy * 20, 60, 60, NamedColor::Cyan.color())) {
                ids.push(id);
            }
        }
        prop_assume!(!ids.is_empty());
        let id = ids[0];
        let b = bounds(&ed, id);
        ed.pointer_down(Point::new(b.x + 20, b.y + 20));
        ed.pointer_move(Point::new(target.0, target.1));
        ed.pointer_up();
        let grid = ed.settings().grid;
        let after = bounds(&ed, id);
        prop_assert!(grid.is_aligned(after.x) && grid.is_aligned(after.y), "{after}");
        prop_assert!(after.x >= 0 && after.y >= 0, "{after}");
    }
}
