mod properties;

use super::{Editor, EditorSettings, NewRoom};
use crate::geometry::{Point, Rect};
use crate::model::{NamedColor, RoomId};

/// Editor with the default 800x640 canvas and a 20px grid.
fn editor() -> Editor {
    Editor::new(EditorSettings::default())
}

/// Add a room at an absolute position, panicking if it is rejected.
fn room_at(editor: &mut Editor, name: &str, x: i32, y: i32, w: i32, h: i32) -> RoomId {
    editor
        .add_room(NewRoom::at(name, x, y, w, h, NamedColor::Red.color()))
        .unwrap_or_else(|e| panic!("adding {name} failed: {e}"))
}

fn bounds(editor: &Editor, id: RoomId) -> Rect {
    editor
        .scene()
        .room(id)
        .unwrap_or_else(|| panic!("room {id} missing"))
        .bounds
}

/// Press inside `id` at its local offset (dx, dy), drag to `to`, release.
fn drag(editor: &mut Editor, id: RoomId, dx: i32, dy: i32, to: Point) -> crate::interaction::Release {
    let b = bounds(editor, id);
    let hit = editor.pointer_down(Point::new(b.x + dx, b.y + dy));
    assert_eq!(hit, Some(id), "press did not land on {id}");
    editor.pointer_move(to);
    editor.pointer_up()
}

/// Assert that no two rooms in the scene overlap.
fn assert_no_overlaps(editor: &Editor) {
    let rooms = editor.scene().rooms();
    for (i, a) in rooms.iter().enumerate() {
        for b in &rooms[i + 1..] {
            assert!(
                !a.bounds.intersects(&b.bounds),
                "{} {} overlaps {} {}",
                a.name,
                a.bounds,
                b.name,
                b.bounds
            );
        }
    }
}
