use tracing::{debug, trace};

use crate::editor::EditorSettings;
use crate::geometry::{Point, Rect};
use crate::model::{RoomId, Scene};
use crate::overlap::{self, Resolution};

/// Which of a room's edges a resize gesture drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEdges {
    pub right: bool,
    pub bottom: bool,
}

impl ResizeEdges {
    pub const RIGHT: Self = Self {
        right: true,
        bottom: false,
    };
    pub const BOTTOM: Self = Self {
        right: false,
        bottom: true,
    };
    pub const BOTH: Self = Self {
        right: true,
        bottom: true,
    };

    /// Edges within `margin` of `local`, a point in the room's own frame.
    fn under(bounds: &Rect, local: Point, margin: i32) -> Option<Self> {
        let edges = Self {
            right: local.x >= bounds.width.saturating_sub(margin),
            bottom: local.y >= bounds.height.saturating_sub(margin),
        };
        (edges.right || edges.bottom).then_some(edges)
    }

    pub fn cursor(self) -> CursorHint {
        match (self.right, self.bottom) {
            (true, true) => CursorHint::ResizeSouthEast,
            (true, false) => CursorHint::ResizeEast,
            (false, true) => CursorHint::ResizeSouth,
            (false, false) => CursorHint::Default,
        }
    }
}

/// What a press turns into once the pointer moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureMode {
    Move,
    Resize(ResizeEdges),
}

/// State of the pointer gesture on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Button went down on `target` and has not moved yet. `grab` is the
    /// press position in the room's own frame.
    Pressed {
        target: RoomId,
        grab: Point,
        mode: GestureMode,
    },
    Dragging {
        target: RoomId,
        grab: Point,
    },
    Resizing {
        target: RoomId,
        edges: ResizeEdges,
    },
}

impl Gesture {
    /// Room captured by the current gesture, if any.
    pub fn target(&self) -> Option<RoomId> {
        match *self {
            Gesture::Idle => None,
            Gesture::Pressed { target, .. }
            | Gesture::Dragging { target, .. }
            | Gesture::Resizing { target, .. } => Some(target),
        }
    }
}

/// Pointer shape to show while hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Move,
    ResizeEast,
    ResizeSouth,
    ResizeSouthEast,
}

/// Outcome of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No gesture was in progress.
    Nothing,
    /// A move ended; the origin was snapped and any overlap resolved.
    Moved { room: RoomId, resolution: Resolution },
    /// A resize ended; the size was already snapped while dragging.
    Resized { room: RoomId, bounds: Rect },
}

/// Pointer state machine for selecting, moving and resizing rooms.
///
/// Press picks the topmost room under the pointer. Move and release go to
/// the room captured on press, wherever the pointer is.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    gesture: Gesture,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Abandon the current gesture without touching the scene.
    pub fn reset(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Press at canvas position `p`. Returns the room that was hit.
    pub fn pointer_down(&mut self, scene: &mut Scene, settings: &EditorSettings, p: Point) -> Option<RoomId> {
        let Some(target) = scene.hit_test(p) else {
            self.gesture = Gesture::Idle;
            return None;
        };
        let bounds = scene.room(target)?.bounds;
        scene.select(Some(target));
        scene.bring_to_front(target);

        let grab = p.relative_to(bounds.origin());
        let mode = match ResizeEdges::under(&bounds, grab, settings.resize_margin) {
            Some(edges) => GestureMode::Resize(edges),
            None => GestureMode::Move,
        };
        debug!(room = %target, ?mode, "pointer down");
        self.gesture = Gesture::Pressed { target, grab, mode };
        Some(target)
    }

    /// Pointer moved to canvas position `p` with the button held.
    pub fn pointer_move(&mut self, scene: &mut Scene, settings: &EditorSettings, p: Point) {
        self.gesture = match self.gesture {
            Gesture::Idle => return,
            Gesture::Pressed {
                target,
                grab,
                mode: GestureMode::Move,
            }
            | Gesture::Dragging { target, grab } => Gesture::Dragging { target, grab },
            Gesture::Pressed {
                target,
                mode: GestureMode::Resize(edges),
                ..
            }
            | Gesture::Resizing { target, edges } => Gesture::Resizing { target, edges },
        };

        let Some(bounds) = self.gesture.target().and_then(|id| scene.room(id)).map(|r| r.bounds) else {
            self.reset();
            return;
        };

        match self.gesture {
            Gesture::Dragging { target, grab } => {
                let moved = bounds
                    .with_origin(p.x.saturating_sub(grab.x), p.y.saturating_sub(grab.y))
                    .clamped_within(&settings.canvas());
                trace!(room = %target, bounds = %moved, "drag");
                scene.set_bounds(target, moved);
            }
            Gesture::Resizing { target, edges } => {
                let width = if edges.right {
                    p.x.saturating_sub(bounds.x)
                } else {
                    bounds.width
                };
                let height = if edges.bottom {
                    p.y.saturating_sub(bounds.y)
                } else {
                    bounds.height
                };
                // The floor is the smallest grid multiple not below the minimum.
                let snapped = settings.grid.snap_size(bounds.with_size(width, height));
                let floor = settings.grid.ceil(settings.min_room_size);
                let resized = snapped.with_size(snapped.width.max(floor), snapped.height.max(floor));
                trace!(room = %target, bounds = %resized, "resize");
                scene.set_bounds(target, resized);
            }
            Gesture::Idle | Gesture::Pressed { .. } => {}
        }
    }

    /// Button released. The gesture always ends here.
    pub fn pointer_up(&mut self, scene: &mut Scene, settings: &EditorSettings) -> Release {
        let gesture = std::mem::take(&mut self.gesture);
        let Some(room) = gesture.target() else {
            return Release::Nothing;
        };
        let Some(bounds) = scene.room(room).map(|r| r.bounds) else {
            return Release::Nothing;
        };

        match gesture {
            Gesture::Pressed {
                mode: GestureMode::Move,
                ..
            }
            | Gesture::Dragging { .. } => {
                scene.set_bounds(room, settings.grid.snap_origin(bounds));
                let resolution = overlap::resolve_drop(
                    scene,
                    room,
                    &settings.canvas(),
                    settings.grid.spacing(),
                );
                debug!(%room, ?resolution, "drop");
                Release::Moved { room, resolution }
            }
            Gesture::Pressed {
                mode: GestureMode::Resize(_),
                ..
            }
            | Gesture::Resizing { .. } => {
                debug!(%room, %bounds, "resize finished");
                Release::Resized { room, bounds }
            }
            Gesture::Idle => Release::Nothing,
        }
    }

    /// Cursor to show when hovering at `p` with no button held.
    pub fn hover(&self, scene: &Scene, settings: &EditorSettings, p: Point) -> CursorHint {
        let Some(room) = scene.hit_test(p).and_then(|id| scene.room(id)) else {
            return CursorHint::Default;
        };
        let local = p.relative_to(room.bounds.origin());
        ResizeEdges::under(&room.bounds, local, settings.resize_margin)
            .map_or(CursorHint::Move, ResizeEdges::cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::model::NamedColor;

    fn setup(bounds: Rect) -> (Scene, RoomId, EditorSettings, Interaction) {
        let mut scene = Scene::new();
        let id = scene.insert("A", bounds, NamedColor::Green.color());
        (scene, id, EditorSettings::default(), Interaction::new())
    }

    #[test]
    fn press_outside_any_room_stays_idle() {
        let (mut scene, _, settings, mut ix) = setup(Rect::new(0, 0, 100, 100));
        assert_eq!(ix.pointer_down(&mut scene, &settings, Point::new(300, 300)), None);
        assert_eq!(ix.gesture(), Gesture::Idle);
        assert_eq!(scene.selected_id(), None);
    }

    #[test]
    fn press_selects_and_picks_mode() {
        let (mut scene, id, settings, mut ix) = setup(Rect::new(20, 20, 100, 100));
        ix.pointer_down(&mut scene, &settings, Point::new(50, 50));
        assert_eq!(scene.selected_id(), Some(id));
        assert_eq!(
            ix.gesture(),
            Gesture::Pressed {
                target: id,
                grab: Point::new(30, 30),
                mode: GestureMode::Move,
            }
        );
    }

    #[test]
    fn resize_band_detects_edges() {
        let (mut scene, id, settings, mut ix) = setup(Rect::new(0, 0, 100, 100));
        let cases = [
            (Point::new(95, 40), ResizeEdges::RIGHT),
            (Point::new(40, 90), ResizeEdges::BOTTOM),
            (Point::new(99, 99), ResizeEdges::BOTH),
        ];
        for (p, expected) in cases {
            ix.pointer_down(&mut scene, &settings, p);
            match ix.gesture() {
                Gesture::Pressed {
                    target,
                    mode: GestureMode::Resize(edges),
                    ..
                } => {
                    assert_eq!(target, id);
                    assert_eq!(edges, expected, "{p:?}");
                }
                other => panic!("expected resize press at {p:?}, got {other:?}"),
            }
            ix.pointer_up(&mut scene, &settings);
        }
    }

    #[test]
    fn drag_is_smooth_then_snaps_on_release() {
        let (mut scene, id, settings, mut ix) = setup(Rect::new(0, 0, 100, 100));
        ix.pointer_down(&mut scene, &settings, Point::new(50, 50));
        ix.pointer_move(&mut scene, &settings, Point::new(57, 63));
        assert_eq!(scene.room(id).unwrap().bounds, Rect::new(7, 13, 100, 100));
        ix.pointer_move(&mut scene, &settings, Point::new(83, 61));
        assert_eq!(scene.room(id).unwrap().bounds, Rect::new(33, 11, 100, 100));
        let release = ix.pointer_up(&mut scene, &settings);
        assert_eq!(
            release,
            Release::Moved {
                room: id,
                resolution: Resolution::Clear,
            }
        );
        assert_eq!(scene.room(id).unwrap().bounds, Rect::new(40, 20, 100, 100));
        assert_eq!(ix.gesture(), Gesture::Idle);
    }

    #[test]
    fn drag_is_clamped_to_canvas() {
        let (mut scene, id, settings, mut ix) = setup(Rect::new(0, 0, 100, 100));
        ix.pointer_down(&mut scene, &settings, Point::new(10, 10));
        ix.pointer_move(&mut scene, &settings, Point::new(-200, 5000));
        let canvas = settings.canvas();
        assert_eq!(
            scene.room(id).unwrap().bounds,
            Rect::new(0, canvas.height - 100, 100, 100)
        );
    }

    #[test]
    fn resize_snaps_on_every_move() {
        let (mut scene, id, settings, mut ix) = setup(Rect::new(20, 20, 100, 100));
        ix.pointer_down(&mut scene, &settings, Point::new(115, 60));
        ix.pointer_move(&mut scene, &settings, Point::new(167, 60));
        // 147 wide snaps to 140; height untouched.
        assert_eq!(scene.room(id).unwrap().bounds, Rect::new(20, 20, 140, 100));
        ix.pointer_move(&mut scene, &settings, Point::new(173, 300));
        assert_eq!(scene.room(id).unwrap().bounds, Rect::new(20, 20, 160, 100));
        let release = ix.pointer_up(&mut scene, &settings);
        assert_eq!(
            release,
            Release::Resized {
                room: id,
                bounds: Rect::new(20, 20, 160, 100),
            }
        );
    }

    #[test]
    fn resize_respects_minimum() {
        let (mut scene, id, settings, mut ix) = setup(Rect::new(0, 0, 100, 100));
        ix.pointer_down(&mut scene, &settings, Point::new(99, 99));
        ix.pointer_move(&mut scene, &settings, Point::new(5, 5));
        let bounds = scene.room(id).unwrap().bounds;
        assert!(bounds.width >= settings.min_room_size);
        assert!(bounds.height >= settings.min_room_size);
        // 50 rounded up to the next grid line.
        assert_eq!((bounds.width, bounds.height), (60, 60));
    }

    #[test]
    fn resize_floor_is_a_grid_multiple_above_the_minimum() {
        let (mut scene, id, mut settings, mut ix) = setup(Rect::new(0, 0, 160, 160));
        settings.grid = Grid::new(40);
        ix.pointer_down(&mut scene, &settings, Point::new(159, 159));
        ix.pointer_move(&mut scene, &settings, Point::new(5, 5));
        assert_eq!(scene.room(id).unwrap().bounds, Rect::new(0, 0, 80, 80));
        ix.pointer_up(&mut scene, &settings);
    }

    #[test]
    fn tiny_minimum_never_collapses_a_room() {
        let (mut scene, id, mut settings, mut ix) = setup(Rect::new(0, 0, 100, 100));
        settings.min_room_size = 1;
        ix.pointer_down(&mut scene, &settings, Point::new(99, 99));
        ix.pointer_move(&mut scene, &settings, Point::new(3, 3));
        let bounds = scene.room(id).unwrap().bounds;
        assert_eq!(bounds, Rect::new(0, 0, 20, 20));
        ix.pointer_up(&mut scene, &settings);
        assert_eq!(scene.hit_test(Point::new(10, 10)), Some(id));
    }

    #[test]
    fn moves_route_to_captured_room() {
        let mut scene = Scene::new();
        let a = scene.insert("A", Rect::new(0, 0, 100, 100), NamedColor::Red.color());
        let b = scene.insert("B", Rect::new(300, 0, 100, 100), NamedColor::Blue.color());
        let settings = EditorSettings::default();
        let mut ix = Interaction::new();
        ix.pointer_down(&mut scene, &settings, Point::new(20, 20));
        // Passing over B does not hand the gesture to it.
        ix.pointer_move(&mut scene, &settings, Point::new(320, 20));
        assert_eq!(ix.gesture().target(), Some(a));
        assert_eq!(scene.room(b).unwrap().bounds, Rect::new(300, 0, 100, 100));
    }

    #[test]
    fn release_without_press_does_nothing() {
        let (mut scene, id, settings, mut ix) = setup(Rect::new(10, 10, 100, 100));
        assert_eq!(ix.pointer_up(&mut scene, &settings), Release::Nothing);
        assert_eq!(scene.room(id).unwrap().bounds, Rect::new(10, 10, 100, 100));
    }

    #[test]
    fn click_without_motion_still_snaps() {
        let (mut scene, id, settings, mut ix) = setup(Rect::new(13, 7, 100, 100));
        ix.pointer_down(&mut scene, &settings, Point::new(40, 40));
        ix.pointer_up(&mut scene, &settings);
        assert_eq!(scene.room(id).unwrap().bounds, Rect::new(20, 0, 100, 100));
    }

    #[test]
    fn hover_reports_resize_cursor() {
        let (scene, _, settings, ix) = setup(Rect::new(0, 0, 100, 100));
        assert_eq!(ix.hover(&scene, &settings, Point::new(50, 50)), CursorHint::Move);
        assert_eq!(ix.hover(&scene, &settings, Point::new(95, 50)), CursorHint::ResizeEast);
        assert_eq!(ix.hover(&scene, &settings, Point::new(50, 95)), CursorHint::ResizeSouth);
        assert_eq!(ix.hover(&scene, &settings, Point::new(95, 95)), CursorHint::ResizeSouthEast);
        assert_eq!(ix.hover(&scene, &settings, Point::new(150, 50)), CursorHint::Default);
    }
}
