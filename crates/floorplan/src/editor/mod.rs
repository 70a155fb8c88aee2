#[cfg(test)]
mod tests;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{EditorError, Element, Result};
use crate::geometry::{Point, Rect};
use crate::grid::Grid;
use crate::interaction::{CursorHint, Gesture, Interaction, Release};
use crate::model::{Color, FurnitureKind, Room, RoomId, RoomKind, Scene};
use crate::overlap;
use crate::persist;
use crate::placement::{self, Edge};

pub const DEFAULT_CANVAS_WIDTH: i32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: i32 = 640;
pub const DEFAULT_RESIZE_MARGIN: i32 = 10;
pub const DEFAULT_MIN_ROOM_SIZE: i32 = 50;

/// Fixed parameters of an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorSettings {
    pub grid: Grid,
    pub canvas_width: i32,
    pub canvas_height: i32,
    /// Width of the band along the right and bottom edges that starts a resize.
    pub resize_margin: i32,
    /// Smallest width or height a resize may produce.
    pub min_room_size: i32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            resize_margin: DEFAULT_RESIZE_MARGIN,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
        }
    }
}

impl EditorSettings {
    pub fn canvas(&self) -> Rect {
        Rect::new(0, 0, self.canvas_width, self.canvas_height)
    }
}

/// Where a new room goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Top-left corner at this canvas position.
    At(Point),
    /// Next to an existing room, one grid step away from its `edge`.
    Beside { anchor: RoomId, edge: Edge },
}

/// Parameters for [`Editor::add_room`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub name: String,
    /// When set, the stored name becomes `"<name> (<kind>)"`.
    pub kind: Option<RoomKind>,
    pub placement: Placement,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

impl NewRoom {
    pub fn at(name: impl Into<String>, x: i32, y: i32, width: i32, height: i32, color: Color) -> Self {
        Self {
            name: name.into(),
            kind: None,
            placement: Placement::At(Point::new(x, y)),
            width,
            height,
            color,
        }
    }

    pub fn beside(
        name: impl Into<String>,
        anchor: RoomId,
        edge: Edge,
        width: i32,
        height: i32,
        color: Color,
    ) -> Self {
        Self {
            name: name.into(),
            kind: None,
            placement: Placement::Beside { anchor, edge },
            width,
            height,
            color,
        }
    }

    pub fn with_kind(mut self, kind: RoomKind) -> Self {
        self.kind = Some(kind);
        self
    }

    fn display_name(&self) -> String {
        match self.kind {
            Some(kind) => format!("{} ({kind})", self.name),
            None => self.name.clone(),
        }
    }
}

/// The layout engine behind the floor plan editor.
///
/// Owns the scene and the pointer state machine. Every edit goes through
/// here so that overlap rules and grid snapping are applied consistently.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    scene: Scene,
    settings: EditorSettings,
    interaction: Interaction,
}

impl Editor {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            scene: Scene::new(),
            settings,
            interaction: Interaction::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn gesture(&self) -> Gesture {
        self.interaction.gesture()
    }

    pub fn selected(&self) -> Option<&Room> {
        self.scene.selected_room()
    }

    /// Add a room unless it overlaps another one.
    ///
    /// The origin is snapped to the grid before the overlap test. Rejected
    /// rooms leave the scene untouched; there is no fallback search here.
    pub fn add_room(&mut self, request: NewRoom) -> Result<RoomId> {
        let name = request.display_name();
        if name.contains([',', '\n', '\r']) {
            return Err(EditorError::InvalidRoom(format!(
                "name {name:?} may not contain commas or line breaks"
            )));
        }
        if request.width <= 0 || request.height <= 0 {
            return Err(EditorError::InvalidRoom(format!(
                "size {}x{} must be positive",
                request.width, request.height
            )));
        }

        let bounds = match request.placement {
            Placement::At(p) => Rect::new(p.x, p.y, request.width, request.height),
            Placement::Beside { anchor, edge } => {
                let anchor_bounds = self
                    .scene
                    .room(anchor)
                    .ok_or(EditorError::UnknownRoom(anchor))?
                    .bounds;
                placement::beside(
                    anchor_bounds,
                    request.width,
                    request.height,
                    edge,
                    self.settings.grid.spacing(),
                )
            }
        };
        let bounds = self.settings.grid.snap_origin(bounds);

        if bounds.x < 0 || bounds.y < 0 {
            warn!(%name, %bounds, "room rejected: off canvas");
            return Err(EditorError::InvalidRoom(format!(
                "{bounds} would extend past the canvas origin"
            )));
        }
        if overlap::overlaps(&self.scene, None, &bounds) {
            warn!(%name, %bounds, "room rejected: overlap");
            return Err(EditorError::overlap(Element::Room, Element::Room));
        }

        let id = self.scene.insert(name, bounds, request.color);
        debug!(room = %id, %bounds, "room added");
        Ok(id)
    }

    fn selected_mut(&mut self) -> Result<&mut Room> {
        self.scene.selected_room_mut().ok_or(EditorError::NoSelection)
    }

    /// Add a door on `edge` of the selected room.
    pub fn add_door(&mut self, width: i32, height: i32, edge: Edge) -> Result<Rect> {
        let room = self.selected_mut()?;
        let rect = room
            .add_door(width, height, edge)
            .inspect_err(|e| warn!("door rejected: {e}"))?;
        debug!(room = %room.id(), %edge, %rect, "door added");
        Ok(rect)
    }

    /// Add a window on `edge` of the selected room.
    pub fn add_window(&mut self, width: i32, height: i32, edge: Edge) -> Result<Rect> {
        let room = self.selected_mut()?;
        let rect = room
            .add_window(width, height, edge)
            .inspect_err(|e| warn!("window rejected: {e}"))?;
        debug!(room = %room.id(), %edge, %rect, "window added");
        Ok(rect)
    }

    /// Add furniture to the selected room at `rect`, in the room's own frame.
    pub fn add_furniture(&mut self, kind: FurnitureKind, rect: Rect) -> Result<()> {
        let room = self.selected_mut()?;
        room.add_furniture(kind, rect)
            .inspect_err(|e| warn!("furniture rejected: {e}"))?;
        debug!(room = %room.id(), %kind, %rect, "furniture added");
        Ok(())
    }

    /// Delete the selected room together with everything inside it.
    pub fn delete_selected_room(&mut self) -> Result<Room> {
        let id = self.scene.selected_id().ok_or(EditorError::NoSelection)?;
        if self.interaction.gesture().target() == Some(id) {
            self.interaction.reset();
        }
        let room = self.scene.remove(id).ok_or(EditorError::NoSelection)?;
        debug!(room = %id, name = %room.name, "room deleted");
        Ok(room)
    }

    /// Remove every room.
    pub fn clear(&mut self) {
        self.interaction.reset();
        self.scene.clear();
    }

    /// Start over with an empty plan.
    pub fn new_project(&mut self) {
        self.clear();
        info!("new project");
    }

    pub fn serialize(&self) -> String {
        persist::encode(&self.scene)
    }

    /// Replace the scene with the rooms in `text`.
    ///
    /// The scene is cleared first. On a parse error it stays empty rather than
    /// holding part of the file. Rooms are taken as written: their geometry is
    /// not snapped and overlaps between them are not checked.
    pub fn deserialize(&mut self, text: &str) -> Result<usize> {
        self.clear();
        let records = persist::decode(text)?;
        let count = records.len();
        for record in records {
            self.scene.insert(record.name, record.bounds, record.color);
        }
        Ok(count)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.serialize())?;
        info!(path = %path.display(), rooms = self.scene.len(), "plan saved");
        Ok(())
    }

    /// Load a plan file. A file that cannot be read leaves the scene as it was.
    pub fn open(&mut self, path: &Path) -> Result<usize> {
        let text = std::fs::read_to_string(path)?;
        let count = self
            .deserialize(&text)
            .inspect_err(|e| warn!(path = %path.display(), "open failed: {e}"))?;
        info!(path = %path.display(), rooms = count, "plan opened");
        Ok(count)
    }

    pub fn pointer_down(&mut self, p: Point) -> Option<RoomId> {
        self.interaction
            .pointer_down(&mut self.scene, &self.settings, p)
    }

    pub fn pointer_move(&mut self, p: Point) {
        self.interaction
            .pointer_move(&mut self.scene, &self.settings, p);
    }

    pub fn pointer_up(&mut self) -> Release {
        self.interaction.pointer_up(&mut self.scene, &self.settings)
    }

    pub fn hover(&self, p: Point) -> CursorHint {
        self.interaction.hover(&self.scene, &self.settings, p)
    }
}
