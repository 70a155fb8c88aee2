use serde::Serialize;
use std::fmt;

use crate::error::{Element, EditorError, Result};
use crate::geometry::{Point, Rect};
use crate::overlap;
use crate::placement::{self, Edge};

/// 8-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Unpack a signed 32-bit `0xAARRGGBB` value.
    pub fn from_argb(packed: i32) -> Self {
        let [a, r, g, b] = (packed as u32).to_be_bytes();
        Self { a, r, g, b }
    }

    /// Pack into a signed 32-bit `0xAARRGGBB` value, as stored in plan files.
    pub fn to_argb(self) -> i32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b]) as i32
    }
}

/// The fixed palette rooms are painted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Red,
    Blue,
    Green,
    Cyan,
    Magenta,
    Yellow,
    Orange,
}

impl NamedColor {
    pub const ALL: [NamedColor; 7] = [
        NamedColor::Red,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Cyan,
        NamedColor::Magenta,
        NamedColor::Yellow,
        NamedColor::Orange,
    ];

    const ALPHA: u8 = 200;

    pub fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Cyan => "Cyan",
            Self::Magenta => "Magenta",
            Self::Yellow => "Yellow",
            Self::Orange => "Orange",
        }
    }

    pub fn color(self) -> Color {
        let (r, g, b) = match self {
            Self::Red => (255, 99, 71),
            Self::Blue => (30, 144, 255),
            Self::Green => (60, 179, 113),
            Self::Cyan => (0, 255, 255),
            Self::Magenta => (255, 0, 255),
            Self::Yellow => (255, 255, 0),
            Self::Orange => (255, 165, 0),
        };
        Color::rgba(r, g, b, Self::ALPHA)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Purpose of a room, appended to its name when placed next to another room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKind {
    Bedroom,
    Bathroom,
    Kitchen,
    LivingRoom,
}

impl RoomKind {
    pub const ALL: [RoomKind; 4] = [
        RoomKind::Bedroom,
        RoomKind::Bathroom,
        RoomKind::Kitchen,
        RoomKind::LivingRoom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Bedroom => "Bedroom",
            Self::Bathroom => "Bathroom",
            Self::Kitchen => "Kitchen",
            Self::LivingRoom => "Living Room",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Kind of furniture. Only changes how the piece is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FurnitureKind {
    Bed,
    Sink,
    DiningTable,
}

/// Outline a furniture piece is drawn with inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FurnitureShape {
    Rectangle,
    /// Upper half of the inscribed ellipse.
    HalfDisc,
    Ellipse,
}

impl FurnitureKind {
    pub const ALL: [FurnitureKind; 3] = [
        FurnitureKind::Bed,
        FurnitureKind::Sink,
        FurnitureKind::DiningTable,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Bed => "Bed",
            Self::Sink => "Sink",
            Self::DiningTable => "Dining Table",
        }
    }

    pub fn shape(self) -> FurnitureShape {
        match self {
            Self::Bed => FurnitureShape::Rectangle,
            Self::Sink => FurnitureShape::HalfDisc,
            Self::DiningTable => FurnitureShape::Ellipse,
        }
    }
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A door, in its room's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Door {
    pub rect: Rect,
}

/// A window, in its room's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Furniture {
    pub kind: FurnitureKind,
    pub rect: Rect,
}

/// Stable handle for a room within one editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomId(u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    id: RoomId,
    pub name: String,
    pub bounds: Rect,
    pub color: Color,
    doors: Vec<Door>,
    windows: Vec<Window>,
    furniture: Vec<Furniture>,
}

impl Room {
    fn new(id: RoomId, name: String, bounds: Rect, color: Color) -> Self {
        Self {
            id,
            name,
            bounds,
            color,
            doors: Vec::new(),
            windows: Vec::new(),
            furniture: Vec::new(),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn furniture(&self) -> &[Furniture] {
        &self.furniture
    }

    /// Where a `width`×`height` door or window on `edge` would go.
    pub fn edge_slot(&self, width: i32, height: i32, edge: Edge) -> Rect {
        placement::anchor_on_edge(self.bounds.width, self.bounds.height, width, height, edge)
    }

    /// Add a door on `edge` unless it would cover one of this room's windows.
    pub fn add_door(&mut self, width: i32, height: i32, edge: Edge) -> Result<Rect> {
        let rect = self.edge_slot(width, height, edge);
        if overlap::door_hits_window(self, &rect) {
            return Err(EditorError::overlap(Element::Door, Element::Window));
        }
        self.doors.push(Door { rect });
        Ok(rect)
    }

    /// Add a window on `edge` unless it would cover one of this room's doors.
    pub fn add_window(&mut self, width: i32, height: i32, edge: Edge) -> Result<Rect> {
        let rect = self.edge_slot(width, height, edge);
        if overlap::window_hits_door(self, &rect) {
            return Err(EditorError::overlap(Element::Window, Element::Door));
        }
        self.windows.push(Window { rect });
        Ok(rect)
    }

    /// Add furniture at an explicit local rectangle unless it overlaps other furniture.
    pub fn add_furniture(&mut self, kind: FurnitureKind, rect: Rect) -> Result<()> {
        if overlap::furniture_hits_furniture(self, &rect) {
            return Err(EditorError::overlap(Element::Furniture, Element::Furniture));
        }
        self.furniture.push(Furniture { kind, rect });
        Ok(())
    }

    /// Convert a rectangle in this room's frame to canvas coordinates.
    pub fn to_canvas(&self, local: Rect) -> Rect {
        local.with_origin(
            self.bounds.x.saturating_add(local.x),
            self.bounds.y.saturating_add(local.y),
        )
    }
}

/// Every room in the plan plus the selection and stacking order.
///
/// `rooms` keeps creation order, which is the order conflicts are scanned in
/// and the order rooms are saved in. `z_stack` holds the same ids front to
/// back and only matters for drawing and hit-testing.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    rooms: Vec<Room>,
    z_stack: Vec<RoomId>,
    selected: Option<RoomId>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms in creation order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == id)
    }

    /// Insert a room on top of the stack and return its id.
    pub fn insert(&mut self, name: impl Into<String>, bounds: Rect, color: Color) -> RoomId {
        let id = RoomId(self.next_id);
        self.next_id += 1;
        self.rooms.push(Room::new(id, name.into(), bounds, color));
        self.z_stack.insert(0, id);
        id
    }

    pub fn remove(&mut self, id: RoomId) -> Option<Room> {
        let index = self.rooms.iter().position(|r| r.id == id)?;
        self.z_stack.retain(|z| *z != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.rooms.remove(index))
    }

    /// Drop every room and the selection. Ids are not reused.
    pub fn clear(&mut self) {
        self.rooms.clear();
        self.z_stack.clear();
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<RoomId> {
        self.selected
    }

    pub fn selected_room(&self) -> Option<&Room> {
        self.selected.and_then(|id| self.room(id))
    }

    pub fn selected_room_mut(&mut self) -> Option<&mut Room> {
        let id = self.selected?;
        self.room_mut(id)
    }

    pub fn select(&mut self, id: Option<RoomId>) {
        self.selected = id.filter(|id| self.room(*id).is_some());
    }

    pub fn bring_to_front(&mut self, id: RoomId) {
        if let Some(pos) = self.z_stack.iter().position(|z| *z == id) {
            let id = self.z_stack.remove(pos);
            self.z_stack.insert(0, id);
        }
    }

    /// Rooms from the topmost down.
    pub fn front_to_back(&self) -> impl Iterator<Item = &Room> {
        self.z_stack.iter().filter_map(|id| self.room(*id))
    }

    /// Rooms in paint order: bottom first, topmost last.
    pub fn back_to_front(&self) -> impl Iterator<Item = &Room> {
        self.z_stack.iter().rev().filter_map(|id| self.room(*id))
    }

    /// Topmost room containing `p`.
    pub fn hit_test(&self, p: Point) -> Option<RoomId> {
        self.front_to_back()
            .find(|room| room.bounds.contains(p))
            .map(Room::id)
    }

    /// Replace a room's geometry snapshot.
    pub fn set_bounds(&mut self, id: RoomId, bounds: Rect) {
        if let Some(room) = self.room_mut(id) {
            room.bounds = bounds;
        }
    }
}
