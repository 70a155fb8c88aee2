use std::path::PathBuf;
use std::time::Instant;

use eframe::egui;
use tracing::warn;

use floorplan::config::Config;
use floorplan::interaction::{CursorHint, Gesture, GestureMode, Release};
use floorplan::model::FurnitureShape;
use floorplan::overlap::Resolution;
use floorplan::{
    Color, Edge, Editor, EditorError, FurnitureKind, NamedColor, NewRoom, Point, Rect, Room,
    RoomId, RoomKind,
};

use crate::theme::Theme;

const TOAST_DURATION: f32 = 2.5;
const TOAST_FADE_START: f32 = 2.0;
const HANDLE_SIZE: f32 = 8.0;
const BORDER_WIDTH: f32 = 2.0;
const LABEL_SIZE: f32 = 14.0;
/// Largest grid cell index the absolute placement form offers.
const MAX_GRID_CELL: i32 = 100;
const DASH: f32 = 2.0;
const PLAN_EXTENSIONS: [&str; 2] = ["plan", "txt"];

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        if elapsed < TOAST_FADE_START {
            1.0
        } else if elapsed < TOAST_DURATION {
            1.0 - (elapsed - TOAST_FADE_START) / (TOAST_DURATION - TOAST_FADE_START)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TOAST_DURATION
    }
}

struct RoomForm {
    name: String,
    relative: bool,
    cell_x: i32,
    cell_y: i32,
    anchor: Option<RoomId>,
    edge: Edge,
    kind: RoomKind,
    width: i32,
    height: i32,
    color: NamedColor,
}

impl RoomForm {
    fn new(anchor: Option<RoomId>) -> Self {
        Self {
            name: String::new(),
            relative: anchor.is_some(),
            cell_x: 0,
            cell_y: 0,
            anchor,
            edge: Edge::East,
            kind: RoomKind::Bedroom,
            width: 100,
            height: 100,
            color: NamedColor::Red,
        }
    }

    fn to_new_room(&self, spacing: i32) -> NewRoom {
        let color = self.color.color();
        match (self.relative, self.anchor) {
            (true, Some(anchor)) => {
                NewRoom::beside(&self.name, anchor, self.edge, self.width, self.height, color)
                    .with_kind(self.kind)
            }
            _ => NewRoom::at(
                &self.name,
                self.cell_x.saturating_mul(spacing),
                self.cell_y.saturating_mul(spacing),
                self.width,
                self.height,
                color,
            ),
        }
    }
}

struct EdgeForm {
    width: i32,
    height: i32,
    edge: Edge,
}

struct FurnitureForm {
    kind: FurnitureKind,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

enum Form {
    None,
    Room(RoomForm),
    Door(EdgeForm),
    Window(EdgeForm),
    Furniture(FurnitureForm),
}

impl Form {
    fn title(&self) -> &'static str {
        match self {
            Form::None => "",
            Form::Room(_) => "Add Room",
            Form::Door(_) => "Add Door",
            Form::Window(_) => "Add Window",
            Form::Furniture(_) => "Add Furniture",
        }
    }
}

struct FloorPlanApp {
    editor: Editor,
    theme: Theme,
    show_grid: bool,
    form: Form,
    toast: Option<Toast>,
    file: Option<PathBuf>,
    window_title: String,
}

impl FloorPlanApp {
    fn new(editor: Editor, theme: Theme, show_grid: bool, file: Option<PathBuf>) -> Self {
        let mut app = Self {
            editor,
            theme,
            show_grid,
            form: Form::None,
            toast: None,
            file: None,
            window_title: String::new(),
        };
        if let Some(path) = file {
            app.open(path);
        }
        app
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message.into()));
    }

    fn display_title(&self) -> String {
        match &self.file {
            Some(path) => format!(
                "floorplan - {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            ),
            None => "floorplan".to_string(),
        }
    }

    fn open(&mut self, path: PathBuf) {
        match self.editor.open(&path) {
            Ok(count) => {
                self.notify(format!("Opened {count} room(s)"));
                self.file = Some(path);
            }
            Err(e @ EditorError::Parse { .. }) => {
                self.notify(format!("Could not read plan ({e}), canvas cleared"));
                self.file = None;
            }
            Err(e) => self.notify(format!("Could not open {}: {e}", path.display())),
        }
    }

    fn save_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Floor plan", &PLAN_EXTENSIONS)
            .set_file_name("untitled.plan")
            .save_file()
        else {
            return;
        };
        match self.editor.save(&path) {
            Ok(()) => {
                self.notify(format!("Saved {}", path.display()));
                self.file = Some(path);
            }
            Err(e) => self.notify(format!("Could not save: {e}")),
        }
    }

    fn open_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Floor plan", &PLAN_EXTENSIONS)
            .pick_file()
        {
            self.open(path);
        }
    }

    fn open_form(&mut self, form: Form) {
        if !matches!(form, Form::Room(_)) && self.editor.selected().is_none() {
            self.notify("Select a room first");
            return;
        }
        self.form = form;
    }

    fn edge_form_for_selection(&self) -> EdgeForm {
        let (w, h) = self
            .editor
            .selected()
            .map(|r| (r.bounds.width, r.bounds.height))
            .unwrap_or((1, 1));
        EdgeForm {
            width: (w / 3).max(1),
            height: h.clamp(1, 10),
            edge: Edge::North,
        }
    }

    fn draw_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("New Project").clicked() {
                    self.editor.new_project();
                    self.file = None;
                    self.notify("New project");
                }
                if ui.button("Clear").clicked() {
                    self.editor.clear();
                    self.notify("Canvas cleared");
                }
                if ui.button("Save").clicked() {
                    self.save_dialog();
                }
                if ui.button("Open").clicked() {
                    self.open_dialog();
                }
                ui.separator();
                let theme_label = if self.theme.name == "dark" { "Light" } else { "Dark" };
                if ui.button(theme_label).clicked() {
                    self.theme = self.theme.toggled();
                }
            });
        });
    }

    fn draw_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("tools")
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered_justified(|ui| {
                    if ui.button("Add Room").clicked() {
                        let anchor = self.editor.scene().rooms().first().map(Room::id);
                        self.open_form(Form::Room(RoomForm::new(anchor)));
                    }
                    let grid_label = if self.show_grid { "Hide Grid" } else { "Show Grid" };
                    if ui.button(grid_label).clicked() {
                        self.show_grid = !self.show_grid;
                    }
                    ui.separator();
                    if ui.button("Add Door").clicked() {
                        let form = Form::Door(self.edge_form_for_selection());
                        self.open_form(form);
                    }
                    if ui.button("Add Window").clicked() {
                        let form = Form::Window(self.edge_form_for_selection());
                        self.open_form(form);
                    }
                    if ui.button("Add Furniture").clicked() {
                        self.open_form(Form::Furniture(FurnitureForm {
                            kind: FurnitureKind::Bed,
                            x: 0,
                            y: 0,
                            width: 40,
                            height: 40,
                        }));
                    }
                    ui.separator();
                    if ui.button("Delete Room").clicked() {
                        match self.editor.delete_selected_room() {
                            Ok(room) => self.notify(format!("Deleted {}", room.name)),
                            Err(e) => self.notify(capitalize(&e.to_string())),
                        }
                    }
                });

                ui.add_space(12.0);
                match self.editor.selected() {
                    Some(room) => {
                        ui.label(egui::RichText::new(&room.name).strong());
                        ui.label(room.bounds.to_string());
                    }
                    None => {
                        ui.weak("No room selected");
                    }
                }
            });
    }

    fn draw_form(&mut self, ctx: &egui::Context) {
        if matches!(self.form, Form::None) {
            return;
        }
        let mut form = std::mem::replace(&mut self.form, Form::None);
        let rooms: Vec<(RoomId, String)> = self
            .editor
            .scene()
            .rooms()
            .iter()
            .map(|r| (r.id(), r.name.clone()))
            .collect();
        let selected = self.editor.selected().map(|r| r.bounds);
        let canvas = self.editor.settings().canvas();

        let mut open = true;
        let mut submitted = false;
        egui::Window::new(form.title())
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                match &mut form {
                    Form::None => {}
                    Form::Room(f) => room_form_ui(ui, f, &rooms, canvas),
                    Form::Door(f) | Form::Window(f) => {
                        if let Some(bounds) = selected {
                            edge_form_ui(ui, f, bounds);
                        }
                    }
                    Form::Furniture(f) => {
                        if let Some(bounds) = selected {
                            furniture_form_ui(ui, f, bounds);
                        }
                    }
                }
                ui.add_space(8.0);
                submitted = ui.button("OK").clicked();
            });

        if submitted {
            match self.submit(&form) {
                Ok(message) => {
                    self.notify(message);
                    return;
                }
                Err(e) => self.notify(capitalize(&e.to_string())),
            }
        }
        if open {
            self.form = form;
        }
    }

    fn submit(&mut self, form: &Form) -> floorplan::Result<String> {
        match form {
            Form::None => Ok(String::new()),
            Form::Room(f) => {
                let spacing = self.editor.settings().grid.spacing();
                let id = self.editor.add_room(f.to_new_room(spacing))?;
                let name = self
                    .editor
                    .scene()
                    .room(id)
                    .map(|r| r.name.clone())
                    .unwrap_or_default();
                Ok(format!("Added {name}"))
            }
            Form::Door(f) => {
                self.editor.add_door(f.width, f.height, f.edge)?;
                Ok(format!("Door added on {} wall", f.edge))
            }
            Form::Window(f) => {
                self.editor.add_window(f.width, f.height, f.edge)?;
                Ok(format!("Window added on {} wall", f.edge))
            }
            Form::Furniture(f) => {
                self.editor
                    .add_furniture(f.kind, Rect::new(f.x, f.y, f.width, f.height))?;
                Ok(format!("{} added", f.kind))
            }
        }
    }

    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let settings = *self.editor.settings();
        let size = egui::vec2(settings.canvas_width as f32, settings.canvas_height as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let origin = response.rect.min;

        self.handle_pointer(ui.ctx(), &response, origin);

        painter.rect_filled(response.rect, 0.0, self.theme.canvas);
        if self.show_grid {
            self.paint_grid(&painter, response.rect, settings.grid.spacing());
        }

        let scene = self.editor.scene();
        let selected = scene.selected_id();
        for room in scene.back_to_front() {
            self.paint_room(&painter, origin, room, selected == Some(room.id()));
        }
    }

    fn handle_pointer(&mut self, ctx: &egui::Context, response: &egui::Response, origin: egui::Pos2) {
        let (pressed, down, released, pos) = ctx.input(|i| {
            (
                i.pointer.button_pressed(egui::PointerButton::Primary),
                i.pointer.primary_down(),
                i.pointer.button_released(egui::PointerButton::Primary),
                i.pointer.interact_pos(),
            )
        });
        let local = pos.map(|pos| to_point(pos, origin));
        let steps = pointer_steps(
            pressed,
            down,
            released,
            response.hovered(),
            self.editor.gesture() != Gesture::Idle,
        );

        if let (true, Some(p)) = (steps.press, local) {
            self.editor.pointer_down(p);
        }
        if let (true, Some(p)) = (steps.drag, local) {
            self.editor.pointer_move(p);
            ctx.request_repaint();
        }
        if steps.release {
            self.finish_gesture();
        }

        let Some(local) = local else { return };
        let hint = match self.editor.gesture() {
            Gesture::Idle if response.hovered() => self.editor.hover(local),
            Gesture::Idle => return,
            Gesture::Pressed {
                mode: GestureMode::Resize(edges),
                ..
            }
            | Gesture::Resizing { edges, .. } => edges.cursor(),
            Gesture::Pressed { .. } | Gesture::Dragging { .. } => CursorHint::Move,
        };
        ctx.set_cursor_icon(cursor_icon(hint));
    }

    fn finish_gesture(&mut self) {
        match self.editor.pointer_up() {
            Release::Moved {
                resolution: Resolution::Relocated { conflictor, edge, .. },
                ..
            } => {
                let name = self.room_name(conflictor);
                self.notify(format!("Overlap: moved {} of {name}", edge.label().to_lowercase()));
            }
            Release::Moved {
                resolution: Resolution::Unresolved { conflictor, .. },
                ..
            } => {
                let name = self.room_name(conflictor);
                warn!(%conflictor, "dropped room still overlaps");
                self.notify(format!("No free spot next to {name}"));
            }
            _ => {}
        }
    }

    fn room_name(&self, id: RoomId) -> String {
        self.editor
            .scene()
            .room(id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn paint_grid(&self, painter: &egui::Painter, rect: egui::Rect, spacing: i32) {
        let step = spacing as f32;
        let stroke = egui::Stroke::new(1.0, self.theme.grid_line);
        let mut x = rect.left();
        while x <= rect.right() {
            painter.extend(egui::Shape::dashed_line(
                &[egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                stroke,
                DASH,
                DASH,
            ));
            x += step;
        }
        let mut y = rect.top();
        while y <= rect.bottom() {
            painter.extend(egui::Shape::dashed_line(
                &[egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                stroke,
                DASH,
                DASH,
            ));
            y += step;
        }
    }

    fn paint_room(&self, painter: &egui::Painter, origin: egui::Pos2, room: &Room, selected: bool) {
        let rect = to_screen(room.bounds, origin);
        painter.rect_filled(rect, 0.0, to_color32(room.color));
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(BORDER_WIDTH, self.theme.room_border),
            egui::StrokeKind::Inside,
        );

        for door in room.doors() {
            painter.rect_filled(to_screen(room.to_canvas(door.rect), origin), 0.0, self.theme.door);
        }
        for window in room.windows() {
            painter.rect_filled(
                to_screen(room.to_canvas(window.rect), origin),
                0.0,
                self.theme.window,
            );
        }
        for piece in room.furniture() {
            let r = to_screen(room.to_canvas(piece.rect), origin);
            paint_furniture(painter, r, piece.kind.shape(), self.theme.furniture(piece.kind));
        }

        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &room.name,
            egui::FontId::proportional(LABEL_SIZE),
            self.theme.room_label,
        );

        if selected {
            let handle = egui::Rect::from_min_size(
                rect.max - egui::vec2(HANDLE_SIZE, HANDLE_SIZE),
                egui::vec2(HANDLE_SIZE, HANDLE_SIZE),
            );
            painter.rect_filled(handle, 0.0, self.theme.selection);
        }
    }

    fn draw_toast(&self, ctx: &egui::Context, area: egui::Rect) {
        let Some(toast) = &self.toast else { return };
        let opacity = toast.opacity();
        if opacity <= 0.0 {
            return;
        }
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("toast"),
        ));
        let fg = Theme::with_opacity(self.theme.toast_foreground, opacity * 0.95);
        let bg = Theme::with_opacity(self.theme.toast_background, opacity * 0.9);
        let galley =
            painter.layout_no_wrap(toast.message.clone(), egui::FontId::proportional(16.0), fg);
        let padding = 12.0;
        let toast_rect = egui::Rect::from_min_size(
            egui::pos2(
                area.center().x - galley.rect.width() / 2.0 - padding,
                area.bottom() - galley.rect.height() - padding * 2.0 - 24.0,
            ),
            egui::vec2(
                galley.rect.width() + padding * 2.0,
                galley.rect.height() + padding * 2.0,
            ),
        );
        painter.rect_filled(toast_rect, 8.0, bg);
        painter.galley(
            egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding),
            galley,
            fg,
        );
        ctx.request_repaint();
    }
}

impl eframe::App for FloorPlanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
        ctx.set_visuals(if self.theme.name == "dark" {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.draw_toolbar(ctx);
        self.draw_side_panel(ctx);
        self.draw_form(ctx);

        let panel = egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(16.0))
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| self.draw_canvas(ui));
            });
        self.draw_toast(ctx, panel.response.rect);

        let title = self.display_title();
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }
}

fn room_form_ui(ui: &mut egui::Ui, f: &mut RoomForm, rooms: &[(RoomId, String)], canvas: Rect) {
    egui::Grid::new("room_form").num_columns(2).show(ui, |ui| {
        ui.label("Name");
        ui.text_edit_singleline(&mut f.name);
        ui.end_row();

        if !rooms.is_empty() {
            ui.label("Placement");
            ui.horizontal(|ui| {
                ui.radio_value(&mut f.relative, false, "Absolute");
                ui.radio_value(&mut f.relative, true, "Next to room");
            });
            ui.end_row();
        }

        if f.relative && !rooms.is_empty() {
            let current = rooms
                .iter()
                .find(|(id, _)| Some(*id) == f.anchor)
                .map(|(_, name)| name.as_str())
                .unwrap_or("");
            ui.label("Room");
            egui::ComboBox::from_id_salt("anchor")
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for (id, name) in rooms {
                        ui.selectable_value(&mut f.anchor, Some(*id), name);
                    }
                });
            ui.end_row();

            ui.label("Side");
            egui::ComboBox::from_id_salt("edge")
                .selected_text(f.edge.label())
                .show_ui(ui, |ui| {
                    for edge in Edge::ALL {
                        ui.selectable_value(&mut f.edge, edge, edge.label());
                    }
                });
            ui.end_row();

            ui.label("Kind");
            egui::ComboBox::from_id_salt("kind")
                .selected_text(f.kind.label())
                .show_ui(ui, |ui| {
                    for kind in RoomKind::ALL {
                        ui.selectable_value(&mut f.kind, kind, kind.label());
                    }
                });
            ui.end_row();
        } else {
            ui.label("Grid X");
            ui.add(egui::DragValue::new(&mut f.cell_x).range(0..=MAX_GRID_CELL));
            ui.end_row();
            ui.label("Grid Y");
            ui.add(egui::DragValue::new(&mut f.cell_y).range(0..=MAX_GRID_CELL));
            ui.end_row();
        }

        ui.label("Width");
        ui.add(egui::DragValue::new(&mut f.width).range(1..=canvas.width));
        ui.end_row();
        ui.label("Height");
        ui.add(egui::DragValue::new(&mut f.height).range(1..=canvas.height));
        ui.end_row();

        ui.label("Color");
        egui::ComboBox::from_id_salt("color")
            .selected_text(f.color.label())
            .show_ui(ui, |ui| {
                for color in NamedColor::ALL {
                    ui.selectable_value(&mut f.color, color, color.label());
                }
            });
        ui.end_row();
    });
}

fn edge_form_ui(ui: &mut egui::Ui, f: &mut EdgeForm, room: Rect) {
    egui::Grid::new("edge_form").num_columns(2).show(ui, |ui| {
        ui.label("Width");
        ui.add(egui::DragValue::new(&mut f.width).range(1..=room.width));
        ui.end_row();
        ui.label("Height");
        ui.add(egui::DragValue::new(&mut f.height).range(1..=room.height));
        ui.end_row();
        ui.label("Wall");
        egui::ComboBox::from_id_salt("wall")
            .selected_text(f.edge.label())
            .show_ui(ui, |ui| {
                for edge in Edge::ALL {
                    ui.selectable_value(&mut f.edge, edge, edge.label());
                }
            });
        ui.end_row();
    });
}

fn furniture_form_ui(ui: &mut egui::Ui, f: &mut FurnitureForm, room: Rect) {
    egui::Grid::new("furniture_form").num_columns(2).show(ui, |ui| {
        ui.label("Kind");
        egui::ComboBox::from_id_salt("furniture_kind")
            .selected_text(f.kind.label())
            .show_ui(ui, |ui| {
                for kind in FurnitureKind::ALL {
                    ui.selectable_value(&mut f.kind, kind, kind.label());
                }
            });
        ui.end_row();
        ui.label("X");
        ui.add(egui::DragValue::new(&mut f.x).range(0..=room.width));
        ui.end_row();
        ui.label("Y");
        ui.add(egui::DragValue::new(&mut f.y).range(0..=room.height));
        ui.end_row();
        ui.label("Width");
        ui.add(egui::DragValue::new(&mut f.width).range(1..=room.width));
        ui.end_row();
        ui.label("Height");
        ui.add(egui::DragValue::new(&mut f.height).range(1..=room.height));
        ui.end_row();
    });
}

fn paint_furniture(
    painter: &egui::Painter,
    rect: egui::Rect,
    shape: FurnitureShape,
    fill: egui::Color32,
) {
    let outline = egui::Stroke::new(1.0, egui::Color32::BLACK);
    match shape {
        FurnitureShape::Rectangle => {
            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, outline, egui::StrokeKind::Inside);
        }
        FurnitureShape::Ellipse => {
            painter.add(egui::Shape::ellipse_filled(rect.center(), rect.size() / 2.0, fill));
            painter.add(egui::Shape::ellipse_stroke(rect.center(), rect.size() / 2.0, outline));
        }
        FurnitureShape::HalfDisc => {
            // Flat side along the horizontal center line, arc on top.
            const SEGMENTS: usize = 24;
            let center = rect.center();
            let radius = rect.size() / 2.0;
            let points: Vec<egui::Pos2> = (0..=SEGMENTS)
                .map(|i| {
                    let t = std::f32::consts::PI * i as f32 / SEGMENTS as f32;
                    egui::pos2(center.x - radius.x * t.cos(), center.y - radius.y * t.sin())
                })
                .collect();
            painter.add(egui::Shape::convex_polygon(points, fill, outline));
        }
    }
}

/// What to feed the editor for one frame of primary-button input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PointerSteps {
    press: bool,
    drag: bool,
    release: bool,
}

/// A press and its release can land in the same frame, and a release can be
/// missed entirely (pointer left the window). A gesture only follows the
/// pointer while the button is held and ends as soon as it is not.
fn pointer_steps(
    pressed: bool,
    down: bool,
    released: bool,
    on_canvas: bool,
    active: bool,
) -> PointerSteps {
    let press = pressed && on_canvas;
    PointerSteps {
        press,
        drag: active && !pressed && down && !released,
        release: (active || press) && (released || !down),
    }
}

fn cursor_icon(hint: CursorHint) -> egui::CursorIcon {
    match hint {
        CursorHint::Default => egui::CursorIcon::Default,
        CursorHint::Move => egui::CursorIcon::Move,
        CursorHint::ResizeEast => egui::CursorIcon::ResizeEast,
        CursorHint::ResizeSouth => egui::CursorIcon::ResizeSouth,
        CursorHint::ResizeSouthEast => egui::CursorIcon::ResizeSouthEast,
    }
}

fn to_point(pos: egui::Pos2, origin: egui::Pos2) -> Point {
    let v = pos - origin;
    Point::new(v.x.round() as i32, v.y.round() as i32)
}

fn to_screen(r: Rect, origin: egui::Pos2) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(r.x as f32, r.y as f32),
        egui::vec2(r.width as f32, r.height as f32),
    )
}

fn to_color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn run(file: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load_or_default();
    let settings = config.editor_settings();
    let theme = Theme::from_name(config.theme());
    let show_grid = config.show_grid();

    let title = "floorplan";
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([
            settings.canvas_width as f32 + 260.0,
            settings.canvas_height as f32 + 100.0,
        ])
        .with_title(title);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| {
            let app = FloorPlanApp::new(Editor::new(settings), theme, show_grid, file);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_within_one_frame_presses_and_releases() {
        let steps = pointer_steps(true, false, true, true, false);
        assert_eq!(
            steps,
            PointerSteps {
                press: true,
                drag: false,
                release: true,
            }
        );
    }

    #[test]
    fn gesture_follows_only_a_held_button() {
        assert_eq!(
            pointer_steps(false, true, false, true, true),
            PointerSteps {
                press: false,
                drag: true,
                release: false,
            }
        );
        // Button came up without a release event reaching us.
        assert_eq!(
            pointer_steps(false, false, false, false, true),
            PointerSteps {
                press: false,
                drag: false,
                release: true,
            }
        );
    }

    #[test]
    fn press_frame_does_not_move_the_room() {
        let steps = pointer_steps(true, true, false, true, false);
        assert!(steps.press);
        assert!(!steps.drag);
        assert!(!steps.release);
    }

    #[test]
    fn idle_pointer_does_nothing() {
        assert_eq!(pointer_steps(false, false, false, true, false), PointerSteps::default());
        assert_eq!(pointer_steps(true, true, false, false, false), PointerSteps::default());
    }
}
