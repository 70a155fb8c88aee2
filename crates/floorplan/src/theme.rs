use eframe::egui::Color32;

use floorplan::FurnitureKind;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub canvas: Color32,
    pub grid_line: Color32,
    pub room_border: Color32,
    pub room_label: Color32,
    pub selection: Color32,
    pub door: Color32,
    pub window: Color32,
    pub bed: Color32,
    pub sink: Color32,
    pub dining_table: Color32,
    pub toast_background: Color32,
    pub toast_foreground: Color32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            canvas: Color32::from_rgb(0x2D, 0x2D, 0x2D),
            grid_line: Color32::from_rgb(0x44, 0x44, 0x44),
            room_border: Color32::from_rgb(0x0A, 0x0A, 0x0A),
            room_label: Color32::WHITE,
            selection: Color32::from_rgb(0x52, 0x94, 0xE2),
            door: Color32::DARK_GRAY,
            window: Color32::LIGHT_GRAY,
            bed: Color32::from_rgb(0xFF, 0xAF, 0xAF),
            sink: Color32::from_rgb(0x00, 0xFF, 0xFF),
            dining_table: Color32::from_rgb(0xFF, 0xC8, 0x00),
            toast_background: Color32::from_rgb(0x3A, 0x3A, 0x3A),
            toast_foreground: Color32::from_rgb(0xD4, 0xD4, 0xD4),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xF5, 0xF5, 0xF5),
            canvas: Color32::WHITE,
            grid_line: Color32::from_rgb(0xD0, 0xD0, 0xD0),
            room_border: Color32::BLACK,
            room_label: Color32::BLACK,
            selection: Color32::from_rgb(0x0F, 0x34, 0x60),
            door: Color32::DARK_GRAY,
            window: Color32::LIGHT_GRAY,
            bed: Color32::from_rgb(0xFF, 0xAF, 0xAF),
            sink: Color32::from_rgb(0x00, 0xFF, 0xFF),
            dining_table: Color32::from_rgb(0xFF, 0xC8, 0x00),
            toast_background: Color32::from_rgb(0x33, 0x33, 0x33),
            toast_foreground: Color32::WHITE,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn furniture(&self, kind: FurnitureKind) -> Color32 {
        match kind {
            FurnitureKind::Bed => self.bed,
            FurnitureKind::Sink => self.sink,
            FurnitureKind::DiningTable => self.dining_table,
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }
}
