use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::editor::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_MIN_ROOM_SIZE, DEFAULT_RESIZE_MARGIN,
    EditorSettings,
};
use crate::grid::{DEFAULT_SPACING, Grid};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "floorplan";
const MIN_CANVAS: i32 = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<CanvasConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<InteractionConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Width of the band along a room's right and bottom edges that resizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_margin: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_room_size: Option<i32>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `floorplan config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# floorplan configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn theme(&self) -> &str {
        self.defaults
            .as_ref()
            .and_then(|d| d.theme.as_deref())
            .unwrap_or("light")
    }

    pub fn show_grid(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.show_grid)
            .unwrap_or(true)
    }

    /// Engine settings with every unset key at its default.
    pub fn editor_settings(&self) -> EditorSettings {
        let spacing = self.grid.as_ref().and_then(|g| g.spacing);
        let canvas = self.canvas.as_ref();
        let interaction = self.interaction.as_ref();
        EditorSettings {
            grid: Grid::new(spacing.unwrap_or(DEFAULT_SPACING)),
            canvas_width: canvas
                .and_then(|c| c.width)
                .unwrap_or(DEFAULT_CANVAS_WIDTH),
            canvas_height: canvas
                .and_then(|c| c.height)
                .unwrap_or(DEFAULT_CANVAS_HEIGHT),
            resize_margin: interaction
                .and_then(|i| i.resize_margin)
                .unwrap_or(DEFAULT_RESIZE_MARGIN),
            min_room_size: interaction
                .and_then(|i| i.min_room_size)
                .unwrap_or(DEFAULT_MIN_ROOM_SIZE),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.show_grid" => {
                let show = match value {
                    "true" => true,
                    "false" => false,
                    _ => anyhow::bail!("Invalid show_grid: {value}. Must be 'true' or 'false'."),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .show_grid = Some(show);
            }
            "grid.spacing" => {
                let spacing = parse_at_least(key, value, 1)?;
                self.grid.get_or_insert_with(GridConfig::default).spacing = Some(spacing);
            }
            "canvas.width" => {
                let width = parse_at_least(key, value, MIN_CANVAS)?;
                self.canvas.get_or_insert_with(CanvasConfig::default).width = Some(width);
            }
            "canvas.height" => {
                let height = parse_at_least(key, value, MIN_CANVAS)?;
                self.canvas.get_or_insert_with(CanvasConfig::default).height = Some(height);
            }
            "interaction.resize_margin" => {
                let margin = parse_at_least(key, value, 1)?;
                self.interaction
                    .get_or_insert_with(InteractionConfig::default)
                    .resize_margin = Some(margin);
            }
            "interaction.min_room_size" => {
                let size = parse_at_least(key, value, 1)?;
                self.interaction
                    .get_or_insert_with(InteractionConfig::default)
                    .min_room_size = Some(size);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, defaults.show_grid, grid.spacing, canvas.width, canvas.height, interaction.resize_margin, interaction.min_room_size"
            ),
        }
        Ok(())
    }
}

fn parse_at_least(key: &str, value: &str, min: i32) -> Result<i32> {
    match value.parse::<i32>() {
        Ok(n) if n >= min => Ok(n),
        _ => anyhow::bail!("Invalid {key}: {value}. Must be an integer of at least {min}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gives_default_settings() {
        let config = Config::default();
        assert_eq!(config.editor_settings(), EditorSettings::default());
        assert_eq!(config.theme(), "light");
        assert!(config.show_grid());
    }

    #[test]
    fn set_validates_values() {
        let mut config = Config::default();
        config.set("grid.spacing", "25").unwrap();
        config.set("canvas.width", "1200").unwrap();
        config.set("defaults.show_grid", "false").unwrap();
        assert_eq!(config.editor_settings().grid.spacing(), 25);
        assert_eq!(config.editor_settings().canvas_width, 1200);
        assert!(!config.show_grid());

        assert!(config.set("grid.spacing", "0").is_err());
        assert!(config.set("canvas.height", "ten").is_err());
        assert!(config.set("defaults.theme", "sepia").is_err());
        assert!(config.set("grid.colour", "red").is_err());
    }

    #[test]
    fn yaml_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(FILENAME);
        let mut config = Config::default();
        config.set("defaults.theme", "dark").unwrap();
        config.set("interaction.resize_margin", "12").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme(), "dark");
        assert_eq!(loaded.editor_settings().resize_margin, 12);
        assert!(loaded.canvas.is_none());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join(FILENAME)).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }
}
