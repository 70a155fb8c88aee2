use anyhow::Result;
use colored::Colorize;

use floorplan::config::Config;

use crate::cli::ConfigCommands;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let settings = config.editor_settings();

    println!("{} {}", "Config file:".bold(), path.display());
    println!();
    println!("  {:<28} {}", "defaults.theme", config.theme());
    println!("  {:<28} {}", "defaults.show_grid", config.show_grid());
    println!("  {:<28} {}", "grid.spacing", settings.grid.spacing());
    println!("  {:<28} {}", "canvas.width", settings.canvas_width);
    println!("  {:<28} {}", "canvas.height", settings.canvas_height);
    println!("  {:<28} {}", "interaction.resize_margin", settings.resize_margin);
    println!("  {:<28} {}", "interaction.min_room_size", settings.min_room_size);
    if !path.exists() {
        println!();
        println!("{}", "(no config file yet, showing defaults)".dimmed());
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!("{} {key} = {value}", "Saved".green().bold());
    println!("  {}", path.display().to_string().dimmed());
    Ok(())
}
