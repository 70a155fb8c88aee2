use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use floorplan::config::Config;
use floorplan::{Editor, Room, RoomId, Scene};

#[derive(Serialize)]
struct Report<'a> {
    rooms: &'a [Room],
    overlaps: Vec<(RoomId, RoomId)>,
}

pub fn run(file: &Path, json: bool) -> Result<()> {
    let mut editor = Editor::new(Config::load_or_default().editor_settings());
    editor.open(file)?;
    let scene = editor.scene();
    let overlaps = overlapping_pairs(scene);

    if json {
        let report = Report {
            rooms: scene.rooms(),
            overlaps,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rooms)",
        "Plan:".bold(),
        file.display(),
        scene.len()
    );
    println!();
    for room in scene.rooms() {
        let c = room.color;
        println!(
            "  {:<6} {:<24} {:<20} argb({},{},{},{})",
            room.id().to_string().dimmed(),
            room.name,
            room.bounds.to_string(),
            c.a,
            c.r,
            c.g,
            c.b
        );
    }

    println!();
    if overlaps.is_empty() {
        println!("{}", "No overlapping rooms".green());
    } else {
        println!("{}", format!("{} overlapping pair(s):", overlaps.len()).yellow().bold());
        for (a, b) in &overlaps {
            let name = |id: RoomId| scene.room(id).map(|r| r.name.as_str()).unwrap_or("?");
            println!("  {a} {} overlaps {b} {}", name(*a), name(*b));
        }
    }
    Ok(())
}

/// Every pair of rooms whose bounds intersect, in creation order.
fn overlapping_pairs(scene: &Scene) -> Vec<(RoomId, RoomId)> {
    let rooms = scene.rooms();
    let mut pairs = Vec::new();
    for (i, a) in rooms.iter().enumerate() {
        for b in &rooms[i + 1..] {
            if a.bounds.intersects(&b.bounds) {
                pairs.push((a.id(), b.id()));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_overlapping_pair_once() {
        let mut editor = Editor::default();
        editor
            .deserialize("A,0,0,100,100,-1\nB,50,50,100,100,-1\nC,300,0,40,40,-1\nD,90,90,20,20,-1\n")
            .unwrap();
        let ids: Vec<RoomId> = editor.scene().rooms().iter().map(Room::id).collect();
        assert_eq!(
            overlapping_pairs(editor.scene()),
            vec![(ids[0], ids[1]), (ids[0], ids[3]), (ids[1], ids[3])]
        );
    }
}
