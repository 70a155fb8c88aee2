//! Plain-text plan files.
//!
//! One room per line: `name,x,y,width,height,colorARGB`, where `colorARGB` is
//! the room color packed into a signed 32-bit integer. Doors, windows and
//! furniture are not stored.

use crate::error::{EditorError, ParseErrorKind, Result};
use crate::geometry::Rect;
use crate::model::{Color, Scene};

const FIELD_COUNT: usize = 6;

/// One room as it appears in a plan file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    pub name: String,
    pub bounds: Rect,
    pub color: Color,
}

/// Write every room of `scene`, in creation order.
pub fn encode(scene: &Scene) -> String {
    scene
        .rooms()
        .iter()
        .map(|room| {
            encode_line(&RoomRecord {
                name: room.name.clone(),
                bounds: room.bounds,
                color: room.color,
            })
        })
        .collect()
}

pub fn encode_line(record: &RoomRecord) -> String {
    let b = record.bounds;
    format!(
        "{},{},{},{},{},{}\n",
        record.name,
        b.x,
        b.y,
        b.width,
        b.height,
        record.color.to_argb()
    )
}

/// Parse a whole plan. Any bad line fails the whole parse; blank lines are skipped.
pub fn decode(text: &str) -> Result<Vec<RoomRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| decode_line(line).map_err(|kind| EditorError::Parse { line: i + 1, kind }))
        .collect()
}

fn decode_line(line: &str) -> std::result::Result<RoomRecord, ParseErrorKind> {
    let fields: Vec<&str> = line.trim_end_matches('\r').split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseErrorKind::WrongFieldCount(fields.len()));
    }
    let x = int_field("x", fields[1])?;
    let y = int_field("y", fields[2])?;
    let width = int_field("width", fields[3])?;
    let height = int_field("height", fields[4])?;
    let color = int_field("color", fields[5])?;
    Ok(RoomRecord {
        name: fields[0].to_string(),
        bounds: Rect::new(x, y, width, height),
        color: Color::from_argb(color),
    })
}

fn int_field(field: &'static str, value: &str) -> std::result::Result<i32, ParseErrorKind> {
    value.parse().map_err(|_| ParseErrorKind::NotAnInteger {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NamedColor;

    #[test]
    fn encodes_one_line_per_room() {
        let mut scene = Scene::new();
        scene.insert("Hall", Rect::new(0, 0, 100, 100), Color::from_argb(-1));
        scene.insert("Den", Rect::new(120, 0, 80, 60), NamedColor::Red.color());
        let text = encode(&scene);
        assert_eq!(text, "Hall,0,0,100,100,-1\nDen,120,0,80,60,-922787001\n");
    }

    #[test]
    fn decodes_records_in_order() {
        let rooms = decode("Hall,0,0,100,100,-1\nDen,120,0,80,60,-922787001\n").unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name, "Hall");
        assert_eq!(rooms[1].bounds, Rect::new(120, 0, 80, 60));
        assert_eq!(rooms[1].color, NamedColor::Red.color());
    }

    #[test]
    fn tolerates_crlf_and_blank_lines() {
        let rooms = decode("A,0,0,20,20,-1\r\n\r\nB,40,0,20,20,-1\r\n").unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[1].name, "B");
    }

    #[test]
    fn non_integer_field_is_reported() {
        let err = decode("Kitchen,10,abc,100,100,-1").unwrap_err();
        match err {
            EditorError::Parse { line, kind } => {
                assert_eq!(line, 1);
                assert_eq!(
                    kind,
                    ParseErrorKind::NotAnInteger {
                        field: "y",
                        value: "abc".to_string(),
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn wrong_field_count_is_reported_with_line() {
        let err = decode("A,0,0,20,20,-1\nB,0,0,20\n").unwrap_err();
        assert!(matches!(
            err,
            EditorError::Parse {
                line: 2,
                kind: ParseErrorKind::WrongFieldCount(4)
            }
        ));
    }

    #[test]
    fn name_with_comma_breaks_field_count() {
        let err = decode("Living, Dining,0,0,20,20,-1").unwrap_err();
        assert!(matches!(
            err,
            EditorError::Parse {
                kind: ParseErrorKind::WrongFieldCount(7),
                ..
            }
        ));
    }

    #[test]
    fn empty_text_is_an_empty_plan() {
        assert!(decode("").unwrap().is_empty());
    }
}
