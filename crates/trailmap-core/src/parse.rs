//! Text input: `"x,y"` coordinates and ASCII terrain layouts.
//!
//! Routing itself only accepts validated [`Coordinate`]s; these helpers are
//! for the layer that reads user input.
//!
//! A layout is a block of equal-width lines, one character per cell:
//!
//! | Char | Cell |
//! |---|---|
//! | `.` | default material, cost 1 |
//! | `0`–`9` | walkable, that cost |
//! | `#` | obstacle |

use std::str::FromStr;

use crate::error::{LayoutError, ParseError};
use crate::geom::{Coordinate, Range};
use crate::material::Material;
use crate::terrain::TerrainMap;

/// Name given to `#` cells of a layout.
pub const WALL_NAME: &str = "wall";

/// Parse `"x,y"` into a coordinate. Components may be padded with
/// whitespace and must be non-negative integers.
pub fn parse_coordinate(text: &str) -> Result<Coordinate, ParseError> {
    let text = text.trim();
    if !text.contains(',') {
        return Err(ParseError::MissingSeparator);
    }
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 2 {
        return Err(ParseError::WrongArity(parts.len()));
    }
    let x = parse_component(parts[0])?;
    let y = parse_component(parts[1])?;
    Ok(Coordinate::new(x, y))
}

/// Like [`parse_coordinate`], additionally requiring the result to lie
/// inside `bounds`.
pub fn parse_coordinate_in(text: &str, bounds: Range) -> Result<Coordinate, ParseError> {
    let at = parse_coordinate(text)?;
    if !bounds.contains(at) {
        return Err(ParseError::OutsideMap {
            at,
            width: bounds.width(),
            height: bounds.height(),
        });
    }
    Ok(at)
}

fn parse_component(part: &str) -> Result<i32, ParseError> {
    let part = part.trim();
    match part.parse::<u32>().ok().and_then(|v| i32::try_from(v).ok()) {
        Some(v) => Ok(v),
        None => Err(ParseError::InvalidNumber(part.to_string())),
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s)
    }
}

impl TerrainMap {
    /// Build a map from an ASCII layout (format in [`crate::parse`]).
    ///
    /// Leading and trailing blank space around the whole block is ignored,
    /// individual lines are not trimmed.
    pub fn from_layout(layout: &str) -> Result<TerrainMap, LayoutError> {
        let lines: Vec<&str> = layout.trim().lines().collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        let mut cells = Vec::with_capacity(width * lines.len());

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let material = layout_material(ch).ok_or(LayoutError::InvalidChar {
                    ch,
                    at: Coordinate::new(x as i32, y as i32),
                })?;
                cells.push(material);
            }
        }

        Ok(TerrainMap::from_cells(
            Range::sized(width as i32, lines.len() as i32),
            cells,
        ))
    }

    /// Render the map back to layout text. Costs above 9 render as `+`,
    /// which [`from_layout`](Self::from_layout) does not accept.
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.height().max(0) as usize);
        for (p, m) in self.iter() {
            if p.x == 0 && p.y > 0 {
                out.push('\n');
            }
            out.push(layout_char(m));
        }
        out
    }
}

fn layout_material(ch: char) -> Option<Material> {
    match ch {
        '.' => Some(Material::default()),
        '#' => Some(Material::wall(WALL_NAME)),
        '0'..='9' => {
            let cost = ch.to_digit(10)?;
            Some(Material::default().with_cost(i64::from(cost)))
        }
        _ => None,
    }
}

fn layout_char(m: &Material) -> char {
    if m.is_obstacle() {
        return '#';
    }
    match m.cost() {
        1 => '.',
        c @ 0..=9 => char::from_digit(c, 10).unwrap_or('+'),
        _ => '+',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain() {
        assert_eq!(parse_coordinate("3,4"), Ok(Coordinate::new(3, 4)));
        assert_eq!(parse_coordinate(" 3 , 4 "), Ok(Coordinate::new(3, 4)));
        assert_eq!("0,0".parse::<Coordinate>(), Ok(Coordinate::ZERO));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(parse_coordinate("3 4"), Err(ParseError::MissingSeparator));
        assert_eq!(parse_coordinate("1,2,3"), Err(ParseError::WrongArity(3)));
        assert_eq!(
            parse_coordinate("a,2"),
            Err(ParseError::InvalidNumber("a".into()))
        );
        assert_eq!(
            parse_coordinate("-1,2"),
            Err(ParseError::InvalidNumber("-1".into()))
        );
        assert_eq!(
            parse_coordinate("1,"),
            Err(ParseError::InvalidNumber(String::new()))
        );
        assert_eq!(
            parse_coordinate("1,99999999999"),
            Err(ParseError::InvalidNumber("99999999999".into()))
        );
    }

    #[test]
    fn parse_in_bounds() {
        let b = Range::sized(5, 3);
        assert_eq!(parse_coordinate_in("4,2", b), Ok(Coordinate::new(4, 2)));
        assert_eq!(
            parse_coordinate_in("5,2", b),
            Err(ParseError::OutsideMap {
                at: Coordinate::new(5, 2),
                width: 5,
                height: 3
            })
        );
        assert_eq!(
            parse_coordinate_in("2,3", b).unwrap_err().to_string(),
            "(2, 3) is not inside the 5x3 map"
        );
    }

    const LAYOUT: &str = "\
..#.
.5#.
....";

    #[test]
    fn layout_parse() {
        let m = TerrainMap::from_layout(LAYOUT).unwrap();
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 3);
        assert!(m.get(Coordinate::new(2, 0)).unwrap().is_obstacle());
        assert_eq!(m.get(Coordinate::new(2, 1)).unwrap().name(), WALL_NAME);
        assert_eq!(m.get(Coordinate::new(1, 1)).unwrap().cost(), 5);
        assert_eq!(m.get(Coordinate::new(3, 2)).unwrap().cost(), 1);
    }

    #[test]
    fn layout_round_trip_text() {
        let m = TerrainMap::from_layout(LAYOUT).unwrap();
        assert_eq!(m.to_layout(), LAYOUT);
    }

    #[test]
    fn layout_inconsistent_width() {
        assert_eq!(
            TerrainMap::from_layout("...\n..\n..."),
            Err(LayoutError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn layout_invalid_char() {
        assert_eq!(
            TerrainMap::from_layout("..\n.x"),
            Err(LayoutError::InvalidChar {
                ch: 'x',
                at: Coordinate::new(1, 1)
            })
        );
    }

    #[test]
    fn large_costs_render_as_plus() {
        let mut m = TerrainMap::new(2, 1);
        m.get_mut(Coordinate::new(1, 0)).unwrap().set_cost(12);
        assert_eq!(m.to_layout(), ".+");
    }
}
