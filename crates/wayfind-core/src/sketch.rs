//! Maps authored as ASCII art.
//!
//! A sketch is a rectangular block of text, one character per cell:
//! `.` open, `#` blocked, `S` the start cell, `G` the goal cell. Start and
//! goal must appear exactly once each and stand on open ground.

use std::fmt;

use crate::geom::Point;
use crate::map::{GridMap, Tile};

impl GridMap {
    /// Parse an ASCII sketch into a map.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines; every line must have the same width.
    pub fn from_sketch(s: &str) -> Result<Self, SketchError> {
        let s = s.trim();
        let mut width: i32 = -1;
        let mut tiles: Vec<Tile> = Vec::new();
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;

        let mut y: i32 = 0;
        for line in s.split('\n') {
            let mut x: i32 = 0;
            for ch in line.chars() {
                let p = Point::new(x, y);
                let tile = match ch {
                    '.' => Tile::Open,
                    '#' => Tile::Blocked,
                    'S' => {
                        if start.replace(p).is_some() {
                            return Err(SketchError::DuplicateStart(p));
                        }
                        Tile::Open
                    }
                    'G' => {
                        if goal.replace(p).is_some() {
                            return Err(SketchError::DuplicateGoal(p));
                        }
                        Tile::Open
                    }
                    _ => return Err(SketchError::InvalidGlyph { ch, pos: p }),
                };
                tiles.push(tile);
                x += 1;
            }
            if width < 0 {
                width = x;
            } else if x != width {
                return Err(SketchError::InconsistentWidth(s.to_string()));
            }
            y += 1;
        }

        let start = start.ok_or(SketchError::MissingStart)?;
        let goal = goal.ok_or(SketchError::MissingGoal)?;

        let mut map = GridMap::open(width.max(0), y);
        for (i, &t) in tiles.iter().enumerate() {
            let p = Point::new(i as i32 % width, i as i32 / width);
            map.set_tile(p, t);
        }
        map.set_start(start);
        map.set_goal(goal);
        Ok(map)
    }
}

/// Errors that can occur when parsing a map sketch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SketchError {
    /// Lines have inconsistent widths.
    InconsistentWidth(String),
    /// A character outside the glyph set was found.
    InvalidGlyph { ch: char, pos: Point },
    /// No `S` cell.
    MissingStart,
    /// No `G` cell.
    MissingGoal,
    /// More than one `S` cell.
    DuplicateStart(Point),
    /// More than one `G` cell.
    DuplicateGoal(Point),
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth(s) => {
                write!(f, "sketch: inconsistent line widths:\n{s}")
            }
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "sketch contains invalid glyph {ch:?} at {pos}")
            }
            Self::MissingStart => write!(f, "sketch has no start cell (S)"),
            Self::MissingGoal => write!(f, "sketch has no goal cell (G)"),
            Self::DuplicateStart(p) => write!(f, "sketch has a second start cell at {p}"),
            Self::DuplicateGoal(p) => write!(f, "sketch has a second goal cell at {p}"),
        }
    }
}

impl std::error::Error for SketchError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
S..#
.#.#
...G";

    #[test]
    fn parse_basics() {
        let m = GridMap::from_sketch(MAP).unwrap();
        assert_eq!(m.size(), Point::new(4, 3));
        assert_eq!(m.start(), Point::new(0, 0));
        assert_eq!(m.goal(), Point::new(3, 2));
        assert!(!m.is_open(Point::new(3, 0)));
        assert!(!m.is_open(Point::new(1, 1)));
        assert!(m.is_open(Point::new(2, 1)));
        assert_eq!(m.count_open(), 9);
    }

    #[test]
    fn start_and_goal_are_open() {
        let m = GridMap::from_sketch(MAP).unwrap();
        assert!(m.is_open(m.start()));
        assert!(m.is_open(m.goal()));
    }

    #[test]
    fn display_matches_sketch() {
        let m = GridMap::from_sketch(MAP).unwrap();
        assert_eq!(m.to_string(), MAP);
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let m = GridMap::from_sketch("\nS.G\n").unwrap();
        assert_eq!(m.size(), Point::new(3, 1));
    }

    #[test]
    fn inner_space_is_invalid() {
        let err = GridMap::from_sketch("S G").unwrap_err();
        assert!(matches!(err, SketchError::InvalidGlyph { ch: ' ', .. }));
    }

    #[test]
    fn inconsistent_width() {
        let err = GridMap::from_sketch("S.\n.G.").unwrap_err();
        assert!(matches!(err, SketchError::InconsistentWidth(_)));
    }

    #[test]
    fn invalid_glyph() {
        let err = GridMap::from_sketch("S?\n.G").unwrap_err();
        assert_eq!(
            err,
            SketchError::InvalidGlyph {
                ch: '?',
                pos: Point::new(1, 0)
            }
        );
    }

    #[test]
    fn missing_markers() {
        assert_eq!(
            GridMap::from_sketch("..\n.G").unwrap_err(),
            SketchError::MissingStart
        );
        assert_eq!(
            GridMap::from_sketch("S.\n..").unwrap_err(),
            SketchError::MissingGoal
        );
    }

    #[test]
    fn duplicate_markers() {
        assert_eq!(
            GridMap::from_sketch("SS\n.G").unwrap_err(),
            SketchError::DuplicateStart(Point::new(1, 0))
        );
        assert_eq!(
            GridMap::from_sketch("SG\nGG").unwrap_err(),
            SketchError::DuplicateGoal(Point::new(0, 1))
        );
    }
}
