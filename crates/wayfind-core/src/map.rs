//! The searchable world: a rectangular map of open/blocked tiles.

use std::fmt;

use crate::geom::{Point, Range};

/// A map cell: either walkable or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Blocked,
}

/// A rectangular grid of [`Tile`]s with designated start and goal cells.
///
/// Storage is a flat row-major vector. The map is plain data: search
/// engines read it, set-up code mutates it, and the two never overlap in
/// time.
#[derive(Debug, Clone)]
pub struct GridMap {
    bounds: Range,
    width: usize,
    tiles: Vec<Tile>,
    start: Point,
    goal: Point,
}

impl GridMap {
    /// Create a fully open map of the given size, with the start in the
    /// top-left corner and the goal in the bottom-right corner.
    pub fn open(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            bounds,
            width: bounds.width() as usize,
            tiles: vec![Tile::Open; bounds.len()],
            start: bounds.min,
            goal: Point::new(bounds.max.x - 1, bounds.max.y - 1),
        }
    }

    /// The bounding range of the map.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Whether `p` lies within the map bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The tile at `p`, or `None` if out of bounds.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.idx(p).map(|i| self.tiles[i])
    }

    /// Set the tile at `p`. Does nothing if out of bounds.
    pub fn set_tile(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.idx(p) {
            self.tiles[i] = tile;
        }
    }

    /// Mark the tile at `p` as blocked. Does nothing if out of bounds.
    pub fn block(&mut self, p: Point) {
        self.set_tile(p, Tile::Blocked);
    }

    /// Whether `p` is an in-bounds, walkable cell.
    pub fn is_open(&self, p: Point) -> bool {
        self.tile(p) == Some(Tile::Open)
    }

    /// Number of open cells in the map.
    pub fn count_open(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == Tile::Open).count()
    }

    /// The designated start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The designated goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Move the start cell.
    pub fn set_start(&mut self, p: Point) {
        self.start = p;
    }

    /// Move the goal cell.
    pub fn set_goal(&mut self, p: Point) {
        self.goal = p;
    }

    /// Append the open 4-directional neighbors of `p` into `buf`.
    ///
    /// The caller clears `buf` before calling. Out-of-bounds and blocked
    /// neighbors are excluded.
    pub fn open_neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.width + x)
    }
}

impl fmt::Display for GridMap {
    /// Render the map with the sketch glyph set: `S` start, `G` goal,
    /// `#` blocked, `.` open.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in self.bounds.min.y..self.bounds.max.y {
            for x in self.bounds.min.x..self.bounds.max.x {
                let p = Point::new(x, y);
                let ch = if p == self.start {
                    'S'
                } else if p == self.goal {
                    'G'
                } else if self.is_open(p) {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{ch}")?;
            }
            if y < self.bounds.max.y - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
