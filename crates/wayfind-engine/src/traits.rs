//! The grid-topology seam between the engine and the world it searches.

use wayfind_core::{GridMap, Point};

use crate::distance::manhattan;

/// Read-only view of a searchable grid.
///
/// The engine consults the topology on every step and never mutates it.
/// The start and goal cells are fixed for the lifetime of one search run;
/// change them only across a [`reset`](crate::Pathfinder::reset).
pub trait Topology {
    /// Whether `p` lies within the grid bounds.
    fn is_valid(&self, p: Point) -> bool;

    /// Whether `p` is walkable. False for out-of-bounds or blocked cells.
    fn is_open(&self, p: Point) -> bool;

    /// Append the open 4-directional neighbors of `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn open_neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// The cell every search starts from.
    fn start(&self) -> Point;

    /// The cell every search aims for.
    fn goal(&self) -> Point;

    /// Heuristic estimate of the distance from `p` to the goal.
    fn heuristic(&self, p: Point) -> i32 {
        manhattan(p, self.goal())
    }
}

impl<T: Topology + ?Sized> Topology for &T {
    fn is_valid(&self, p: Point) -> bool {
        (**self).is_valid(p)
    }

    fn is_open(&self, p: Point) -> bool {
        (**self).is_open(p)
    }

    fn open_neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        (**self).open_neighbors(p, buf);
    }

    fn start(&self) -> Point {
        (**self).start()
    }

    fn goal(&self) -> Point {
        (**self).goal()
    }

    fn heuristic(&self, p: Point) -> i32 {
        (**self).heuristic(p)
    }
}

impl Topology for GridMap {
    fn is_valid(&self, p: Point) -> bool {
        self.contains(p)
    }

    fn is_open(&self, p: Point) -> bool {
        self.is_open(p)
    }

    fn open_neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.open_neighbors(p, buf);
    }

    fn start(&self) -> Point {
        self.start()
    }

    fn goal(&self) -> Point {
        self.goal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_map_topology() {
        let map = GridMap::from_sketch("S#G").unwrap();
        assert!(map.is_valid(Point::new(1, 0)));
        assert!(!map.is_valid(Point::new(3, 0)));
        assert!(!Topology::is_open(&map, Point::new(1, 0)));
        assert_eq!(Topology::start(&map), Point::new(0, 0));
        assert_eq!(Topology::goal(&map), Point::new(2, 0));
        assert_eq!(map.heuristic(Point::new(0, 0)), 2);
    }

    #[test]
    fn borrowed_topology_delegates() {
        let map = GridMap::open(3, 3);
        let by_ref: &dyn Topology = &&map;
        assert_eq!(by_ref.goal(), Point::new(2, 2));
        assert_eq!(by_ref.heuristic(Point::ZERO), 4);
        let mut buf = Vec::new();
        by_ref.open_neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 4);
    }
}
