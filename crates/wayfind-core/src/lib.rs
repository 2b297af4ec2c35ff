//! **wayfind-core** — Grid geometry and tile maps for the wayfind
//! pathfinding engine.
//!
//! This crate provides the world the engine searches: integer geometry
//! primitives ([`Point`], [`Range`]), a binary open/blocked tile map with
//! designated start and goal cells ([`GridMap`]), ASCII sketch parsing for
//! authoring maps in tests and demos, and random obstacle scattering.

pub mod geom;
pub mod map;
pub mod mapgen;
pub mod sketch;

pub use geom::{Point, Range};
pub use map::{GridMap, Tile};
pub use sketch::SketchError;
