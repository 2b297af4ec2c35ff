//! **wayfind-engine** — Incremental pathfinding on 2D grids.
//!
//! This crate discovers a route between the start and goal cells of a grid
//! using one of three interchangeable node-expansion strategies:
//!
//! - **Breadth-first** — uninformed FIFO expansion; shortest path
//!   guaranteed on the unit-cost grid.
//! - **Best-first** — greedy expansion by heuristic distance to the goal;
//!   fast progress, no shortest-path guarantee.
//! - **A\*** — expansion by traveled-plus-estimated cost; shortest path
//!   guaranteed under the admissible Manhattan heuristic.
//!
//! Unlike a one-shot path query, the [`Pathfinder`] advances one node
//! expansion at a time under a configurable time budget, and exposes its
//! frontier, visited set and statistics between steps so a host can draw
//! or inspect the search as it unfolds. Drive it from any single-threaded
//! loop:
//!
//! ```
//! use wayfind_core::GridMap;
//! use wayfind_engine::{Pathfinder, SearchStatus};
//!
//! let map = GridMap::from_sketch("S..\n.#.\n..G").unwrap();
//! let mut finder = Pathfinder::new(map).unwrap();
//! finder.toggle_searching();
//! while !finder.status().is_terminal() {
//!     finder.step();
//! }
//! assert_eq!(finder.status(), SearchStatus::PathFound);
//! assert_eq!(finder.final_path().len(), 5);
//! ```

mod distance;
mod engine;
mod node;
mod policy;
mod traits;

pub use distance::manhattan;
pub use engine::{
    DEFAULT_STEP_INTERVAL, MAX_STEP_INTERVAL, Pathfinder, SearchStatus, TopologyError,
};
pub use node::SearchNode;
pub use policy::SearchMethod;
pub use traits::Topology;
