//! The incremental search engine.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use wayfind_core::Point;

use crate::node::SearchNode;
use crate::policy::SearchMethod;
use crate::traits::Topology;

// ---------------------------------------------------------------------------
// SearchStatus
// ---------------------------------------------------------------------------

/// Where the engine is in its lifecycle.
///
/// `NoPath` and `PathFound` are terminal: only [`Pathfinder::reset`] leaves
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// Not stepping. The initial state, and the paused state.
    #[default]
    Stopped,
    /// Stepping whenever the time budget allows.
    Searching,
    /// The reachable component is exhausted and the goal was never reached.
    NoPath,
    /// The goal was expanded; [`Pathfinder::final_path`] is available.
    PathFound,
}

impl SearchStatus {
    /// Whether the search has ended, one way or the other.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::NoPath | Self::PathFound)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stopped => "Stopped",
            Self::Searching => "Searching",
            Self::NoPath => "No Path",
            Self::PathFound => "Path Found",
        })
    }
}

// ---------------------------------------------------------------------------
// TopologyError
// ---------------------------------------------------------------------------

/// A topology the engine cannot search: fail-fast configuration errors
/// caught at construction, not runtime conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyError {
    /// The start cell lies outside the grid.
    StartOutOfBounds(Point),
    /// The start cell is blocked.
    StartBlocked(Point),
    /// The goal cell lies outside the grid.
    GoalOutOfBounds(Point),
    /// The goal cell is blocked.
    GoalBlocked(Point),
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds(p) => write!(f, "start cell {p} is outside the grid"),
            Self::StartBlocked(p) => write!(f, "start cell {p} is blocked"),
            Self::GoalOutOfBounds(p) => write!(f, "goal cell {p} is outside the grid"),
            Self::GoalBlocked(p) => write!(f, "goal cell {p} is blocked"),
        }
    }
}

impl std::error::Error for TopologyError {}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Interval the engine waits between search steps unless configured
/// otherwise.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(100);

/// Upper clamp for the step interval. [`Pathfinder::set_step_interval`]
/// never accepts more.
pub const MAX_STEP_INTERVAL: Duration = Duration::from_secs(2);

/// An incremental pathfinder over a [`Topology`].
///
/// The engine owns three collections exclusively: the *frontier*
/// (discovered but not yet expanded nodes, in discovery order), the
/// *visited* set (fully expanded nodes), and the predecessor map used for
/// path reconstruction. A coordinate is in the frontier or the visited set
/// or neither, never both.
///
/// Discovery is single-shot: once a cell has been discovered, later —
/// possibly cheaper — routes to it are ignored. This keeps every node's
/// displayed distances stable for inspection, at a price: `BestFirst`
/// routinely returns non-shortest paths, and in grids with pathological
/// tie patterns even `AStar` can. `BreadthFirst` is unaffected.
///
/// The engine is synchronous and single-threaded: [`update`] performs at
/// most one unit of work per call. If shared across threads, treat the
/// whole engine as one mutual-exclusion unit.
///
/// [`update`]: Pathfinder::update
pub struct Pathfinder<T: Topology> {
    topology: T,
    method: SearchMethod,
    status: SearchStatus,
    frontier: Vec<SearchNode>,
    visited: Vec<SearchNode>,
    predecessors: HashMap<Point, Point>,
    total_steps: usize,
    step_interval: Duration,
    accumulated: Duration,
    // scratch buffer for neighbor queries
    nbuf: Vec<Point>,
}

impl<T: Topology> Pathfinder<T> {
    /// Bind an engine to a topology.
    ///
    /// Fails if the topology's start or goal cell is outside the grid or
    /// blocked; a goal that is open but unreachable is not an error and
    /// surfaces as [`SearchStatus::NoPath`] at runtime.
    pub fn new(topology: T) -> Result<Self, TopologyError> {
        let start = topology.start();
        if !topology.is_valid(start) {
            return Err(TopologyError::StartOutOfBounds(start));
        }
        if !topology.is_open(start) {
            return Err(TopologyError::StartBlocked(start));
        }
        let goal = topology.goal();
        if !topology.is_valid(goal) {
            return Err(TopologyError::GoalOutOfBounds(goal));
        }
        if !topology.is_open(goal) {
            return Err(TopologyError::GoalBlocked(goal));
        }

        let mut finder = Self {
            topology,
            method: SearchMethod::default(),
            status: SearchStatus::Stopped,
            frontier: Vec::new(),
            visited: Vec::new(),
            predecessors: HashMap::new(),
            total_steps: 0,
            step_interval: DEFAULT_STEP_INTERVAL,
            accumulated: Duration::ZERO,
            nbuf: Vec::with_capacity(4),
        };
        finder.reset();
        Ok(finder)
    }

    /// The bound topology.
    #[inline]
    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// Current lifecycle status.
    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// The active node-expansion strategy.
    #[inline]
    pub fn method(&self) -> SearchMethod {
        self.method
    }

    /// Select a strategy directly.
    pub fn set_method(&mut self, method: SearchMethod) {
        self.method = method;
    }

    /// Cycle to the next strategy in declaration order, wrapping.
    pub fn next_method(&mut self) {
        self.method = self.method.next();
    }

    /// Discovered-but-unexpanded nodes, in discovery order.
    #[inline]
    pub fn frontier(&self) -> &[SearchNode] {
        &self.frontier
    }

    /// Fully expanded nodes.
    #[inline]
    pub fn visited(&self) -> &[SearchNode] {
        &self.visited
    }

    /// How many search steps have run since the last reset.
    #[inline]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// The cell `p` was first discovered from, if any. The start cell has
    /// no predecessor.
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        self.predecessors.get(&p).copied()
    }

    /// The configured time budget between search steps.
    #[inline]
    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    /// Configure the time budget between search steps, clamped to
    /// `0..=`[`MAX_STEP_INTERVAL`]. Zero means one step per [`update`]
    /// call.
    ///
    /// [`update`]: Pathfinder::update
    pub fn set_step_interval(&mut self, interval: Duration) {
        self.step_interval = interval.min(MAX_STEP_INTERVAL);
    }

    /// Throw away all search progress and return to `Stopped`, with the
    /// frontier holding exactly the start cell.
    pub fn reset(&mut self) {
        self.frontier.clear();
        self.visited.clear();
        self.predecessors.clear();
        self.total_steps = 0;
        self.accumulated = Duration::ZERO;
        self.status = SearchStatus::Stopped;
        let start = self.topology.start();
        self.frontier
            .push(SearchNode::new(start, self.topology.heuristic(start), 0));
    }

    /// Flip between `Stopped` and `Searching`. No effect in a terminal
    /// state; call [`reset`](Pathfinder::reset) to search again.
    pub fn toggle_searching(&mut self) {
        self.status = match self.status {
            SearchStatus::Stopped => SearchStatus::Searching,
            SearchStatus::Searching => SearchStatus::Stopped,
            terminal => terminal,
        };
    }

    /// Advance the search under the configured time budget.
    ///
    /// Elapsed time accumulates across calls; once the engine is
    /// `Searching` and the accumulator reaches the step interval, exactly
    /// one [`step`](Pathfinder::step) runs and the accumulator returns to
    /// zero. At most one step per call, no matter how large `elapsed` is —
    /// a stalled host catches up in steps, not in bursts.
    pub fn update(&mut self, elapsed: Duration) {
        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.status == SearchStatus::Searching && self.accumulated >= self.step_interval {
            self.step();
            self.accumulated = Duration::ZERO;
        }
    }

    /// Run one search step: select a frontier node by the active policy,
    /// discover its open neighbors, and move it to the visited set.
    ///
    /// Works in `Stopped` as well, for single-step driving; does nothing
    /// in a terminal state. An empty frontier is not an error — it is the
    /// transition to `NoPath`.
    pub fn step(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        let Some(chosen) = self.method.select(&self.frontier) else {
            self.status = SearchStatus::NoPath;
            log::debug!(
                "search exhausted after {} steps with no route to {}",
                self.total_steps,
                self.topology.goal()
            );
            return;
        };
        let current = self.frontier[chosen];

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.topology.open_neighbors(current.pos, &mut nbuf);
        for &next in nbuf.iter() {
            if self.is_discovered(next) {
                continue;
            }
            self.frontier.push(SearchNode::new(
                next,
                self.topology.heuristic(next),
                current.dist_traveled + 1,
            ));
            self.predecessors.insert(next, current.pos);
        }
        self.nbuf = nbuf;

        if current.pos == self.topology.goal() {
            self.status = SearchStatus::PathFound;
            log::debug!(
                "path found after {} steps ({} traveled)",
                self.total_steps + 1,
                current.dist_traveled
            );
        }

        // Order-preserving removal; swapping would corrupt FIFO order.
        self.frontier.remove(chosen);
        self.visited.push(current);
        self.total_steps += 1;
    }

    /// The discovered route from start to goal, both inclusive.
    ///
    /// Empty unless the status is `PathFound`.
    pub fn final_path(&self) -> Vec<Point> {
        if self.status != SearchStatus::PathFound {
            return Vec::new();
        }
        let mut path = vec![self.topology.goal()];
        let mut cur = self.topology.goal();
        while let Some(&prev) = self.predecessors.get(&cur) {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }

    /// Whether `p` is in the frontier or the visited set.
    ///
    /// A cell is discovered iff it is the start or has a predecessor
    /// entry; nodes move from frontier to visited but never leave.
    fn is_discovered(&self, p: Point) -> bool {
        p == self.topology.start() || self.predecessors.contains_key(&p)
    }
}
