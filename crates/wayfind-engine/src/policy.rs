//! Node-selection policies: which frontier node to expand next.
//!
//! Each policy is a pure function over the frontier slice returning the
//! index of the chosen node, or `None` when the frontier is empty — the
//! signal that the search is exhausted. All scans use strict comparisons,
//! so ties resolve deterministically in favor of the earliest-inserted
//! node (except where noted), and none of the policies consult the
//! visited set.

use crate::node::SearchNode;

/// The active node-expansion strategy, cyclable in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMethod {
    /// Uninformed FIFO expansion. Finds a fewest-edges path.
    #[default]
    BreadthFirst,
    /// Greedy expansion by heuristic distance to the goal. Finds *a* path
    /// quickly; not necessarily a shortest one.
    BestFirst,
    /// Expansion by `f = dist_traveled + dist_to_goal`. Finds a
    /// fewest-edges path under an admissible heuristic.
    AStar,
}

impl SearchMethod {
    /// The next method in declaration order, wrapping at the end.
    pub const fn next(self) -> Self {
        match self {
            Self::BreadthFirst => Self::BestFirst,
            Self::BestFirst => Self::AStar,
            Self::AStar => Self::BreadthFirst,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth-First",
            Self::BestFirst => "Best-First",
            Self::AStar => "A*",
        }
    }

    /// Pick the frontier node this policy would expand next.
    pub(crate) fn select(self, frontier: &[SearchNode]) -> Option<usize> {
        match self {
            Self::BreadthFirst => first_inserted(frontier),
            Self::BestFirst => min_dist_to_goal(frontier),
            Self::AStar => min_total_cost(frontier),
        }
    }
}

impl std::fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// FIFO: the earliest-inserted node. Neighbors are always appended at the
/// back, so this reproduces classic queue-based breadth-first order.
fn first_inserted(frontier: &[SearchNode]) -> Option<usize> {
    if frontier.is_empty() { None } else { Some(0) }
}

/// Greedy: the node with the smallest heuristic distance to the goal.
/// Strictly-less-than scan, so the earliest node among equals wins.
fn min_dist_to_goal(frontier: &[SearchNode]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, node) in frontier.iter().enumerate() {
        match best {
            Some(b) if node.dist_to_goal >= frontier[b].dist_to_goal => {}
            _ => best = Some(i),
        }
    }
    best
}

/// A*: the node with the smallest `f = g + h`. Among equal `f`, the node
/// with strictly larger `dist_traveled` wins — the deeper, more committed
/// route over the more heuristic-optimistic one.
fn min_total_cost(frontier: &[SearchNode]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, node) in frontier.iter().enumerate() {
        let Some(b) = best else {
            best = Some(i);
            continue;
        };
        let f = node.total_cost();
        let best_f = frontier[b].total_cost();
        if f < best_f || (f == best_f && node.dist_traveled > frontier[b].dist_traveled) {
            best = Some(i);
        }
    }
    best
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn method_round_trip() {
        let json = serde_json::to_string(&SearchMethod::AStar).unwrap();
        let back: SearchMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SearchMethod::AStar);
    }
}
