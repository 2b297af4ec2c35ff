use wayfind_core::Point;

/// A discovered cell, as the search sees it.
///
/// Both distances are fixed at discovery time: `dist_to_goal` is the
/// heuristic estimate from [`Topology::heuristic`](crate::Topology), and
/// `dist_traveled` counts the edges walked from the start along the route
/// this cell was first reached by. Neither is ever recomputed, even if a
/// shorter route to the same cell turns up later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub pos: Point,
    pub dist_to_goal: i32,
    pub dist_traveled: i32,
}

impl SearchNode {
    /// Create a new node.
    pub const fn new(pos: Point, dist_to_goal: i32, dist_traveled: i32) -> Self {
        Self {
            pos,
            dist_to_goal,
            dist_traveled,
        }
    }

    /// The A* ranking value `f = g + h`: edges traveled plus the heuristic
    /// estimate of edges remaining.
    #[inline]
    pub const fn total_cost(self) -> i32 {
        self.dist_traveled + self.dist_to_goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_cost_sums_components() {
        let n = SearchNode::new(Point::new(2, 3), 5, 4);
        assert_eq!(n.total_cost(), 9);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_node_round_trip() {
        let node = SearchNode::new(Point::new(3, 7), 6, 2);
        let json = serde_json::to_string(&node).unwrap();
        let back: SearchNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
