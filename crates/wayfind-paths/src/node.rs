use wayfind_core::Coordinate;

/// Stable handle to a [`PathNode`] in a search's node arena.
///
/// Handles are only meaningful for the arena that issued them: a
/// [`SearchState`](crate::SearchState) during the search, and the
/// [`Route`](crate::Route) it turns into afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A waypoint on the search frontier.
///
/// Each node records where it is, which node it was reached from, the cost
/// accumulated so far (`g`) and the heuristic estimate to the finish (`h`).
/// Following predecessors from any node walks back to the start node, the
/// only node without one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    location: Coordinate,
    predecessor: Option<NodeId>,
    g_cost: f32,
    h_cost: f32,
}

impl PathNode {
    /// Create a node at `location`, reached from `predecessor`.
    ///
    /// Both costs start at zero; assign them with [`set_costs`](Self::set_costs)
    /// before handing the node to the frontier.
    pub fn new(location: Coordinate, predecessor: Option<NodeId>) -> Self {
        Self {
            location,
            predecessor,
            g_cost: 0.0,
            h_cost: 0.0,
        }
    }

    /// Assign the cost so far and the estimate to the finish together.
    #[inline]
    pub fn set_costs(&mut self, g_cost: f32, h_cost: f32) {
        debug_assert!(g_cost >= 0.0, "negative g cost {g_cost}");
        self.g_cost = g_cost;
        self.h_cost = h_cost;
    }

    #[inline]
    pub fn location(&self) -> Coordinate {
        self.location
    }

    #[inline]
    pub fn predecessor(&self) -> Option<NodeId> {
        self.predecessor
    }

    /// Accumulated cost from the start.
    #[inline]
    pub fn g_cost(&self) -> f32 {
        self.g_cost
    }

    /// Heuristic estimate of the remaining cost.
    #[inline]
    pub fn h_cost(&self) -> f32 {
        self.h_cost
    }

    /// Frontier priority: `g + h`.
    #[inline]
    pub fn f_cost(&self) -> f32 {
        self.g_cost + self.h_cost
    }
}
