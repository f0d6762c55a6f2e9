use wayfind_core::Coordinate;

use crate::node::{NodeId, PathNode};

/// A found route: the node arena of the search plus its goal node.
///
/// The goal node's predecessor chain, read from goal to start, is the route
/// in reverse.
#[derive(Debug, Clone)]
pub struct Route {
    nodes: Vec<PathNode>,
    goal: NodeId,
}

impl Route {
    pub(crate) fn new(nodes: Vec<PathNode>, goal: NodeId) -> Self {
        Self { nodes, goal }
    }

    /// The node at the finish location.
    #[inline]
    pub fn goal(&self) -> &PathNode {
        &self.nodes[self.goal.index()]
    }

    /// Look up any node of the search by handle.
    #[inline]
    pub fn node(&self, id: NodeId) -> &PathNode {
        &self.nodes[id.index()]
    }

    /// The node `node` was reached from, or `None` for the start node.
    #[inline]
    pub fn predecessor(&self, node: &PathNode) -> Option<&PathNode> {
        node.predecessor().map(|id| self.node(id))
    }

    /// Total cost of the route (the goal's `g`).
    #[inline]
    pub fn cost(&self) -> f32 {
        self.goal().g_cost()
    }

    /// Walk the route from the goal back to the start.
    pub fn iter(&self) -> RouteIter<'_> {
        RouteIter {
            route: self,
            next: Some(self.goal),
        }
    }

    /// The route's coordinates from start to finish, both included.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        let mut path: Vec<Coordinate> = self.iter().map(PathNode::location).collect();
        path.reverse();
        path
    }

    /// Number of nodes on the route, start and finish included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always `false`: a route holds at least its start node.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a PathNode;
    type IntoIter = RouteIter<'a>;

    fn into_iter(self) -> RouteIter<'a> {
        self.iter()
    }
}

/// Goal-to-start iterator over the nodes of a [`Route`].
pub struct RouteIter<'a> {
    route: &'a Route,
    next: Option<NodeId>,
}

impl<'a> Iterator for RouteIter<'a> {
    type Item = &'a PathNode;

    fn next(&mut self) -> Option<&'a PathNode> {
        let node = self.route.node(self.next?);
        self.next = node.predecessor();
        Some(node)
    }
}
