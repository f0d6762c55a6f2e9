use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use wayfind_core::Coordinate;

use crate::error::SearchError;
use crate::node::{NodeId, PathNode};

/// Heap entry pointing into the node arena.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the smallest `f` first,
/// then the smallest `h`, then the earliest insertion.
#[derive(Clone, Copy)]
struct OpenEntry {
    id: NodeId,
    f: f32,
    h: f32,
    seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Open/closed bookkeeping for a single search.
///
/// Nodes live in an arena and are referred to by [`NodeId`]. The open set is
/// a location → node map backed by a binary heap; a node that loses its slot
/// to a cheaper one stays in the heap and is skipped when popped, so both
/// insertion and extraction are logarithmic.
///
/// Invariants:
/// - a coordinate is never open and closed at the same time;
/// - the open node for a coordinate has the lowest `g` seen for it.
#[derive(Default)]
pub struct SearchState {
    nodes: Vec<PathNode>,
    open: HashMap<Coordinate, NodeId>,
    heap: BinaryHeap<OpenEntry>,
    closed: HashSet<Coordinate>,
    seq: u64,
}

impl SearchState {
    /// Create empty bookkeeping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty bookkeeping sized for about `cells` coordinates.
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cells),
            open: HashMap::with_capacity(cells),
            heap: BinaryHeap::with_capacity(cells),
            closed: HashSet::with_capacity(cells),
            seq: 0,
        }
    }

    /// Offer `node` to the frontier.
    ///
    /// The node is kept if its location is not open yet, or if it reaches
    /// that location with a strictly lower `g` than the current open node,
    /// which it then replaces. Otherwise it is dropped. Returns whether the
    /// node was kept.
    ///
    /// The caller must not pass a node whose location is already closed.
    pub fn add_or_improve_open(&mut self, node: PathNode) -> bool {
        let loc = node.location();
        debug_assert!(!self.closed.contains(&loc), "{loc} is already closed");

        if let Some(&cur) = self.open.get(&loc) {
            if self.nodes[cur.index()].g_cost() <= node.g_cost() {
                return false;
            }
        }

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.open.insert(loc, id);
        self.heap.push(OpenEntry {
            id,
            f: node.f_cost(),
            h: node.h_cost(),
            seq: self.seq,
        });
        self.seq += 1;
        true
    }

    /// Remove and return the open node with the lowest `f`.
    ///
    /// Ties go to the lower `h`, then to the node opened first.
    pub fn extract_best(&mut self) -> Result<NodeId, SearchError> {
        while let Some(entry) = self.heap.pop() {
            let loc = self.nodes[entry.id.index()].location();
            // Superseded by a cheaper node, or already extracted.
            if self.open.get(&loc) != Some(&entry.id) {
                continue;
            }
            self.open.remove(&loc);
            return Ok(entry.id);
        }
        Err(SearchError::EmptyFrontier)
    }

    /// Mark `location` as fully expanded, dropping any open node for it.
    ///
    /// Returns `false` if it was already closed.
    pub fn close(&mut self, location: Coordinate) -> bool {
        self.open.remove(&location);
        self.closed.insert(location)
    }

    #[inline]
    pub fn is_closed(&self, location: Coordinate) -> bool {
        self.closed.contains(&location)
    }

    /// Whether `location` currently has an open node.
    #[inline]
    pub fn is_open(&self, location: Coordinate) -> bool {
        self.open.contains_key(&location)
    }

    /// Number of open coordinates.
    #[inline]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Number of closed coordinates.
    #[inline]
    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    /// Look up a node issued by this state.
    #[inline]
    pub fn node(&self, id: NodeId) -> &PathNode {
        &self.nodes[id.index()]
    }

    /// Give up the bookkeeping and keep only the node arena.
    pub(crate) fn into_nodes(self) -> Vec<PathNode> {
        self.nodes
    }
}
