use wayfind_core::{Coordinate, CostGrid};

/// Read-only view of the surface being searched.
///
/// The search only ever calls these methods; it never mutates the map, so a
/// `Sync` map can serve concurrent searches.
///
/// # Preconditions
///
/// - `start()` and `finish()` satisfy `contains`.
/// - `cell_cost` is non-negative for every contained coordinate. Each step
///   then costs at least its straight-line length, which keeps the Euclidean
///   heuristic admissible. Cheaper-than-geometric costs void the optimality
///   guarantee.
pub trait CostMap {
    /// Whether `c` lies within the traversable grid.
    fn contains(&self, c: Coordinate) -> bool;

    /// Cost of entering `c`. Obstacles report a cost at or near the search's
    /// cost limit.
    fn cell_cost(&self, c: Coordinate) -> f32;

    /// Where the route begins.
    fn start(&self) -> Coordinate;

    /// Where the route ends.
    fn finish(&self) -> Coordinate;
}

impl CostMap for CostGrid {
    #[inline]
    fn contains(&self, c: Coordinate) -> bool {
        CostGrid::contains(self, c)
    }

    #[inline]
    fn cell_cost(&self, c: Coordinate) -> f32 {
        self.cost(c).unwrap_or(f32::INFINITY)
    }

    #[inline]
    fn start(&self) -> Coordinate {
        CostGrid::start(self)
    }

    #[inline]
    fn finish(&self) -> Coordinate {
        CostGrid::finish(self)
    }
}
