use log::{debug, trace};

use crate::config::SearchConfig;
use crate::distance::euclidean;
use crate::neighbors::Neighbors;
use crate::node::PathNode;
use crate::route::Route;
use crate::state::SearchState;
use crate::traits::CostMap;

/// Counters gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Coordinates expanded and closed.
    pub expanded: usize,
    /// Nodes accepted onto the frontier, replacements included.
    pub opened: usize,
    /// Neighbors discarded for reaching the cost limit.
    pub pruned: usize,
}

/// Outcome of [`Pathfinder::search`].
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The route, or `None` if the finish is unreachable.
    pub route: Option<Route>,
    pub stats: SearchStats,
}

/// A* least-cost routing over a [`CostMap`].
///
/// A `Pathfinder` holds only its configuration: every call builds its own
/// [`SearchState`] and nothing carries over between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pathfinder {
    config: SearchConfig,
}

impl Pathfinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Compute the least-cost route from `map.start()` to `map.finish()`.
    ///
    /// Returns `None` if no route stays under the cost limit.
    pub fn compute_path<M: CostMap + ?Sized>(&self, map: &M) -> Option<Route> {
        self.search(map).route
    }

    /// Like [`compute_path`](Self::compute_path), also reporting search
    /// counters.
    ///
    /// Stepping from a node to one of its 8 neighbors costs the straight-line
    /// step length plus the neighbor's cell cost. Neighbors outside the map
    /// or already closed are skipped, and so are steps whose accumulated cost
    /// reaches the cost limit.
    pub fn search<M: CostMap + ?Sized>(&self, map: &M) -> SearchReport {
        self.search_observed(map, |_| {})
    }

    /// The search loop proper. `on_expand` sees each node just before its
    /// neighbors are generated.
    pub(crate) fn search_observed<M, F>(&self, map: &M, mut on_expand: F) -> SearchReport
    where
        M: CostMap + ?Sized,
        F: FnMut(&PathNode),
    {
        let start = map.start();
        let finish = map.finish();
        let limit = self.config.cost_limit;

        let mut state = SearchState::new();
        let mut stats = SearchStats::default();
        let mut nbuf = Neighbors::new();

        let mut origin = PathNode::new(start, None);
        origin.set_costs(0.0, euclidean(start, finish));
        state.add_or_improve_open(origin);
        stats.opened += 1;

        let mut goal = None;
        while state.open_count() > 0 {
            let best_id = state
                .extract_best()
                .unwrap_or_else(|err| panic!("frontier bookkeeping out of sync: {err}"));
            let best = *state.node(best_id);
            let here = best.location();

            if here == finish {
                goal = Some(best_id);
                break;
            }

            on_expand(&best);
            trace!(
                "expand {here} g={:.3} f={:.3} open={}",
                best.g_cost(),
                best.f_cost(),
                state.open_count()
            );

            for &next in nbuf.all(here, |c| map.contains(c) && !state.is_closed(c)) {
                let g = best.g_cost() + euclidean(here, next) + map.cell_cost(next);
                if g >= limit {
                    stats.pruned += 1;
                    continue;
                }
                let mut node = PathNode::new(next, Some(best_id));
                node.set_costs(g, euclidean(next, finish));
                if state.add_or_improve_open(node) {
                    stats.opened += 1;
                }
            }

            let newly_closed = state.close(here);
            debug_assert!(newly_closed, "{here} expanded twice");
            stats.expanded += 1;
        }

        let route = goal.map(|id| Route::new(state.into_nodes(), id));
        match &route {
            Some(r) => debug!(
                "route {start} -> {finish}: cost {:.3}, {} steps, expanded {}, opened {}, pruned {}",
                r.cost(),
                r.len(),
                stats.expanded,
                stats.opened,
                stats.pruned
            ),
            None => debug!(
                "no route {start} -> {finish}: expanded {}, opened {}, pruned {}",
                stats.expanded, stats.opened, stats.pruned
            ),
        }

        SearchReport { route, stats }
    }
}

/// Compute a route with the default [`SearchConfig`].
pub fn compute_path<M: CostMap + ?Sized>(map: &M) -> Option<Route> {
    Pathfinder::default().compute_path(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{chebyshev, octile};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::f32::consts::SQRT_2;
    use wayfind_core::{COST_LIMIT, Coordinate, CostGrid};

    const EPS: f32 = 1e-4;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn open_grid(w: i32, h: i32, start: Coordinate, finish: Coordinate) -> CostGrid {
        CostGrid::new(w, h, start, finish).unwrap()
    }

    /// Exhaustive Dijkstra over the same step model, for cross-checking.
    fn reference_cost(map: &CostGrid, limit: f32) -> Option<f32> {
        let cells: Vec<Coordinate> = map.bounds().iter().collect();
        let mut dist = vec![f32::INFINITY; cells.len()];
        let mut done = vec![false; cells.len()];
        let idx = |p: Coordinate| (p.y * map.width() + p.x) as usize;
        dist[idx(map.start())] = 0.0;
        loop {
            let mut best = None;
            for (i, &d) in dist.iter().enumerate() {
                if !done[i] && d.is_finite() && best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((i, d));
                }
            }
            let (i, d) = best?;
            let here = cells[i];
            if here == map.finish() {
                return Some(d);
            }
            done[i] = true;
            for n in here.neighbors_8() {
                if !map.contains(n) || done[idx(n)] {
                    continue;
                }
                let g = d + euclidean(here, n) + map.cost(n).unwrap();
                if g < limit && g < dist[idx(n)] {
                    dist[idx(n)] = g;
                }
            }
        }
    }

    #[test]
    fn open_grid_diagonal() {
        let map = open_grid(5, 5, c(0, 0), c(4, 4));
        let route = compute_path(&map).unwrap();
        assert!((route.cost() - 4.0 * SQRT_2).abs() < EPS);
        assert_eq!(
            route.coordinates(),
            vec![c(0, 0), c(1, 1), c(2, 2), c(3, 3), c(4, 4)]
        );
    }

    #[test]
    fn wall_with_gap_forces_detour() {
        let mut map = open_grid(5, 5, c(0, 0), c(4, 4));
        map.fill_column(2, COST_LIMIT).unwrap();
        map.set_cost(c(2, 4), 0.0).unwrap();

        let route = compute_path(&map).unwrap();
        let path = route.coordinates();
        assert!(path.contains(&c(2, 4)));
        assert!(path.iter().all(|p| p.x != 2 || p.y == 4));
        assert!(route.cost() > 4.0 * SQRT_2);
        assert!((route.cost() - (4.0 + 2.0 * SQRT_2)).abs() < EPS);
    }

    #[test]
    fn full_wall_means_no_route() {
        let mut map = open_grid(5, 5, c(0, 0), c(4, 4));
        map.fill_column(2, COST_LIMIT).unwrap();
        let report = Pathfinder::default().search(&map);
        assert!(report.route.is_none());
        // Only columns 0 and 1 are reachable, each cell expanded once.
        assert_eq!(report.stats.expanded, 10);
        assert!(report.stats.pruned > 0);
    }

    #[test]
    fn start_equals_finish() {
        let map = open_grid(5, 5, c(2, 2), c(2, 2));
        let route = compute_path(&map).unwrap();
        assert_eq!(route.goal().g_cost(), 0.0);
        assert!(route.goal().predecessor().is_none());
        assert_eq!(route.coordinates(), vec![c(2, 2)]);
    }

    #[test]
    fn single_cell_grid() {
        let map = open_grid(1, 1, c(0, 0), c(0, 0));
        let report = Pathfinder::default().search(&map);
        let route = report.route.unwrap();
        assert_eq!(route.len(), 1);
        assert_eq!(route.cost(), 0.0);
        assert_eq!(report.stats.expanded, 0);
        assert_eq!(report.stats.opened, 1);
    }

    #[test]
    fn cell_costs_steer_the_route() {
        let map = CostGrid::parse(
            "
S9999
.....
9999F
",
        )
        .unwrap();
        let route = compute_path(&map).unwrap();
        let path = route.coordinates();
        assert!(path[1..path.len() - 1].iter().all(|p| p.y == 1));
        // Two diagonals in and out of the middle row, two straight steps.
        assert!((route.cost() - (2.0 + 2.0 * SQRT_2)).abs() < EPS);
    }

    #[test]
    fn lower_cost_limit_prunes_expensive_routes() {
        let map = CostGrid::parse("S5F").unwrap();
        let route = compute_path(&map).unwrap();
        assert!((route.cost() - 7.0).abs() < EPS);

        let tight = Pathfinder::new(SearchConfig::default().with_cost_limit(6.0));
        assert!(tight.compute_path(&map).is_none());
        assert_eq!(tight.config().cost_limit, 6.0);
    }

    #[test]
    fn g_cost_never_increases_walking_back() {
        let map = CostGrid::parse(
            "
S..3....
.##3.##.
..#..#..
.2#.1#.F
",
        )
        .unwrap();
        let route = compute_path(&map).unwrap();
        let gs: Vec<f32> = route.iter().map(PathNode::g_cost).collect();
        assert!(gs.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(*gs.last().unwrap(), 0.0);
        assert_eq!(route.coordinates()[0], map.start());
    }

    #[test]
    fn repeated_searches_agree() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut map = open_grid(12, 12, c(0, 0), c(11, 11));
        for p in map.bounds().iter() {
            let cost = [0.0, 0.0, 1.0, 3.0, COST_LIMIT][rng.random_range(0..5)];
            map.set_cost(p, cost).unwrap();
        }
        map.set_cost(c(0, 0), 0.0).unwrap();

        let a = compute_path(&map);
        let b = compute_path(&map);
        match (a, b) {
            (Some(a), Some(b)) => {
                assert_eq!(a.cost(), b.cost());
                assert_eq!(a.coordinates(), b.coordinates());
            }
            (None, None) => {}
            _ => panic!("searches disagree on reachability"),
        }
    }

    #[test]
    fn free_terrain_cost_is_octile_distance() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..25 {
            let start = c(rng.random_range(0..10), rng.random_range(0..10));
            let finish = c(rng.random_range(0..10), rng.random_range(0..10));
            let map = open_grid(10, 10, start, finish);
            let route = compute_path(&map).unwrap();
            assert!(
                (route.cost() - octile(start, finish)).abs() < EPS,
                "{start} -> {finish}: {} vs {}",
                route.cost(),
                octile(start, finish)
            );
            assert_eq!(route.len() as i32 - 1, chebyshev(start, finish));
        }
    }

    #[test]
    fn matches_exhaustive_search_on_random_terrain() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..30 {
            let start = c(rng.random_range(0..9), rng.random_range(0..9));
            let finish = c(rng.random_range(0..9), rng.random_range(0..9));
            let mut map = open_grid(9, 9, start, finish);
            for p in map.bounds().iter() {
                let cost = if rng.random_bool(0.25) {
                    COST_LIMIT
                } else {
                    f32::from(rng.random_range(0..4u8))
                };
                map.set_cost(p, cost).unwrap();
            }

            let got = compute_path(&map).map(|r| r.cost());
            let want = reference_cost(&map, COST_LIMIT);
            match (got, want) {
                (Some(g), Some(w)) => assert!((g - w).abs() < 1e-3, "round {round}: {g} vs {w}"),
                (None, None) => {}
                _ => panic!("round {round}: reachability differs ({got:?} vs {want:?})"),
            }
        }
    }

    #[test]
    fn searches_share_a_map_across_threads() {
        let mut map = open_grid(16, 16, c(0, 0), c(15, 15));
        map.fill_row(8, COST_LIMIT).unwrap();
        map.set_cost(c(15, 8), 0.0).unwrap();
        let finder = &Pathfinder::default();
        let map = &map;

        let costs: Vec<f32> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || finder.compute_path(map).map(|r| r.cost())))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap().unwrap())
                .collect()
        });
        assert!(costs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn no_coordinate_expanded_twice() {
        struct Watched<'a> {
            grid: &'a CostGrid,
            expanded: &'a RefCell<Vec<Coordinate>>,
        }

        impl CostMap for Watched<'_> {
            fn contains(&self, c: Coordinate) -> bool {
                self.grid.contains(c)
            }
            fn cell_cost(&self, c: Coordinate) -> f32 {
                assert!(
                    !self.expanded.borrow().contains(&c),
                    "{c} looked up again after its expansion"
                );
                self.grid.cost(c).unwrap()
            }
            fn start(&self) -> Coordinate {
                self.grid.start()
            }
            fn finish(&self) -> Coordinate {
                self.grid.finish()
            }
        }

        let mut grid = open_grid(7, 7, c(0, 0), c(6, 6));
        grid.fill_column(3, COST_LIMIT).unwrap();
        let expanded = RefCell::new(Vec::new());
        let map = Watched {
            grid: &grid,
            expanded: &expanded,
        };
        let report = Pathfinder::default()
            .search_observed(&map, |n| expanded.borrow_mut().push(n.location()));
        assert!(report.route.is_none());

        // Columns 0..3 are reachable; each of those cells is expanded once.
        let order = expanded.into_inner();
        let unique: HashSet<_> = order.iter().copied().collect();
        assert_eq!(order.len(), unique.len());
        assert_eq!(order.len(), report.stats.expanded);
        let reachable: HashSet<_> = grid.bounds().iter().filter(|p| p.x < 3).collect();
        assert_eq!(unique, reachable);
    }
}
