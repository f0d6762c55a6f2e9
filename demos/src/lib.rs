//! Shared plumbing for the `route` demo: load an ASCII cost map, search it,
//! and present the result as text or JSON.

use serde::Serialize;
use wayfind_core::{Coordinate, CostGrid, GridError};
use wayfind_paths::{Pathfinder, SearchReport, SearchStats, octile};

/// Serializable summary of one search.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub start: Coordinate,
    pub finish: Coordinate,
    pub found: bool,
    /// Route cost, absent when no route was found.
    pub cost: Option<f32>,
    /// Cost of the same trip over free terrain.
    pub free_cost: f32,
    pub route: Vec<Coordinate>,
    pub stats: SearchStats,
}

impl RouteSummary {
    pub fn new(map: &CostGrid, report: &SearchReport) -> Self {
        let route = report
            .route
            .as_ref()
            .map(|r| r.coordinates())
            .unwrap_or_default();
        Self {
            start: map.start(),
            finish: map.finish(),
            found: report.route.is_some(),
            cost: report.route.as_ref().map(|r| r.cost()),
            free_cost: octile(map.start(), map.finish()),
            route,
            stats: report.stats,
        }
    }

    /// Human-readable report: the map with the route drawn in, then a
    /// short summary.
    pub fn render(&self, map: &CostGrid) -> String {
        let mut out = map.render(&self.route);
        match self.cost {
            Some(cost) => out.push_str(&format!(
                "route {} -> {}: {} cells, cost {:.3} (free terrain {:.3})\n",
                self.start,
                self.finish,
                self.route.len(),
                cost,
                self.free_cost
            )),
            None => out.push_str(&format!("no route {} -> {}\n", self.start, self.finish)),
        }
        out.push_str(&format!(
            "expanded {}, opened {}, pruned {}\n",
            self.stats.expanded, self.stats.opened, self.stats.pruned
        ));
        out
    }
}

/// Parse `text` as a cost map and search it with `finder`.
pub fn run(text: &str, finder: &Pathfinder) -> Result<(CostGrid, RouteSummary), GridError> {
    let map = CostGrid::parse(text)?;
    log::info!("searching {}", map.describe());
    let report = finder.search(&map);
    let summary = RouteSummary::new(&map, &report);
    Ok((map, summary))
}
