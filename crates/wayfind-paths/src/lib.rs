//! A* least-cost routing over 2D cost grids.
//!
//! [`compute_path`] searches a [`CostMap`] from its start to its finish over
//! 8-connected cells. A step costs its straight-line length plus the cost of
//! the cell it enters; the Euclidean distance to the finish guides the
//! search. Steps whose accumulated cost reaches the configured limit
//! ([`COST_LIMIT`] by default) are pruned, which is how near-impassable
//! terrain blocks a route.
//!
//! ```
//! use wayfind_core::CostGrid;
//!
//! let map = CostGrid::parse("S.#\n..#\n#.F").unwrap();
//! let route = wayfind_paths::compute_path(&map).unwrap();
//! assert_eq!(route.coordinates().len(), 3);
//! ```
//!
//! # Building blocks
//!
//! | Type | Role |
//! |---|---|
//! | [`PathNode`] | frontier entry with its predecessor and costs |
//! | [`SearchState`] | open heap, location map and closed set of one search |
//! | [`Pathfinder`] | the search loop, parameterised by [`SearchConfig`] |
//! | [`Route`] | node arena plus goal, walkable back to the start |

mod astar;
mod config;
mod distance;
mod error;
mod neighbors;
mod node;
mod route;
mod state;
mod traits;

pub use astar::{Pathfinder, SearchReport, SearchStats, compute_path};
pub use config::SearchConfig;
pub use distance::{chebyshev, euclidean, octile};
pub use error::SearchError;
pub use neighbors::Neighbors;
pub use node::{NodeId, PathNode};
pub use route::{Route, RouteIter};
pub use state::SearchState;
pub use traits::CostMap;
pub use wayfind_core::COST_LIMIT;
