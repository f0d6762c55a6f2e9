//! **wayfind-core** — coordinates and cost grids for least-cost routing.
//!
//! This crate provides the collaborator types consumed by the search in
//! `wayfind-paths`: the [`Coordinate`] value type, half-open [`Range`]
//! rectangles, and [`CostGrid`], a dense traversal-cost map with a start and
//! a finish cell.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Coordinate, Range, RangeIter};
pub use grid::{COST_LIMIT, CostGrid};
