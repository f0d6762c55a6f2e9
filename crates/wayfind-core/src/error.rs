use thiserror::Error;

use crate::geom::Coordinate;

/// Errors raised while building or editing a [`CostGrid`](crate::CostGrid).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid glyph {ch:?} at {at}")]
    InvalidGlyph { ch: char, at: Coordinate },

    #[error("marker {marker:?} appears more than once (again at {at})")]
    DuplicateMarker { marker: char, at: Coordinate },

    #[error("no start marker 'S'")]
    MissingStart,

    #[error("no finish marker 'F'")]
    MissingFinish,

    #[error("{0} lies outside the grid")]
    OutOfBounds(Coordinate),

    /// Costs must be non-negative. NaN is rejected too.
    #[error("invalid cell cost {cost} at {at}")]
    InvalidCost { at: Coordinate, cost: f32 },
}
