use wayfind_core::Coordinate;

/// Euclidean (straight-line) distance between two coordinates.
///
/// This is both the step length between adjacent cells and the search
/// heuristic.
#[inline]
pub fn euclidean(a: Coordinate, b: Coordinate) -> f32 {
    let dx = (b.x - a.x) as f32;
    let dy = (b.y - a.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Octile distance: the length of the shortest 8-connected walk between two
/// coordinates when every cell is free.
#[inline]
pub fn octile(a: Coordinate, b: Coordinate) -> f32 {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    let (lo, hi) = (dx.min(dy), dx.max(dy));
    (hi - lo) as f32 + lo as f32 * std::f32::consts::SQRT_2
}

/// Chebyshev (L∞) distance: the fewest 8-connected steps between two
/// coordinates.
#[inline]
pub fn chebyshev(a: Coordinate, b: Coordinate) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
