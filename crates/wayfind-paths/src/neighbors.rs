use wayfind_core::Coordinate;

/// Cached neighbor computation helper.
///
/// Enumerates the 8 cells around a coordinate, filtered by a predicate,
/// reusing one buffer across calls.
pub struct Neighbors {
    buf: Vec<Coordinate>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 8 neighbors of `c` (the 3×3 block minus its centre) in
    /// row-major order, keeping only those for which `keep` returns `true`.
    pub fn all(&mut self, c: Coordinate, keep: impl Fn(Coordinate) -> bool) -> &[Coordinate] {
        self.buf.clear();
        for n in c.neighbors_8() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
