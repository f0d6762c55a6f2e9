//! A dense traversal-cost grid with a start and a finish cell.
//!
//! [`CostGrid`] stores one `f32` per cell in row-major order. A cell's cost is
//! what a route pays for *entering* it, on top of the geometric step length.
//! Obstacles are cells whose cost reaches [`COST_LIMIT`].
//!
//! Grids can be built programmatically or parsed from ASCII art:
//!
//! ```text
//! S..#.
//! .1.#.
//! ..9..
//! ...#F
//! ```
//!
//! `.` costs nothing, a digit costs its value, `#` costs [`COST_LIMIT`], and
//! `S` / `F` mark the (zero-cost) start and finish cells.

use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Coordinate, Range};

/// Cost threshold at or above which a partial route is treated as
/// impassable and pruned.
pub const COST_LIMIT: f32 = 1e6;

/// A rectangular grid of non-negative cell costs with start and finish
/// markers.
///
/// The grid owns its cells; `&CostGrid` is `Sync` and may back several
/// searches at once.
#[derive(Debug, Clone, PartialEq)]
pub struct CostGrid {
    cells: Vec<f32>,
    bounds: Range,
    start: Coordinate,
    finish: Coordinate,
}

impl CostGrid {
    /// Create a `width × height` grid with every cell at cost 0.
    ///
    /// Fails if the grid is empty or if `start` / `finish` fall outside it.
    pub fn new(
        width: i32,
        height: i32,
        start: Coordinate,
        finish: Coordinate,
    ) -> Result<Self, GridError> {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        if bounds.is_empty() {
            return Err(GridError::Empty);
        }
        for c in [start, finish] {
            if !bounds.contains(c) {
                return Err(GridError::OutOfBounds(c));
            }
        }
        Ok(Self {
            cells: vec![0.0; bounds.len()],
            bounds,
            start,
            finish,
        })
    }

    /// Parse a grid from ASCII art. See the [module docs](self) for the
    /// glyph table.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string and
    /// trailing whitespace from each line; every line must then have the
    /// same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim_end).collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * lines.len());
        let mut start = None;
        let mut finish = None;

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let at = Coordinate::new(x as i32, y as i32);
                let cost = match ch {
                    '.' => 0.0,
                    '#' => COST_LIMIT,
                    'S' | 'F' => {
                        let slot = if ch == 'S' { &mut start } else { &mut finish };
                        if slot.is_some() {
                            return Err(GridError::DuplicateMarker { marker: ch, at });
                        }
                        *slot = Some(at);
                        0.0
                    }
                    d if d.is_ascii_digit() => f32::from(d as u8 - b'0'),
                    _ => return Err(GridError::InvalidGlyph { ch, at }),
                };
                cells.push(cost);
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let finish = finish.ok_or(GridError::MissingFinish)?;
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, lines.len() as i32),
            start,
            finish,
        })
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains `c`.
    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        self.bounds.contains(c)
    }

    #[inline]
    fn index(&self, c: Coordinate) -> Option<usize> {
        if !self.bounds.contains(c) {
            return None;
        }
        Some((c.y * self.bounds.width() + c.x) as usize)
    }

    /// Cost of entering `c`, or `None` if out of bounds.
    pub fn cost(&self, c: Coordinate) -> Option<f32> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Set the cost of entering `c`.
    pub fn set_cost(&mut self, c: Coordinate, cost: f32) -> Result<(), GridError> {
        if cost.is_nan() || cost < 0.0 {
            return Err(GridError::InvalidCost { at: c, cost });
        }
        let i = self.index(c).ok_or(GridError::OutOfBounds(c))?;
        self.cells[i] = cost;
        Ok(())
    }

    /// Set every cell to `cost`.
    pub fn fill(&mut self, cost: f32) -> Result<(), GridError> {
        for c in self.bounds {
            self.set_cost(c, cost)?;
        }
        Ok(())
    }

    /// Set every cell of column `x` to `cost`.
    pub fn fill_column(&mut self, x: i32, cost: f32) -> Result<(), GridError> {
        for y in 0..self.height() {
            self.set_cost(Coordinate::new(x, y), cost)?;
        }
        Ok(())
    }

    /// Set every cell of row `y` to `cost`.
    pub fn fill_row(&mut self, y: i32, cost: f32) -> Result<(), GridError> {
        for x in 0..self.width() {
            self.set_cost(Coordinate::new(x, y), cost)?;
        }
        Ok(())
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The finish cell.
    #[inline]
    pub fn finish(&self) -> Coordinate {
        self.finish
    }

    /// Move the start marker.
    pub fn set_start(&mut self, c: Coordinate) -> Result<(), GridError> {
        if !self.contains(c) {
            return Err(GridError::OutOfBounds(c));
        }
        self.start = c;
        Ok(())
    }

    /// Move the finish marker.
    pub fn set_finish(&mut self, c: Coordinate) -> Result<(), GridError> {
        if !self.contains(c) {
            return Err(GridError::OutOfBounds(c));
        }
        self.finish = c;
        Ok(())
    }

    /// Render the grid as ASCII art, marking the cells of `route` with `*`.
    ///
    /// Costs that have no glyph (fractional, or above 9 but below
    /// [`COST_LIMIT`]) are drawn as `~`.
    pub fn render(&self, route: &[Coordinate]) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height() as usize);
        for y in 0..self.height() {
            for x in 0..self.width() {
                let c = Coordinate::new(x, y);
                let ch = if c == self.start {
                    'S'
                } else if c == self.finish {
                    'F'
                } else if route.contains(&c) {
                    '*'
                } else {
                    glyph(self.cells[(y * self.width() + x) as usize])
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    /// Summarise the grid for logging, e.g. `5x5 grid (0, 0) -> (4, 4)`.
    pub fn describe(&self) -> String {
        format!(
            "{}x{} grid {} -> {}",
            self.width(),
            self.height(),
            self.start,
            self.finish
        )
    }
}

fn glyph(cost: f32) -> char {
    if cost >= COST_LIMIT {
        '#'
    } else if cost == 0.0 {
        '.'
    } else if cost.fract() == 0.0 && cost <= 9.0 {
        char::from(b'0' + cost as u8)
    } else {
        '~'
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
