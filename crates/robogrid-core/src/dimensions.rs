//! Grid size rules: defaults, the clamp ceiling, and lenient parsing of resize input

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of rows and columns a fresh session starts with
pub const DEFAULT_DIM: u32 = 5;

/// Largest number of rows or columns a grid may have
pub const MAX_DIM: u32 = 20;

/// Size of the grid, always within `1..=MAX_DIM` on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawDimensions")]
pub struct GridDimensions {
    rows: u32,
    cols: u32,
}

/// Unchecked wire form; deserialized sizes go through [`GridDimensions::clamped`]
#[derive(Deserialize)]
struct RawDimensions {
    rows: u32,
    cols: u32,
}

impl From<RawDimensions> for GridDimensions {
    fn from(raw: RawDimensions) -> Self {
        Self::clamped(raw.rows, raw.cols)
    }
}

impl GridDimensions {
    /// Build dimensions, bounding both axes into `1..=MAX_DIM`
    pub fn clamped(rows: u32, cols: u32) -> Self {
        Self {
            rows: rows.clamp(1, MAX_DIM),
            cols: cols.clamp(1, MAX_DIM),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIM,
            cols: DEFAULT_DIM,
        }
    }
}

/// Turns one raw resize field into a valid axis length.
///
/// Anything that is not a positive integer falls back to [`DEFAULT_DIM`];
/// anything larger than [`MAX_DIM`] is clamped, including digit strings too
/// long for `u32`.
pub fn parse_dimension(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_DIM;
    };

    match raw.trim().parse::<u32>() {
        Ok(0) => DEFAULT_DIM,
        Ok(value) => value.min(MAX_DIM),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => MAX_DIM,
        Err(_) => DEFAULT_DIM,
    }
}

/// Owns one session's grid size
#[derive(Debug, Clone, Default)]
pub struct GridDimensionsManager {
    current: GridDimensions,
}

impl GridDimensionsManager {
    /// Create a manager at the default 5x5 size
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a resize request.
    ///
    /// Each field is parsed on its own with [`parse_dimension`], then both are
    /// applied together. Never fails.
    pub fn resize(&mut self, raw_rows: Option<&str>, raw_cols: Option<&str>) -> GridDimensions {
        let rows = parse_dimension(raw_rows);
        let cols = parse_dimension(raw_cols);
        self.current = GridDimensions::clamped(rows, cols);
        debug!(
            rows = self.current.rows(),
            cols = self.current.cols(),
            "grid resized"
        );
        self.current
    }

    /// Current grid size
    pub fn current(&self) -> GridDimensions {
        self.current
    }
}
