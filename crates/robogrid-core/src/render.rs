//! Matrix view of a session's grid with the robot's cell marked

use serde::{Deserialize, Serialize};

use crate::dimensions::GridDimensions;
use crate::position::Position;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Empty,
    Occupied,
}

/// `rows x cols` matrix with exactly one occupied cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMatrix {
    cells: Vec<Vec<Cell>>,
}

impl GridMatrix {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(x).and_then(|row| row.get(y)).copied()
    }

    /// Iterate rows in order, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Coordinate of the occupied cell
    pub fn occupied(&self) -> Option<Position> {
        self.cells.iter().enumerate().find_map(|(x, row)| {
            row.iter()
                .position(|cell| *cell == Cell::Occupied)
                .map(|y| Position::new(x as u32, y as u32))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied)
            .count()
    }
}

/// Project dimensions and position into a matrix.
///
/// A position outside `dims` is clamped before marking.
pub fn render(dims: GridDimensions, pos: Position) -> GridMatrix {
    let marked = pos.clamped_to(dims);
    let cells = (0..dims.rows())
        .map(|x| {
            (0..dims.cols())
                .map(|y| {
                    if x == marked.x && y == marked.y {
                        Cell::Occupied
                    } else {
                        Cell::Empty
                    }
                })
                .collect()
        })
        .collect();

    GridMatrix { cells }
}
