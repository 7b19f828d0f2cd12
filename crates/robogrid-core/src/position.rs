//! Robot position and toroidal movement

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dimensions::GridDimensions;
use crate::error::CommandError;

/// Robot coordinate: `x` is the row, `y` is the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    /// The top-left cell
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Bound both axes into the grid
    pub fn clamped_to(self, dims: GridDimensions) -> Self {
        Self {
            x: self.x.min(dims.rows().saturating_sub(1)),
            y: self.y.min(dims.cols().saturating_sub(1)),
        }
    }

    /// Whether the coordinate addresses a cell of `dims`
    pub fn is_within(&self, dims: GridDimensions) -> bool {
        self.x < dims.rows() && self.y < dims.cols()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(CommandError::UnknownAction(other.to_string())),
        }
    }
}

/// Owns one session's robot coordinate.
///
/// Every operation takes the current grid size so the coordinate can be kept
/// inside it.
#[derive(Debug, Clone, Default)]
pub struct PositionEngine {
    current: Position,
}

impl PositionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the robot back to `(0, 0)`
    pub fn reset(&mut self) -> Position {
        self.current = Position::ORIGIN;
        self.current
    }

    /// Move one cell, wrapping around the edge of the grid
    pub fn move_toward(&mut self, direction: Direction, dims: GridDimensions) -> Position {
        let Position { x, y } = self.current.clamped_to(dims);
        self.current = match direction {
            Direction::Up => Position::new(step_back(x, dims.rows()), y),
            Direction::Down => Position::new(step_forward(x, dims.rows()), y),
            Direction::Left => Position::new(x, step_back(y, dims.cols())),
            Direction::Right => Position::new(x, step_forward(y, dims.cols())),
        };
        self.current
    }

    /// Place the robot directly.
    ///
    /// Coordinates past the edge are clamped onto the last row or column.
    pub fn set_coordinates(&mut self, x: u32, y: u32, dims: GridDimensions) -> Position {
        self.current = Position::new(x, y).clamped_to(dims);
        self.current
    }

    /// Pull the coordinate back inside `dims` after a resize
    pub fn reclamp(&mut self, dims: GridDimensions) -> Position {
        self.current = self.current.clamped_to(dims);
        self.current
    }

    pub fn current(&self) -> Position {
        self.current
    }
}

fn step_forward(value: u32, len: u32) -> u32 {
    (value + 1) % len
}

fn step_back(value: u32, len: u32) -> u32 {
    (value + len - 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_by_five() -> GridDimensions {
        GridDimensions::default()
    }

    #[test]
    fn test_up_wraps_to_last_row() {
        let mut engine = PositionEngine::new();
        let dims = five_by_five();
        assert_eq!(engine.move_toward(Direction::Up, dims), Position::new(4, 0));
        engine.move_toward(Direction::Up, dims);
        assert_eq!(engine.move_toward(Direction::Up, dims), Position::new(2, 0));
    }

    #[test]
    fn test_right_and_left_wrap() {
        let mut engine = PositionEngine::new();
        let dims = five_by_five();
        for _ in 0..3 {
            engine.move_toward(Direction::Right, dims);
        }
        assert_eq!(engine.current(), Position::new(0, 3));

        engine.reset();
        engine.move_toward(Direction::Left, dims);
        assert_eq!(engine.move_toward(Direction::Left, dims), Position::new(0, 3));
    }

    #[test]
    fn test_six_downs_on_five_rows() {
        let mut engine = PositionEngine::new();
        let dims = five_by_five();
        for _ in 0..6 {
            engine.move_toward(Direction::Down, dims);
        }
        assert_eq!(engine.current(), Position::new(1, 0));
    }

    #[test]
    fn test_single_cell_axis_stays_put() {
        let mut engine = PositionEngine::new();
        let dims = GridDimensions::clamped(1, 1);
        for direction in Direction::ALL {
            assert_eq!(engine.move_toward(direction, dims), Position::ORIGIN);
        }
    }

    #[test]
    fn test_set_coordinates_clamps_out_of_range() {
        let mut engine = PositionEngine::new();
        let dims = five_by_five();
        assert_eq!(engine.set_coordinates(2, 3, dims), Position::new(2, 3));
        assert_eq!(engine.set_coordinates(5, 0, dims), Position::new(4, 0));
        assert_eq!(engine.set_coordinates(u32::MAX, 9, dims), Position::new(4, 4));
    }

    #[test]
    fn test_reclamp_after_shrink() {
        let mut engine = PositionEngine::new();
        engine.set_coordinates(4, 4, five_by_five());
        let smaller = GridDimensions::clamped(3, 8);
        assert_eq!(engine.reclamp(smaller), Position::new(2, 4));
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert!("north".parse::<Direction>().is_err());
    }
}
