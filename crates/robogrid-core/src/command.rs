//! Closed set of robot commands, decoded once at the request boundary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;
use crate::position::Direction;

/// A single robot command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Reset,
    Move { direction: Direction },
    SetCoordinates { x: u32, y: u32 },
}

impl Command {
    pub fn move_toward(direction: Direction) -> Self {
        Command::Move { direction }
    }
}

/// Decodes the action tokens used in request paths: `reset`, `up`, `down`,
/// `left`, `right`. Coordinates arrive as typed path parameters instead.
impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reset" => Ok(Command::Reset),
            other => other.parse::<Direction>().map(Command::move_toward),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Reset => write!(f, "reset"),
            Command::Move { direction } => write!(f, "{}", direction.as_str()),
            Command::SetCoordinates { x, y } => write!(f, "coords/{}/{}", x, y),
        }
    }
}
