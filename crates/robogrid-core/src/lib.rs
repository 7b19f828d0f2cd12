//! Robogrid core
//!
//! A robot sits on one cell of a toroidal grid. This crate holds the rules:
//! wraparound movement, direct placement, lenient resize parsing with a clamp
//! ceiling, the single-occupancy matrix view, and the per-session store.

pub mod command;
pub mod dimensions;
pub mod error;
pub mod position;
pub mod program;
pub mod render;
pub mod session;

pub use command::Command;
pub use dimensions::{parse_dimension, GridDimensions, GridDimensionsManager, DEFAULT_DIM, MAX_DIM};
pub use error::{CommandError, ProgramError, ProgramResult};
pub use position::{Direction, Position, PositionEngine};
pub use program::parse_program;
pub use render::{render, Cell, GridMatrix};
pub use session::{
    ResolvedSession, RobotSession, SessionHandle, SessionStore, SessionToken, Snapshot,
};
