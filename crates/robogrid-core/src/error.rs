//! Error types for command decoding and robot programs

use thiserror::Error;

/// Errors raised while decoding an action token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

/// Errors raised while parsing a code-mode program
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("Unknown command on line {line}: {text}")]
    UnknownCommand { line: usize, text: String },

    #[error("Invalid coordinates on line {line}: {text}")]
    InvalidCoordinates { line: usize, text: String },
}

impl ProgramError {
    /// 1-based line number the error points at
    pub fn line(&self) -> usize {
        match self {
            ProgramError::UnknownCommand { line, .. } => *line,
            ProgramError::InvalidCoordinates { line, .. } => *line,
        }
    }
}

/// Result type alias for program parsing
pub type ProgramResult<T> = Result<T, ProgramError>;
