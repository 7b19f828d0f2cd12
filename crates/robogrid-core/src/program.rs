//! Code-mode programs: one robot command per line
//!
//! Accepted lines (surrounding whitespace ignored, blank lines skipped):
//!
//! ```text
//! up | down | left | right | reset
//! go to (i; j)
//! ```
//!
//! The whole program is parsed before anything runs, so a bad line never
//! leaves the robot half-way through a program.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::command::Command;
use crate::error::{ProgramError, ProgramResult};

static GO_TO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^go to \(\s*([0-9]+)\s*;\s*([0-9]+)\s*\)$").expect("go-to pattern is valid")
});

/// Parse a program into commands
pub fn parse_program(source: &str) -> ProgramResult<Vec<Command>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(index + 1, line.trim()))
        .collect()
}

fn parse_line(line: usize, text: &str) -> ProgramResult<Command> {
    if let Ok(command) = text.parse::<Command>() {
        return Ok(command);
    }

    let captures = GO_TO
        .captures(text)
        .ok_or_else(|| ProgramError::UnknownCommand {
            line,
            text: text.to_string(),
        })?;

    let invalid = || ProgramError::InvalidCoordinates {
        line,
        text: text.to_string(),
    };
    let x = captures[1].parse::<u32>().map_err(|_| invalid())?;
    let y = captures[2].parse::<u32>().map_err(|_| invalid())?;

    Ok(Command::SetCoordinates { x, y })
}
