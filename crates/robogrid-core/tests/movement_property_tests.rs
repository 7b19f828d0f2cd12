//! Property-based tests for toroidal movement and placement

use proptest::prelude::*;
use robogrid_core::{Command, Direction, GridDimensions, Position, PositionEngine, RobotSession};

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn dims_strategy() -> impl Strategy<Value = GridDimensions> {
    (1u32..=20, 1u32..=20).prop_map(|(rows, cols)| GridDimensions::clamped(rows, cols))
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Reset),
        direction_strategy().prop_map(Command::move_toward),
        (0u32..25, 0u32..25).prop_map(|(x, y)| Command::SetCoordinates { x, y }),
    ]
}

/// Property: moving `len` times in one direction along an axis of length
/// `len` returns the robot to where it started.
#[test]
fn prop_wraparound_closure() {
    proptest!(|(dims in dims_strategy(), start_x in 0u32..20, start_y in 0u32..20, direction in direction_strategy())| {
        let mut engine = PositionEngine::new();
        let start = engine.set_coordinates(start_x, start_y, dims);

        let steps = match direction {
            Direction::Up | Direction::Down => dims.rows(),
            Direction::Left | Direction::Right => dims.cols(),
        };
        for _ in 0..steps {
            engine.move_toward(direction, dims);
        }

        prop_assert_eq!(engine.current(), start);
    });
}

/// Property: opposite moves cancel out
#[test]
fn prop_opposite_moves_cancel() {
    proptest!(|(dims in dims_strategy(), x in 0u32..20, y in 0u32..20)| {
        let mut engine = PositionEngine::new();
        let start = engine.set_coordinates(x, y, dims);

        engine.move_toward(Direction::Up, dims);
        engine.move_toward(Direction::Down, dims);
        engine.move_toward(Direction::Left, dims);
        engine.move_toward(Direction::Right, dims);

        prop_assert_eq!(engine.current(), start);
    });
}

/// Property: reset always lands on the origin, however many times it runs
#[test]
fn prop_reset_idempotent() {
    proptest!(|(commands in prop::collection::vec(command_strategy(), 0..30), resets in 1usize..5)| {
        let mut session = RobotSession::new();
        session.run_program(&commands);

        for _ in 0..resets {
            let snapshot = session.apply(Command::Reset);
            prop_assert_eq!(snapshot.position, Position::ORIGIN);
        }
    });
}

/// Property: no command sequence can move the robot off the grid
#[test]
fn prop_position_always_in_range() {
    proptest!(|(rows in "[0-9]{1,3}|[a-z]{1,5}", cols in "[0-9]{1,3}|[a-z]{1,5}", commands in prop::collection::vec(command_strategy(), 0..40))| {
        let mut session = RobotSession::new();
        session.resize(Some(rows.as_str()), Some(cols.as_str()));

        for command in commands {
            let snapshot = session.apply(command);
            prop_assert!(snapshot.position.is_within(snapshot.dimensions));
        }
    });
}

#[test]
fn test_documented_scenarios_on_default_grid() {
    let mut session = RobotSession::new();

    session.apply(Command::Reset);
    for _ in 0..3 {
        session.apply(Command::move_toward(Direction::Up));
    }
    assert_eq!(session.position(), Position::new(2, 0));

    session.apply(Command::Reset);
    for _ in 0..3 {
        session.apply(Command::move_toward(Direction::Right));
    }
    assert_eq!(session.position(), Position::new(0, 3));

    session.apply(Command::Reset);
    for _ in 0..6 {
        session.apply(Command::move_toward(Direction::Down));
    }
    assert_eq!(session.position(), Position::new(1, 0));
}
