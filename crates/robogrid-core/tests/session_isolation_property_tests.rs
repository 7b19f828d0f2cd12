//! Property-based tests for session isolation in the store

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use robogrid_core::{Command, Direction, Position, RobotSession, SessionStore};

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

/// Property: two sessions driven with different move sequences each end up
/// exactly where a private session given the same moves would
#[test]
fn prop_sessions_do_not_observe_each_other() {
    proptest!(|(
        moves_a in prop::collection::vec(direction_strategy(), 0..30),
        moves_b in prop::collection::vec(direction_strategy(), 0..30),
    )| {
        let store = SessionStore::new();
        let a = store.resolve(None);
        let b = store.resolve(None);
        prop_assert_ne!(&a.token, &b.token);

        a.handle.lock().apply(Command::Reset);
        b.handle.lock().apply(Command::Reset);

        // interleave the two sequences
        let longest = moves_a.len().max(moves_b.len());
        for i in 0..longest {
            if let Some(direction) = moves_a.get(i) {
                store.resolve(Some(a.token.as_str())).handle.lock().apply(Command::move_toward(*direction));
            }
            if let Some(direction) = moves_b.get(i) {
                store.resolve(Some(b.token.as_str())).handle.lock().apply(Command::move_toward(*direction));
            }
        }

        let mut expected_a = RobotSession::new();
        expected_a.run_program(&moves_a.iter().copied().map(Command::move_toward).collect::<Vec<_>>());
        let mut expected_b = RobotSession::new();
        expected_b.run_program(&moves_b.iter().copied().map(Command::move_toward).collect::<Vec<_>>());

        prop_assert_eq!(a.handle.lock().position(), expected_a.position());
        prop_assert_eq!(b.handle.lock().position(), expected_b.position());
    });
}

#[test]
fn test_resize_in_one_session_leaves_other_alone() {
    let store = SessionStore::new();
    let a = store.resolve(None);
    let b = store.resolve(None);

    a.handle.lock().resize(Some("12"), Some("3"));

    let untouched = b.handle.lock().snapshot();
    assert_eq!(untouched.dimensions.rows(), 5);
    assert_eq!(untouched.dimensions.cols(), 5);
}

#[test]
fn test_concurrent_commands_are_serialised_per_session() {
    let store = Arc::new(SessionStore::new());
    let token = store.resolve(None).token;

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            let token = token.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    let resolved = store.resolve(Some(token.as_str()));
                    resolved
                        .handle
                        .lock()
                        .apply(Command::move_toward(Direction::Right));
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    // 100 moves right on 5 columns lands back on column 0
    let session = store.get(token.as_str()).unwrap();
    assert_eq!(session.lock().position(), Position::new(0, 0));
    assert_eq!(store.len(), 1);
}
