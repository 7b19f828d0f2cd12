//! Per-session robot state and the token-keyed store that owns it

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::command::Command;
use crate::dimensions::{GridDimensions, GridDimensionsManager};
use crate::position::{Position, PositionEngine};
use crate::render::{render, GridMatrix};

/// Opaque identifier handed to a client, usually inside a cookie
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Issue a fresh random token
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SessionToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Copy of a session's state, taken under its lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub position: Position,
    pub dimensions: GridDimensions,
}

impl Snapshot {
    pub fn render(&self) -> GridMatrix {
        render(self.dimensions, self.position)
    }
}

/// One client's position engine and grid size
#[derive(Debug)]
pub struct RobotSession {
    engine: PositionEngine,
    dimensions: GridDimensionsManager,
    last_seen: Instant,
}

impl RobotSession {
    pub fn new() -> Self {
        Self {
            engine: PositionEngine::new(),
            dimensions: GridDimensionsManager::new(),
            last_seen: Instant::now(),
        }
    }

    /// Apply one command and return the resulting state
    pub fn apply(&mut self, command: Command) -> Snapshot {
        let dims = self.dimensions.current();
        let position = match command {
            Command::Reset => self.engine.reset(),
            Command::Move { direction } => self.engine.move_toward(direction, dims),
            Command::SetCoordinates { x, y } => self.engine.set_coordinates(x, y, dims),
        };
        debug!(%command, %position, "command applied");
        self.snapshot()
    }

    /// Apply commands in order
    pub fn run_program(&mut self, commands: &[Command]) -> Snapshot {
        for command in commands {
            self.apply(*command);
        }
        self.snapshot()
    }

    /// Resize the grid from raw form input, keeping the robot on the grid
    pub fn resize(&mut self, raw_rows: Option<&str>, raw_cols: Option<&str>) -> Snapshot {
        let dims = self.dimensions.resize(raw_rows, raw_cols);
        self.engine.reclamp(dims);
        self.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.engine.current(),
            dimensions: self.dimensions.current(),
        }
    }

    pub fn position(&self) -> Position {
        self.engine.current()
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions.current()
    }

    /// Time since the session was last resolved
    pub fn idle_for(&self) -> Duration {
        self.last_seen.elapsed()
    }

    fn touch(&mut self) {
        self.last_seen = Instant::now();
    }
}

impl Default for RobotSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a session; the mutex serialises its commands
pub type SessionHandle = Arc<Mutex<RobotSession>>;

/// Result of [`SessionStore::resolve`]
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub token: SessionToken,
    pub handle: SessionHandle,
    /// The token was issued by this call and must be handed to the client
    pub created: bool,
}

/// All live sessions, keyed by token
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<SessionToken, SessionHandle>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the session for `token`, or start a new default one.
    ///
    /// Absent and unknown tokens both get a freshly issued token; a client
    /// never chooses its own.
    pub fn resolve(&self, token: Option<&str>) -> ResolvedSession {
        if let Some(existing) = token.and_then(|token| self.lookup(token)) {
            existing.handle.lock().touch();
            return existing;
        }

        let token = SessionToken::generate();
        let handle: SessionHandle = Arc::new(Mutex::new(RobotSession::new()));
        self.sessions.insert(token.clone(), Arc::clone(&handle));
        info!(session = %token, total = self.sessions.len(), "session created");

        ResolvedSession {
            token,
            handle,
            created: true,
        }
    }

    /// Existing session for `token`, without creating one
    pub fn get(&self, token: &str) -> Option<SessionHandle> {
        self.sessions.get(token).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Drop every session idle for at least `ttl`; returns how many went
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, handle| handle.lock().idle_for() < ttl);
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            info!(evicted, remaining = self.sessions.len(), "idle sessions evicted");
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn lookup(&self, token: &str) -> Option<ResolvedSession> {
        self.sessions.get(token).map(|entry| ResolvedSession {
            token: entry.key().clone(),
            handle: Arc::clone(entry.value()),
            created: false,
        })
    }
}
