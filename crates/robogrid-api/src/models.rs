//! API request and response models

use robogrid_core::{Cell, Snapshot};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Grid resize form posted to `/change-max`.
///
/// Fields stay raw strings so malformed input reaches the fallback rules
/// instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResizeForm {
    /// Requested number of rows
    pub change_max_i: Option<String>,
    /// Requested number of columns
    pub change_max_j: Option<String>,
}

/// Program form posted to `/user-code`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserCodeForm {
    /// Program text, one command per line
    #[serde(default)]
    pub user_code: String,
}

/// Session state response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StateResponse {
    /// Robot row
    pub x: u32,
    /// Robot column
    pub y: u32,
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub cols: u32,
    /// Grid cells, row by row: "empty" or "occupied"
    pub cells: Vec<Vec<String>>,
}

impl From<Snapshot> for StateResponse {
    fn from(snapshot: Snapshot) -> Self {
        let cells = snapshot
            .render()
            .iter_rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => "empty".to_string(),
                        Cell::Occupied => "occupied".to_string(),
                    })
                    .collect()
            })
            .collect();

        Self {
            x: snapshot.position.x,
            y: snapshot.position.y,
            rows: snapshot.dimensions.rows(),
            cols: snapshot.dimensions.cols(),
            cells,
        }
    }
}

/// API health response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
    /// Number of live sessions
    pub sessions: usize,
}
