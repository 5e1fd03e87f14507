//! SQLite sink for generated samples
//!
//! One append-only table, `signal_data`, keyed by timestamp text.

use std::path::Path;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::generator::minute_of_day;
use crate::SignalResult;

/// Database file used when the caller does not pick one
pub const DEFAULT_DB_PATH: &str = "signals.db";

/// Timestamp layout stored in the primary key column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS signal_data (
    timestamp TEXT PRIMARY KEY,
    t_minute INTEGER,
    signal REAL
)";

/// One persisted signal sample
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRecord {
    pub timestamp: String,
    pub minute_of_day: i64,
    pub value: f64,
}

impl SignalRecord {
    pub fn new(timestamp: impl Into<String>, minute_of_day: i64, value: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            minute_of_day,
            value,
        }
    }

    /// Record for a sample taken at `timestamp`
    pub fn at(timestamp: NaiveDateTime, value: f64) -> Self {
        Self {
            timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
            minute_of_day: i64::from(minute_of_day(&timestamp)),
            value,
        }
    }
}

pub struct SignalStore {
    conn: Connection,
}

impl SignalStore {
    pub fn open(path: impl AsRef<Path>) -> SignalResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened signal store");
        Ok(Self { conn })
    }

    pub fn in_memory() -> SignalResult<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Create `signal_data` unless it already exists
    pub fn ensure_schema(&self) -> SignalResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        info!("signal_data schema ready");
        Ok(())
    }

    /// Append one record; a repeated timestamp is a primary key violation
    pub fn append(&self, record: &SignalRecord) -> SignalResult<()> {
        self.conn.execute(
            "INSERT INTO signal_data (timestamp, t_minute, signal) VALUES (?1, ?2, ?3)",
            params![record.timestamp, record.minute_of_day, record.value],
        )?;
        debug!(timestamp = %record.timestamp, "appended signal record");
        Ok(())
    }
}

impl std::fmt::Debug for SignalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalStore")
            .field("path", &self.conn.path())
            .finish()
    }
}
