//! Persisted win/loss/draw tally.
//!
//! The core only defines the record and its wire shape; where the
//! payload lives (a cookie, a file, local storage) belongs to the
//! hosting UI behind [`RecordStore`]. A payload that fails to parse is
//! treated as a fresh record, never as an error.

use crate::logic::board::Side;
use crate::logic::rules::Outcome;
use serde::{Deserialize, Serialize};

/// The three counters the UI shows next to the board. Field names
/// follow the stored JSON payload:
/// `{"playerScore":_,"computerScore":_,"drawScore":_}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreRecord {
    pub player_score: u32,
    pub computer_score: u32,
    pub draw_score: u32,
}

impl ScoreRecord {
    /// Restores a record from its stored payload. Any unreadable
    /// payload falls back to the zeroed record.
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(record) => record,
            Err(err) => {
                log::warn!("unreadable score record ({err}), starting from zero");
                Self::default()
            }
        }
    }

    /// Serializes the record for storage. Three integers cannot fail
    /// to encode.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Tallies a finished round. `InProgress` is a no-op so callers
    /// may feed every evaluation through unconditionally.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Side::Player) => self.player_score += 1,
            Outcome::Win(Side::Computer) => self.computer_score += 1,
            Outcome::Draw => self.draw_score += 1,
            Outcome::InProgress => {}
        }
    }

    /// Zeroes all counters. This is the only operation that touches
    /// the tally; resetting a game session never does.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Storage seam for the record. Implementations supply whatever
/// key-value medium outlives the session.
pub trait RecordStore {
    /// Restores the stored record, zeroed when absent or unreadable.
    fn load(&self) -> ScoreRecord;

    /// Durably stores the record.
    fn save(&mut self, record: &ScoreRecord);
}

/// In-memory store for tests and headless play. Keeps the raw payload,
/// so loads exercise the same parse-or-zero path as any real medium.
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a raw payload, as if left by an earlier
    /// process.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> ScoreRecord {
        self.payload
            .as_deref()
            .map(ScoreRecord::from_json)
            .unwrap_or_default()
    }

    fn save(&mut self, record: &ScoreRecord) {
        self.payload = Some(record.to_json());
    }
}
