//! Persisted search state
//!
//! The document written to disk: cursor position, every found address in
//! discovery order, and aggregate counters. Nonces are serialized as
//! decimal strings to keep the file format stable regardless of integer
//! width.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A found address, immutable once recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundResult {
    #[serde(with = "nonce_text")]
    pub nonce: u64,
    pub address: String,
    pub timestamp: String,
}

/// Aggregate counters, refreshed on every checkpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_checked: u64,
    pub total_found: u64,
    pub last_update: String,
}

/// The persisted progress-and-results document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    #[serde(with = "nonce_text")]
    pub last_nonce: u64,
    pub addresses: Vec<FoundResult>,
    pub stats: Stats,
}

impl SearchState {
    /// Fresh zero-valued state for a new search
    pub fn new() -> Self {
        Self {
            last_nonce: 0,
            addresses: Vec::new(),
            stats: Stats {
                total_checked: 0,
                total_found: 0,
                last_update: now_iso8601(),
            },
        }
    }

    /// Append a found address, keeping `totalFound == addresses.len()`
    ///
    /// Appends are de-duplicated by nonce: re-deriving an already recorded
    /// nonce after a resume is a no-op. Returns true if the result was new.
    pub fn record_match(&mut self, nonce: u64, address: String) -> bool {
        if self.addresses.iter().any(|r| r.nonce == nonce) {
            return false;
        }
        self.addresses.push(FoundResult {
            nonce,
            address,
            timestamp: now_iso8601(),
        });
        self.stats.total_found += 1;
        true
    }

    /// Refresh the lastUpdate timestamp before a checkpoint
    pub fn touch(&mut self) {
        self.stats.last_update = now_iso8601();
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339()
}

/// u64 <-> decimal string, matching the persisted schema
mod nonce_text {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
