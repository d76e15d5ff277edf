//! Durable checkpoint storage
//!
//! Loads and saves the persisted search state. Saves go through a sibling
//! temp file followed by a rename, so a failed write never corrupts the
//! previous good document. A missing or malformed file is treated as an
//! empty search, never as a fatal error.

use crate::error::Result;
use crate::state::SearchState;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted state, falling back to a fresh one
    pub fn load(&self) -> SearchState {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("no state file at {}, starting fresh", self.path.display());
                return SearchState::new();
            }
            Err(err) => {
                warn!(
                    "failed to read state file {}: {}, starting fresh",
                    self.path.display(),
                    err
                );
                return SearchState::new();
            }
        };

        match serde_json::from_str::<SearchState>(&text) {
            Ok(state) => {
                info!(
                    "loaded {} addresses, last nonce {}, {} checked",
                    state.addresses.len(),
                    state.last_nonce,
                    state.stats.total_checked
                );
                state
            }
            Err(err) => {
                warn!(
                    "state file {} is malformed: {}, starting fresh",
                    self.path.display(),
                    err
                );
                SearchState::new()
            }
        }
    }

    /// Serialize and write the full document atomically
    pub fn save(&self, state: &SearchState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(
            "saved {} addresses, last nonce {}",
            state.addresses.len(),
            state.last_nonce
        );
        Ok(())
    }
}
