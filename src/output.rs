//! Progress and match output formatting

use crate::state::FoundResult;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Snapshot of search progress for the periodic report line
pub struct Stats {
    pub checks_per_second: f64,
    pub total_checked: u64,
    pub total_found: u64,
    pub elapsed_secs: f64,
}

impl Stats {
    pub fn format(&self) -> String {
        format!(
            "Checked: {} | Found: {} | Speed: {:.0}/s | Elapsed: {:.0}s",
            self.total_checked, self.total_found, self.checks_per_second, self.elapsed_secs
        )
    }
}

/// A found address formatted for announcement
#[derive(Debug, Clone, Serialize)]
pub struct FormattedMatch {
    pub nonce: String,
    pub address: String,
    pub timestamp: String,
}

impl FormattedMatch {
    pub fn from_result(result: &FoundResult) -> Self {
        Self {
            nonce: result.nonce.to_string(),
            address: result.address.clone(),
            timestamp: result.timestamp.clone(),
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            r#"========== FOUND ==========
Address:   {}
Nonce:     {}
Timestamp: {}
==========================="#,
            self.address, self.nonce, self.timestamp
        )
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn to_csv(&self) -> String {
        format!("{},{},{}", self.nonce, self.address, self.timestamp)
    }

    /// Render in the named format ("json", "csv", or text)
    pub fn render(&self, format: &str) -> String {
        match format {
            "json" => self.to_json(),
            "csv" => self.to_csv(),
            _ => self.to_text(),
        }
    }
}

/// Append a formatted match to a results log file
pub fn append_match(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}
