//! The search loop
//!
//! A single worker walks the nonce space in batches: derive, encode, match,
//! record. Progress and results are checkpointed on every match, at a fixed
//! wall-clock interval, and once more on shutdown. The loop owns the search
//! state; the only thing shared with the outside is the stop flag.

use crate::checkpoint::CheckpointStore;
use crate::derive::{derive_address, encode_address};
use crate::output::{append_match, FormattedMatch, Stats};
use crate::pattern::SuffixPattern;
use crate::state::SearchState;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Search engine configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Target suffix
    pub pattern: SuffixPattern,
    /// Namespace seed for derivation
    pub namespace: Vec<u8>,
    /// Authority the addresses are derived for
    pub authority: [u8; 32],
    /// Program id the addresses are derived under
    pub program_id: [u8; 32],
    /// Nonces per batch
    pub batch_size: u64,
    /// Save immediately when an address is found
    pub checkpoint_on_match: bool,
    /// Periodic save interval, independent of matches
    pub checkpoint_interval: Duration,
    /// Progress report interval
    pub progress_interval: Duration,
    /// Stop after this many batches (0 = run until stopped)
    pub max_batches: u64,
    /// Output format for found addresses: text, json, csv
    pub output_format: String,
    /// Append found addresses to this file instead of stdout
    pub output_file: Option<PathBuf>,
    /// Suppress the progress line
    pub quiet: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pattern: SuffixPattern::new("bruv").unwrap(),
            namespace: crate::derive::TOKEN_MINT_NAMESPACE.to_vec(),
            authority: [0u8; 32],
            program_id: [0u8; 32],
            batch_size: 1000,
            checkpoint_on_match: true,
            checkpoint_interval: Duration::from_secs(300),
            progress_interval: Duration::from_secs(5),
            max_batches: 0,
            output_format: "text".to_string(),
            output_file: None,
            quiet: false,
        }
    }
}

/// Single-worker search engine
pub struct SearchEngine {
    config: SearchConfig,
    store: CheckpointStore,
    state: SearchState,
    /// Next nonce to process
    cursor: u64,
    stop: Arc<AtomicBool>,
    start_time: Instant,
}

impl SearchEngine {
    /// Load persisted progress and position the cursor for resumption
    pub fn new(config: SearchConfig, store: CheckpointStore) -> Self {
        let state = store.load();
        let cursor = state.last_nonce;
        Self {
            config,
            store,
            state,
            cursor,
            stop: Arc::new(AtomicBool::new(false)),
            start_time: Instant::now(),
        }
    }

    /// Shared stop flag for the interrupt handler
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Request a cooperative stop
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    pub fn total_checked(&self) -> u64 {
        self.state.stats.total_checked
    }

    pub fn total_found(&self) -> u64 {
        self.state.stats.total_found
    }

    /// Next nonce to process
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Run until stopped, then persist final state
    ///
    /// The stop flag is checked at batch boundaries, so an interrupt is
    /// honored with everything processed so far reflected in the last save.
    pub fn run(&mut self) {
        info!(
            "searching for suffix '{}' from nonce {} (difficulty ~2^{:.1})",
            self.config.pattern.suffix,
            self.cursor,
            self.config.pattern.difficulty.log2()
        );

        let mut last_progress = Instant::now();
        let mut last_checkpoint = Instant::now();
        let mut batches_done: u64 = 0;

        loop {
            if self.stop.load(Ordering::Relaxed) {
                break;
            }
            if self.config.max_batches > 0 && batches_done >= self.config.max_batches {
                break;
            }

            if !self.step_batch() {
                // Nonce space exhausted
                break;
            }
            batches_done += 1;

            if !self.config.quiet && last_progress.elapsed() >= self.config.progress_interval {
                self.print_progress();
                last_progress = Instant::now();
            }

            if last_checkpoint.elapsed() >= self.config.checkpoint_interval {
                self.checkpoint();
                last_checkpoint = Instant::now();
            }
        }

        // Final synchronous save before returning
        self.checkpoint();
        info!(
            "stopped at nonce {}: {} checked, {} found",
            self.cursor, self.state.stats.total_checked, self.state.stats.total_found
        );
    }

    /// Process one batch of consecutive nonces in increasing order
    ///
    /// Returns false when the nonce space is exhausted.
    fn step_batch(&mut self) -> bool {
        for _ in 0..self.config.batch_size {
            let nonce = self.cursor;
            self.state.stats.total_checked += 1;

            match derive_address(
                &self.config.namespace,
                &self.config.authority,
                &self.config.program_id,
                nonce,
            ) {
                Ok(raw) => {
                    // Cheap screen first; a pass only counts once the
                    // encoded string confirms it
                    if self.config.pattern.matches_raw(&raw) {
                        let address = encode_address(&raw);
                        if self.config.pattern.matches(&address) {
                            self.handle_match(nonce, address);
                        }
                    }
                }
                Err(err) => {
                    // A bad nonce never halts the scan
                    warn!("skipping nonce {}: {}", nonce, err);
                }
            }

            match self.cursor.checked_add(1) {
                Some(next) => self.cursor = next,
                None => {
                    warn!("nonce space exhausted at {}", self.cursor);
                    self.stop.store(true, Ordering::Relaxed);
                    return false;
                }
            }
        }
        true
    }

    fn handle_match(&mut self, nonce: u64, address: String) {
        if !self.state.record_match(nonce, address) {
            // Already on record; a checkpoint lagged behind and the resume
            // re-derived it
            return;
        }

        let result = self.state.addresses.last().expect("just recorded");
        let rendered = FormattedMatch::from_result(result).render(&self.config.output_format);
        match &self.config.output_file {
            Some(path) => {
                if let Err(err) = append_match(path, &rendered) {
                    warn!("failed to write match to {}: {}", path.display(), err);
                }
            }
            None => {
                println!("\n{}", rendered);
            }
        }

        if self.config.checkpoint_on_match {
            // The matched nonce is fully processed, so the saved cursor
            // moves past it
            self.state.last_nonce = nonce.saturating_add(1).max(self.state.last_nonce);
            self.state.touch();
            if let Err(err) = self.store.save(&self.state) {
                warn!("checkpoint save failed: {}", err);
            }
        }
    }

    /// Persist the cursor and refreshed stats; failures are logged, not fatal
    fn checkpoint(&mut self) {
        self.state.last_nonce = self.cursor.max(self.state.last_nonce);
        self.state.touch();
        if let Err(err) = self.store.save(&self.state) {
            warn!("checkpoint save failed: {}", err);
        }
    }

    fn print_progress(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let stats = Stats {
            checks_per_second: self.state.stats.total_checked as f64 / elapsed,
            total_checked: self.state.stats.total_checked,
            total_found: self.state.stats.total_found,
            elapsed_secs: elapsed,
        };
        eprint!("\r{}   ", stats.format());
        std::io::stderr().flush().ok();
    }
}
