//! VanitySearch-PDA: derived-address vanity suffix search
//!
//! Walks a deterministic derivation space for addresses whose base58
//! encoding ends with a chosen suffix, checkpointing every find and the
//! scan position so an interrupted search resumes where it left off.

pub mod checkpoint;
pub mod derive;
pub mod error;
pub mod output;
pub mod pattern;
pub mod search;
pub mod state;

pub use checkpoint::CheckpointStore;
pub use error::SearchError;
pub use output::{FormattedMatch, Stats};
pub use pattern::SuffixPattern;
pub use search::{SearchConfig, SearchEngine};
pub use state::{FoundResult, SearchState};
