//! VanitySearch-PDA CLI

use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;
use vanitysearch_pda::derive::{parse_base58_key, DEFAULT_PROGRAM_ID};
use vanitysearch_pda::{CheckpointStore, SearchConfig, SearchEngine, SuffixPattern};

#[derive(Parser, Debug)]
#[command(name = "vanitysearch-pda")]
#[command(author = "VanitySearch-PDA Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Derived-address vanity suffix search", long_about = None)]
struct Args {
    /// Suffix to search for (base58, e.g. bruv)
    suffix: String,

    /// Authority the addresses are derived for (base58, 32 bytes)
    #[arg(short = 'a', long)]
    authority: String,

    /// Program id the addresses are derived under (base58, 32 bytes)
    #[arg(short = 'p', long, default_value = DEFAULT_PROGRAM_ID)]
    program_id: String,

    /// Namespace seed for derivation
    #[arg(long, default_value = "token_mint")]
    namespace: String,

    /// State file (default: precalculated-<suffix>.json)
    #[arg(short = 's', long)]
    state_file: Option<PathBuf>,

    /// Nonces per batch
    #[arg(short = 'b', long, default_value = "1000")]
    batch_size: u64,

    /// Seconds between periodic checkpoints
    #[arg(long, default_value = "300")]
    checkpoint_interval: u64,

    /// Seconds between progress reports
    #[arg(long, default_value = "5")]
    progress_interval: u64,

    /// Do not save immediately on every found address
    #[arg(long)]
    no_checkpoint_on_match: bool,

    /// Stop after this many batches (0 = run until interrupted)
    #[arg(long, default_value = "0")]
    max_batches: u64,

    /// Output format for found addresses: text, json, csv
    #[arg(short = 'o', long, default_value = "text")]
    output_format: String,

    /// Append found addresses to this file instead of stdout
    #[arg(short = 'f', long)]
    output_file: Option<PathBuf>,

    /// Quiet mode (no progress output)
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Configuration errors are fatal before the first iteration
    let pattern = match SuffixPattern::new(&args.suffix) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: Invalid suffix: {}", e);
            std::process::exit(1);
        }
    };

    let authority = match parse_base58_key(&args.authority) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: Invalid authority: {}", e);
            std::process::exit(1);
        }
    };

    let program_id = match parse_base58_key(&args.program_id) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: Invalid program id: {}", e);
            std::process::exit(1);
        }
    };

    if args.batch_size == 0 {
        eprintln!("Error: Batch size must be positive");
        std::process::exit(1);
    }

    let state_file = args
        .state_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("precalculated-{}.json", args.suffix)));

    if !args.quiet {
        eprintln!("VanitySearch-PDA v0.1.0");
        eprintln!("Suffix: {}", pattern.suffix);
        eprintln!("Difficulty: ~2^{:.1}", pattern.difficulty.log2());
        eprintln!("Authority: {}", args.authority);
        eprintln!("State file: {}", state_file.display());
        eprintln!("Press Ctrl+C to stop and save progress");
        eprintln!();
    }

    let config = SearchConfig {
        pattern,
        namespace: args.namespace.clone().into_bytes(),
        authority,
        program_id,
        batch_size: args.batch_size,
        checkpoint_on_match: !args.no_checkpoint_on_match,
        checkpoint_interval: Duration::from_secs(args.checkpoint_interval),
        progress_interval: Duration::from_secs(args.progress_interval),
        max_batches: args.max_batches,
        output_format: args.output_format.clone(),
        output_file: args.output_file.clone(),
        quiet: args.quiet,
    };

    let store = CheckpointStore::new(state_file);
    let mut engine = SearchEngine::new(config, store);

    let stop = engine.stop_handle();
    ctrlc::set_handler(move || {
        eprintln!("\nStopping, saving progress...");
        stop.store(true, Ordering::Relaxed);
    })
    .ok();

    engine.run();

    // The engine has already saved; a failed save was logged, and an
    // interrupted run still exits cleanly
    if !args.quiet {
        eprintln!();
        eprintln!("Search stopped.");
        eprintln!("Total checked: {}", engine.total_checked());
        eprintln!("Total found: {}", engine.total_found());
        eprintln!("Next nonce: {}", engine.cursor());
    }
}
