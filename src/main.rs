//! Split Engine CLI
//!
//! Computes who-pays-whom settlement instructions for an unequal group
//! expense from a CSV of `name,amount` rows.
//!
//! # Usage
//!
//! ```bash
//! split-engine rows.csv    # compute a plan and remember the rows
//! split-engine             # recompute from the remembered rows
//! split-engine --clear     # forget the remembered rows
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity
//! - `SPLIT_STATE`: Path of the saved-rows file (default `.split.json`)

use log::warn;
use split_engine::{read_rows, Result, RowStore, SplitEngine};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let store = RowStore::new(state_path());

    let rows = match args.get(1).map(String::as_str) {
        Some("--clear") => {
            store.clear()?;
            return Ok(());
        }
        Some(input_path) => {
            let file = File::open(input_path)?;
            let rows = read_rows(BufReader::new(file))?;

            // The plan is still printed if remembering the rows fails.
            if let Err(e) = store.save(&rows) {
                warn!("Failed to save rows: {}", e);
            }
            rows
        }
        None => store.load()?.unwrap_or_default(),
    };

    let engine = SplitEngine::new();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match engine.calculate(&rows) {
        Some(splits) => engine.write_report(&splits, handle)?,
        None => writeln!(handle, "no splits to show")?,
    }

    Ok(())
}

/// Saved-rows file path, overridable via `SPLIT_STATE`.
fn state_path() -> PathBuf {
    env::var_os("SPLIT_STATE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".split.json"))
}
