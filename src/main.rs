//! Garbage Can - entry point
//!
//! Reads one flat input vector (stdin or a file), runs the 81-scenario
//! sweep, and prints the legacy report. An optional JSON dump of the
//! summary records can be written alongside.

use clap::Parser;
use garbage_can::core::error::Result;
use garbage_can::input::parse_input;
use garbage_can::model::sweep::{run_sweep, SweepOutput};
use garbage_can::report;

use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Batch sweep over the garbage-can organizational choice model
#[derive(Parser, Debug)]
#[command(name = "garbage-can")]
#[command(about = "Run the 81-scenario organizational choice sweep")]
struct Args {
    /// Input file; reads stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the sweep summaries as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the per-period history tables regardless of the IO flag
    #[arg(long, default_value_t = false)]
    history: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "garbage_can=info".to_string()),
        )
        .init();

    let args = Args::parse();

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // The legacy reader treats an empty deck as "nothing to do"
    if text.trim().is_empty() {
        return Ok(());
    }

    let inputs = parse_input(&text)?;
    let runs = run_sweep(&inputs);

    let show_history = args.history || inputs.history_requested();
    print!(
        "{}",
        report::render_sweep(&runs, inputs.movement, show_history)
    );

    if let Some(path) = &args.json {
        let output = SweepOutput::new(inputs.movement, &runs);
        fs::write(path, output.to_json())?;
        tracing::info!(path = %path.display(), "wrote JSON summary dump");
    }

    Ok(())
}
