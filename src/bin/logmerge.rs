//! logmerge CLI
//!
//! Merges an arbitrary number of individually sorted log files into one
//! chronologically ordered output file.
//!
//! Usage:
//!   logmerge <input1> <input2> [more inputs...] -o <output>

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use logmerge::{check_inputs, merge_logs, total_input_size};
use logmerge::{ConsoleProgress, NullProgress, ProgressObserver};

#[derive(Parser)]
#[command(name = "logmerge")]
#[command(about = "Merges an arbitrary number of sorted log files into one")]
struct Cli {
    /// Input file 1
    input1: PathBuf,
    /// Input file 2
    input2: PathBuf,
    /// Additional input files
    add_inputs: Vec<PathBuf>,
    /// Output file
    #[arg(short, long)]
    output: PathBuf,
    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut inputs = vec![cli.input1, cli.input2];
    inputs.extend(cli.add_inputs);

    // All inputs must exist before the output file is touched.
    check_inputs(&inputs)?;
    let total = total_input_size(&inputs)?;

    if !cli.quiet {
        println!("{}", "═".repeat(60));
        println!("MERGING {} LOG FILES", inputs.len());
        println!("{}", "═".repeat(60));
        for input in &inputs {
            println!("  Input: {}", input.display());
        }
        println!("  Output: {}", cli.output.display());
        println!("  Total input size: {:.1} MB", total as f64 / 1_048_576.0);
    }

    let mut progress: Box<dyn ProgressObserver> = if cli.quiet {
        Box::new(NullProgress)
    } else {
        Box::new(ConsoleProgress::new(total))
    };

    let summary = merge_logs(&inputs, &cli.output, progress.as_mut())?;

    if !cli.quiet {
        println!("{}", "─".repeat(60));
        println!("  ✅ Merge complete");
        println!("  Records: {}", summary.records);
        println!("  Bytes: {}", summary.bytes);
        println!("  Time: {:.1}s", summary.elapsed.as_secs_f64());
    }

    Ok(())
}
