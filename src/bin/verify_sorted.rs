//! Quick check that log files are sorted by timestamp.
//!
//! Much faster than merging - streams each file once and verifies the
//! extracted keys never decrease. Exits non-zero if any file is out of
//! order.

use std::path::Path;

use anyhow::Result;

use logmerge::check::{check_sorted, CheckOutcome};
use logmerge::TimestampExtractor;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("Usage: verify_sorted <file> [<file>...]");
        return Ok(());
    }

    let extractor = TimestampExtractor::new();
    let mut all_sorted = true;

    for arg in &args[1..] {
        let path = Path::new(arg);
        match check_sorted(path, &extractor)? {
            CheckOutcome::Sorted { records } => {
                println!("✅ {} is sorted ({} records)", path.display(), records);
            }
            CheckOutcome::Unsorted {
                records,
                offset,
                prev_key,
                key,
            } => {
                all_sorted = false;
                println!("❌ {} is NOT sorted", path.display());
                println!(
                    "   Record {} at byte {}: key \"{}\" after \"{}\"",
                    records + 1,
                    offset,
                    String::from_utf8_lossy(&key),
                    String::from_utf8_lossy(&prev_key),
                );
            }
        }
    }

    if !all_sorted {
        anyhow::bail!("one or more files are out of order");
    }
    Ok(())
}
