//! Merge progress reporting.
//!
//! Purely observational: reporters consume byte-count deltas against the
//! precomputed sum of input sizes and have no effect on correctness.

use std::time::Instant;

pub trait ProgressObserver {
    /// Called after each record is written, with the record's size.
    fn emitted(&mut self, bytes: u64);

    /// Called once when the merge completes normally.
    fn done(&mut self) {}
}

/// No-op observer.
pub struct NullProgress;

impl ProgressObserver for NullProgress {
    fn emitted(&mut self, _bytes: u64) {}
}

/// Console reporter: running total, rate and ETA, throttled to one line
/// per ten seconds.
pub struct ConsoleProgress {
    total: u64,
    written: u64,
    start: Instant,
    last_report: Instant,
}

impl ConsoleProgress {
    /// `total` is the precomputed sum of all input file sizes.
    pub fn new(total: u64) -> Self {
        let now = Instant::now();
        Self {
            total,
            written: 0,
            start: now,
            last_report: now,
        }
    }

    pub fn written(&self) -> u64 {
        self.written
    }
}

const MB: f64 = 1_048_576.0;

impl ProgressObserver for ConsoleProgress {
    fn emitted(&mut self, bytes: u64) {
        self.written += bytes;
        if self.last_report.elapsed().as_secs() >= 10 {
            let elapsed = self.start.elapsed().as_secs_f64();
            let rate = self.written as f64 / elapsed.max(0.001);
            let remaining = self.total.saturating_sub(self.written) as f64 / rate.max(1.0);
            println!(
                "  {:.1}/{:.1} MB ({:.1}%) - {:.1} MB/s - ETA: {:.0}s",
                self.written as f64 / MB,
                self.total as f64 / MB,
                self.written as f64 / self.total.max(1) as f64 * 100.0,
                rate / MB,
                remaining,
            );
            self.last_report = Instant::now();
        }
    }

    fn done(&mut self) {
        let elapsed = self.start.elapsed().as_secs_f64();
        println!(
            "  {:.1} MB written in {:.1}s ({:.1} MB/s)",
            self.written as f64 / MB,
            elapsed,
            self.written as f64 / MB / elapsed.max(0.001),
        );
    }
}
