//! The merge engine.
//!
//! Opens every input in registration order, then repeatedly pops the
//! cursor holding the globally smallest key, writes its record verbatim,
//! advances that cursor and reinserts it until every input is drained.
//! All inputs plus the output stay open for the whole merge; peak
//! auxiliary memory is one buffered record and key per input.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::MergeError;
use crate::merge::active_set::ActiveSet;
use crate::merge::cursor::Cursor;
use crate::merge::key::{KeyExtract, TimestampExtractor};
use crate::merge::progress::ProgressObserver;
use crate::merge::sink::{FileSink, RecordSink};

/// Totals reported after a completed merge.
#[derive(Debug, Clone)]
pub struct MergeSummary {
    pub inputs: usize,
    pub records: u64,
    pub bytes: u64,
    pub elapsed: Duration,
}

/// Streaming k-way merge over pre-sorted inputs.
///
/// Inputs are registered in the order given; that order is the
/// deterministic tie-break for equal keys. Cancellation is cooperative:
/// the flag from [`Merger::cancel_flag`] is checked once per iteration,
/// between record emissions.
pub struct Merger<E: KeyExtract = TimestampExtractor> {
    extractor: E,
    cancel: Arc<AtomicBool>,
}

impl Merger<TimestampExtractor> {
    pub fn new() -> Self {
        Self::with_extractor(TimestampExtractor::new())
    }
}

impl Default for Merger<TimestampExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: KeyExtract> Merger<E> {
    /// Builds a merger around an alternate record format's extractor.
    pub fn with_extractor(extractor: E) -> Self {
        Self {
            extractor,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag that aborts the merge when set.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Runs the merge to completion. On any error every open resource is
    /// released on the way out; the sink is only flushed on success.
    pub fn run(
        &self,
        inputs: &[PathBuf],
        sink: &mut dyn RecordSink,
        progress: &mut dyn ProgressObserver,
    ) -> Result<MergeSummary, MergeError> {
        let start = Instant::now();

        // Initializing: open every cursor in registration order. Empty
        // inputs open exhausted and simply never enter the active set.
        let mut cursors = Vec::with_capacity(inputs.len());
        let mut active = ActiveSet::with_capacity(inputs.len());
        for (index, path) in inputs.iter().enumerate() {
            let cursor = Cursor::open(path, index, &self.extractor)?;
            if let Some(key) = cursor.key() {
                active.insert(key, cursor.index());
            }
            cursors.push(cursor);
        }

        // Merging: emit the smallest pending record, advance its cursor,
        // reinsert while it has data.
        let mut records = 0u64;
        let mut bytes = 0u64;
        while let Some(index) = active.pop_min() {
            if self.cancel.load(Ordering::Relaxed) {
                return Err(MergeError::Cancelled);
            }

            let cursor = &mut cursors[index];
            // A popped index always holds a buffered record; the set only
            // contains live cursors.
            if let Some(record) = cursor.record() {
                sink.write_record(record)?;
                records += 1;
                bytes += record.len() as u64;
                progress.emitted(record.len() as u64);
            }

            if cursor.advance(&self.extractor)? {
                if let Some(key) = cursor.key() {
                    active.insert(key, index);
                }
            }
        }

        // Done.
        sink.finish()?;
        progress.done();

        Ok(MergeSummary {
            inputs: inputs.len(),
            records,
            bytes,
            elapsed: start.elapsed(),
        })
    }
}

/// Merges `inputs` into a freshly created file at `output`.
///
/// The output file is created (parent directories included) and truncated
/// before the merge begins; run [`check_inputs`] first to keep a
/// pre-existing output untouched when an input is missing.
pub fn merge_logs(
    inputs: &[PathBuf],
    output: &Path,
    progress: &mut dyn ProgressObserver,
) -> Result<MergeSummary, MergeError> {
    let mut sink = FileSink::create(output)?;
    Merger::new().run(inputs, &mut sink, progress)
}

/// Upfront existence check over all inputs. Reports the first missing
/// path, resolved against the current directory so the message names an
/// unambiguous location.
pub fn check_inputs(inputs: &[PathBuf]) -> Result<(), MergeError> {
    for path in inputs {
        if !path.exists() {
            return Err(MergeError::MissingInput {
                path: resolved(path),
            });
        }
    }
    Ok(())
}

/// Sum of all input file sizes, for progress totals.
pub fn total_input_size(inputs: &[PathBuf]) -> Result<u64, MergeError> {
    let mut total = 0u64;
    for path in inputs {
        let meta = fs::metadata(path)
            .map_err(|e| MergeError::io("failed to stat input", path, e))?;
        total += meta.len();
    }
    Ok(total)
}

fn resolved(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|dir| dir.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
