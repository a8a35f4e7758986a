//! logmerge - streaming k-way merge of pre-sorted log files
//!
//! Merges N individually sorted, newline-delimited log files into one
//! chronologically ordered output file without loading any file fully
//! into memory. Each input contributes one buffered record at a time;
//! a min-heap selects the globally smallest pending record by its
//! extracted timestamp key.

pub mod check;
pub mod error;
/// The streaming merge core
pub mod merge;

pub use error::MergeError;
pub use merge::engine::{check_inputs, merge_logs, total_input_size, MergeSummary, Merger};
pub use merge::key::{KeyExtract, TimestampExtractor};
pub use merge::progress::{ConsoleProgress, NullProgress, ProgressObserver};
pub use merge::sink::{FileSink, RecordSink};
