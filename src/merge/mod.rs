//! Streaming k-way merge of individually sorted log files.
//!
//! ## Strategy
//!
//! One read cursor per input holds the current unread record and its
//! extracted timestamp key. A min-heap over `(key, registration index)`
//! selects the globally smallest pending record; that record is written
//! verbatim, its cursor advances, and the cursor is reinserted until its
//! input is drained.
//!
//! ## Memory usage
//!
//! All I/O is streaming. Peak auxiliary memory is one buffered record
//! plus one key per input, independent of total data volume.

pub mod active_set;
pub mod cursor;
pub mod engine;
pub mod key;
pub mod progress;
pub mod sink;

pub use active_set::ActiveSet;
pub use cursor::Cursor;
pub use engine::{check_inputs, merge_logs, total_input_size, MergeSummary, Merger};
pub use key::{KeyExtract, TimestampExtractor};
pub use progress::{ConsoleProgress, NullProgress, ProgressObserver};
pub use sink::{FileSink, RecordSink};
