//! Merge error taxonomy.
//!
//! Every variant aborts the whole merge. There is no partial-result
//! salvage and no retry: once output bytes have been written the
//! operation is not idempotent, so the only safe response to a failure
//! is to stop and report it.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    /// A declared input path does not exist. Detected before the merge
    /// starts; the output file is left untouched.
    #[error("input file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    /// A record lacks the timestamp marker or terminator, so its sort key
    /// cannot be established. `offset` is the byte offset of the record's
    /// first byte within the named file.
    #[error("malformed record in {} at byte {offset}: timestamp field not found", .path.display())]
    MalformedRecord { path: PathBuf, offset: u64 },

    /// I/O failure with the originating operation and resource attached.
    #[error("{op} {}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The cancellation flag was observed between record emissions.
    #[error("merge cancelled")]
    Cancelled,
}

impl MergeError {
    pub(crate) fn io(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}
