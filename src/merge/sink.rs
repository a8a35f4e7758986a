//! Output sink.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::MergeError;

/// Output write buffer.
const WRITE_BUF_CAPACITY: usize = 8 * 1024 * 1024;

/// Receives records in merge order and writes them verbatim.
pub trait RecordSink {
    fn write_record(&mut self, record: &[u8]) -> Result<(), MergeError>;

    /// Flushes buffered data once the active set is empty.
    fn finish(&mut self) -> Result<(), MergeError>;
}

/// File-backed sink. The parent directory is created if absent; an
/// existing file is truncated, never appended to.
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    pub fn create(path: &Path) -> Result<Self, MergeError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| MergeError::io("failed to create output directory", parent, e))?;
            }
        }
        let file =
            File::create(path).map_err(|e| MergeError::io("failed to create output", path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::with_capacity(WRITE_BUF_CAPACITY, file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for FileSink {
    fn write_record(&mut self, record: &[u8]) -> Result<(), MergeError> {
        self.writer
            .write_all(record)
            .map_err(|e| MergeError::io("failed to write output", &self.path, e))
    }

    fn finish(&mut self) -> Result<(), MergeError> {
        self.writer
            .flush()
            .map_err(|e| MergeError::io("failed to flush output", &self.path, e))
    }
}

/// In-memory sink, used by tests.
impl RecordSink for Vec<u8> {
    fn write_record(&mut self, record: &[u8]) -> Result<(), MergeError> {
        self.extend_from_slice(record);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), MergeError> {
        Ok(())
    }
}
