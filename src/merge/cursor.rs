//! Per-input read cursor.
//!
//! A cursor buffers exactly one record from its file: the record bytes,
//! the byte range of the sort key within them, and the record's byte
//! offset. Record and key are present together or absent together;
//! absent means the input is exhausted and the file handle has been
//! released.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::error::MergeError;
use crate::merge::key::KeyExtract;

/// Per-input read buffer.
const READ_BUF_CAPACITY: usize = 1024 * 1024;

pub struct Cursor {
    path: PathBuf,
    index: usize,
    reader: Option<BufReader<File>>,
    record: Vec<u8>,
    key: Option<Range<usize>>,
    offset: u64,
    next_offset: u64,
}

impl Cursor {
    /// Opens the input and buffers its first record. A cursor opened on an
    /// empty file starts out exhausted.
    pub fn open(
        path: &Path,
        index: usize,
        extractor: &dyn KeyExtract,
    ) -> Result<Self, MergeError> {
        let file =
            File::open(path).map_err(|e| MergeError::io("failed to open input", path, e))?;
        let mut cursor = Self {
            path: path.to_path_buf(),
            index,
            reader: Some(BufReader::with_capacity(READ_BUF_CAPACITY, file)),
            record: Vec::new(),
            key: None,
            offset: 0,
            next_offset: 0,
        };
        cursor.advance(extractor)?;
        Ok(cursor)
    }

    /// Reads the next record and re-extracts its key. Returns `false` at
    /// end of input, after which the file handle has been dropped.
    ///
    /// A record without a recognizable key is fatal: skipping it would
    /// silently break the sortedness invariant for the rest of the stream.
    pub fn advance(&mut self, extractor: &dyn KeyExtract) -> Result<bool, MergeError> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(false);
        };

        self.record.clear();
        self.key = None;
        self.offset = self.next_offset;

        let n = reader
            .read_until(b'\n', &mut self.record)
            .map_err(|e| MergeError::io("failed to read input", &self.path, e))?;
        if n == 0 {
            // End of input: release the descriptor now rather than at the
            // end of the whole merge.
            self.reader = None;
            return Ok(false);
        }
        self.next_offset += n as u64;

        match extractor.extract(&self.record) {
            Some(range) => {
                self.key = Some(range);
                Ok(true)
            }
            None => Err(MergeError::MalformedRecord {
                path: self.path.clone(),
                offset: self.offset,
            }),
        }
    }

    /// Current record bytes, verbatim (trailing newline included when the
    /// source line had one). `None` once the input is exhausted.
    pub fn record(&self) -> Option<&[u8]> {
        self.key.as_ref().map(|_| self.record.as_slice())
    }

    /// Sort key of the current record. `None` once the input is exhausted.
    pub fn key(&self) -> Option<&[u8]> {
        self.key.clone().map(|range| &self.record[range])
    }

    /// Byte offset of the current record's first byte.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Registration index, the deterministic tie-break for equal keys.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_exhausted(&self) -> bool {
        self.reader.is_none()
    }
}
