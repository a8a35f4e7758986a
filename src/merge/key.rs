//! Sort-key extraction via fixed-substring search.
//!
//! Records are never parsed as JSON. The timestamp field is located by
//! searching for the literal marker `amp": "` and taking the bytes up to
//! the closing `",`. The format guarantee (fixed-width, lexicographically
//! ordered timestamp representation) is what makes byte-wise comparison
//! of the extracted substring equal to chronological comparison.

use std::ops::Range;

use memchr::memmem::Finder;

/// Opening token of the timestamp field (tail of `"timestamp": "`).
pub const TIMESTAMP_MARKER: &[u8] = b"amp\": \"";

/// Closing token of the timestamp field.
pub const TIMESTAMP_TERMINATOR: &[u8] = b"\",";

/// Locates the sort key inside a raw record.
///
/// Implementations return the byte range of the key within the record, or
/// `None` when the record carries no recognizable key. The caller attaches
/// source identity and byte offset when turning a `None` into an error.
pub trait KeyExtract {
    fn extract(&self, record: &[u8]) -> Option<Range<usize>>;
}

/// Default extractor for timestamped JSON log lines.
///
/// The finders are built once and reused for every record.
pub struct TimestampExtractor {
    marker: Finder<'static>,
    terminator: Finder<'static>,
}

impl TimestampExtractor {
    pub fn new() -> Self {
        Self {
            marker: Finder::new(TIMESTAMP_MARKER),
            terminator: Finder::new(TIMESTAMP_TERMINATOR),
        }
    }
}

impl Default for TimestampExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyExtract for TimestampExtractor {
    fn extract(&self, record: &[u8]) -> Option<Range<usize>> {
        let start = self.marker.find(record)? + TIMESTAMP_MARKER.len();
        let len = self.terminator.find(&record[start..])?;
        Some(start..start + len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_timestamp_substring() {
        let extractor = TimestampExtractor::new();
        let record = br#"{"timestamp": "2024-01-02T03:04:05Z", "message": "hi"}"#;

        let range = extractor.extract(record).unwrap();
        assert_eq!(&record[range], b"2024-01-02T03:04:05Z");
    }

    #[test]
    fn missing_marker_yields_none() {
        let extractor = TimestampExtractor::new();
        let record = br#"{"time": "2024-01-02", "message": "hi"}"#;

        assert_eq!(extractor.extract(record), None);
    }

    #[test]
    fn missing_terminator_yields_none() {
        let extractor = TimestampExtractor::new();
        // Timestamp is the last field, so no `",` follows it.
        let record = br#"{"message": "hi", "timestamp": "2024-01-02"}"#;

        assert_eq!(extractor.extract(record), None);
    }

    #[test]
    fn empty_timestamp_is_extractable() {
        let extractor = TimestampExtractor::new();
        let record = br#"{"timestamp": "", "message": "hi"}"#;

        let range = extractor.extract(record).unwrap();
        assert!(range.is_empty());
    }

    #[test]
    fn first_terminator_after_marker_wins() {
        let extractor = TimestampExtractor::new();
        let record = br#"{"timestamp": "00:01", "note": "a", "b": "c"}"#;

        let range = extractor.extract(record).unwrap();
        assert_eq!(&record[range], b"00:01");
    }
}
