//! Streaming FASTA reader.
//!
//! Records are yielded one at a time as soon as their sequence is complete.
//! Sequence lines are trimmed and concatenated; blank lines are ignored.
//!
//! Supported extensions for compressed input:
//! - `.gz` (gzip)
//! - `.bgz` (bgzip)

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::record::{parse_identifier, FastaRecord};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed FASTA input at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("No sequences found in FASTA input")]
    NoRecords,

    #[error("Record '{0}' has no sequence")]
    EmptySequence(String),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a FASTA file, decompressing it if the extension says so.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_fasta(path: &Path) -> Result<FastaReader<Box<dyn BufRead>>, ParseError> {
    let file = File::open(path)?;
    let reader: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(FastaReader::new(reader))
}

/// Read the reference sequence: the sequence of the first record in a FASTA file.
///
/// Later records are never consulted, even when the first one is empty.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Malformed`
/// if the content is not FASTA, `ParseError::NoRecords` if it holds no record,
/// or `ParseError::EmptySequence` if the first record has no sequence.
pub fn read_reference(path: &Path) -> Result<String, ParseError> {
    let record = open_fasta(path)?
        .read_record()
        .ok_or(ParseError::NoRecords)??;
    if record.is_empty() {
        return Err(ParseError::EmptySequence(record.id));
    }
    debug!(id = %record.id, length = record.len(), "loaded reference");
    Ok(record.sequence)
}

/// Lazy iterator over the records of a FASTA source.
///
/// The reader is not restartable; once it returns `None` or an error it is
/// exhausted.
pub struct FastaReader<R> {
    inner: R,
    buf: String,
    line_num: usize,
    /// Identifier of the record being accumulated
    current: Option<String>,
    sequence: String,
    done: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
            line_num: 0,
            current: None,
            sequence: String::new(),
            done: false,
        }
    }

    /// Hand back the accumulated record, if any, even without sequence.
    fn take_record(&mut self) -> Option<FastaRecord> {
        let id = self.current.take()?;
        let sequence = std::mem::take(&mut self.sequence);
        Some(FastaRecord { id, sequence })
    }

    fn fail(&mut self, reason: impl Into<String>) -> Option<Result<FastaRecord, ParseError>> {
        self.done = true;
        Some(Err(ParseError::Malformed {
            line: self.line_num,
            reason: reason.into(),
        }))
    }

    /// Read the next record, including one whose sequence is empty.
    pub fn read_record(&mut self) -> Option<Result<FastaRecord, ParseError>> {
        if self.done {
            return None;
        }

        loop {
            self.buf.clear();
            let n = match self.inner.read_line(&mut self.buf) {
                Ok(n) => n,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            };

            if n == 0 {
                self.done = true;
                return self.take_record().map(Ok);
            }
            self.line_num += 1;

            let line = self.buf.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('>') {
                let Some(id) = parse_identifier(line).map(str::to_string) else {
                    return self.fail("header line has no identifier");
                };
                let finished = self.take_record();
                self.current = Some(id);
                if let Some(record) = finished {
                    return Some(Ok(record));
                }
            } else if self.current.is_none() {
                return self.fail("sequence data before the first '>' header");
            } else {
                self.sequence.push_str(line);
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord, ParseError>;

    /// Yields well-formed records only; records without sequence are skipped.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.read_record()? {
                Ok(record) if record.is_empty() => {
                    warn!("Skipping record '{}': no sequence", record.id);
                }
                other => return Some(other),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn read_all(text: &str) -> Result<Vec<FastaRecord>, ParseError> {
        FastaReader::new(Cursor::new(text.as_bytes())).collect()
    }

    #[test]
    fn test_read_multiline_records() {
        let records = read_all(">s1 first sample\nACGT\nAC\n\n>s2\r\n  GGGG  \r\n").unwrap();
        assert_eq!(
            records,
            vec![
                FastaRecord::new("s1", "ACGTAC"),
                FastaRecord::new("s2", "GGGG"),
            ]
        );
    }

    #[test]
    fn test_leading_blank_lines_are_ignored() {
        let records = read_all("\n\n   \n>s1\nACGT\n").unwrap();
        assert_eq!(records, vec![FastaRecord::new("s1", "ACGT")]);
    }

    #[test]
    fn test_content_before_header_is_malformed() {
        let err = read_all("\nACGT\n>s1\nACGT\n").unwrap_err();
        match err {
            ParseError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_header_is_malformed() {
        let err = read_all(">s1\nACGT\n>  \nACGT\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 3, .. }));
    }

    #[test]
    fn test_record_without_sequence_is_skipped() {
        let records = read_all(">s1\n>s2\nACGT\n>s3\n").unwrap();
        assert_eq!(records, vec![FastaRecord::new("s2", "ACGT")]);
    }

    #[test]
    fn test_reader_stops_after_error() {
        let mut reader = FastaReader::new(Cursor::new(&b"ACGT\n>s1\nACGT\n"[..]));
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(read_all("").unwrap().is_empty());
    }

    #[test]
    fn test_read_reference_uses_first_record() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">ref description\nACGT\nACGT\n>other\nTTTT\n")
            .unwrap();
        temp.flush().unwrap();

        assert_eq!(read_reference(temp.path()).unwrap(), "ACGTACGT");
    }

    #[test]
    fn test_header_with_space_after_marker_is_malformed() {
        let err = read_all(">  s2 desc\nACGT\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_read_record_keeps_empty_records() {
        let mut reader = FastaReader::new(Cursor::new(&b">s1\n>s2\nACGT\n"[..]));
        assert_eq!(reader.read_record().unwrap().unwrap(), FastaRecord::new("s1", ""));
        assert_eq!(
            reader.read_record().unwrap().unwrap(),
            FastaRecord::new("s2", "ACGT")
        );
        assert!(reader.read_record().is_none());
    }

    #[test]
    fn test_read_reference_empty_first_record() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">ref\n>other\nTTTT\n").unwrap();
        temp.flush().unwrap();

        match read_reference(temp.path()) {
            Err(ParseError::EmptySequence(id)) => assert_eq!(id, "ref"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_read_reference_empty_file() {
        let temp = NamedTempFile::with_suffix(".fa").unwrap();
        assert!(matches!(
            read_reference(temp.path()),
            Err(ParseError::NoRecords)
        ));
    }

    #[test]
    fn test_open_gzipped_fasta() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">s1\nACGT\n>s2\nACGA\n").unwrap();
        temp.write_all(&encoder.finish().unwrap()).unwrap();
        temp.flush().unwrap();

        let records: Vec<_> = open_fasta(temp.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], FastaRecord::new("s2", "ACGA"));
    }
}
