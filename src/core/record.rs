use serde::Serialize;

/// A single named sequence read from a FASTA source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FastaRecord {
    /// First token of the header line, without the leading `>`
    pub id: String,

    /// Concatenated sequence lines, whitespace trimmed
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    /// Sequence length in characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Extract the record identifier from a FASTA header line.
///
/// The first whitespace-delimited token is taken and its leading `>` stripped.
/// Returns `None` when the line is not a header or no identifier follows the
/// marker directly.
///
/// # Examples
///
/// ```
/// use hap_groups::core::record::parse_identifier;
///
/// assert_eq!(parse_identifier(">s1 sampled 2021"), Some("s1"));
/// assert_eq!(parse_identifier(">  s2"), None);
/// assert_eq!(parse_identifier(">"), None);
/// assert_eq!(parse_identifier("ACGT"), None);
/// ```
#[must_use]
pub fn parse_identifier(header: &str) -> Option<&str> {
    header
        .split_whitespace()
        .next()?
        .strip_prefix('>')
        .filter(|id| !id.is_empty())
}
