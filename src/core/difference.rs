use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single-character substitution relative to the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Difference {
    /// 1-based position in the reference
    pub position: usize,
    pub ref_base: char,
    pub alt_base: char,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.ref_base, self.position, self.alt_base)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("sequence length {found} does not match reference length {expected}")]
pub struct LengthMismatch {
    pub expected: usize,
    pub found: usize,
}

/// Compare a sequence to the reference position by position.
///
/// Every mismatching character yields one [`Difference`], in increasing
/// position order. Comparison is literal: case matters and ambiguity codes
/// are ordinary characters.
///
/// # Errors
///
/// Returns `LengthMismatch` if the two sequences differ in length.
///
/// # Examples
///
/// ```
/// use hap_groups::core::difference::diff;
///
/// let diffs = diff("ACGT", "ACGA").unwrap();
/// assert_eq!(diffs.len(), 1);
/// assert_eq!(diffs[0].to_string(), "T4A");
/// ```
pub fn diff(reference: &str, sequence: &str) -> Result<Vec<Difference>, LengthMismatch> {
    let expected = reference.chars().count();
    let found = sequence.chars().count();
    if expected != found {
        return Err(LengthMismatch { expected, found });
    }

    Ok(reference
        .chars()
        .zip(sequence.chars())
        .enumerate()
        .filter(|(_, (r, s))| r != s)
        .map(|(i, (ref_base, alt_base))| Difference {
            position: i + 1,
            ref_base,
            alt_base,
        })
        .collect())
}

/// Render differences as the minimal encoding: comma-joined substitutions,
/// or `-` when the sequence is identical to the reference.
#[must_use]
pub fn minimal_encoding(diffs: &[Difference]) -> String {
    if diffs.is_empty() {
        return "-".to_string();
    }
    diffs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Rebuild a sequence by applying substitutions to the reference.
///
/// Positions outside the reference are ignored.
#[must_use]
pub fn apply_differences(reference: &str, diffs: &[Difference]) -> String {
    let mut bases: Vec<char> = reference.chars().collect();
    for d in diffs {
        if let Some(base) = d.position.checked_sub(1).and_then(|i| bases.get_mut(i)) {
            *base = d.alt_base;
        }
    }
    bases.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_identical_is_empty() {
        assert!(diff("ACGT", "ACGT").unwrap().is_empty());
    }

    #[test]
    fn test_diff_positions_are_one_based_and_ordered() {
        let diffs = diff("ACGTACGT", "TCGTACGA").unwrap();
        assert_eq!(
            diffs,
            vec![
                Difference {
                    position: 1,
                    ref_base: 'A',
                    alt_base: 'T'
                },
                Difference {
                    position: 8,
                    ref_base: 'T',
                    alt_base: 'A'
                },
            ]
        );
    }

    #[test]
    fn test_diff_is_case_sensitive() {
        let diffs = diff("ACGT", "acGT").unwrap();
        assert_eq!(minimal_encoding(&diffs), "A1a,C2c");
    }

    #[test]
    fn test_diff_treats_ambiguity_codes_literally() {
        let diffs = diff("ACGT", "ACNR").unwrap();
        assert_eq!(minimal_encoding(&diffs), "G3N,T4R");
    }

    #[test]
    fn test_diff_length_mismatch() {
        let err = diff("ACGT", "ACGTA").unwrap_err();
        assert_eq!(
            err,
            LengthMismatch {
                expected: 4,
                found: 5
            }
        );
    }

    #[test]
    fn test_minimal_encoding_empty() {
        assert_eq!(minimal_encoding(&[]), "-");
    }

    #[test]
    fn test_apply_differences_reconstructs_sequence() {
        let reference = "ACGTACGTAC";
        for sequence in ["ACGTACGTAC", "TTTTTTTTTT", "ACGAACGTAG", "-CGTACGTAN"] {
            let diffs = diff(reference, sequence).unwrap();
            assert_eq!(apply_differences(reference, &diffs), sequence);
        }
    }
}
