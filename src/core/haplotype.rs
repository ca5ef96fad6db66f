use std::fmt;

use serde::Serialize;

use crate::core::difference::{minimal_encoding, Difference};

/// 1-based haplotype number, assigned in first-seen order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HaplotypeId(pub usize);

impl fmt::Display for HaplotypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hap_{}", self.0)
    }
}

/// Records sharing one exact sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HaplotypeGroup {
    pub id: HaplotypeId,
    sequence: String,
    /// Member identifiers in input order, duplicates kept
    pub members: Vec<String>,
}

impl HaplotypeGroup {
    pub fn new(
        id: HaplotypeId,
        sequence: impl Into<String>,
        first_member: impl Into<String>,
    ) -> Self {
        Self {
            id,
            sequence: sequence.into(),
            members: vec![first_member.into()],
        }
    }

    /// The shared sequence. Fixed once the group exists.
    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn add_member(&mut self, id: impl Into<String>) {
        self.members.push(id.into());
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// A finalized group together with its differences from the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedHaplotype {
    pub group: HaplotypeGroup,
    pub differences: Vec<Difference>,
}

impl AnnotatedHaplotype {
    #[must_use]
    pub fn diff_count(&self) -> usize {
        self.differences.len()
    }

    /// True iff the haplotype is identical to the reference
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.differences.is_empty()
    }

    #[must_use]
    pub fn minimal_encoding(&self) -> String {
        minimal_encoding(&self.differences)
    }
}
