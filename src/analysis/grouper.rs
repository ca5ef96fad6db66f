use std::collections::HashMap;

use tracing::debug;

use crate::core::haplotype::{HaplotypeGroup, HaplotypeId};
use crate::core::record::FastaRecord;

/// Collects records into haplotype groups keyed by exact sequence.
///
/// Groups keep the order in which their sequence was first seen, and ids
/// are assigned in that same order starting at 1.
#[derive(Debug, Default)]
pub struct HaplotypeGrouper {
    /// Sequence -> index into `groups`
    index: HashMap<String, usize>,
    groups: Vec<HaplotypeGroup>,
    records_seen: usize,
}

impl HaplotypeGrouper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record, either joining its sequence's group or opening a new one
    pub fn add(&mut self, record: FastaRecord) {
        debug!("Processing {}", record.id);
        self.records_seen += 1;

        if let Some(&i) = self.index.get(&record.sequence) {
            self.groups[i].add_member(record.id);
            return;
        }

        let id = HaplotypeId(self.groups.len() + 1);
        self.index.insert(record.sequence.clone(), self.groups.len());
        self.groups.push(HaplotypeGroup::new(id, record.sequence, record.id));
    }

    /// Number of records added so far
    #[must_use]
    pub fn records_seen(&self) -> usize {
        self.records_seen
    }

    /// Finalize and return the groups in first-seen order
    #[must_use]
    pub fn finish(self) -> Vec<HaplotypeGroup> {
        self.groups
    }
}

/// Group every record from a fallible record source.
///
/// Stops at the first error; no groups are returned in that case.
///
/// # Errors
///
/// Returns the first error produced by `records`.
pub fn group_records<I, E>(records: I) -> Result<Vec<HaplotypeGroup>, E>
where
    I: IntoIterator<Item = Result<FastaRecord, E>>,
{
    let mut grouper = HaplotypeGrouper::new();
    for record in records {
        grouper.add(record?);
    }
    debug!(
        "Grouped {} records into {} haplotypes",
        grouper.records_seen(),
        grouper.groups.len()
    );
    Ok(grouper.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_records(pairs: &[(&str, &str)]) -> Vec<Result<FastaRecord, ()>> {
        pairs
            .iter()
            .map(|(id, seq)| Ok(FastaRecord::new(*id, *seq)))
            .collect()
    }

    #[test]
    fn test_groups_follow_first_seen_order() {
        let groups = group_records(ok_records(&[
            ("a", "TTTT"),
            ("b", "ACGT"),
            ("c", "TTTT"),
            ("d", "GGGG"),
            ("e", "ACGT"),
        ]))
        .unwrap();

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].id, HaplotypeId(1));
        assert_eq!(groups[0].sequence(), "TTTT");
        assert_eq!(groups[0].members, vec!["a", "c"]);
        assert_eq!(groups[1].id, HaplotypeId(2));
        assert_eq!(groups[1].members, vec!["b", "e"]);
        assert_eq!(groups[2].id, HaplotypeId(3));
        assert_eq!(groups[2].members, vec!["d"]);
    }

    #[test]
    fn test_partition_is_exact_and_preserves_multiplicity() {
        let input = [
            ("s1", "ACGT"),
            ("s2", "acgt"),
            ("s1", "ACGT"),
            ("s3", "ACGN"),
            ("s4", "ACGT"),
        ];
        let groups = group_records(ok_records(&input)).unwrap();

        // Same group iff same sequence
        for (id, seq) in &input {
            let holders: Vec<_> = groups
                .iter()
                .filter(|g| g.members.iter().any(|m| m == id))
                .collect();
            assert!(holders.iter().all(|g| g.sequence() == *seq));
        }
        assert_eq!(groups.len(), 3);

        let total: usize = groups.iter().map(HaplotypeGroup::member_count).sum();
        assert_eq!(total, input.len());
        assert_eq!(groups[0].members, vec!["s1", "s1", "s4"]);
    }

    #[test]
    fn test_error_stops_grouping() {
        let records = vec![
            Ok(FastaRecord::new("s1", "ACGT")),
            Err("bad line"),
            Ok(FastaRecord::new("s2", "ACGT")),
        ];
        assert_eq!(group_records(records), Err("bad line"));
    }

    #[test]
    fn test_grouper_counts_records() {
        let mut grouper = HaplotypeGrouper::new();
        grouper.add(FastaRecord::new("s1", "AC"));
        grouper.add(FastaRecord::new("s2", "AC"));
        assert_eq!(grouper.records_seen(), 2);
        assert_eq!(grouper.finish().len(), 1);
    }
}
