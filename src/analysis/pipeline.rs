use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::grouper::group_records;
use crate::core::difference::diff;
use crate::core::haplotype::{AnnotatedHaplotype, HaplotypeGroup};
use crate::core::record::FastaRecord;
use crate::output::reports::{write_reports, ReportError};
use crate::parsing::fasta::{open_fasta, read_reference, ParseError};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to read reference {}: {source}", .path.display())]
    Reference {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to read sequences {}: {source}", .path.display())]
    Sequences {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Sequence '{id}' has length {found} but the reference has length {expected}")]
    LengthMismatch {
        id: String,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Inputs and output location for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub fasta: PathBuf,
    pub reference: PathBuf,
    pub output_dir: PathBuf,
    pub prefix: String,
}

/// What a completed run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub records: usize,
    pub haplotypes: usize,
    /// Haplotypes identical to the reference
    pub reference_haplotypes: usize,
    pub reference_length: usize,
    pub reports: Vec<PathBuf>,
}

/// Diff each finalized group against the reference.
///
/// All groups are checked before anything is returned, so a length
/// mismatch leaves no partial result behind.
///
/// # Errors
///
/// Returns `AnalysisError::LengthMismatch` naming the first record (in input
/// order) whose sequence length differs from the reference.
pub fn annotate(
    reference: &str,
    groups: Vec<HaplotypeGroup>,
) -> Result<Vec<AnnotatedHaplotype>, AnalysisError> {
    groups
        .into_iter()
        .map(|group| match diff(reference, group.sequence()) {
            Ok(differences) => Ok(AnnotatedHaplotype { group, differences }),
            Err(e) => Err(AnalysisError::LengthMismatch {
                id: group.members[0].clone(),
                expected: e.expected,
                found: e.found,
            }),
        })
        .collect()
}

/// Group records and annotate the groups against the reference.
///
/// # Errors
///
/// Propagates the first record error (wrapped by `wrap`) or a length mismatch.
pub fn analyze<I, F>(
    reference: &str,
    records: I,
    wrap: F,
) -> Result<Vec<AnnotatedHaplotype>, AnalysisError>
where
    I: IntoIterator<Item = Result<FastaRecord, ParseError>>,
    F: FnOnce(ParseError) -> AnalysisError,
{
    let groups = group_records(records).map_err(wrap)?;
    annotate(reference, groups)
}

/// Run the whole pipeline: read, group, diff, then write the four reports.
///
/// Reports are only written once every input has been read and every
/// haplotype diffed successfully.
///
/// # Errors
///
/// Returns an `AnalysisError` describing the first failure.
pub fn run_analysis(config: &RunConfig) -> Result<RunSummary, AnalysisError> {
    let reference = read_reference(&config.reference).map_err(|source| {
        AnalysisError::Reference {
            path: config.reference.clone(),
            source,
        }
    })?;
    let reference_length = reference.chars().count();
    info!("Reference: {reference_length} bases");

    let wrap = |source: ParseError| AnalysisError::Sequences {
        path: config.fasta.clone(),
        source,
    };
    let records = open_fasta(&config.fasta).map_err(wrap)?;
    let haplotypes = analyze(&reference, records, wrap)?;

    let records: usize = haplotypes.iter().map(|h| h.group.member_count()).sum();
    if records == 0 {
        warn!("No sequences found in {}", config.fasta.display());
    }
    let reference_haplotypes = haplotypes.iter().filter(|h| h.is_reference()).count();
    info!(
        "{records} sequences in {} haplotypes ({reference_haplotypes} identical to reference)",
        haplotypes.len()
    );

    let reports = write_reports(&config.output_dir, &config.prefix, &haplotypes)?;

    Ok(RunSummary {
        records,
        haplotypes: haplotypes.len(),
        reference_haplotypes,
        reference_length,
        reports,
    })
}
