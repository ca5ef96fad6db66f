use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::haplotype::AnnotatedHaplotype;

#[derive(Error, Debug)]
#[error("Failed to write {}: {source}", .path.display())]
pub struct ReportError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// The four tab-separated reports written for every run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Full haplotype sequence per id
    Sequences,
    /// Minimal encoding of the differences per id
    MinimalSequences,
    /// Member count per id
    Info,
    /// Member count and names per id
    Names,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Sequences,
        ReportKind::MinimalSequences,
        ReportKind::Info,
        ReportKind::Names,
    ];

    #[must_use]
    pub fn file_name(self, prefix: &str) -> String {
        let suffix = match self {
            Self::Sequences => "haplotype-sequences-n-ids",
            Self::MinimalSequences => "haplotype-min-sequences-n-ids",
            Self::Info => "haplotype-ids-n-info",
            Self::Names => "haplotype-ids-n-names",
        };
        format!("{prefix}-{suffix}.tab")
    }

    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::Sequences | Self::MinimalSequences => "ID\tHAPLOTYPE\tREF_DIFF\tIS_REF",
            Self::Info => "ID\tHAP_COUNT\tREF_DIFF\tIS_REF",
            Self::Names => "ID\tHAP_COUNT\tHAP_NAMES\tREF_DIFF\tIS_REF",
        }
    }

    fn write_row<W: Write>(self, out: &mut W, hap: &AnnotatedHaplotype) -> std::io::Result<()> {
        let id = hap.group.id;
        let diff_count = hap.diff_count();
        let is_ref = bool_literal(hap.is_reference());
        match self {
            Self::Sequences => writeln!(
                out,
                "{id}\t{}\t{diff_count}\t{is_ref}",
                hap.group.sequence()
            ),
            Self::MinimalSequences => writeln!(
                out,
                "{id}\t{}\t{diff_count}\t{is_ref}",
                hap.minimal_encoding()
            ),
            Self::Info => writeln!(
                out,
                "{id}\t{}\t{diff_count}\t{is_ref}",
                hap.group.member_count()
            ),
            Self::Names => writeln!(
                out,
                "{id}\t{}\t{}\t{diff_count}\t{is_ref}",
                hap.group.member_count(),
                hap.group.members.join(",")
            ),
        }
    }

    /// Write the header and one row per haplotype, in the order given.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn write<W: Write>(
        self,
        out: &mut W,
        haplotypes: &[AnnotatedHaplotype],
    ) -> std::io::Result<()> {
        writeln!(out, "{}", self.header())?;
        for hap in haplotypes {
            self.write_row(out, hap)?;
        }
        out.flush()
    }
}

/// Spelling of `IS_REF` values, shared with existing downstream tables
fn bool_literal(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Write all four reports into `dir`, creating it if needed.
///
/// Existing files with the same names are overwritten. Returns the written
/// paths in [`ReportKind::ALL`] order.
///
/// # Errors
///
/// Returns `ReportError` naming the path that could not be created or written.
pub fn write_reports(
    dir: &Path,
    prefix: &str,
    haplotypes: &[AnnotatedHaplotype],
) -> Result<Vec<PathBuf>, ReportError> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::with_capacity(ReportKind::ALL.len());
    for kind in ReportKind::ALL {
        let path = dir.join(kind.file_name(prefix));
        write_report(&path, kind, haplotypes).map_err(|source| ReportError {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}

fn write_report(
    path: &Path,
    kind: ReportKind,
    haplotypes: &[AnnotatedHaplotype],
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    kind.write(&mut writer, haplotypes)
}
