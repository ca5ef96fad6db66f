//! # hap-groups
//!
//! A library for collapsing aligned sequences into haplotypes and describing
//! how each haplotype differs from a reference.
//!
//! Sequences that are identical character for character form one haplotype.
//! Haplotypes are numbered in the order they first appear in the input, and
//! every haplotype is compared position by position against the reference.
//!
//! ## Features
//!
//! - **Streaming FASTA reader**: plain or gzip/bgzip compressed input
//! - **Exact grouping**: first-seen order, member order preserved
//! - **Substitution listing**: 1-based `T4A` style minimal encodings
//! - **Tabular reports**: four tab-separated files per run
//!
//! ## Example
//!
//! ```rust
//! use hap_groups::analysis::group_records;
//! use hap_groups::core::difference::diff;
//! use hap_groups::FastaRecord;
//!
//! let records = vec![
//!     Ok::<_, std::convert::Infallible>(FastaRecord::new("s1", "ACGT")),
//!     Ok(FastaRecord::new("s2", "ACGA")),
//!     Ok(FastaRecord::new("s3", "ACGA")),
//! ];
//! let groups = group_records(records).unwrap();
//! assert_eq!(groups.len(), 2);
//!
//! let diffs = diff("ACGT", groups[1].sequence()).unwrap();
//! assert_eq!(diffs[0].to_string(), "T4A");
//! assert_eq!(groups[1].members, vec!["s2", "s3"]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Records, haplotype groups and differences
//! - [`parsing`]: FASTA reader
//! - [`analysis`]: Grouping and the end-to-end pipeline
//! - [`output`]: Report writers
//! - [`cli`]: Command-line interface implementation

pub mod analysis;
pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use analysis::{run_analysis, AnalysisError, HaplotypeGrouper, RunConfig, RunSummary};
pub use core::difference::{Difference, LengthMismatch};
pub use core::haplotype::{AnnotatedHaplotype, HaplotypeGroup, HaplotypeId};
pub use core::record::FastaRecord;
pub use output::reports::ReportKind;
pub use parsing::fasta::{FastaReader, ParseError};
