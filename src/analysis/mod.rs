//! Haplotype grouping and reference comparison.
//!
//! - [`HaplotypeGrouper`]: partitions records by exact sequence
//! - [`run_analysis`]: the full read, group, diff and report pipeline
//!
//! ## Example
//!
//! ```rust,no_run
//! use hap_groups::analysis::{run_analysis, RunConfig};
//! use std::path::PathBuf;
//!
//! let config = RunConfig {
//!     fasta: PathBuf::from("samples.fa"),
//!     reference: PathBuf::from("reference.fa"),
//!     output_dir: PathBuf::from("out"),
//!     prefix: "run1".to_string(),
//! };
//! let summary = run_analysis(&config).unwrap();
//! println!("{} haplotypes", summary.haplotypes);
//! ```

pub mod grouper;
pub mod pipeline;

pub use grouper::{group_records, HaplotypeGrouper};
pub use pipeline::{run_analysis, AnalysisError, RunConfig, RunSummary};
