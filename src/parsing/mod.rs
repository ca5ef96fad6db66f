//! Parsers for sequence input.
//!
//! - **FASTA files**: plain, gzip or bgzip compressed, streamed record by record
//!
//! ## Example
//!
//! ```rust,no_run
//! use hap_groups::parsing::fasta::{open_fasta, read_reference};
//! use std::path::Path;
//!
//! let reference = read_reference(Path::new("reference.fa")).unwrap();
//! for record in open_fasta(Path::new("samples.fa")).unwrap() {
//!     let record = record.unwrap();
//!     println!("{}\t{}", record.id, record.sequence == reference);
//! }
//! ```

pub mod fasta;
