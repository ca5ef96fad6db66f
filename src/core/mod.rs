//! Core data types for haplotype grouping.
//!
//! - [`FastaRecord`](record::FastaRecord): an identifier and its sequence
//! - [`HaplotypeGroup`](haplotype::HaplotypeGroup): records sharing one exact sequence
//! - [`Difference`](difference::Difference): a substitution against the reference
//!
//! ## Positions
//!
//! Positions are 1-based and counted in characters. A difference is written
//! as reference base, position, alternate base:
//!
//! | Reference | Haplotype | Encoding |
//! |-----------|-----------|----------|
//! | `ACGT`    | `ACGA`    | `T4A`    |
//! | `ACGT`    | `TCGA`    | `A1T,T4A`|
//! | `ACGT`    | `ACGT`    | `-`      |

pub mod difference;
pub mod haplotype;
pub mod record;
