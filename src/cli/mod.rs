//! Command-line interface for hap-groups.
//!
//! ## Usage
//!
//! ```text
//! # Group sequences and write the four reports into results/
//! hap-groups --fasta samples.fa --ref reference.fa --output results --prefix run1
//!
//! # Compressed input and a JSON run summary
//! hap-groups -f samples.fa.gz -r reference.fa -o results -p run1 --format json
//! ```

use clap::Parser;

pub mod haplotypes;

#[derive(Parser)]
#[command(name = "hap-groups")]
#[command(version)]
#[command(about = "Collapse aligned sequences into haplotypes and compare them to a reference")]
#[command(
    long_about = "hap-groups reads aligned sequences from a FASTA file, groups identical sequences into haplotypes and compares each haplotype to a reference sequence.\n\nFour tab-separated reports are written to the output directory:\n- full haplotype sequences\n- minimal encoding of differences from the reference (e.g. T4A,G7C)\n- member counts per haplotype\n- member names per haplotype"
)]
pub struct Cli {
    #[command(flatten)]
    pub args: haplotypes::HaplotypeArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Format of the run summary printed to stdout
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_missing_options_are_rejected() {
        let result = Cli::try_parse_from(["hap-groups", "--prefix", "run1"]);
        let err = result.err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_positional_arguments_are_rejected() {
        let result = Cli::try_parse_from(["hap-groups", "samples.fa"]);
        assert!(result.is_err());
    }
}
