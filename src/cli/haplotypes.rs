use std::path::PathBuf;

use clap::Args;

use crate::analysis::{run_analysis, RunConfig, RunSummary};
use crate::cli::OutputFormat;
use crate::utils::validation::{existing_file, output_dir, output_prefix};

#[derive(Args)]
pub struct HaplotypeArgs {
    /// Input FASTA file of aligned sequences (.gz/.bgz accepted)
    #[arg(short, long, required = true, value_parser = existing_file)]
    pub fasta: PathBuf,

    /// Reference FASTA file; the first sequence is used
    #[arg(short = 'r', long = "ref", required = true, value_parser = existing_file)]
    pub reference: PathBuf,

    /// Output directory, created if it does not exist
    #[arg(short, long, required = true, value_parser = output_dir)]
    pub output: PathBuf,

    /// Prefix shared by the output file names
    #[arg(short, long, required = true, value_parser = output_prefix)]
    pub prefix: String,
}

/// Execute the haplotype analysis
///
/// # Errors
///
/// Returns an error if an input cannot be parsed, a sequence length differs
/// from the reference, or a report cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: HaplotypeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = RunConfig {
        fasta: args.fasta,
        reference: args.reference,
        output_dir: args.output,
        prefix: args.prefix,
    };

    if verbose {
        eprintln!("Sequences: {}", config.fasta.display());
        eprintln!("Reference: {}", config.reference.display());
    }

    let summary = run_analysis(&config)?;

    match format {
        OutputFormat::Text => print_text_summary(&config, &summary),
        OutputFormat::Json => print_json_summary(&config, &summary)?,
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn print_text_summary(config: &RunConfig, summary: &RunSummary) {
    println!("Haplotype Summary");
    println!("{}", "=".repeat(60));

    println!("\nInput: {}", config.fasta.display());
    println!("  Sequences: {}", summary.records);
    println!("  Reference length: {}", summary.reference_length);

    println!("\nHaplotypes: {}", summary.haplotypes);
    println!("  Identical to reference: {}", summary.reference_haplotypes);
    println!(
        "  Differing from reference: {}",
        summary.haplotypes - summary.reference_haplotypes
    );

    println!("\nReports:");
    for path in &summary.reports {
        println!("  {}", path.display());
    }
}

fn print_json_summary(config: &RunConfig, summary: &RunSummary) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": config.fasta.display().to_string(),
        "reference": config.reference.display().to_string(),
        "prefix": config.prefix,
        "summary": summary,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(summary: &RunSummary) {
    println!("sequences\thaplotypes\treference_haplotypes\treference_length");
    println!(
        "{}\t{}\t{}\t{}",
        summary.records, summary.haplotypes, summary.reference_haplotypes, summary.reference_length,
    );
}
