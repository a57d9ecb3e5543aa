use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use scrub::observability::init_logging;
use scrub::pipeline::config::PipelineConfig;
use scrub::pipeline::orchestrator::PipelineOrchestrator;

#[derive(Parser)]
#[command(name = "scrub")]
#[command(about = "Cleaning and validation pipeline for scraped records")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the complete pipeline: clean, validate, save, and report
    Run {
        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<String>,
        /// Input JSON file with raw records
        #[arg(long)]
        input: Option<String>,
        /// Output JSON file for the cleaned records
        #[arg(long)]
        output: Option<String>,
        /// Output text file for the quality report
        #[arg(long)]
        report: Option<String>,
        /// Minimum content length in characters
        #[arg(long)]
        min_content_length: Option<usize>,
    },
    /// Clean and validate without writing any artifacts
    Check {
        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<String>,
        /// Input JSON file with raw records
        #[arg(long)]
        input: Option<String>,
        /// Minimum content length in characters
        #[arg(long)]
        min_content_length: Option<usize>,
    },
}

/// File config first, then flag overrides.
fn build_config(
    config: Option<String>,
    input: Option<String>,
    output: Option<String>,
    report: Option<String>,
    min_content_length: Option<usize>,
) -> scrub::Result<PipelineConfig> {
    let mut cfg = match config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(input) = input {
        cfg.input_file = input;
    }
    if let Some(output) = output {
        cfg.output_file = output;
    }
    if let Some(report) = report {
        cfg.report_file = report;
    }
    if let Some(min) = min_content_length {
        cfg.min_content_length = min;
    }
    Ok(cfg)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let outcome = match cli.command {
        Commands::Run {
            config,
            input,
            output,
            report,
            min_content_length,
        } => build_config(config, input, output, report, min_content_length).and_then(|cfg| {
            let summary = PipelineOrchestrator::new(cfg).run()?;
            println!("✓ All outputs generated successfully!");
            println!("  - Cleaned data: {}", summary.output_file);
            println!("  - Quality report: {}", summary.report_file);
            Ok(())
        }),
        Commands::Check {
            config,
            input,
            min_content_length,
        } => build_config(config, input, None, None, min_content_length).and_then(|cfg| {
            let verdict = PipelineOrchestrator::new(cfg).check()?;
            println!(
                "Checked {} records: {} valid, {} invalid",
                verdict.total_records, verdict.valid_records, verdict.invalid_records
            );
            Ok(())
        }),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Pipeline aborted: {e}");
            eprintln!("✗ Pipeline encountered errors: {e}");
            ExitCode::FAILURE
        }
    }
}
