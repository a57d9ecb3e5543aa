//! Sequences the pipeline: load, clean, validate, save, report.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::common::error::{PipelineError, Result};
use crate::infra::json_store::JsonStore;
use crate::pipeline::clean::RecordCleaner;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::report::QualityReporter;
use crate::pipeline::validate::{DatasetValidator, DatasetVerdict, RecordValidator};
use crate::record::Dataset;

/// Result of a complete pipeline run.
#[derive(Debug, Serialize)]
pub struct PipelineSummary {
    pub total_records: usize,
    pub valid_records: usize,
    pub invalid_records: usize,
    pub output_file: String,
    pub report_file: String,
}

/// Orchestrator for the complete cleaning and validation pipeline.
///
/// The run is linear and aborts at the first I/O failure; cleaning and
/// validation are pure in-memory transforms that cannot fail. Artifacts
/// written before an abort are left in place.
pub struct PipelineOrchestrator {
    cleaner: RecordCleaner,
    validator: DatasetValidator,
    reporter: QualityReporter,
    config: PipelineConfig,
}

impl PipelineOrchestrator {
    pub fn new(config: PipelineConfig) -> Self {
        let validator = DatasetValidator::new(RecordValidator::new(config.min_content_length));
        Self {
            cleaner: RecordCleaner::new(),
            validator,
            reporter: QualityReporter::new(),
            config,
        }
    }

    fn load_or_abort(&self) -> Result<Dataset> {
        let raw_records = JsonStore::load(Path::new(&self.config.input_file));
        if raw_records.is_empty() {
            return Err(PipelineError::EmptyInput {
                path: self.config.input_file.clone(),
            });
        }
        Ok(raw_records)
    }

    /// Run the full pipeline: load → clean → validate → save → report.
    pub fn run(&self) -> Result<PipelineSummary> {
        let banner = "=".repeat(70);
        println!("\n{banner}");
        println!("DATA CLEANING AND VALIDATION PIPELINE");
        println!("{banner}\n");

        println!("Step 1: Loading data...");
        let raw_records = self.load_or_abort()?;

        println!("\nStep 2: Cleaning data...");
        let cleaned = self.cleaner.clean_dataset(&raw_records);
        info!("Cleaned {} records", cleaned.len());
        println!("✓ Cleaned {} records", cleaned.len());

        println!("\nStep 3: Validating data...");
        let verdict = self.validator.validate_dataset(&cleaned);
        info!(
            total = verdict.total_records,
            valid = verdict.valid_records,
            invalid = verdict.invalid_records,
            "Validation finished"
        );
        println!("✓ Validated {} records", verdict.total_records);
        println!("  - Valid: {}", verdict.valid_records);
        println!("  - Invalid: {}", verdict.invalid_records);

        println!("\nStep 4: Saving cleaned data...");
        JsonStore::save(&cleaned, Path::new(&self.config.output_file))?;
        println!(
            "✓ Saved {} records to {}",
            cleaned.len(),
            self.config.output_file
        );

        println!("\nStep 5: Generating quality report...");
        let report = self.reporter.render(&cleaned, &verdict);
        JsonStore::save_report(&report, Path::new(&self.config.report_file))?;
        println!("✓ Quality report saved to {}", self.config.report_file);

        println!("\n{banner}");
        println!("PIPELINE COMPLETE");
        println!("{banner}\n");

        Ok(PipelineSummary {
            total_records: verdict.total_records,
            valid_records: verdict.valid_records,
            invalid_records: verdict.invalid_records,
            output_file: self.config.output_file.clone(),
            report_file: self.config.report_file.clone(),
        })
    }

    /// Clean and validate without writing any artifacts.
    pub fn check(&self) -> Result<DatasetVerdict> {
        let raw_records = self.load_or_abort()?;
        let cleaned = self.cleaner.clean_dataset(&raw_records);
        Ok(self.validator.validate_dataset(&cleaned))
    }
}
