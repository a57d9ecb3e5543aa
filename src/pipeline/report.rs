//! Quality report assembly: completeness statistics, failure histogram, and
//! the rendered plain-text report.

use std::collections::BTreeMap;

use chrono::Local;

use crate::pipeline::validate::DatasetVerdict;
use crate::record::{is_blank, Record, RECOGNIZED_FIELDS};

/// Width of the report rule lines.
const RULE_WIDTH: usize = 70;
/// Completeness bar length in glyphs; each filled glyph covers five percent.
const BAR_WIDTH: usize = 20;

/// Map an error message onto its failure category. "Missing required field"
/// is probed before the generic "empty" match so a missing field is not also
/// counted as an empty one; first match wins.
fn categorize_error(error: &str) -> &'static str {
    if error.contains("Missing required field") {
        "Missing Required Field"
    } else if error.to_lowercase().contains("empty") {
        "Empty Field"
    } else if error.contains("URL") {
        "Invalid URL"
    } else if error.contains("Content too short") {
        "Content Too Short"
    } else if error.contains("Title") {
        "Invalid Title"
    } else {
        "Other"
    }
}

/// Computes dataset quality statistics and renders the operator-facing
/// plain-text report.
pub struct QualityReporter;

impl QualityReporter {
    pub fn new() -> Self {
        Self
    }

    /// Share of records carrying a non-blank value, per recognized field.
    /// An empty dataset yields an empty map rather than dividing by zero.
    pub fn field_completeness(&self, cleaned: &[Record]) -> BTreeMap<&'static str, f64> {
        let mut completeness = BTreeMap::new();
        if cleaned.is_empty() {
            return completeness;
        }
        let total = cleaned.len() as f64;
        for field in RECOGNIZED_FIELDS {
            let populated = cleaned
                .iter()
                .filter(|record| record.get(field).map_or(false, |value| !is_blank(value)))
                .count();
            completeness.insert(field, populated as f64 / total * 100.0);
        }
        completeness
    }

    /// Histogram of failure categories across every error of every invalid
    /// record, most common first; ties break alphabetically so the rendered
    /// report is stable.
    pub fn failure_histogram(&self, verdict: &DatasetVerdict) -> Vec<(&'static str, usize)> {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for record in &verdict.records {
            if record.verdict.is_valid {
                continue;
            }
            for error in &record.verdict.errors {
                *counts.entry(categorize_error(error)).or_insert(0) += 1;
            }
        }
        let mut histogram: Vec<_> = counts.into_iter().collect();
        histogram.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        histogram
    }

    fn completeness_bar(pct: f64) -> String {
        let filled = ((pct / 5.0).floor() as usize).min(BAR_WIDTH);
        format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
    }

    /// Render the full report for a validated dataset.
    pub fn render(&self, cleaned: &[Record], verdict: &DatasetVerdict) -> String {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let mut report = String::new();

        report.push_str(&heavy);
        report.push('\n');
        report.push_str("DATA QUALITY REPORT\n");
        report.push_str(&heavy);
        report.push_str("\n\n");

        report.push_str(&format!(
            "Generated: {}\n\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));

        report.push_str("OVERVIEW\n");
        report.push_str(&light);
        report.push('\n');
        report.push_str(&format!(
            "Total Records Processed: {}\n",
            verdict.total_records
        ));
        report.push_str(&format!("Valid Records: {}\n", verdict.valid_records));
        report.push_str(&format!("Invalid Records: {}\n", verdict.invalid_records));
        if verdict.total_records > 0 {
            let rate = verdict.valid_records as f64 / verdict.total_records as f64 * 100.0;
            report.push_str(&format!("Validation Success Rate: {rate:.1}%\n"));
        }
        report.push('\n');

        report.push_str("FIELD COMPLETENESS\n");
        report.push_str(&light);
        report.push('\n');
        for (field, pct) in self.field_completeness(cleaned) {
            report.push_str(&format!(
                "{:<15} {} {:>5.1}%\n",
                field,
                Self::completeness_bar(pct),
                pct
            ));
        }
        report.push('\n');

        report.push_str("COMMON VALIDATION FAILURES\n");
        report.push_str(&light);
        report.push('\n');
        let histogram = self.failure_histogram(verdict);
        if histogram.is_empty() {
            report.push_str("No validation failures found!\n");
        } else {
            for (category, count) in &histogram {
                report.push_str(&format!("{category:<30} {count:>3} occurrences\n"));
            }
        }
        report.push('\n');

        if verdict.invalid_records > 0 {
            report.push_str("DETAILED INVALID RECORDS\n");
            report.push_str(&light);
            report.push('\n');
            for record in &verdict.records {
                if record.verdict.is_valid {
                    continue;
                }
                report.push_str(&format!("\nRecord #{}:\n", record.record_index + 1));
                for error in &record.verdict.errors {
                    report.push_str(&format!("  ✗ {error}\n"));
                }
                for warning in &record.verdict.warnings {
                    report.push_str(&format!("  ⚠ {warning}\n"));
                }
            }
            report.push('\n');
        }

        let warned: Vec<_> = verdict
            .records
            .iter()
            .filter(|r| r.verdict.is_valid && !r.verdict.warnings.is_empty())
            .collect();
        if !warned.is_empty() {
            report.push_str("VALID RECORDS WITH WARNINGS\n");
            report.push_str(&light);
            report.push('\n');
            report.push_str(&format!("Total: {} records\n\n", warned.len()));
            for record in &warned {
                report.push_str(&format!("Record #{}:\n", record.record_index + 1));
                for warning in &record.verdict.warnings {
                    report.push_str(&format!("  ⚠ {warning}\n"));
                }
            }
            report.push('\n');
        }

        report.push_str(&heavy);
        report.push('\n');
        report.push_str("SUMMARY\n");
        report.push_str(&heavy);
        report.push('\n');
        if verdict.valid_records == verdict.total_records {
            report.push_str("✓ All records passed validation!\n");
        } else if verdict.valid_records > 0 {
            report.push_str(&format!(
                "✓ {} records are ready for use\n",
                verdict.valid_records
            ));
            report.push_str(&format!(
                "✗ {} records need attention\n",
                verdict.invalid_records
            ));
        } else {
            report.push_str("✗ No valid records found. Please review the data quality.\n");
        }

        report
    }
}

impl Default for QualityReporter {
    fn default() -> Self {
        Self::new()
    }
}
