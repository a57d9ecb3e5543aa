//! Quality rules applied to cleaned records.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::record::{field_text, is_blank, Record, REQUIRED_FIELDS};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern"));
static DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("domain pattern"));

pub const DEFAULT_MIN_CONTENT_LENGTH: usize = 50;

const TITLE_MIN_LENGTH: usize = 3;
const TITLE_MAX_LENGTH: usize = 500;

/// Outcome of validating a single record. Errors make the record invalid;
/// warnings never do.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationVerdict {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// A verdict tagged with the record's 0-based position in the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct RecordVerdict {
    pub record_index: usize,
    pub verdict: ValidationVerdict,
}

/// Aggregate verdict over a whole dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetVerdict {
    pub total_records: usize,
    pub valid_records: usize,
    pub invalid_records: usize,
    pub records: Vec<RecordVerdict>,
}

/// Rule set applied to individual records. Each check is independent and
/// returns the errors it found; `validate_record` sequences them.
pub struct RecordValidator {
    min_content_length: usize,
}

impl RecordValidator {
    pub fn new(min_content_length: usize) -> Self {
        Self { min_content_length }
    }

    /// Required fields must be present and non-blank.
    fn validate_required_fields(&self, record: &Record) -> Vec<String> {
        let mut errors = Vec::new();
        for field in REQUIRED_FIELDS {
            match record.get(field) {
                None => errors.push(format!("Missing required field: {field}")),
                Some(value) if is_blank(value) => {
                    errors.push(format!("Required field is empty: {field}"))
                }
                Some(_) => {}
            }
        }
        errors
    }

    fn validate_title(title: &str) -> Vec<String> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return vec!["Title is empty".to_string()];
        }
        let length = trimmed.chars().count();
        let mut errors = Vec::new();
        if length < TITLE_MIN_LENGTH {
            errors.push(format!(
                "Title too short: {length} characters (minimum: {TITLE_MIN_LENGTH})"
            ));
        }
        if length > TITLE_MAX_LENGTH {
            errors.push(format!(
                "Title too long: {length} characters (maximum: {TITLE_MAX_LENGTH})"
            ));
        }
        errors
    }

    /// Scheme, host, and domain-shape checks accumulate; they are not
    /// short-circuited against each other.
    fn validate_url(url: &str) -> Vec<String> {
        if url.trim().is_empty() {
            return vec!["URL is empty".to_string()];
        }
        let mut errors = Vec::new();
        match Url::parse(url) {
            Ok(parsed) => {
                let scheme = parsed.scheme();
                if scheme != "http" && scheme != "https" {
                    errors.push(format!("Invalid URL scheme: {scheme}"));
                }
                match parsed.host_str() {
                    None => errors.push("URL missing domain".to_string()),
                    Some(host) if !DOMAIN_RE.is_match(host) => {
                        errors.push(format!("Invalid URL domain format: {host}"))
                    }
                    Some(_) => {}
                }
            }
            // A value with no scheme at all parses as a relative URL
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                errors.push("URL missing scheme (http/https)".to_string());
                errors.push("URL missing domain".to_string());
            }
            Err(url::ParseError::EmptyHost) => errors.push("URL missing domain".to_string()),
            Err(e) => errors.push(format!("URL parsing error: {e}")),
        }
        errors
    }

    fn validate_content_length(&self, content: &str) -> Vec<String> {
        if content.is_empty() {
            return vec!["Content is empty".to_string()];
        }
        let length = content.trim().chars().count();
        if length < self.min_content_length {
            return vec![format!(
                "Content too short: {length} characters (minimum: {})",
                self.min_content_length
            )];
        }
        Vec::new()
    }

    /// Date is optional; a non-empty value must already be `YYYY-MM-DD`.
    fn validate_date(date: &str) -> Vec<String> {
        if date.trim().is_empty() {
            return Vec::new();
        }
        if !ISO_DATE_RE.is_match(date) {
            return vec![format!("Date not in ISO format (YYYY-MM-DD): {date}")];
        }
        Vec::new()
    }

    /// Run the full rule set over one record. The required-fields stage is
    /// the only short-circuit: when it fails, its errors are the whole
    /// verdict and no other check runs. Date problems and a missing author
    /// are warnings, never errors.
    pub fn validate_record(&self, record: &Record) -> ValidationVerdict {
        let required_errors = self.validate_required_fields(record);
        if !required_errors.is_empty() {
            return ValidationVerdict {
                is_valid: false,
                errors: required_errors,
                warnings: Vec::new(),
            };
        }

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        errors.extend(Self::validate_title(&field_text(record, "title")));
        errors.extend(Self::validate_url(&field_text(record, "url")));
        errors.extend(self.validate_content_length(&field_text(record, "content")));

        let date = field_text(record, "date");
        if !date.is_empty() {
            warnings.extend(Self::validate_date(&date));
        }

        if record.get("author").map_or(true, is_blank) {
            warnings.push("Author field is missing or empty".to_string());
        }

        ValidationVerdict {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CONTENT_LENGTH)
    }
}

/// Runs the record rule set over a whole dataset, keeping input order and
/// accumulating counts.
pub struct DatasetValidator {
    validator: RecordValidator,
}

impl DatasetValidator {
    pub fn new(validator: RecordValidator) -> Self {
        Self { validator }
    }

    pub fn validate_dataset(&self, records: &[Record]) -> DatasetVerdict {
        let mut verdict = DatasetVerdict {
            total_records: records.len(),
            valid_records: 0,
            invalid_records: 0,
            records: Vec::with_capacity(records.len()),
        };

        for (index, record) in records.iter().enumerate() {
            let result = self.validator.validate_record(record);
            if result.is_valid {
                verdict.valid_records += 1;
            } else {
                verdict.invalid_records += 1;
            }
            verdict.records.push(RecordVerdict {
                record_index: index,
                verdict: result,
            });
        }

        verdict
    }
}
