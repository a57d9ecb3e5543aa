//! Per-field cleaning recipes for scraped records.

use serde_json::Value;

use crate::pipeline::normalize::TextNormalizer;
use crate::record::{value_text, Dataset, Record};

/// Ordered transform chain for free-text fields.
const TEXT_TRANSFORMS: &[fn(&str) -> String] = &[
    TextNormalizer::clean_text,
    TextNormalizer::normalize_encoding,
    TextNormalizer::handle_special_characters,
];

/// Applies the per-field cleaning recipe, producing a new record each time.
/// The input record is never mutated, so the raw dataset stays available for
/// comparison after cleaning.
pub struct RecordCleaner;

impl RecordCleaner {
    pub fn new() -> Self {
        Self
    }

    fn run_transforms(value: &Value, transforms: &[fn(&str) -> String]) -> Value {
        let mut text = value_text(value);
        for transform in transforms {
            text = transform(&text);
        }
        Value::String(text)
    }

    /// Clean one record. Recognized fields get their recipe; every other
    /// field is copied through untouched, original value and type preserved.
    /// Fields absent from the input stay absent from the output.
    pub fn clean_record(&self, record: &Record) -> Record {
        let mut cleaned = Record::new();

        if let Some(title) = record.get("title") {
            cleaned.insert("title".into(), Self::run_transforms(title, TEXT_TRANSFORMS));
        }
        if let Some(content) = record.get("content") {
            cleaned.insert(
                "content".into(),
                Self::run_transforms(content, TEXT_TRANSFORMS),
            );
        }
        if let Some(url) = record.get("url") {
            cleaned.insert(
                "url".into(),
                Value::String(TextNormalizer::clean_url(&value_text(url))),
            );
        }
        if let Some(date) = record.get("date") {
            cleaned.insert(
                "date".into(),
                Value::String(TextNormalizer::standardize_date(&value_text(date))),
            );
        }
        if let Some(author) = record.get("author") {
            cleaned.insert(
                "author".into(),
                Self::run_transforms(author, TEXT_TRANSFORMS),
            );
        }

        // Pass-through for everything outside the recognized set
        for (key, value) in record {
            if !cleaned.contains_key(key) {
                cleaned.insert(key.clone(), value.clone());
            }
        }

        cleaned
    }

    /// Clean every record, order-preserving.
    pub fn clean_dataset(&self, records: &[Record]) -> Dataset {
        records.iter().map(|record| self.clean_record(record)).collect()
    }
}

impl Default for RecordCleaner {
    fn default() -> Self {
        Self::new()
    }
}
