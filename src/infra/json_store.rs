//! JSON-file collaborators for the pipeline: dataset loader, dataset saver,
//! and the report writer.

use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::common::error::Result;
use crate::record::Dataset;

pub struct JsonStore;

impl JsonStore {
    /// Load a dataset. Any I/O or parse failure degrades to an empty
    /// dataset, so the caller treats "nothing loaded" uniformly whether the
    /// file was unreadable or held no records.
    pub fn load(path: &Path) -> Dataset {
        match Self::try_load(path) {
            Ok(records) => {
                info!("Loaded {} records from {}", records.len(), path.display());
                println!("✓ Loaded {} records from {}", records.len(), path.display());
                records
            }
            Err(e) => {
                error!("Error loading data from {}: {e}", path.display());
                println!("✗ Error loading data: {e}");
                Dataset::new()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Dataset> {
        // Undecodable bytes are replaced rather than rejected
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(serde_json::from_str(&text)?)
    }

    /// Persist a dataset as pretty-printed JSON, non-ASCII text verbatim.
    pub fn save(records: &Dataset, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(path, json)?;
        info!("Saved {} records to {}", records.len(), path.display());
        Ok(())
    }

    /// Persist the rendered quality report.
    pub fn save_report(report: &str, path: &Path) -> Result<()> {
        fs::write(path, report)?;
        info!("Saved quality report to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_missing_file_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let records = JsonStore::load(&dir.path().join("absent.json"));
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_malformed_json_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{not json").expect("write");
        assert!(JsonStore::load(&path).is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("data.json");

        let records: Dataset = vec![json!({"title": "Caf\u{e9}", "extra": [1, 2]})
            .as_object()
            .expect("object literal")
            .clone()];
        JsonStore::save(&records, &path).expect("save");

        // Non-ASCII text is written verbatim, not escaped
        let written = fs::read_to_string(&path).expect("read");
        assert!(written.contains("Café"));

        let loaded = JsonStore::load(&path);
        assert_eq!(loaded, records);
    }
}
