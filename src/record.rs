//! Record and dataset primitives shared across the pipeline.

use serde_json::{Map, Value};

/// One scraped record: an ordered field-name to value mapping. Fields outside
/// the recognized set are opaque and travel through the pipeline untouched.
pub type Record = Map<String, Value>;

/// A batch of records; order is significant for index-based reporting.
pub type Dataset = Vec<Record>;

/// Fields with dedicated cleaning and validation rules.
pub const RECOGNIZED_FIELDS: [&str; 5] = ["title", "content", "url", "date", "author"];

/// Fields a record must carry to pass validation.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "content", "url"];

/// Render a scalar field value as text. `null` maps to the empty string so
/// downstream transforms can treat missing and null alike.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Text of a field, or `""` when the field is absent.
pub fn field_text(record: &Record, field: &str) -> String {
    record.get(field).map(value_text).unwrap_or_default()
}

/// A field counts as blank when it is null or whitespace-only text.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_text_renders_scalars() {
        assert_eq!(value_text(&json!("hello")), "hello");
        assert_eq!(value_text(&json!(null)), "");
        assert_eq!(value_text(&json!(42)), "42");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!("")));
        assert!(is_blank(&json!("   \t ")));
        assert!(!is_blank(&json!("x")));
        assert!(!is_blank(&json!(0)));
    }

    #[test]
    fn test_field_text_absent_field() {
        let record = json!({"title": "A"}).as_object().unwrap().clone();
        assert_eq!(field_text(&record, "title"), "A");
        assert_eq!(field_text(&record, "content"), "");
    }
}
