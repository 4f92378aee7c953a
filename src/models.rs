//! Frontend Models
//!
//! Flashcard data in the export file format.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flashcard data structure (matches export file)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    /// Creation timestamp in ms, unique within a deck
    pub id: u64,
    pub question: String,
    pub answer: String,
    /// ISO-8601, millisecond precision
    pub created_at: String,
}

impl Flashcard {
    pub fn new(id: u64, question: String, answer: String, created: DateTime<Utc>) -> Self {
        Self {
            id,
            question,
            answer,
            created_at: created.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Build a card from one element of an imported array.
    ///
    /// Fields are not validated: missing values become 0 or empty text.
    pub fn from_json_lenient(value: &Value) -> Self {
        let id = value
            .get("id")
            .and_then(|v| v.as_u64().or_else(|| v.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)))
            .unwrap_or(0);
        Self {
            id,
            question: text_field(value, "question"),
            answer: text_field(value, "answer"),
            created_at: text_field(value, "createdAt"),
        }
    }
}

fn text_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_at_format() {
        let created = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let card = Flashcard::new(1_700_000_000_123, "Q".to_string(), "A".to_string(), created);
        assert_eq!(card.created_at, "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn test_serialization_uses_export_field_names() {
        let created = DateTime::from_timestamp_millis(0).unwrap();
        let card = Flashcard::new(7, "Q".to_string(), "A".to_string(), created);
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(
            value,
            json!({ "id": 7, "question": "Q", "answer": "A", "createdAt": "1970-01-01T00:00:00.000Z" })
        );
    }

    #[test]
    fn test_lenient_import_blanks_missing_fields() {
        let card = Flashcard::from_json_lenient(&json!({ "question": "only a question" }));
        assert_eq!(card.id, 0);
        assert_eq!(card.question, "only a question");
        assert_eq!(card.answer, "");
        assert_eq!(card.created_at, "");
    }

    #[test]
    fn test_lenient_import_stringifies_wrong_types() {
        let card = Flashcard::from_json_lenient(&json!({ "id": 12.0, "question": 42, "answer": true }));
        assert_eq!(card.id, 12);
        assert_eq!(card.question, "42");
        assert_eq!(card.answer, "true");
    }

    #[test]
    fn test_lenient_import_of_non_object() {
        let card = Flashcard::from_json_lenient(&json!("just text"));
        assert_eq!(card.id, 0);
        assert_eq!(card.question, "");
    }
}
