//! JSON export of the document model.

use crate::error::{Error, Result};
use crate::model::{Document, RawDocument};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Serialize(format!("JSON serialization error: {}", e)))
}

/// Parse a document previously exported with [`to_json`].
///
/// Malformed JSON is a [`Error::Serialize`]; well-formed blocks that break
/// the block rules are rejected with [`Error::InvalidBlock`].
pub fn from_json(json: &str) -> Result<Document> {
    let raw: RawDocument = serde_json::from_str(json)
        .map_err(|e| Error::Serialize(format!("JSON parse error: {}", e)))?;
    Document::try_from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DocumentBuilder;
    use crate::model::Metadata;

    fn sample() -> Document {
        let mut builder = DocumentBuilder::new().with_metadata(Metadata::with_title("Test"));
        builder.add_title("Test");
        builder.add_spacer(24.0).unwrap();
        builder.build()
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"space_after\": 24.0"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert!(json.contains("\"kind\":\"title\""));
    }

    #[test]
    fn test_from_json_restores_document() {
        let doc = sample();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert_eq!(from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_from_json_rejects_level_zero_heading() {
        let mut builder = DocumentBuilder::new();
        builder.add_heading("H", 1).unwrap();
        let json = to_json(&builder.build(), JsonFormat::Compact).unwrap();
        let tampered = json.replace("\"level\":1", "\"level\":0");
        assert_ne!(json, tampered);

        assert!(matches!(from_json(&tampered), Err(Error::InvalidBlock(_))));
    }

    #[test]
    fn test_from_json_rejects_negative_spacing() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        let tampered = json.replace("\"space_after\":24.0", "\"space_after\":-50.0");
        assert_ne!(json, tampered);

        assert!(matches!(from_json(&tampered), Err(Error::InvalidBlock(_))));
    }

    #[test]
    fn test_from_json_rejects_mismatched_style() {
        let json = r#"{"metadata":{},"blocks":[{"kind":"title","text":"T","level":0,"style":"bullet_list","alignment":"center"}]}"#;
        assert!(matches!(from_json(json), Err(Error::InvalidBlock(_))));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(from_json("{"), Err(Error::Serialize(_))));
    }
}
