//! Remote scanning service wire models
//!
//! The service has shipped several response shapes over time: some return
//! `original`/`redacted`/`masks`, some `original_text`/`redacted_text`/
//! `entities`, and some both at once. Each name gets its own optional field
//! here and the first present one wins during conversion.

use crate::detection::{CategoryId, DetectionResult, Span};
use crate::domain::RemoteError;
use serde::{Deserialize, Serialize};

/// `POST /process_text` request body
#[derive(Debug, Clone, Serialize)]
pub struct ProcessTextRequest<'a> {
    pub text: &'a str,
}

/// `POST /process_text` response body, as received
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireDetectionResult {
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub redacted_text: Option<String>,
    #[serde(default)]
    pub redacted: Option<String>,
    #[serde(default)]
    pub entities: Option<Vec<WireSpan>>,
    #[serde(default)]
    pub masks: Option<Vec<WireSpan>>,
    #[serde(default, rename = "hasPII")]
    pub has_pii_camel: Option<bool>,
    #[serde(default)]
    pub has_pii: Option<bool>,
}

/// One entity as received
#[derive(Debug, Clone, Deserialize)]
pub struct WireSpan {
    #[serde(rename = "type")]
    pub category: String,
    #[serde(default)]
    pub text: Option<String>,
    pub start: usize,
    pub end: usize,
}

/// `GET /logs` response body
///
/// Entries stay untyped so that one malformed record cannot fail the batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LogsResponse {
    Wrapped { logs: Vec<serde_json::Value> },
    Bare(Vec<serde_json::Value>),
}

impl LogsResponse {
    pub fn into_records(self) -> Vec<serde_json::Value> {
        match self {
            Self::Wrapped { logs } => logs,
            Self::Bare(logs) => logs,
        }
    }
}

impl TryFrom<WireDetectionResult> for DetectionResult {
    type Error = RemoteError;

    fn try_from(wire: WireDetectionResult) -> Result<Self, Self::Error> {
        let original_text = wire
            .original_text
            .or(wire.original)
            .ok_or_else(|| RemoteError::InvalidResponse("missing original text".to_string()))?;
        let redacted_text = wire
            .redacted_text
            .or(wire.redacted)
            .ok_or_else(|| RemoteError::InvalidResponse("missing redacted text".to_string()))?;
        let wire_spans = wire.entities.or(wire.masks).unwrap_or_default();

        let mut entities = Vec::with_capacity(wire_spans.len());
        for span in wire_spans {
            entities.push(convert_span(span, &original_text)?);
        }
        entities.sort_by_key(|s| s.start);

        let has_pii = wire
            .has_pii_camel
            .or(wire.has_pii)
            .unwrap_or(!entities.is_empty());

        Ok(DetectionResult {
            original_text,
            redacted_text,
            entities,
            has_pii,
        })
    }
}

fn convert_span(span: WireSpan, original_text: &str) -> Result<Span, RemoteError> {
    let category: CategoryId = span
        .category
        .parse()
        .map_err(RemoteError::InvalidResponse)?;

    let in_text = if span.start < span.end {
        original_text.get(span.start..span.end)
    } else {
        None
    };
    let Some(in_text) = in_text else {
        return Err(RemoteError::InvalidResponse(format!(
            "span {}..{} is not a byte range on char boundaries of text of length {}",
            span.start,
            span.end,
            original_text.len()
        )));
    };

    // Offsets counted in another unit land on the wrong bytes
    if let Some(text) = span.text.as_deref().filter(|t| !t.is_empty()) {
        if text != in_text {
            return Err(RemoteError::InvalidResponse(format!(
                "span {}..{} covers {:?}, not the reported {:?}",
                span.start, span.end, in_text, text
            )));
        }
    }

    Ok(Span::new(category, in_text, span.start, span.end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(body: &str) -> Result<DetectionResult, RemoteError> {
        let wire: WireDetectionResult = serde_json::from_str(body).unwrap();
        DetectionResult::try_from(wire)
    }

    #[test]
    fn test_canonical_shape() {
        let result = convert(
            r#"{
                "original_text": "SSN 123-45-6789",
                "redacted_text": "SSN [REDACTED]",
                "entities": [{"type": "ssn", "text": "123-45-6789", "start": 4, "end": 15}],
                "has_pii": true
            }"#,
        )
        .unwrap();

        assert_eq!(result.redacted_text, "SSN [REDACTED]");
        assert_eq!(result.entities[0].category, CategoryId::Ssn);
        assert!(result.has_pii);
    }

    #[test]
    fn test_short_aliases_and_both_names() {
        let result = convert(
            r#"{
                "original": "mail a@b.io",
                "original_text": "mail a@b.io",
                "redacted": "mail [REDACTED]",
                "masks": [{"type": "EMAIL", "start": 5, "end": 11}],
                "hasPII": true
            }"#,
        )
        .unwrap();

        assert_eq!(result.original_text, "mail a@b.io");
        assert_eq!(result.entities.len(), 1);
        // Missing text is filled from the original
        assert_eq!(result.entities[0].matched_text, "a@b.io");
    }

    #[test]
    fn test_has_pii_derived_when_absent() {
        let result = convert(r#"{"original": "hi", "redacted": "hi", "entities": []}"#).unwrap();
        assert!(!result.has_pii);
    }

    #[test]
    fn test_missing_text_is_invalid() {
        let err = convert(r#"{"redacted_text": "x"}"#).unwrap_err();
        assert!(matches!(err, RemoteError::InvalidResponse(_)));
    }

    #[test]
    fn test_out_of_bounds_span_is_invalid() {
        let err = convert(
            r#"{"original": "short", "redacted": "short",
                "entities": [{"type": "ssn", "start": 2, "end": 40}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RemoteError::InvalidResponse(_)));
    }

    #[test]
    fn test_span_inside_multibyte_char_is_invalid() {
        // 'é' occupies bytes 0..2
        let err = convert(
            r#"{"original": "é 123-45-6789", "redacted": "é [REDACTED]",
                "entities": [{"type": "ssn", "start": 1, "end": 14}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RemoteError::InvalidResponse(_)));
    }

    #[test]
    fn test_span_text_must_match_offsets() {
        // Code-point offsets: the SSN starts at char 2 but byte 3
        let err = convert(
            r#"{"original": "é 123-45-6789", "redacted": "é [REDACTED]",
                "entities": [{"type": "ssn", "text": "123-45-6789", "start": 2, "end": 13}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RemoteError::InvalidResponse(_)));

        let result = convert(
            r#"{"original": "é 123-45-6789", "redacted": "é [REDACTED]",
                "entities": [{"type": "ssn", "text": "123-45-6789", "start": 3, "end": 14}]}"#,
        )
        .unwrap();
        assert_eq!(result.entities[0].matched_text, "123-45-6789");
    }

    #[test]
    fn test_unknown_category_is_invalid() {
        let err = convert(
            r#"{"original": "x y", "redacted": "x y",
                "entities": [{"type": "passport", "start": 0, "end": 1}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RemoteError::InvalidResponse(_)));
    }

    #[test]
    fn test_logs_response_shapes() {
        let wrapped: LogsResponse = serde_json::from_str(r#"{"logs": [{"ts": 1}, 7]}"#).unwrap();
        assert_eq!(wrapped.into_records().len(), 2);

        let bare: LogsResponse = serde_json::from_str(r#"[{"ts": 1}]"#).unwrap();
        assert_eq!(bare.into_records().len(), 1);
    }
}
