//! Audit record models
//!
//! Raw records come from several producers (text scans, audio scans, model
//! queries) and from several generations of each. Parsing is total: any JSON
//! value becomes an [`AuditRecordRaw`], with wrongly-typed fields treated as
//! absent. Canonical records are derived by [`super::normalizer`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// One entity as stored in a raw record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEntity {
    /// Category name, in whatever case the producer used
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Matched text, when the producer kept it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RawEntity {
    fn from_value(value: &Value) -> Self {
        Self {
            category: string_field(value, "type"),
            text: string_field(value, "text"),
        }
    }
}

/// Audit record as produced, before normalization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditRecordRaw {
    /// Producer type (`process_text`, `process_audio`, `ask_llm`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// Epoch seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_hash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanitized: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_preview: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_preview: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RawEntity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masks: Option<Vec<RawEntity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_decision: Option<String>,
}

impl AuditRecordRaw {
    /// Read a raw record out of any JSON value
    ///
    /// Non-objects yield the empty record.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            record_type: string_field(value, "type"),
            ts: object.get("ts").and_then(Value::as_f64),
            original_hash: string_field(value, "original_hash"),
            sanitized: string_field(value, "sanitized"),
            transcript_preview: string_field(value, "transcript_preview"),
            response_preview: string_field(value, "response_preview"),
            entities: entity_list(object, "entities"),
            masks: entity_list(object, "masks"),
            policy_decision: string_field(value, "policy_decision"),
        }
    }

    /// Parse one JSON-lines entry; unparsable input yields the empty record
    pub fn from_json_line(line: &str) -> Self {
        match serde_json::from_str::<Value>(line) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                tracing::warn!(error = %e, "Unparsable audit record, substituting empty record");
                Self::default()
            }
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn entity_list(object: &Map<String, Value>, key: &str) -> Option<Vec<RawEntity>> {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(RawEntity::from_value).collect())
}

/// Outcome recorded for a scanned input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyDecision {
    Masked,
    Blocked,
    Warning,
    Allowed,
}

impl PolicyDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Masked => "masked",
            Self::Blocked => "blocked",
            Self::Warning => "warning",
            Self::Allowed => "allowed",
        }
    }
}

impl fmt::Display for PolicyDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "masked" => Ok(Self::Masked),
            "blocked" => Ok(Self::Blocked),
            "warning" => Ok(Self::Warning),
            "allowed" => Ok(Self::Allowed),
            _ => Err(format!("Unknown policy decision: {s}")),
        }
    }
}

/// Producer of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    TextScan,
    AudioScan,
    ModelQuery,
    Unknown,
}

impl RecordKind {
    pub fn from_record_type(record_type: Option<&str>) -> Self {
        match record_type {
            Some("process_text") => Self::TextScan,
            Some("process_audio") => Self::AudioScan,
            Some("ask_llm") => Self::ModelQuery,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TextScan => "Text Scan",
            Self::AudioScan => "Audio Scan",
            Self::ModelQuery => "Model Query",
            Self::Unknown => "Unknown",
        }
    }
}

/// Redaction entry derived from an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redaction {
    /// Uppercased category, or `PII` when the entity has none
    #[serde(rename = "type")]
    pub category: String,
    pub action: String,
}

/// Audit record in canonical form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    /// `YYYY-MM-DDTHH:MM:SS.mmmZ`, or `None` when the record has no usable time
    pub timestamp: Option<String>,
    pub input_hash: String,
    pub entities: Vec<RawEntity>,
    pub redactions: Vec<Redaction>,
    pub entities_count: usize,
    pub policy_decision: PolicyDecision,
    pub kind: RecordKind,
}
