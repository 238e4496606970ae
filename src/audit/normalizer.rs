//! Audit log normalization
//!
//! Maps raw records of every producer shape onto [`AuditRecord`]. The
//! mapping is pure and total: one canonical record per raw record, in
//! order, and nothing is ever rejected.

use super::records::{AuditRecord, AuditRecordRaw, PolicyDecision, RawEntity, RecordKind, Redaction};
use chrono::{DateTime, SecondsFormat};

/// Shown when a record carries no hash or preview
pub const MISSING_HASH: &str = "N/A";

/// Category used for redactions whose entity has no type
pub const GENERIC_CATEGORY: &str = "PII";

/// Normalize a batch of raw records, preserving order
pub fn normalize(records: &[AuditRecordRaw]) -> Vec<AuditRecord> {
    records.iter().map(normalize_record).collect()
}

/// Normalize one raw record
pub fn normalize_record(raw: &AuditRecordRaw) -> AuditRecord {
    let entities: Vec<RawEntity> = raw
        .entities
        .as_ref()
        .or(raw.masks.as_ref())
        .cloned()
        .unwrap_or_default();

    let redactions = entities
        .iter()
        .map(|entity| Redaction {
            category: entity
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .map_or_else(|| GENERIC_CATEGORY.to_string(), str::to_uppercase),
            action: "masked".to_string(),
        })
        .collect();

    let policy_decision = raw
        .policy_decision
        .as_deref()
        .and_then(|d| d.parse::<PolicyDecision>().ok())
        .unwrap_or(if entities.is_empty() {
            PolicyDecision::Allowed
        } else {
            PolicyDecision::Masked
        });

    AuditRecord {
        timestamp: raw.ts.and_then(format_timestamp),
        input_hash: input_hash(raw),
        entities_count: entities.len(),
        entities,
        redactions,
        policy_decision,
        kind: RecordKind::from_record_type(raw.record_type.as_deref()),
    }
}

/// Keep only records with the given decision
pub fn filter_by_decision(records: Vec<AuditRecord>, decision: PolicyDecision) -> Vec<AuditRecord> {
    records
        .into_iter()
        .filter(|record| record.policy_decision == decision)
        .collect()
}

/// Epoch seconds to `YYYY-MM-DDTHH:MM:SS.mmmZ`
fn format_timestamp(ts: f64) -> Option<String> {
    if !ts.is_finite() {
        return None;
    }

    let millis = (ts * 1000.0).trunc();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }

    DateTime::from_timestamp_millis(millis as i64)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn input_hash(raw: &AuditRecordRaw) -> String {
    [
        &raw.original_hash,
        &raw.sanitized,
        &raw.transcript_preview,
        &raw.response_preview,
    ]
    .into_iter()
    .flatten()
    .find(|value| !value.is_empty())
    .cloned()
    .unwrap_or_else(|| MISSING_HASH.to_string())
}
