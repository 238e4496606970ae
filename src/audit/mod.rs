//! Audit logging module
//!
//! Writes a raw record per local scan and turns raw records from any
//! producer, local or remote, into one canonical shape for display.

pub mod logger;
pub mod normalizer;
pub mod records;

pub use logger::{read_records, AuditLogger};
pub use normalizer::{filter_by_decision, normalize, normalize_record};
pub use records::{AuditRecord, AuditRecordRaw, PolicyDecision, RawEntity, RecordKind, Redaction};
