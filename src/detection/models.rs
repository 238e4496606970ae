//! Detection data models

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// PII category recognized by the pattern catalog
///
/// Variants are declared in catalog order. That order is the overlap
/// tie-break priority: when two spans start at the same offset, the
/// category declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryId {
    /// Email addresses
    Email,
    /// Cloud and SaaS credentials (AWS, Google, OpenAI, GitHub, Slack)
    ApiKey,
    /// US Social Security Numbers
    Ssn,
    /// Indian Permanent Account Numbers
    Pan,
    /// Indian Aadhaar numbers
    Aadhaar,
    /// IPv6 addresses
    Ipv6,
    /// IPv4 addresses
    Ipv4,
    /// Dates of birth
    DateOfBirth,
    /// Medical record numbers
    MedicalRecord,
    /// US-style postal addresses
    Address,
    /// Telephone numbers
    Phone,
    /// Payment card numbers
    CreditCard,
    /// Bank account numbers and IBANs
    BankAccount,
}

impl CategoryId {
    /// Every category, in catalog order
    pub const ALL: [CategoryId; 13] = [
        Self::Email,
        Self::ApiKey,
        Self::Ssn,
        Self::Pan,
        Self::Aadhaar,
        Self::Ipv6,
        Self::Ipv4,
        Self::DateOfBirth,
        Self::MedicalRecord,
        Self::Address,
        Self::Phone,
        Self::CreditCard,
        Self::BankAccount,
    ];

    /// Wire name used in results, pattern files and audit records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::ApiKey => "api_key",
            Self::Ssn => "ssn",
            Self::Pan => "pan",
            Self::Aadhaar => "aadhaar",
            Self::Ipv6 => "ipv6",
            Self::Ipv4 => "ipv4",
            Self::DateOfBirth => "date_of_birth",
            Self::MedicalRecord => "medical_record",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::CreditCard => "credit_card",
            Self::BankAccount => "bank_account",
        }
    }

    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email Address",
            Self::ApiKey => "API Key",
            Self::Ssn => "Social Security Number",
            Self::Pan => "PAN Card Number",
            Self::Aadhaar => "Aadhaar Number",
            Self::Ipv6 => "IPv6 Address",
            Self::Ipv4 => "IPv4 Address",
            Self::DateOfBirth => "Date of Birth",
            Self::MedicalRecord => "Medical Record Number",
            Self::Address => "Postal Address",
            Self::Phone => "Phone Number",
            Self::CreditCard => "Credit Card Number",
            Self::BankAccount => "Bank Account Number",
        }
    }

    /// Position in the catalog; lower wins ties
    pub fn priority(&self) -> usize {
        *self as usize
    }

    /// Whether the category is part of the minimal catalog
    pub fn in_minimal(&self) -> bool {
        matches!(
            self,
            Self::Email | Self::Ssn | Self::Pan | Self::Aadhaar | Self::Phone | Self::CreditCard
        )
    }

    /// Numbers written as separated digit groups, whose patterns also match
    /// fragments of each other
    pub fn is_digit_grouped(&self) -> bool {
        matches!(
            self,
            Self::Ssn | Self::Aadhaar | Self::Phone | Self::CreditCard
        )
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "api_key" | "credential" => Ok(Self::ApiKey),
            "ssn" => Ok(Self::Ssn),
            "pan" => Ok(Self::Pan),
            "aadhaar" => Ok(Self::Aadhaar),
            "ipv6" => Ok(Self::Ipv6),
            "ipv4" => Ok(Self::Ipv4),
            "date_of_birth" => Ok(Self::DateOfBirth),
            "medical_record" | "medical_record_number" | "mrn" => Ok(Self::MedicalRecord),
            "address" | "postal_address" => Ok(Self::Address),
            "phone" => Ok(Self::Phone),
            "credit_card" => Ok(Self::CreditCard),
            "bank_account" => Ok(Self::BankAccount),
            _ => Err(format!("Unknown PII category: {s}")),
        }
    }
}

impl Serialize for CategoryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A located PII match
///
/// `start` and `end` are UTF-8 byte offsets into the scanned text and
/// always fall on `char` boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Category of PII
    #[serde(rename = "type")]
    pub category: CategoryId,
    /// Matched text
    #[serde(rename = "text", default)]
    pub matched_text: String,
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(category: CategoryId, matched_text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            category,
            matched_text: matched_text.into(),
            start,
            end,
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers nothing
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether two spans share at least one byte
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Outcome of one detection call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Input text as received
    pub original_text: String,
    /// Text with every entity replaced by the placeholder
    pub redacted_text: String,
    /// Resolved entities, ascending by start
    pub entities: Vec<Span>,
    /// Whether any entity was found
    pub has_pii: bool,
}

impl DetectionResult {
    /// Result for text that contains no PII
    pub fn clean(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            redacted_text: text.clone(),
            original_text: text,
            entities: Vec::new(),
            has_pii: false,
        }
    }

    /// Per-category counts for this result
    pub fn stats(&self) -> EntityStats {
        EntityStats::from_entities(&self.entities)
    }
}

/// Per-category entity counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityStats {
    /// Total entities
    pub total: usize,
    /// Entities per category
    pub by_category: BTreeMap<CategoryId, usize>,
}

impl EntityStats {
    /// Count entities by category
    pub fn from_entities(entities: &[Span]) -> Self {
        let mut by_category = BTreeMap::new();
        for span in entities {
            *by_category.entry(span.category).or_insert(0) += 1;
        }

        Self {
            total: entities.len(),
            by_category,
        }
    }

    /// Categories present, in catalog order
    pub fn categories(&self) -> Vec<CategoryId> {
        self.by_category.keys().copied().collect()
    }
}
