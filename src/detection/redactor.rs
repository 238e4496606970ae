//! Redaction of resolved spans

use super::resolver::ResolvedSpans;
use crate::domain::{Result, ShieldError};

/// Placeholder substituted for every redacted span
pub const PLACEHOLDER: &str = "[REDACTED]";

/// Redactor - replaces each span with a fixed placeholder token
#[derive(Debug, Clone)]
pub struct Redactor {
    placeholder: String,
}

impl Redactor {
    /// Create a redactor using [`PLACEHOLDER`]
    pub fn new() -> Self {
        Self::with_placeholder(PLACEHOLDER)
    }

    /// Create a redactor with a custom placeholder
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Redact `text`, returning a new string
    ///
    /// # Errors
    ///
    /// Returns [`ShieldError::InvalidSpans`] if any span does not fit `text`.
    pub fn redact(&self, text: &str, spans: &ResolvedSpans) -> Result<String> {
        redact(text, spans, &self.placeholder)
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace every span of `text` with `placeholder`
///
/// Spans are applied back to front so earlier offsets stay valid. Every
/// span must lie inside `text` on char boundaries; otherwise nothing is
/// redacted and an error is returned.
pub fn redact(text: &str, spans: &ResolvedSpans, placeholder: &str) -> Result<String> {
    if let Some(span) = spans.iter().find(|s| text.get(s.start..s.end).is_none()) {
        return Err(ShieldError::InvalidSpans(format!(
            "{} at {}..{} does not fit text of length {}",
            span.category,
            span.start,
            span.end,
            text.len()
        )));
    }

    let mut output = text.to_string();
    for span in spans.iter().rev() {
        output.replace_range(span.start..span.end, placeholder);
    }

    Ok(output)
}
