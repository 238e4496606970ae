//! Overlap resolution
//!
//! Reduces raw scanner output to a non-overlapping list ordered by start
//! offset. Ties on the start offset go to the category declared first in
//! the catalog. The walk is greedy: once a span is accepted, anything that
//! starts before its end is dropped, even when longer.

use super::models::Span;
use crate::domain::{Result, ShieldError};

/// Non-overlapping spans, ascending by start
///
/// Only [`resolve`] and the checked [`ResolvedSpans::try_new`] produce this
/// type, so the redactor never sees overlapping input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSpans(Vec<Span>);

impl ResolvedSpans {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Validate a caller-supplied span list
    ///
    /// The list is sorted by start; empty or overlapping spans are rejected.
    pub fn try_new(mut spans: Vec<Span>) -> Result<Self> {
        spans.sort_by_key(|s| (s.start, s.category.priority()));

        for span in &spans {
            if span.is_empty() {
                return Err(ShieldError::InvalidSpans(format!(
                    "empty span {}..{} ({})",
                    span.start, span.end, span.category
                )));
            }
        }
        for pair in spans.windows(2) {
            if pair[0].overlaps(&pair[1]) {
                return Err(ShieldError::InvalidSpans(format!(
                    "{} at {}..{} overlaps {} at {}..{}",
                    pair[0].category,
                    pair[0].start,
                    pair[0].end,
                    pair[1].category,
                    pair[1].start,
                    pair[1].end
                )));
            }
        }

        Ok(Self(spans))
    }

    pub fn as_slice(&self) -> &[Span] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Span> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ResolvedSpans {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Drop digit-grouped spans that lie strictly inside a longer digit-grouped span
///
/// A card number also matches as a phone number and an Aadhaar number on
/// its leading groups. Those fragments would win the same-start tie-break
/// in [`resolve`] and leave the rest of the card in the text.
pub fn drop_nested_digit_groups(raw: Vec<Span>) -> Vec<Span> {
    let is_nested = |span: &Span| {
        span.category.is_digit_grouped()
            && raw.iter().any(|outer| {
                outer.category.is_digit_grouped()
                    && outer.start <= span.start
                    && span.end <= outer.end
                    && outer.len() > span.len()
            })
    };

    let keep: Vec<bool> = raw.iter().map(|span| !is_nested(span)).collect();
    raw.into_iter()
        .zip(keep)
        .filter_map(|(span, keep)| keep.then_some(span))
        .collect()
}

/// Resolve overlapping spans
pub fn resolve(mut raw: Vec<Span>) -> ResolvedSpans {
    raw.sort_by_key(|s| (s.start, s.category.priority()));

    let mut accepted: Vec<Span> = Vec::with_capacity(raw.len());
    let mut last_end = 0;

    for span in raw {
        if span.is_empty() {
            continue;
        }
        if accepted.is_empty() || span.start >= last_end {
            last_end = span.end;
            accepted.push(span);
        }
    }

    ResolvedSpans(accepted)
}
