//! Span scanner
//!
//! Applies every rule of a catalog to the input and reports each match as a
//! [`Span`]. Spans from different rules may overlap; see
//! [`resolver`](super::resolver) for the reduction to a redactable list.

use super::models::Span;
use super::patterns::{PatternCatalog, PatternRule};

/// Scan `text` with every rule in catalog order
///
/// Within one rule the matches never overlap. Across rules the output is
/// concatenated in catalog order, so it is not sorted by offset.
pub fn scan(text: &str, catalog: &PatternCatalog) -> Vec<Span> {
    let mut spans = Vec::new();
    for rule in catalog.categories() {
        scan_rule(text, rule, &mut spans);
    }
    spans
}

/// Scan `text` with one rule, appending matches to `spans`
pub fn scan_rule(text: &str, rule: &PatternRule, spans: &mut Vec<Span>) {
    let regex = rule.regex();
    let mut at = 0;

    while at <= text.len() {
        let Some(m) = regex.find_at(text, at) else {
            break;
        };

        if m.start() == m.end() {
            at = next_char_boundary(text, m.end());
            continue;
        }

        spans.push(Span::new(rule.id(), m.as_str(), m.start(), m.end()));
        at = m.end();
    }
}

/// First char boundary strictly after `pos`, or `text.len() + 1` at the end
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}
