//! # Inline Renderer

use crate::partition::{OrganizedResult, partition};

/// Render buckets as one space-separated class string.
///
/// Tokens are regrouped but never deduplicated or dropped.
pub fn render_inline(result: &OrganizedResult) -> String {
    let mut out = String::with_capacity(result.tokens().map(|t| t.len() + 1).sum());
    for token in result.tokens() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Partition and render a class string inline.
pub fn organize_inline(class_string: &str) -> String {
    render_inline(&partition(class_string))
}
