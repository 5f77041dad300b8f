//! # Grouped Lines
//!
//! The grouped-lines text is the serialization contract between the organizer
//! and output-shaping callers:
//!
//! ```text
//! // Layout
//! flex
//! // Spacing
//! mt-4 mb-2
//! ```
//!
//! A `//` line declares the label for every following non-comment line, up to
//! the next `//` line or end of input. Whitespace-only lines are skipped but do
//! not end the group.

use crate::partition::{LabeledClasses, OrganizedResult, partition};

/// The marker that starts a label line.
pub const COMMENT_MARKER: &str = "//";

/// Render buckets as `// Label` / classes line pairs.
pub fn render_grouped(result: &OrganizedResult) -> String {
    render_labeled_lines(&result.to_labeled())
}

/// Render labeled groups as grouped lines.
///
/// Unlabeled groups are emitted without a comment line. A class line that
/// would begin with `//` is indented by one space so it reads back as
/// content, not as a label.
pub fn render_labeled_lines(groups: &[LabeledClasses]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(groups.len() * 2);
    for group in groups {
        if let Some(label) = &group.label {
            lines.push(format!("{COMMENT_MARKER} {label}"));
        }
        if group.classes.starts_with(COMMENT_MARKER) {
            lines.push(format!(" {}", group.classes));
        } else {
            lines.push(group.classes.clone());
        }
    }
    lines.join("\n")
}

/// Partition a class string and render it as grouped lines.
pub fn organize_grouped(class_string: &str) -> String {
    render_grouped(&partition(class_string))
}

/// Parse grouped lines back into labeled groups.
///
/// Content lines are trimmed and the lines of one group are joined with a
/// single space. Groups with no class text are dropped.
pub fn parse_grouped_lines(text: &str) -> Vec<LabeledClasses> {
    let mut groups: Vec<LabeledClasses> = Vec::new();
    let mut label: Option<String> = None;
    let mut classes: Vec<&str> = Vec::new();

    let mut flush = |label: Option<String>, classes: &mut Vec<&str>| {
        if !classes.is_empty() {
            groups.push(LabeledClasses::new(label, classes.join(" ")));
        }
        classes.clear();
    };

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(COMMENT_MARKER) {
            flush(label.take(), &mut classes);
            label = Some(rest.trim().to_string());
        } else {
            let line = line.trim();
            if !line.is_empty() {
                classes.push(line);
            }
        }
    }
    flush(label, &mut classes);

    groups
}
