//! # Call-Expression Renderer
//!
//! Renders labeled groups as a call to a class-joining utility:
//!
//! ```text
//! {cn(
//!     // Layout
//!     "flex",
//!     // Spacing
//!     "mt-4"
//!   )}
//! ```

use crate::{
    partition::{LabeledClasses, partition},
    render::COMMENT_MARKER,
};

/// Indentation of argument and comment lines.
const ARG_INDENT: &str = "    ";

/// Indentation of the closing `)}` line.
const CLOSE_INDENT: &str = "  ";

/// Escape class text for a double-quoted string literal.
pub fn escape_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

/// Render labeled groups as the arguments of a `{name(...)}` call.
///
/// Labeled groups get a `// <label>` line before their argument.
/// Always wraps, even for zero or one group; see [`format_with_comments`]
/// for the collapsing rules.
pub fn render_expression(
    groups: &[LabeledClasses],
    utility_name: &str,
) -> String {
    let args: Vec<String> = groups
        .iter()
        .map(|g| {
            let literal = escape_string_literal(&g.classes);
            match &g.label {
                Some(label) => {
                    format!("{ARG_INDENT}{COMMENT_MARKER} {label}\n{ARG_INDENT}\"{literal}\"")
                }
                None => format!("{ARG_INDENT}\"{literal}\""),
            }
        })
        .collect();

    format!("{{{utility_name}(\n{}\n{CLOSE_INDENT})}}", args.join(",\n"))
}

/// Render groups as a call expression, collapsing trivial cases.
///
/// ## Returns
/// * `None` when there is nothing to wrap (no groups);
/// * the plain class text of the single group when there is exactly one
///   group, since a lone label separates nothing;
/// * the wrapped call expression otherwise.
pub fn render_expression_collapsed(
    groups: &[LabeledClasses],
    utility_name: &str,
) -> Option<String> {
    match groups {
        [] => None,
        [only] => Some(only.classes.clone()),
        _ => Some(render_expression(groups, utility_name)),
    }
}

/// Organize a class string into a commented `{name(...)}` call expression.
///
/// * Empty or whitespace-only input is returned unchanged.
/// * A single-group result is returned as its plain inline class string;
///   surrounding and repeated whitespace of the input is normalized to
///   single spaces, not kept (`" flex"` becomes `"flex"`).
#[cfg_attr(feature = "tracing", tracing::instrument(skip(class_string)))]
pub fn format_with_comments(
    class_string: &str,
    utility_name: &str,
) -> String {
    let groups = partition(class_string).to_labeled();
    render_expression_collapsed(&groups, utility_name).unwrap_or_else(|| class_string.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{organize_grouped, parse_grouped_lines};

    #[test]
    fn test_format_with_comments() {
        assert_eq!(
            format_with_comments("mt-4 flex items-center", "cn"),
            concat!(
                "{cn(\n",
                "    // Layout\n",
                "    \"flex\",\n",
                "    // Alignment\n",
                "    \"items-center\",\n",
                "    // Spacing\n",
                "    \"mt-4\"\n",
                "  )}",
            )
        );
    }

    #[test]
    fn test_single_group_collapses() {
        assert_eq!(format_with_comments("flex", "cn"), "flex");
        assert_eq!(format_with_comments("  mb-2   mt-4 ", "cn"), "mb-2 mt-4");
        assert_eq!(format_with_comments("foo bar", "clsx"), "foo bar");
        assert_eq!(format_with_comments(" flex", "cn"), "flex");
        assert_eq!(format_with_comments("flex\n\tblock ", "cn"), "flex block");
    }

    #[test]
    fn test_empty_input_is_unchanged() {
        assert_eq!(format_with_comments("", "cn"), "");
        assert_eq!(format_with_comments("   ", "cn"), "   ");
    }

    #[test]
    fn test_matches_grouped_lines_path() {
        let input = "hover:foo z-10 flex foo mt-4";
        let via_text = parse_grouped_lines(&organize_grouped(input));
        assert_eq!(
            render_expression_collapsed(&via_text, "clsx"),
            Some(format_with_comments(input, "clsx"))
        );
    }

    #[test]
    fn test_unlabeled_groups() {
        let groups = vec![
            LabeledClasses::new(None::<String>, "flex"),
            LabeledClasses::new(Some("Spacing"), "mt-4"),
        ];
        assert_eq!(
            render_expression(&groups, "styles.cx"),
            "{styles.cx(\n    \"flex\",\n    // Spacing\n    \"mt-4\"\n  )}"
        );
        assert_eq!(
            render_expression_collapsed(&groups[..1], "cn"),
            Some("flex".to_string())
        );
        assert_eq!(render_expression_collapsed(&[], "cn"), None);
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_string_literal("plain"), "plain");
        assert_eq!(
            escape_string_literal(r#"content-['"'] w-[a\b]"#),
            r#"content-['\"'] w-[a\\b]"#
        );
        let out = format_with_comments(r#"flex content-["x"]"#, "cn");
        assert!(out.contains(r#""content-[\"x\"]""#), "{out}");
    }
}
