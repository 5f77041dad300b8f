//! # JSX Element Snippets

use crate::{
    partition::OrganizedResult,
    render::{COMMENT_MARKER, escape_string_literal},
};

/// The default component name for element snippets.
pub const DEFAULT_COMPONENT_NAME: &str = "select";

/// Render an element snippet whose `className` is a commented utility call.
///
/// Unlike [`format_with_comments`](crate::render::format_with_comments), this
/// never collapses: empty input still yields the element shell, and every
/// argument carries a trailing comma.
///
/// ## Arguments
/// * `result` - The organized classes.
/// * `component_name` - The element / component tag name.
/// * `utility_name` - The class-joining utility to call.
pub fn render_jsx_element(
    result: &OrganizedResult,
    component_name: &str,
    utility_name: &str,
) -> String {
    let mut out = format!("<{component_name}\n  className={{{utility_name}(\n");
    for bucket in result.buckets() {
        out.push_str(&format!("    {COMMENT_MARKER} {}\n", bucket.label()));
        out.push_str(&format!("    \"{}\",\n", escape_string_literal(&bucket.joined())));
    }
    out.push_str("  )}\n/>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;

    #[test]
    fn test_render() {
        let out = render_jsx_element(&partition("mt-4 flex"), DEFAULT_COMPONENT_NAME, "clsx");
        assert_eq!(
            out,
            concat!(
                "<select\n",
                "  className={clsx(\n",
                "    // Layout\n",
                "    \"flex\",\n",
                "    // Spacing\n",
                "    \"mt-4\",\n",
                "  )}\n",
                "/>",
            )
        );
    }

    #[test]
    fn test_custom_names() {
        let out = render_jsx_element(&partition("flex"), "div", "cn");
        assert!(out.starts_with("<div\n  className={cn(\n"));
        assert!(!out.contains("<select"));
    }

    #[test]
    fn test_empty_keeps_shell() {
        let out = render_jsx_element(&partition(""), DEFAULT_COMPONENT_NAME, "clsx");
        assert_eq!(out, "<select\n  className={clsx(\n  )}\n/>");
    }

    #[test]
    fn test_all_groups_annotated() {
        let out = render_jsx_element(
            &partition("flex items-center mt-4 bg-white text-sm unknown-token"),
            "div",
            "clsx",
        );
        let comments: Vec<&str> = out
            .lines()
            .filter_map(|l| l.trim().strip_prefix("// "))
            .collect();
        assert_eq!(
            comments,
            vec!["Layout", "Alignment", "Spacing", "Typography", "Background", "Other"]
        );
    }
}
