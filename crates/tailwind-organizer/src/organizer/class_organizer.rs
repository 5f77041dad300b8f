//! # Class Organizer

use crate::{
    errors::OrgResult,
    organizer::{FormatSelector, OrganizerOptions, UtilityResolver, clean_class_value},
    partition::partition,
    render::{OutputFormat, format_with_comments, render_grouped, render_inline, render_jsx_element},
};

/// A replacement for a class attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFix {
    /// The organized text.
    pub replacement: String,

    /// The replacement is a `{name(...)}` call expression rather than plain
    /// class text; callers must replace the whole attribute value expression.
    pub expression: bool,

    /// The replacement calls a utility that is not imported yet.
    pub needs_import: bool,
}

/// A trait for class organizers.
pub trait ClassOrganizer: Send + Sync {
    /// Return the organizer options.
    fn options(&self) -> &OrganizerOptions;

    /// Organize a class string in the configured format.
    ///
    /// ## Arguments
    /// * `class_string` - The raw whitespace-separated classes.
    fn organize(
        &self,
        class_string: &str,
    ) -> String {
        let options = self.options();
        let utility = options.utility().name();
        match options.effective_format() {
            OutputFormat::Inline => render_inline(&partition(class_string)),
            OutputFormat::Multiline => render_grouped(&partition(class_string)),
            OutputFormat::WithComments => format_with_comments(class_string, utility),
        }
    }

    /// Organize a batch of class strings.
    ///
    /// ## Returns
    /// One organized string per input, in input order.
    fn organize_batch(
        &self,
        batch: &[String],
    ) -> Vec<String> {
        batch.iter().map(|s| self.organize(s)).collect()
    }

    /// Render a whole element snippet for a class string.
    fn organize_element(
        &self,
        class_string: &str,
    ) -> String {
        let options = self.options();
        render_jsx_element(
            &partition(class_string),
            options.component_name(),
            options.utility().name(),
        )
    }

    /// Compute the fix for a raw class attribute value.
    ///
    /// The value is cleaned of comment artifacts first. Grouped-lines output
    /// keeps its `//` label lines, so in that format the replacement is
    /// compared against the trimmed raw value instead of the cleaned one.
    ///
    /// ## Returns
    /// `None` when the cleaned value is empty or already organized.
    fn fix(
        &self,
        raw_value: &str,
    ) -> Option<ClassFix> {
        let cleaned = clean_class_value(raw_value);
        if cleaned.is_empty() {
            return None;
        }

        let format = self.options().effective_format();
        let replacement = self.organize(&cleaned);
        let current = match format {
            OutputFormat::Multiline => raw_value.trim(),
            _ => cleaned.as_str(),
        };
        if replacement == current {
            return None;
        }

        let utility = self.options().utility();
        let expression = format == OutputFormat::WithComments
            && replacement.starts_with(&format!("{{{}(", utility.name()));

        Some(ClassFix {
            replacement,
            expression,
            needs_import: expression && !utility.imported(),
        })
    }
}

/// The standard [`ClassOrganizer`] over the built-in pattern table.
#[derive(Debug, Clone)]
pub struct DefaultClassOrganizer {
    options: OrganizerOptions,
}

impl Default for DefaultClassOrganizer {
    fn default() -> Self {
        Self {
            options: OrganizerOptions::default(),
        }
    }
}

impl DefaultClassOrganizer {
    /// Build an organizer from validated options.
    pub fn new(options: OrganizerOptions) -> OrgResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Build an organizer from a format selector and a utility strategy.
    ///
    /// ## Arguments
    /// * `format` - The requested format.
    /// * `resolver` - Picks the call wrapper (and whether it is imported).
    pub fn with_resolver<F, R>(
        format: F,
        resolver: &R,
    ) -> OrgResult<Self>
    where
        F: Into<FormatSelector>,
        R: UtilityResolver + ?Sized,
    {
        Self::new(
            OrganizerOptions::default()
                .with_format(format)
                .with_resolved_utility(resolver)?,
        )
    }
}

impl ClassOrganizer for DefaultClassOrganizer {
    fn options(&self) -> &OrganizerOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::OrganizerError,
        organizer::UtilityFunction,
        types::{check_is_send, check_is_sync},
    };

    fn organizer(
        format: FormatSelector,
        name: &str,
        imported: bool,
    ) -> DefaultClassOrganizer {
        let utility = UtilityFunction::new(name).unwrap().with_imported(imported);
        DefaultClassOrganizer::with_resolver(format, &utility).unwrap()
    }

    #[test]
    fn test_send_sync() {
        let organizer = DefaultClassOrganizer::default();
        check_is_send(&organizer);
        check_is_sync(&organizer);
    }

    #[test]
    fn test_new_validates() {
        let options = OrganizerOptions::default().with_component_name(" ");
        assert_eq!(
            DefaultClassOrganizer::new(options).err(),
            Some(OrganizerError::InvalidComponentName(" ".to_string()))
        );
    }

    #[test]
    fn test_organize_formats() {
        let input = "mt-4 flex items-center";

        let inline = organizer(FormatSelector::Inline, "cn", true);
        assert_eq!(inline.organize(input), "flex items-center mt-4");

        let grouped = organizer(FormatSelector::Multiline, "cn", false);
        assert_eq!(
            grouped.organize(input),
            "// Layout\nflex\n// Alignment\nitems-center\n// Spacing\nmt-4"
        );

        let auto_imported = organizer(FormatSelector::Auto, "cn", true);
        assert!(auto_imported.organize(input).starts_with("{cn(\n"));

        let auto_missing = organizer(FormatSelector::Auto, "cn", false);
        assert_eq!(auto_missing.organize(input), "flex items-center mt-4");
    }

    #[test]
    fn test_organize_batch() {
        let organizer = DefaultClassOrganizer::default();
        let batch = vec![
            "mt-4 flex".to_string(),
            String::new(),
            "foo z-10".to_string(),
        ];
        assert_eq!(
            organizer.organize_batch(&batch),
            vec!["flex mt-4".to_string(), String::new(), "z-10 foo".to_string()]
        );
    }

    #[test]
    fn test_organize_element() {
        let organizer = DefaultClassOrganizer::new(
            OrganizerOptions::default()
                .with_component_name("div")
                .with_utility(UtilityFunction::new("cn").unwrap()),
        )
        .unwrap();
        let out = organizer.organize_element("mt-4 flex");
        assert!(out.starts_with("<div\n  className={cn(\n    // Layout\n"));
        assert!(out.ends_with("  )}\n/>"));
    }

    #[test]
    fn test_fix_inline() {
        let organizer = organizer(FormatSelector::Inline, "cn", false);
        assert_eq!(organizer.fix("flex mt-4"), None);
        assert_eq!(organizer.fix("   "), None);
        assert_eq!(organizer.fix("/* nothing */"), None);
        assert_eq!(
            organizer.fix("  mt-4 flex "),
            Some(ClassFix {
                replacement: "flex mt-4".to_string(),
                expression: false,
                needs_import: false,
            })
        );
    }

    #[test]
    fn test_fix_strips_comment_artifacts() {
        let organizer = organizer(FormatSelector::Inline, "cn", false);
        let fix = organizer
            .fix("// Spacing\nmt-4\n// Layout\nflex")
            .unwrap();
        assert_eq!(fix.replacement, "flex mt-4");
    }

    #[test]
    fn test_fix_multiline_converges() {
        let organizer = organizer(FormatSelector::Multiline, "cn", false);

        let fix = organizer.fix("mt-4 flex").unwrap();
        assert_eq!(fix.replacement, "// Layout\nflex\n// Spacing\nmt-4");
        assert!(!fix.expression);
        assert_eq!(organizer.fix(&fix.replacement), None);
        assert_eq!(organizer.fix("\n  // Layout\nflex\n// Spacing\nmt-4\n"), None);

        // Stale labels are rewritten.
        let fix = organizer.fix("// Spacing\nflex\n// Layout\nmt-4").unwrap();
        assert_eq!(fix.replacement, "// Layout\nflex\n// Spacing\nmt-4");

        // Ordered but ungrouped text still gets its labels.
        assert!(organizer.fix("flex mt-4").is_some());
    }

    #[test]
    fn test_fix_with_comments() {
        let organizer = organizer(FormatSelector::WithComments, "cn", false);
        let fix = organizer.fix("mt-4 flex").unwrap();
        assert!(fix.expression);
        assert!(fix.needs_import);
        assert_eq!(
            fix.replacement,
            "{cn(\n    // Layout\n    \"flex\",\n    // Spacing\n    \"mt-4\"\n  )}"
        );

        // A single group collapses to plain text; nothing to report if unchanged.
        assert_eq!(organizer.fix("flex"), None);
        let fix = organizer.fix("mb-2  mt-4").unwrap();
        assert_eq!(fix.replacement, "mb-2 mt-4");
        assert!(!fix.expression);
        assert!(!fix.needs_import);
    }

    #[test]
    fn test_fix_imported_utility() {
        let organizer = organizer(FormatSelector::Auto, "clsx", true);
        let fix = organizer.fix("mt-4 flex").unwrap();
        assert!(fix.expression);
        assert!(!fix.needs_import);
        assert!(fix.replacement.starts_with("{clsx(\n"));
    }
}
