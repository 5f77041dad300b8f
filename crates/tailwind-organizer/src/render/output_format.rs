//! # Output Formats

use crate::errors::{OrgResult, OrganizerError};

/// The textual rendering of an organized class list.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    /// A single space-separated class string.
    ///
    /// See [`render_inline`](crate::render::render_inline).
    #[default]
    Inline,

    /// `// Label` comment lines, each followed by the group's classes.
    ///
    /// See [`render_grouped`](crate::render::render_grouped).
    Multiline,

    /// A `{name(...)}` call expression with one commented argument per group.
    ///
    /// See [`format_with_comments`](crate::render::format_with_comments).
    WithComments,
}

impl OutputFormat {
    /// Parse a format selector (`inline`, `multiline`, `with-comments`).
    pub fn parse(name: &str) -> OrgResult<Self> {
        name.parse()
            .map_err(|_| OrganizerError::UnknownFormat(name.to_string()))
    }
}
