//! # Rendering
//!
//! Renderers turn an [`OrganizedResult`](crate::partition::OrganizedResult)
//! into text:
//!
//! * [`render_inline`] - one space-separated class string.
//! * [`render_grouped`] - `// Label` / classes line pairs; parsed back by
//!   [`parse_grouped_lines`].
//! * [`format_with_comments`] - a commented `{name(...)}` call expression.
//! * [`render_jsx_element`] - a whole element snippet around the call.

mod expression;
mod grouped;
mod inline;
mod jsx;
mod output_format;

#[doc(inline)]
pub use expression::*;
#[doc(inline)]
pub use grouped::*;
#[doc(inline)]
pub use inline::*;
#[doc(inline)]
pub use jsx::*;
#[doc(inline)]
pub use output_format::*;

use crate::partition::partition;

/// Organize a class string into the requested format.
///
/// ## Arguments
/// * `class_string` - The raw whitespace-separated classes.
/// * `format` - The output format.
/// * `utility_name` - The call wrapper; only used by [`OutputFormat::WithComments`].
pub fn organize(
    class_string: &str,
    format: OutputFormat,
    utility_name: &str,
) -> String {
    match format {
        OutputFormat::Inline => render_inline(&partition(class_string)),
        OutputFormat::Multiline => render_grouped(&partition(class_string)),
        OutputFormat::WithComments => format_with_comments(class_string, utility_name),
    }
}
