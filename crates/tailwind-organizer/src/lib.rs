//! # `tailwind-organizer` Class List Organizer
//!
//! Classifies the utility class tokens of an atomic-CSS class list into
//! named groups, reorders them into a canonical sequence, and renders the
//! result as text.
//!
//! The pipeline is:
//!
//! `raw string -> tokenize -> classify -> partition -> render`
//!
//! See:
//! * [`patterns`] for the precedence-ordered pattern table.
//! * [`classify()`] to classify a single token.
//! * [`partition()`] to bucket a class string into an [`OrganizedResult`].
//! * [`render`] to render inline, grouped-lines, or call-expression output.
//! * [`organizer`] for a configured [`ClassOrganizer`] suitable for lint and
//!   rewrite integrations.
//!
//! Every operation is pure and thread-safe; the pattern table is static data.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``rayon``
//!
//! #### feature: ``rayon``
//!
//! This enables [`rayon::ParallelRayonOrganizer`], which organizes batches
//! in parallel using the ``rayon`` crate.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Example
//!
//! ```rust
//! use tailwind_organizer::{OutputFormat, format_with_comments, organize};
//!
//! assert_eq!(
//!     organize("mt-4 flex items-center", OutputFormat::Inline, "cn"),
//!     "flex items-center mt-4"
//! );
//!
//! assert_eq!(
//!     format_with_comments("mt-4 flex", "cn"),
//!     "{cn(\n    // Layout\n    \"flex\",\n    // Spacing\n    \"mt-4\"\n  )}"
//! );
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod classify;
pub mod errors;
pub mod organizer;
pub mod partition;
pub mod patterns;
pub mod render;
pub mod types;

#[doc(inline)]
pub use classify::{Classifier, classify};
#[doc(inline)]
pub use errors::{OrgResult, OrganizerError};
#[doc(inline)]
pub use organizer::{
    ClassFix,
    ClassOrganizer,
    DefaultClassOrganizer,
    FormatSelector,
    OrganizerOptions,
    UtilityFunction,
    UtilityResolver,
    clean_class_value,
};
#[doc(inline)]
pub use partition::{Bucket, LabeledClasses, OrganizedResult, partition, tokenize};
#[doc(inline)]
pub use render::{
    OutputFormat,
    format_with_comments,
    organize,
    parse_grouped_lines,
    render_grouped,
    render_inline,
    render_jsx_element,
};
