//! # Organizer
//!
//! The configured entry point used by integrations:
//!
//! * [`OrganizerOptions`] - format selector, utility function, component name.
//! * [`UtilityResolver`] - caller-supplied strategy picking the call wrapper.
//! * [`ClassOrganizer`] / [`DefaultClassOrganizer`] - organize, batch, and
//!   compute [`ClassFix`] replacements for attribute values.

mod class_organizer;
mod clean;
mod options;
mod utility;

#[doc(inline)]
pub use class_organizer::*;
#[doc(inline)]
pub use clean::*;
#[doc(inline)]
pub use options::*;
#[doc(inline)]
pub use utility::*;
