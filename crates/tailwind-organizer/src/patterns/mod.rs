//! # Class Patterns
//!
//! The static pattern table and the pattern matching rules.
//!
//! * [`ClassPattern`] - prefix (containment) and exact (suffix-aware) patterns.
//! * [`ClassGroup`] - a labeled group of patterns.
//! * [`CLASS_GROUPS`] - the precedence-ordered table.

mod class_group;
mod class_pattern;
mod pattern_table;

#[doc(inline)]
pub use class_group::*;
#[doc(inline)]
pub use class_pattern::*;
#[doc(inline)]
pub use pattern_table::*;
