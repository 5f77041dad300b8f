//! # Classification
//!
//! [`Classifier`] maps a single class token to the first matching group of
//! the pattern table.

mod classifier;

#[doc(inline)]
pub use classifier::*;
