//! # Partitioning
//!
//! Buckets the tokens of a class string into an [`OrganizedResult`]:
//! non-empty buckets in group precedence order, with unclassified tokens in a
//! trailing "Other" bucket.

mod organized;
mod partitioner;

#[doc(inline)]
pub use organized::*;
#[doc(inline)]
pub use partitioner::*;
