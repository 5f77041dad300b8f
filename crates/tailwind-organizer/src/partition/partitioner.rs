//! # Partitioner

use crate::{
    classify::Classifier,
    partition::{Bucket, OrganizedResult},
};

/// Split a class string into tokens.
///
/// Runs of whitespace separate tokens; empty or whitespace-only input yields
/// no tokens.
pub fn tokenize(class_string: &str) -> impl Iterator<Item = &str> {
    class_string.split_whitespace()
}

impl<'g> Classifier<'g> {
    /// Bucket every token of a class string by group.
    ///
    /// Tokens keep their arrival order within a bucket; buckets are ordered by
    /// group precedence with the "Other" bucket last.
    ///
    /// The result borrows the class string and the group table.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, class_string)))]
    pub fn partition<'a>(
        &self,
        class_string: &'a str,
    ) -> OrganizedResult<'a>
    where
        'g: 'a,
    {
        let groups = self.groups();

        // One slot per group, plus a trailing slot for "Other".
        let mut slots: Vec<Vec<&'a str>> = vec![Vec::new(); groups.len() + 1];
        for token in tokenize(class_string) {
            match self.classify_index(token) {
                Some(idx) => slots[idx].push(token),
                None => {
                    log::trace!("unclassified class token: {token:?}");
                    slots[groups.len()].push(token);
                }
            }
        }

        let result = OrganizedResult::from_buckets(
            slots
                .into_iter()
                .enumerate()
                .map(|(idx, tokens)| Bucket::new(groups.get(idx), tokens)),
        );

        log::debug!(
            "partitioned {} tokens into {} buckets",
            result.token_count(),
            result.len()
        );

        result
    }
}

/// Partition a class string against the default pattern table.
///
/// See [`Classifier::partition`].
pub fn partition(class_string: &str) -> OrganizedResult<'_> {
    Classifier::default().partition(class_string)
}
