//! # Token Classifier

use crate::patterns::{CLASS_GROUPS, ClassGroup};

/// First-match classifier over an ordered group table.
///
/// ## Style Hints
///
/// Instance names should prefer `classifier`.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    groups: &'a [ClassGroup],
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new(CLASS_GROUPS)
    }
}

impl<'a> Classifier<'a> {
    /// Build a classifier over the given precedence-ordered groups.
    ///
    /// ## Arguments
    /// * `groups` - The groups to scan, earliest wins.
    pub fn new(groups: &'a [ClassGroup]) -> Self {
        Self { groups }
    }

    /// Get the scanned groups.
    pub fn groups(&self) -> &'a [ClassGroup] {
        self.groups
    }

    /// Find the precedence index of the first group matching the token.
    pub fn classify_index(
        &self,
        token: &str,
    ) -> Option<usize> {
        self.groups.iter().position(|g| g.matches(token))
    }

    /// Find the first group matching the token.
    pub fn classify_group(
        &self,
        token: &str,
    ) -> Option<&'a ClassGroup> {
        self.classify_index(token).map(|idx| &self.groups[idx])
    }

    /// Find the label of the first group matching the token.
    ///
    /// ## Returns
    /// `None` when no group matches; the token is unclassified.
    pub fn classify(
        &self,
        token: &str,
    ) -> Option<&'a str> {
        self.classify_group(token).map(|g| g.label)
    }
}

/// Classify a token against the default pattern table.
///
/// See [`Classifier::classify`].
pub fn classify(token: &str) -> Option<&'static str> {
    Classifier::default().classify(token)
}
