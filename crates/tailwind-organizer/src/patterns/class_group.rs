//! # Class Groups

use crate::{patterns::ClassPattern, types::GroupTier};

/// A named group of class patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassGroup {
    /// The group label; unique across the table.
    pub label: &'static str,

    /// The sub-table this group came from.
    pub tier: GroupTier,

    /// Raw patterns, in table order.
    ///
    /// See [`ClassPattern::parse`] for how each string is interpreted.
    pub patterns: &'static [&'static str],
}

impl ClassGroup {
    /// Iterate over the parsed patterns of this group.
    pub fn parsed_patterns(&self) -> impl Iterator<Item = ClassPattern<'static>> + use<> {
        self.patterns.iter().copied().map(ClassPattern::parse)
    }

    /// Does any pattern of this group match the token?
    pub fn matches(
        &self,
        token: &str,
    ) -> bool {
        self.parsed_patterns().any(|p| p.matches(token))
    }
}
