//! # Pattern Matching Rules

/// The separator between variants and the utility in a class token.
pub const VARIANT_SEPARATOR: char = ':';

/// A single group match pattern.
///
/// Patterns are written as plain strings in the pattern table; the trailing
/// character decides how they match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassPattern<'a> {
    /// A pattern ending in `-` or `:`.
    ///
    /// Matches when the token *contains* the pattern anywhere; this is a
    /// containment check, not an anchored prefix check.
    Prefix(&'a str),

    /// Any other pattern.
    ///
    /// Matches when the token equals the pattern, or when the token's suffix
    /// after its last `:` equals the pattern (`hover:flex` matches `flex`).
    Exact(&'a str),
}

impl<'a> ClassPattern<'a> {
    /// Classify a raw pattern string.
    pub fn parse(pattern: &'a str) -> Self {
        if pattern.ends_with('-') || pattern.ends_with(VARIANT_SEPARATOR) {
            Self::Prefix(pattern)
        } else {
            Self::Exact(pattern)
        }
    }

    /// Get the raw pattern text.
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Prefix(p) | Self::Exact(p) => p,
        }
    }

    /// Does this pattern match the token?
    pub fn matches(
        &self,
        token: &str,
    ) -> bool {
        match self {
            Self::Prefix(p) => token.contains(p),
            Self::Exact(p) => token == *p || utility_suffix(token) == *p,
        }
    }
}

impl<'a> From<&'a str> for ClassPattern<'a> {
    fn from(pattern: &'a str) -> Self {
        Self::parse(pattern)
    }
}

/// The part of a token after its last variant separator.
///
/// Tokens without a separator are returned whole.
pub fn utility_suffix(token: &str) -> &str {
    match token.rfind(VARIANT_SEPARATOR) {
        Some(idx) => &token[idx + VARIANT_SEPARATOR.len_utf8()..],
        None => token,
    }
}
