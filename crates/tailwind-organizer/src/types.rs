//! # Common Types

/// Which sub-table of the pattern table a group belongs to.
///
/// Tiers are scanned in declaration order; the tier never changes how a
/// group's patterns match, only where the group sits in precedence.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum GroupTier {
    /// Plain utility classes (layout, spacing, typography, ...).
    Utility,

    /// State variants such as `hover:` and `focus:`.
    StateVariant,

    /// Pseudo elements and structural pseudo classes such as `before:` and `first:`.
    PseudoElement,

    /// Responsive breakpoints (`sm:` .. `2xl:`).
    Responsive,

    /// The `dark:` variant.
    DarkMode,
}

/// Compile-time check that a value is `Send`.
pub fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is `Sync`.
pub fn check_is_sync<S: Sync>(_: &S) {}
