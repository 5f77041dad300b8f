//! # Error Types

/// Errors from organizer configuration.
///
/// The organizing pipeline itself never fails; these errors are only
/// produced at the configuration boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrganizerError {
    /// The format selector string is not recognized.
    #[error("unknown format: {0:?} (expected one of: auto, inline, multiline, with-comments)")]
    UnknownFormat(String),

    /// The utility function name is not a valid identifier path.
    #[error("invalid utility function name: {0:?}")]
    InvalidUtilityName(String),

    /// The JSX component name is empty or contains whitespace.
    #[error("invalid component name: {0:?}")]
    InvalidComponentName(String),
}

/// Result type for organizer operations.
pub type OrgResult<T> = core::result::Result<T, OrganizerError>;
