//! # Utility Functions
//!
//! The call wrapper used by the expression renderer (`cn`, `clsx`, ...).
//!
//! Which wrapper a file should use, and whether it is already imported, is
//! decided by the caller; the organizer only consumes the resolved
//! [`UtilityFunction`] through a [`UtilityResolver`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{OrgResult, OrganizerError};

/// The default utility name.
pub const DEFAULT_UTILITY_NAME: &str = "clsx";

/// An identifier, or a dotted path of identifiers.
static UTILITY_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$")
        .expect("utility name pattern is valid")
});

/// A resolved class-joining utility function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityFunction {
    name: String,
    import_path: Option<String>,
    imported: bool,
}

impl Default for UtilityFunction {
    fn default() -> Self {
        Self {
            name: DEFAULT_UTILITY_NAME.to_string(),
            import_path: Some(DEFAULT_UTILITY_NAME.to_string()),
            imported: false,
        }
    }
}

impl UtilityFunction {
    /// Build a utility function description.
    ///
    /// ## Arguments
    /// * `name` - An identifier or dotted identifier path.
    ///
    /// ## Returns
    /// The utility, not imported and without an import path.
    pub fn new<S: Into<String>>(name: S) -> OrgResult<Self> {
        let name = name.into();
        if !UTILITY_NAME_RE.is_match(&name) {
            return Err(OrganizerError::InvalidUtilityName(name));
        }
        Ok(Self {
            name,
            import_path: None,
            imported: false,
        })
    }

    /// Set the module path the utility is imported from.
    pub fn with_import_path<S: Into<String>>(
        self,
        import_path: S,
    ) -> Self {
        Self {
            import_path: Some(import_path.into()),
            ..self
        }
    }

    /// Mark whether the utility is already imported where the output lands.
    pub fn with_imported(
        self,
        imported: bool,
    ) -> Self {
        Self { imported, ..self }
    }

    /// The utility name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The import path, if known.
    pub fn import_path(&self) -> Option<&str> {
        self.import_path.as_deref()
    }

    /// Is the utility already imported?
    pub fn imported(&self) -> bool {
        self.imported
    }

    /// Re-check the name invariant.
    pub fn validate(&self) -> OrgResult<()> {
        if UTILITY_NAME_RE.is_match(&self.name) {
            Ok(())
        } else {
            Err(OrganizerError::InvalidUtilityName(self.name.clone()))
        }
    }
}

/// Strategy that picks the utility function for a call site.
pub trait UtilityResolver {
    /// Resolve the utility function.
    fn resolve_utility(&self) -> OrgResult<UtilityFunction>;
}

impl UtilityResolver for UtilityFunction {
    fn resolve_utility(&self) -> OrgResult<UtilityFunction> {
        self.validate()?;
        Ok(self.clone())
    }
}

impl<F> UtilityResolver for F
where
    F: Fn() -> OrgResult<UtilityFunction>,
{
    fn resolve_utility(&self) -> OrgResult<UtilityFunction> {
        let utility = self()?;
        utility.validate()?;
        Ok(utility)
    }
}
