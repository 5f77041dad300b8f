//! # Organizer Options

use crate::{
    errors::{OrgResult, OrganizerError},
    organizer::{UtilityFunction, UtilityResolver},
    render::{DEFAULT_COMPONENT_NAME, OutputFormat},
};

/// The requested output format, including the `auto` choice.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum FormatSelector {
    /// Use [`OutputFormat::WithComments`] when the utility is already
    /// imported; [`OutputFormat::Inline`] otherwise.
    #[default]
    Auto,

    /// Always [`OutputFormat::Inline`].
    Inline,

    /// Always [`OutputFormat::Multiline`].
    Multiline,

    /// Always [`OutputFormat::WithComments`].
    WithComments,
}

impl From<OutputFormat> for FormatSelector {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Inline => Self::Inline,
            OutputFormat::Multiline => Self::Multiline,
            OutputFormat::WithComments => Self::WithComments,
        }
    }
}

impl FormatSelector {
    /// Parse a selector (`auto`, `inline`, `multiline`, `with-comments`).
    pub fn parse(name: &str) -> OrgResult<Self> {
        name.parse()
            .map_err(|_| OrganizerError::UnknownFormat(name.to_string()))
    }

    /// Resolve to a concrete format for the given utility.
    pub fn resolve(
        &self,
        utility: &UtilityFunction,
    ) -> OutputFormat {
        match self {
            Self::Auto if utility.imported() => OutputFormat::WithComments,
            Self::Auto | Self::Inline => OutputFormat::Inline,
            Self::Multiline => OutputFormat::Multiline,
            Self::WithComments => OutputFormat::WithComments,
        }
    }
}

/// Configuration for a [`DefaultClassOrganizer`](crate::organizer::DefaultClassOrganizer).
///
/// ## Style Hints
///
/// Instance names should prefer `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizerOptions {
    /// The requested format.
    format: FormatSelector,

    /// The call wrapper for expression output.
    utility: UtilityFunction,

    /// The component name for element snippets.
    component_name: String,
}

impl Default for OrganizerOptions {
    fn default() -> Self {
        Self {
            format: FormatSelector::default(),
            utility: UtilityFunction::default(),
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
        }
    }
}

impl OrganizerOptions {
    /// Set the format selector.
    ///
    /// ## Arguments
    /// * `format` - A [`FormatSelector`] or a concrete [`OutputFormat`].
    pub fn with_format<F>(
        self,
        format: F,
    ) -> Self
    where
        F: Into<FormatSelector>,
    {
        Self {
            format: format.into(),
            ..self
        }
    }

    /// Set the utility function.
    pub fn with_utility(
        self,
        utility: UtilityFunction,
    ) -> Self {
        Self { utility, ..self }
    }

    /// Set the utility function from a resolver strategy.
    pub fn with_resolved_utility<R>(
        self,
        resolver: &R,
    ) -> OrgResult<Self>
    where
        R: UtilityResolver + ?Sized,
    {
        Ok(self.with_utility(resolver.resolve_utility()?))
    }

    /// Set the component name used by element snippets.
    pub fn with_component_name<S: Into<String>>(
        self,
        component_name: S,
    ) -> Self {
        Self {
            component_name: component_name.into(),
            ..self
        }
    }

    /// Get the format selector.
    pub fn format(&self) -> FormatSelector {
        self.format
    }

    /// Get the concrete format, after resolving `auto`.
    pub fn effective_format(&self) -> OutputFormat {
        self.format.resolve(&self.utility)
    }

    /// Get the utility function.
    pub fn utility(&self) -> &UtilityFunction {
        &self.utility
    }

    /// Get the component name.
    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Check the configuration.
    pub fn validate(&self) -> OrgResult<()> {
        self.utility.validate()?;
        if self.component_name.is_empty() || self.component_name.chars().any(char::is_whitespace)
        {
            return Err(OrganizerError::InvalidComponentName(
                self.component_name.clone(),
            ));
        }
        Ok(())
    }
}
