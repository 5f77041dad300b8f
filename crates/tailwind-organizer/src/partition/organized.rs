//! # Organized Results

use crate::patterns::{ClassGroup, OTHER_LABEL};

/// The ordered tokens assigned to one group for a single organize call.
///
/// Borrows both the class string and the group table it was sorted against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<'a> {
    /// The owning group; `None` for the "Other" bucket.
    group: Option<&'a ClassGroup>,

    /// Tokens in input order.
    tokens: Vec<&'a str>,
}

impl<'a> Bucket<'a> {
    /// Build a bucket for a group (or "Other" when `group` is `None`).
    pub fn new(
        group: Option<&'a ClassGroup>,
        tokens: Vec<&'a str>,
    ) -> Self {
        Self { group, tokens }
    }

    /// The bucket label.
    pub fn label(&self) -> &'static str {
        self.group.map_or(OTHER_LABEL, |g| g.label)
    }

    /// The owning group, if classified.
    pub fn group(&self) -> Option<&'a ClassGroup> {
        self.group
    }

    /// Is this the catch-all bucket for unclassified tokens?
    pub fn is_other(&self) -> bool {
        self.group.is_none()
    }

    /// The tokens, in input order.
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// The tokens joined by single spaces.
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

/// One entry of the grouped-lines representation.
///
/// `label` is `None` only for class lines that appear before any `//`
/// comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledClasses {
    /// The group label, if any.
    pub label: Option<String>,

    /// Space-joined class text.
    pub classes: String,
}

impl LabeledClasses {
    /// Build a labeled entry.
    pub fn new<L, C>(
        label: Option<L>,
        classes: C,
    ) -> Self
    where
        L: Into<String>,
        C: Into<String>,
    {
        Self {
            label: label.map(Into::into),
            classes: classes.into(),
        }
    }
}

/// Non-empty buckets in precedence order, with "Other" last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizedResult<'a> {
    buckets: Vec<Bucket<'a>>,
}

impl<'a> OrganizedResult<'a> {
    /// Build a result from already-ordered buckets.
    ///
    /// Empty buckets are dropped.
    pub fn from_buckets<I>(buckets: I) -> Self
    where
        I: IntoIterator<Item = Bucket<'a>>,
    {
        Self {
            buckets: buckets
                .into_iter()
                .filter(|b| !b.tokens.is_empty())
                .collect(),
        }
    }

    /// The non-empty buckets, in output order.
    pub fn buckets(&self) -> &[Bucket<'a>] {
        &self.buckets
    }

    /// The number of non-empty buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Were there no tokens at all?
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The total number of tokens across all buckets.
    pub fn token_count(&self) -> usize {
        self.buckets.iter().map(|b| b.tokens.len()).sum()
    }

    /// All tokens, flattened in output order.
    pub fn tokens(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.buckets.iter().flat_map(|b| b.tokens.iter().copied())
    }

    /// Find the bucket with the given label.
    pub fn bucket(
        &self,
        label: &str,
    ) -> Option<&Bucket<'a>> {
        self.buckets.iter().find(|b| b.label() == label)
    }

    /// Convert to the grouped-lines representation; every entry is labeled.
    pub fn to_labeled(&self) -> Vec<LabeledClasses> {
        self.buckets
            .iter()
            .map(|b| LabeledClasses::new(Some(b.label()), b.joined()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::find_group;

    #[test]
    fn test_bucket_labels() {
        let layout = Bucket::new(find_group("Layout"), vec!["flex"]);
        assert_eq!(layout.label(), "Layout");
        assert!(!layout.is_other());

        let other = Bucket::new(None, vec!["foo", "bar"]);
        assert_eq!(other.label(), OTHER_LABEL);
        assert!(other.is_other());
        assert_eq!(other.joined(), "foo bar");
    }

    #[test]
    fn test_from_buckets_drops_empty() {
        let result = OrganizedResult::from_buckets([
            Bucket::new(find_group("Layout"), vec!["flex", "block"]),
            Bucket::new(find_group("Position"), vec![]),
            Bucket::new(None, vec!["foo"]),
        ]);
        assert_eq!(result.len(), 2);
        assert_eq!(result.token_count(), 3);
        assert_eq!(
            result.tokens().collect::<Vec<_>>(),
            vec!["flex", "block", "foo"]
        );
        assert!(result.bucket("Position").is_none());
        assert_eq!(result.bucket("Other").unwrap().tokens(), &["foo"]);
        assert_eq!(
            result.to_labeled(),
            vec![
                LabeledClasses::new(Some("Layout"), "flex block"),
                LabeledClasses::new(Some("Other"), "foo"),
            ]
        );
    }

    #[test]
    fn test_default_is_empty() {
        let result = OrganizedResult::default();
        assert!(result.is_empty());
        assert_eq!(result.token_count(), 0);
        assert!(result.to_labeled().is_empty());
    }
}
