//! # Attribute Value Cleanup

use once_cell::sync::Lazy;
use regex::Regex;

/// Block comments (`/* ... */`) and line comments (`// ...` to end of line).
static COMMENT_ARTIFACT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/\*[^*]*\*/|//[^\n]*").expect("comment artifact pattern is valid")
});

/// Strip comment artifacts from a raw class attribute value, then trim it.
///
/// Values that were previously rendered as grouped lines carry `// Label`
/// lines; removing them leaves only the class tokens.
pub fn clean_class_value(raw: &str) -> String {
    COMMENT_ARTIFACT_RE.replace_all(raw, "").trim().to_string()
}
