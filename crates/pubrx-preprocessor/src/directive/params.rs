//! Directive parameter parsing.
//!
//! Parameters are the `:key value` lines directly under a directive start:
//!
//! ```text
//! ///code
//! :file app/models/user.rb
//! :branch chapter-03
//! :marker validations
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::PreprocessError;

/// `:key value` where key runs up to the first whitespace character.
static PARAMETER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:(\S+)\s(.*)$").unwrap());

/// Insertion-ordered parameter mapping.
///
/// A later duplicate key overwrites the earlier value in place. An empty
/// value is stored as absent, meaning the key is present as a flag.
///
/// # Example
///
/// ```
/// use pubrx_preprocessor::directive::Parameters;
///
/// let mut params = Parameters::new();
/// params.insert("title", "A Sidebar");
/// params.insert("numbers", "");
///
/// assert_eq!(params.get("title"), Some("A Sidebar"));
/// assert_eq!(params.get("numbers"), None);
/// assert!(params.contains("numbers"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Parameters {
    items: Vec<(String, Option<String>)>,
}

impl Parameters {
    /// Create an empty parameter mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, overwriting any earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let value = (!value.is_empty()).then_some(value);

        if let Some(slot) = self.items.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.items.push((key, value));
        }
    }

    /// Value of a parameter, or `None` if it is missing or a bare flag.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Whether the key was given at all, with or without a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.items.iter().any(|(k, _)| k == key)
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Split a `:key value` line into its key and value.
///
/// The value is everything after the first whitespace character following the
/// key, with trailing whitespace removed.
pub(crate) fn parse_parameter(line: &str, line_num: usize) -> Result<(String, String), PreprocessError> {
    let caps = PARAMETER_PATTERN
        .captures(line)
        .ok_or_else(|| PreprocessError::MalformedParameter {
            line: line_num,
            text: line.to_owned(),
        })?;

    Ok((caps[1].to_owned(), caps[2].trim_end().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_title() {
        let (key, value) = parse_parameter(":title Foo", 2).unwrap();
        assert_eq!(key, "title");
        assert_eq!(value, "Foo");
    }

    #[test]
    fn test_value_keeps_inner_spaces() {
        let (key, value) = parse_parameter(":caption The   user model  ", 2).unwrap();
        assert_eq!(key, "caption");
        assert_eq!(value, "The   user model");
    }

    #[test]
    fn test_flag_with_trailing_space() {
        let (key, value) = parse_parameter(":line_numbers ", 2).unwrap();
        assert_eq!(key, "line_numbers");
        assert_eq!(value, "");
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        let err = parse_parameter(":title", 7).unwrap_err();
        assert!(matches!(
            err,
            PreprocessError::MalformedParameter { line: 7, .. }
        ));
    }

    #[test]
    fn test_empty_key_is_malformed() {
        assert!(parse_parameter(": value", 1).is_err());
    }

    #[test]
    fn test_duplicate_overwrites_in_place() {
        let mut params = Parameters::new();
        params.insert("a", "1");
        params.insert("b", "2");
        params.insert("a", "3");

        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("a", Some("3")), ("b", Some("2"))]);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_empty_value_is_flag() {
        let mut params = Parameters::new();
        params.insert("line_numbers", "");
        assert!(params.contains("line_numbers"));
        assert_eq!(params.get("line_numbers"), None);
        assert!(!params.contains("title"));
    }
}
