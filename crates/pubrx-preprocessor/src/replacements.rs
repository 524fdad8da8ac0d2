//! Ordered literal string replacement.

/// A fixed table of literal replacements, applied in table order.
///
/// Used for escape correction of extracted code lines and for the HTML
/// post-processing pass. Order matters: each replacement sees the output of
/// the ones before it.
///
/// # Example
///
/// ```
/// use pubrx_preprocessor::Replacements;
///
/// let replacements = Replacements::from_pairs(&[(r"\_", "_"), (r"\[", "[")]);
///
/// let mut text = r"params\[:user\_name]".to_owned();
/// replacements.apply(&mut text);
///
/// assert_eq!(text, "params[:user_name]");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Replacements {
    items: Vec<(String, String)>,
}

impl Replacements {
    /// Build a table from `(from, to)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            items: pairs
                .iter()
                .map(|(from, to)| ((*from).to_owned(), (*to).to_owned()))
                .collect(),
        }
    }

    /// Apply every replacement to `text` in place.
    pub fn apply(&self, text: &mut String) {
        for (from, to) in &self.items {
            if text.contains(from.as_str()) {
                *text = text.replace(from.as_str(), to);
            }
        }
    }
}
