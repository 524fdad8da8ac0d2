//! Languages of extracted code and their marker comment syntax.

/// Language of a code snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    Ruby,
    JavaScript,
    Html,
    Css,
    Yaml,
    Erb,
    Haml,
    /// Anything unrecognized; rendered without highlighting.
    #[default]
    Text,
}

impl Language {
    /// Parse a `:type` value or a file extension.
    ///
    /// Accepts both extensions (`rb`) and names (`ruby`). Unknown values map to
    /// [`Language::Text`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "rb" | "ruby" => Self::Ruby,
            "js" | "javascript" => Self::JavaScript,
            "html" | "hbs" | "mustache" | "handlebars" => Self::Html,
            "css" => Self::Css,
            "yaml" | "yml" => Self::Yaml,
            "erb" => Self::Erb,
            "haml" => Self::Haml,
            _ => Self::Text,
        }
    }

    /// Detect the language from directive parameters.
    ///
    /// An explicit `:type` wins over the extension of `:file` (the suffix after
    /// the last `.`). Content is never inspected, so the marker syntax can be
    /// chosen before the code is searched.
    #[must_use]
    pub fn detect(type_param: Option<&str>, file: Option<&str>) -> Self {
        if let Some(explicit) = type_param {
            return Self::parse(explicit);
        }
        file.and_then(|f| f.rsplit_once('.'))
            .map_or(Self::Text, |(_, ext)| Self::parse(ext))
    }

    /// Name used for the `language-*` class and by the highlighter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ruby => "ruby",
            Self::JavaScript => "javascript",
            Self::Html => "html",
            Self::Css => "css",
            Self::Yaml => "yaml",
            Self::Erb => "erb",
            Self::Haml => "haml",
            Self::Text => "text",
        }
    }

    /// Opening of a marker comment; `///code` strips lines starting with it.
    #[must_use]
    pub fn marker_prefix(self) -> &'static str {
        match self {
            Self::Ruby | Self::Yaml => "###",
            Self::Haml => "-###",
            Self::Html | Self::Erb => "<!--##",
            Self::Css => "/*##",
            Self::JavaScript | Self::Text => "//##",
        }
    }

    /// Closing of a paired-symbol comment, empty for line comments.
    #[must_use]
    pub fn marker_suffix(self) -> &'static str {
        match self {
            Self::Html | Self::Erb => "-->",
            Self::Css => "*/",
            _ => "",
        }
    }

    /// Full marker token for a marker or elide name.
    ///
    /// ```
    /// use pubrx_preprocessor::code::Language;
    ///
    /// assert_eq!(Language::JavaScript.marker_token("setup"), "//##setup");
    /// assert_eq!(Language::Ruby.marker_token("setup"), "###setup");
    /// assert_eq!(Language::Html.marker_token("form"), "<!--##form-->");
    /// ```
    #[must_use]
    pub fn marker_token(self, name: &str) -> String {
        format!("{}{name}{}", self.marker_prefix(), self.marker_suffix())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_table() {
        assert_eq!(Language::parse("rb"), Language::Ruby);
        assert_eq!(Language::parse("js"), Language::JavaScript);
        assert_eq!(Language::parse("hbs"), Language::Html);
        assert_eq!(Language::parse("mustache"), Language::Html);
        assert_eq!(Language::parse("handlebars"), Language::Html);
        assert_eq!(Language::parse("css"), Language::Css);
        assert_eq!(Language::parse("yaml"), Language::Yaml);
        assert_eq!(Language::parse("erb"), Language::Erb);
        assert_eq!(Language::parse("haml"), Language::Haml);
        assert_eq!(Language::parse("py"), Language::Text);
    }

    #[test]
    fn test_detect_from_file_extension() {
        assert_eq!(
            Language::detect(None, Some("app/models/user.rb")),
            Language::Ruby
        );
        assert_eq!(
            Language::detect(None, Some("app/views/users/index.html.erb")),
            Language::Erb
        );
        assert_eq!(Language::detect(None, Some("Gemfile")), Language::Text);
        assert_eq!(Language::detect(None, None), Language::Text);
    }

    #[test]
    fn test_explicit_type_wins() {
        assert_eq!(
            Language::detect(Some("ruby"), Some("app/assets/app.js")),
            Language::Ruby
        );
        assert_eq!(Language::detect(Some(" js "), None), Language::JavaScript);
    }

    #[test]
    fn test_marker_tokens() {
        assert_eq!(Language::Text.marker_token("m"), "//##m");
        assert_eq!(Language::Yaml.marker_token("m"), "###m");
        assert_eq!(Language::Css.marker_token("m"), "/*##m*/");
        assert_eq!(Language::Haml.marker_token("m"), "-###m");
    }
}
