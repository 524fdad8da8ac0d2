//! Directive dispatch table.

/// Interpolations: boxed asides with a fixed caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    Trust,
    Author,
    Deprecation,
    Protip,
    Kansas,
    Zen,
    InThis,
}

impl Interpolation {
    /// Heading shown above the body unless a `:title` overrides it.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::Trust => "Trust, But Verify",
            Self::Author => "A Note From the Author",
            Self::Deprecation => "Deprecation Warning",
            Self::Protip => "Pro Tip",
            Self::Kansas => "Not in Kansas Anymore",
            Self::Zen => "Testing Zen",
            Self::InThis => "In This Chapter",
        }
    }

    /// CSS class added next to `interpolation`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Trust => "trust",
            Self::Author => "author",
            Self::Deprecation => "deprecation",
            Self::Protip => "protip",
            Self::Kansas => "kansas",
            Self::Zen => "zen",
            Self::InThis => "inthis",
        }
    }
}

/// Rendering behavior bound to a directive name.
///
/// Resolved once per invocation through [`DirectiveKind::lookup`]; adding a
/// directive means adding a variant and a [`DIRECTIVES`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Plain text or an unknown directive: the body is emitted unchanged.
    Passthrough,
    Sidebar,
    Letter,
    Code,
    CoffeeScriptSidebar,
    Table,
    Definition,
    Interpolation(Interpolation),
}

/// Name → behavior table.
pub const DIRECTIVES: &[(&str, DirectiveKind)] = &[
    ("sidebar", DirectiveKind::Sidebar),
    ("letter", DirectiveKind::Letter),
    ("code", DirectiveKind::Code),
    ("coffeescript-sidebar", DirectiveKind::CoffeeScriptSidebar),
    ("cssidebar", DirectiveKind::CoffeeScriptSidebar),
    ("table", DirectiveKind::Table),
    ("definition", DirectiveKind::Definition),
    ("trust", DirectiveKind::Interpolation(Interpolation::Trust)),
    ("author", DirectiveKind::Interpolation(Interpolation::Author)),
    (
        "deprecation",
        DirectiveKind::Interpolation(Interpolation::Deprecation),
    ),
    ("protip", DirectiveKind::Interpolation(Interpolation::Protip)),
    ("kansas", DirectiveKind::Interpolation(Interpolation::Kansas)),
    ("zen", DirectiveKind::Interpolation(Interpolation::Zen)),
    ("inthis", DirectiveKind::Interpolation(Interpolation::InThis)),
];

impl DirectiveKind {
    /// Behavior for a directive name; absent or unknown names pass through.
    ///
    /// # Example
    ///
    /// ```
    /// use pubrx_preprocessor::directive::DirectiveKind;
    ///
    /// assert_eq!(DirectiveKind::lookup(Some("sidebar")), DirectiveKind::Sidebar);
    /// assert_eq!(DirectiveKind::lookup(Some("nope")), DirectiveKind::Passthrough);
    /// assert_eq!(DirectiveKind::lookup(None), DirectiveKind::Passthrough);
    /// ```
    #[must_use]
    pub fn lookup(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::Passthrough;
        };
        DIRECTIVES
            .iter()
            .find(|(n, _)| *n == name)
            .map_or(Self::Passthrough, |(_, kind)| *kind)
    }
}
