//! Asset class definitions.

/// The two classes of asset that get bundled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetClass {
    /// `<script src>`
    Script,
    /// `<link rel="stylesheet" href>`
    Style,
}

impl AssetClass {
    pub const ALL: [Self; 2] = [Self::Script, Self::Style];

    /// Selector matching the tags that reference this class.
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Script => "script[src]",
            Self::Style => r#"link[rel="stylesheet"][href]"#,
        }
    }

    /// Attribute holding the reference.
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Script => "src",
            Self::Style => "href",
        }
    }

    /// Suffix used when no extensions are configured.
    pub const fn default_extension(self) -> &'static str {
        match self {
            Self::Script => ".js",
            Self::Style => ".css",
        }
    }

    /// Extension of generated bundle files.
    pub const fn bundle_extension(self) -> &'static str {
        match self {
            Self::Script => "js",
            Self::Style => "css",
        }
    }

    /// Human-readable name for messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Script => "JavaScript",
            Self::Style => "CSS",
        }
    }
}
