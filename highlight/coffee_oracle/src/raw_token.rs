//! Raw tokenizer output pairs and well-known kind tags.

/// A `(kind, value)` pair as reported by the tokenizer.
///
/// `kind` is the tokenizer's type tag (`"IDENTIFIER"`, `"STRING"`,
/// punctuation tags such as `"("` or `"@"`). `value` is the text the
/// tokenizer reports, which equals source text for most tokens but is
/// normalized for alias keywords (`is` reported as `==`) and rebuilt for
/// interpolated strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub kind: String,
    pub value: String,
}

impl RawToken {
    /// Create a raw token from its kind tag and value text.
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        RawToken {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Well-known kind tags.
///
/// The tokenizer's tag vocabulary is open (new tags appear across tokenizer
/// versions without notice), so kinds stay strings rather than an enum.
/// These constants cover the tags the reconciler treats specially; every
/// other kind resolves by plain candidate search.
pub mod kinds {
    /// Identifier. Reclassified to [`AT`] when it follows a bare `@`.
    pub const IDENTIFIER: &str = "IDENTIFIER";
    /// String literal, single- or double-quoted, possibly interpolated.
    pub const STRING: &str = "STRING";
    /// Block comment fenced by `###`.
    pub const HERECOMMENT: &str = "HERECOMMENT";
    /// Line comment synthesized by the reconciler. The tokenizer itself
    /// never reports this kind; it discards `#` comments.
    pub const COMMENT: &str = "COMMENT";
    /// Property-access `@`.
    pub const AT: &str = "@";

    // Structural tags that occupy no reliable source text of their own.
    pub const INDENT: &str = "INDENT";
    pub const OUTDENT: &str = "OUTDENT";
    pub const TERMINATOR: &str = "TERMINATOR";
    pub const CALL_START: &str = "CALL_START";
    pub const CALL_END: &str = "CALL_END";
    pub const LBRACE: &str = "{";
    pub const RBRACE: &str = "}";
    pub const LPAREN: &str = "(";
    pub const RPAREN: &str = ")";
}
