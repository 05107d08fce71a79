//! Resolved output tokens.

use std::fmt;

/// A token with its position reconciled against the source.
///
/// `index` is the zero-based **character** offset of the token's first
/// character in the source. `value` is the exact source text of the
/// token's span, so the character-space slice of `value.chars().count()`
/// characters starting at `index` reproduces `value`. For alias-resolved
/// tokens the value is the spelling found in source (`is`, not the
/// reported `==`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    pub kind: String,
    pub value: String,
    pub index: usize,
}

impl ResolvedToken {
    /// Create a resolved token.
    pub fn new(kind: impl Into<String>, value: impl Into<String>, index: usize) -> Self {
        ResolvedToken {
            kind: kind.into(),
            value: value.into(),
            index,
        }
    }
}

impl fmt::Display for ResolvedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.value, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_shows_kind_value_index() {
        let tok = ResolvedToken::new("STRING", "'hi'", 4);
        assert_eq!(format!("{tok}"), "STRING \"'hi'\" @ 4");
    }

    #[test]
    fn test_new_accepts_str_and_string() {
        let a = ResolvedToken::new("NUMBER", "1", 0);
        let b = ResolvedToken::new(String::from("NUMBER"), String::from("1"), 0);
        assert_eq!(a, b);
    }
}
