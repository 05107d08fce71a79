//! Kind and alias lookup tables.

use coffee_oracle::kinds;

/// Structural kinds that occupy no reliable source text.
///
/// The tokenizer invents these while tracking indentation and implicit
/// parens/braces; searching the source for them would misfire, so the
/// scan skips them without moving the cursor.
pub(crate) fn is_ignored(kind: &str) -> bool {
    matches!(
        kind,
        kinds::INDENT
            | kinds::OUTDENT
            | kinds::LBRACE
            | kinds::RBRACE
            | kinds::TERMINATOR
            | kinds::CALL_START
            | kinds::CALL_END
            | kinds::LPAREN
            | kinds::RPAREN
    )
}

/// Source spellings the tokenizer normalizes away.
///
/// The reported value is always searched first; these follow in table
/// order, so an equal-position tie keeps the reported value.
pub(crate) fn aliases(value: &str) -> &'static [&'static str] {
    match value {
        "==" | "===" => &["is"],
        "!=" | "!==" => &["isnt"],
        "||" => &["or"],
        "&&" => &["and"],
        "!" => &["not"],
        "true" => &["yes", "on"],
        "false" => &["no", "off"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_structural_kinds_ignored() {
        for kind in [
            "INDENT",
            "OUTDENT",
            "{",
            "}",
            "TERMINATOR",
            "CALL_START",
            "CALL_END",
            "(",
            ")",
        ] {
            assert!(is_ignored(kind), "{kind} should be ignored");
        }
    }

    #[test]
    fn test_content_kinds_not_ignored() {
        for kind in ["IDENTIFIER", "STRING", "NUMBER", "HERECOMMENT", "@", "="] {
            assert!(!is_ignored(kind), "{kind} should not be ignored");
        }
    }

    #[test]
    fn test_operator_aliases() {
        assert_eq!(aliases("=="), &["is"]);
        assert_eq!(aliases("==="), &["is"]);
        assert_eq!(aliases("!="), &["isnt"]);
        assert_eq!(aliases("!=="), &["isnt"]);
        assert_eq!(aliases("||"), &["or"]);
        assert_eq!(aliases("&&"), &["and"]);
        assert_eq!(aliases("!"), &["not"]);
    }

    #[test]
    fn test_boolean_aliases() {
        assert_eq!(aliases("true"), &["yes", "on"]);
        assert_eq!(aliases("false"), &["no", "off"]);
    }

    #[test]
    fn test_unaliased_values_empty() {
        assert!(aliases("foo").is_empty());
        assert!(aliases("=").is_empty());
        assert!(aliases("+").is_empty());
    }
}
