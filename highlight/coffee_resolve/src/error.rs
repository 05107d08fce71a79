//! Resolution errors.

use std::fmt;

/// Error from the reconciliation scan.
///
/// Any error ends the scan for that source: the iterator yields it once
/// and then fuses. Unterminated constructs are not errors; they resolve
/// to best-effort spans running to end of source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A reported token value, and every alias of it, could not be found
    /// at or after the cursor. The oracle's output and the source text
    /// disagree.
    UnresolvableToken {
        /// The value the tokenizer reported.
        value: String,
        /// Byte position the failed search started from.
        cursor: usize,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnresolvableToken { value, cursor } => write!(
                f,
                "token value {value:?} not found at or after byte {cursor}"
            ),
        }
    }
}

impl std::error::Error for ResolveError {}
