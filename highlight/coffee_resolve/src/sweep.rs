//! Line-comment synthesis.
//!
//! The tokenizer discards `#` line comments entirely, so they never arrive
//! as raw tokens. They are recovered by sweeping the source gaps between
//! located tokens (and the tail after the last one) for the comment
//! pattern.

use once_cell::sync::Lazy;
use regex::Regex;

/// `#` to end of line. Group 1 is the comment text without the break;
/// `$` covers a comment that runs to the end of the gap.
#[allow(clippy::unwrap_used, reason = "pattern is a checked constant")]
static COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(#.*?)([\r\n]|$)").unwrap());

/// Comments in `gap`, as `(byte offset within gap, text)` pairs in order.
pub(crate) fn comments_in(gap: &str) -> Vec<(usize, &str)> {
    COMMENT_PATTERN
        .captures_iter(gap)
        .filter_map(|caps| caps.get(1))
        .map(|m| (m.start(), m.as_str()))
        .collect()
}
