//! The reconciliation scan.
//!
//! Pulls raw `(kind, value)` tokens and re-locates each one in the source
//! with a forward-only cursor:
//!
//! ```text
//! RawToken stream → skip ignored → recover span → sweep gap → ResolvedToken
//! ```
//!
//! Span recovery depends on the kind. Here-comments get their `###` fences
//! back. Interpolated strings are re-scanned, because the tokenizer rebuilds
//! their values and splits the literal into pieces that must be consumed as
//! one token. Everything else resolves by candidate search: the reported
//! value first, then its source-level aliases, earliest match wins. Line
//! comments never arrive as raw tokens; they are synthesized from the gaps
//! between located tokens.
//!
//! # Invariants
//!
//! - The cursor never moves backward; each token is searched at or after
//!   the end of the previous one.
//! - A lying oracle cannot panic the scan: it either resolves, yields
//!   `UnresolvableToken` once and fuses, or emits a best-effort span for
//!   an unterminated construct.

use std::collections::VecDeque;
use std::vec;

use coffee_oracle::{kinds, RawToken};

use crate::error::ResolveError;
use crate::locate::{find_from, CharOffsets};
use crate::sweep::comments_in;
use crate::tables::{aliases, is_ignored};
use crate::token::ResolvedToken;

/// Lazy stream of resolved tokens for one source.
///
/// Yields `Err` at most once; after an error, or after the trailing
/// comment sweep, the iterator is fused.
pub struct ResolvedTokens<'s> {
    source: &'s str,
    raw: vec::IntoIter<RawToken>,
    /// Byte position bounding the next search.
    cursor: usize,
    /// Kind of the last resolved token. Synthesized comments do not
    /// update it.
    prev_kind: Option<String>,
    /// Output queued ahead of the next pull: swept comments, then the
    /// token that closed their gap.
    pending: VecDeque<ResolvedToken>,
    offsets: CharOffsets,
    done: bool,
}

impl<'s> ResolvedTokens<'s> {
    pub(crate) fn new(source: &'s str, raw: Vec<RawToken>) -> Self {
        ResolvedTokens {
            source,
            raw: raw.into_iter(),
            cursor: 0,
            prev_kind: None,
            pending: VecDeque::new(),
            offsets: CharOffsets::new(),
            done: false,
        }
    }

    /// Process raw tokens until something is queued, the stream ends, or
    /// resolution fails. Only called with an empty queue.
    fn step(&mut self) -> Result<(), ResolveError> {
        let Some(raw) = self.raw.next() else {
            self.sweep_gap(self.source.len());
            self.done = true;
            return Ok(());
        };

        if is_ignored(&raw.kind) {
            return Ok(());
        }

        let (start, end) = match raw.kind.as_str() {
            kinds::HERECOMMENT => self.herecomment_span(&raw.value)?,
            kinds::STRING => self.string_span(&raw.value)?,
            _ => self.general_span(&raw.value)?,
        };

        let mut kind = raw.kind;
        if kind == kinds::IDENTIFIER && self.prev_kind.as_deref() == Some(kinds::AT) {
            kind = kinds::AT.to_string();
        }

        self.sweep_gap(start);
        let value = self.source[start..end].to_string();
        let index = self.offsets.char_at(self.source, start);
        self.prev_kind = Some(kind.clone());
        self.pending.push_back(ResolvedToken { kind, value, index });
        self.cursor = end;
        Ok(())
    }

    /// Queue a `COMMENT` for every line comment between the cursor and
    /// `until`. A here-comment fence recovered from before the cursor can
    /// put `until` behind it; the gap is empty then.
    fn sweep_gap(&mut self, until: usize) {
        if until <= self.cursor {
            return;
        }
        let gap = &self.source[self.cursor..until];
        for (off, text) in comments_in(gap) {
            let index = self.offsets.char_at(self.source, self.cursor + off);
            self.pending.push_back(ResolvedToken {
                kind: kinds::COMMENT.to_string(),
                value: text.to_string(),
                index,
            });
        }
    }

    /// Recover the `###` fences around a here-comment's inner text.
    ///
    /// The reported value is the inner text with the fences stripped,
    /// wrapped in newlines. Locate the inner text, then walk backward
    /// from it counting `#` until the opening fence's three are seen
    /// (never stepping before the start of source), and forward from its
    /// end for the closing three. A source that ends mid-fence yields a
    /// best-effort span to end of source.
    fn herecomment_span(&self, value: &str) -> Result<(usize, usize), ResolveError> {
        let inner = value.trim_matches('\n');
        let (inner_start, inner_end) =
            find_from(self.source, inner, self.cursor).ok_or_else(|| self.unresolvable(value))?;
        let bytes = self.source.as_bytes();

        let mut start = inner_start;
        let mut seen = 0;
        while start > 0 && seen < 3 {
            start -= 1;
            if bytes[start] == b'#' {
                seen += 1;
            }
        }

        let mut end = inner_end;
        let mut seen = 0;
        while end < bytes.len() && seen < 3 {
            if bytes[end] == b'#' {
                seen += 1;
            }
            end += 1;
        }
        if seen < 3 {
            tracing::debug!(start, "here-comment closing fence missing; spanning to end of source");
        }
        Ok((start, end))
    }

    /// Span of a string literal whose reported value may not occur
    /// verbatim.
    ///
    /// The direct search covers plain literals. When it misses, the
    /// literal is interpolated and the tokenizer has rebuilt its value:
    /// re-locate the literal by its prefix (value minus the closing
    /// quote), then scan from the character after the opening quote,
    /// tracking `#{`/`}` nesting and backslash escapes, to the first
    /// unescaped closing quote at depth zero. A source that ends first
    /// yields a best-effort span to end of source.
    fn string_span(&mut self, value: &str) -> Result<(usize, usize), ResolveError> {
        if let Some(span) = find_from(self.source, value, self.cursor) {
            return Ok(span);
        }
        tracing::debug!(
            cursor = self.cursor,
            "string literal not verbatim in source; rescanning as interpolated"
        );

        let Some(quote) = value.chars().last().filter(char::is_ascii) else {
            return Err(self.unresolvable(value));
        };
        let prefix = &value[..value.len() - 1];
        let (start, _) =
            find_from(self.source, prefix, self.cursor).ok_or_else(|| self.unresolvable(value))?;

        let bytes = self.source.as_bytes();
        let quote = quote as u8;
        let mut pos = start + 1;
        let mut depth = 0u32;
        let end = loop {
            if pos >= bytes.len() {
                // Unterminated literal.
                break bytes.len();
            }
            match bytes[pos] {
                b'\\' => pos += 2,
                b'#' if bytes.get(pos + 1) == Some(&b'{') => {
                    depth += 1;
                    pos += 2;
                }
                b'}' if depth > 0 => {
                    depth -= 1;
                    pos += 1;
                }
                b if b == quote && depth == 0 => break pos + 1,
                _ => pos += 1,
            }
        };

        self.skip_interpolation_tokens();
        Ok((start, end))
    }

    /// Consume the interpolated expression's raw tokens.
    ///
    /// The tokenizer emits the rebuilt literal as pieces wrapped in `(`
    /// `)` group markers; the opening marker precedes the string piece
    /// and is skipped as ignored, so the matching `)` arrives at depth
    /// zero. Only `(` and `)` kinds count: call parens use distinct
    /// `CALL_START`/`CALL_END` tags and balance on their own. Stops
    /// right after the closing marker, or at stream end for malformed
    /// captures.
    fn skip_interpolation_tokens(&mut self) {
        let mut depth = 0u32;
        for raw in self.raw.by_ref() {
            match raw.kind.as_str() {
                kinds::LPAREN => depth += 1,
                kinds::RPAREN => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }
    }

    /// Earliest occurrence of the value or one of its aliases.
    ///
    /// The reported value is tried first, so an equal-position tie keeps
    /// it over an alias.
    fn general_span(&self, value: &str) -> Result<(usize, usize), ResolveError> {
        let mut best: Option<(usize, usize)> = None;
        for candidate in std::iter::once(value).chain(aliases(value).iter().copied()) {
            if let Some((start, end)) = find_from(self.source, candidate, self.cursor) {
                if best.map_or(true, |(bs, _)| start < bs) {
                    best = Some((start, end));
                }
            }
        }
        best.ok_or_else(|| self.unresolvable(value))
    }

    fn unresolvable(&self, value: &str) -> ResolveError {
        ResolveError::UnresolvableToken {
            value: value.to_string(),
            cursor: self.cursor,
        }
    }
}

impl Iterator for ResolvedTokens<'_> {
    type Item = Result<ResolvedToken, ResolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Some(Ok(tok));
            }
            if self.done {
                return None;
            }
            if let Err(e) = self.step() {
                self.done = true;
                return Some(Err(e));
            }
        }
    }
}
