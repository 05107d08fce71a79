//! Source location helpers for the forward scan.
//!
//! Everything here works in byte space; the emitted indexes come from
//! [`CharOffsets`] at the last step. Needles are matched
//! newline-insensitively because the tokenizer strips `\r` before lexing:
//! a multi-line reported value contains `\n` where a CRLF source has
//! `\r\n`, so a verbatim search would miss. Callers re-cut values from
//! the matched span.

/// Find `needle` in `source` at or after byte offset `from`.
///
/// A `\n` in the needle matches either `\n` or `\r\n` in the source.
/// Returns the matched byte span `(start, end)`; with CRLF expansions the
/// span is longer than the needle. An empty needle matches at `from`.
pub(crate) fn find_from(source: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
    let hay = source.as_bytes();
    if from > hay.len() {
        return None;
    }
    if needle.is_empty() {
        return Some((from, from));
    }

    let needle = needle.as_bytes();
    let first = needle[0];
    let mut pos = from;
    while pos < hay.len() {
        let start = pos + memchr::memchr(first, &hay[pos..])?;
        if let Some(end) = match_at(hay, needle, start) {
            return Some((start, end));
        }
        pos = start + 1;
    }
    None
}

/// Match the whole needle against `hay` starting at `start`, expanding
/// needle `\n` to source `\r\n` where present. Returns the exclusive end
/// of the match.
fn match_at(hay: &[u8], needle: &[u8], start: usize) -> Option<usize> {
    let mut h = start;
    for &nb in needle {
        if nb == b'\n' && hay.get(h) == Some(&b'\r') && hay.get(h + 1) == Some(&b'\n') {
            h += 2;
            continue;
        }
        if hay.get(h) == Some(&nb) {
            h += 1;
            continue;
        }
        return None;
    }
    Some(h)
}

/// Incremental byte-to-character offset converter.
///
/// Resolution queries positions in non-decreasing byte order, so each
/// conversion only counts the characters since the previous query. A
/// backward query recounts from zero rather than assuming monotonicity.
#[derive(Debug, Default)]
pub(crate) struct CharOffsets {
    byte: usize,
    chars: usize,
}

impl CharOffsets {
    pub(crate) fn new() -> Self {
        CharOffsets::default()
    }

    /// Character offset of byte position `byte` in `source`.
    ///
    /// `byte` must lie on a char boundary of `source`.
    pub(crate) fn char_at(&mut self, source: &str, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += source[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
