//! Replay adapter for captured tokenizer output.

use tracing::warn;

use crate::{RawToken, TokenOracle};

/// Replays a captured tokenizer dump for one known source.
///
/// The capture format is the tokenizer's native JSON: an array of arrays,
/// each `[kind, value, ...]`. Elements past the second (line numbers,
/// location metadata) are ignored. Parsing happens once at construction;
/// [`TokenOracle::raw_tokens`] hands back the parsed stream and ignores
/// its `source` argument, which is what makes this a replay.
///
/// A malformed capture replays as empty, per the oracle contract.
#[derive(Debug, Clone)]
pub struct ReplayOracle {
    tokens: Vec<RawToken>,
}

impl ReplayOracle {
    /// Parse a capture from its JSON text.
    pub fn from_json(json: &str) -> Self {
        let tokens = parse_capture(json).unwrap_or_else(|reason| {
            warn!(%reason, "discarding malformed token capture");
            Vec::new()
        });
        ReplayOracle { tokens }
    }

    /// Build a replay directly from tokens. Test fixtures, mostly.
    pub fn from_tokens(tokens: Vec<RawToken>) -> Self {
        ReplayOracle { tokens }
    }

    /// Number of captured tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the capture replays as empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenOracle for ReplayOracle {
    fn raw_tokens(&mut self, _source: &str) -> Vec<RawToken> {
        self.tokens.clone()
    }
}

/// Parse the tokenizer's JSON dump.
///
/// Errors are human-readable descriptions destined for the warning log,
/// never surfaced to callers of the oracle.
pub(crate) fn parse_capture(json: &str) -> Result<Vec<RawToken>, String> {
    let root: serde_json::Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
    let serde_json::Value::Array(entries) = root else {
        return Err("top level is not an array".to_string());
    };

    let mut tokens = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let serde_json::Value::Array(parts) = entry else {
            return Err(format!("entry {i} is not an array"));
        };
        let Some(serde_json::Value::String(kind)) = parts.first() else {
            return Err(format!("entry {i} has no string kind"));
        };
        let value = match parts.get(1) {
            Some(serde_json::Value::String(s)) => s.clone(),
            // The tokenizer emits bare numbers for some literal values.
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(other) => {
                return Err(format!("entry {i} has unsupported value {other}"));
            }
            None => return Err(format!("entry {i} has no value")),
        };
        tokens.push(RawToken::new(kind.clone(), value));
    }
    Ok(tokens)
}
