//! Tokenizer oracle interface for CoffeeScript position reconciliation.
//!
//! The CoffeeScript tokenizer reports `(kind, value)` pairs whose position
//! information cannot be trusted. This crate defines the narrow interface
//! the reconciler consumes, plus two adapters that stand behind it:
//!
//! ```text
//! source → TokenOracle → Vec<RawToken>
//!             ├── ReplayOracle   (captured JSON dump)
//!             └── CommandOracle  (external tokenizer process)
//! ```
//!
//! # Contract
//!
//! An oracle that cannot tokenize returns an **empty vector**. It never
//! panics and never surfaces an error; adapters log the failure at `warn`
//! level instead. Downstream, an empty stream degrades resolution to
//! comment sweeping only.
//!
//! Construction may be expensive (process spawn, capture parse), so oracle
//! instances are built once and reused across calls.

mod command;
mod raw_token;
mod replay;

pub use command::CommandOracle;
pub use raw_token::{kinds, RawToken};
pub use replay::ReplayOracle;

/// Source of raw tokenizer output.
///
/// `&mut self` encodes the single-consumer rule: one oracle instance serves
/// one resolver at a time. Any `FnMut(&str) -> Vec<RawToken>` is an oracle,
/// which is how test fixtures and embedders with their own tokenizer
/// hosting plug in.
pub trait TokenOracle {
    /// Tokenize `source` into raw `(kind, value)` pairs.
    ///
    /// Returns an empty vector when the source cannot be tokenized.
    fn raw_tokens(&mut self, source: &str) -> Vec<RawToken>;
}

impl<F> TokenOracle for F
where
    F: FnMut(&str) -> Vec<RawToken>,
{
    fn raw_tokens(&mut self, source: &str) -> Vec<RawToken> {
        self(source)
    }
}
