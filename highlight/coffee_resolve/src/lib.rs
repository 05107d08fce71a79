//! Position reconciliation for CoffeeScript tokenizer output.
//!
//! The tokenizer is treated as an oracle: its `(kind, value)` stream is
//! trusted for token identity but not for positions. This crate re-locates
//! every reported token in the original source with a single forward scan
//! and emits `(kind, value, index)` triples, `index` being the zero-based
//! character offset of the token's first character.
//!
//! # Architecture
//!
//! ```text
//! source → TokenOracle → RawToken stream → ResolvedTokens → (kind, value, index)
//! ```
//!
//! Each non-structural raw token is located at or after a forward-only
//! cursor:
//! - **Here-comments**: inner text located, `###` fences recovered around it
//! - **Strings**: verbatim search, or a rescan of the literal when the
//!   tokenizer rebuilt an interpolated value
//! - **Everything else**: candidate search over the reported value and its
//!   source-level aliases (`is` for `==`, `yes` for `true`, ...)
//! - **Line comments**: synthesized from the gaps, since the tokenizer
//!   discards them
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), coffee_resolve::ResolveError> {
//! use coffee_oracle::RawToken;
//! use coffee_resolve::Resolver;
//!
//! let mut resolver = Resolver::new(|_: &str| {
//!     vec![
//!         RawToken::new("NUMBER", "1"),
//!         RawToken::new("+", "+"),
//!         RawToken::new("NUMBER", "2"),
//!     ]
//! });
//! let tokens = resolver.resolve("1 + 2").collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(tokens[2].index, 4);
//! # Ok(())
//! # }
//! ```

mod error;
mod locate;
mod reconciler;
mod sweep;
mod tables;
mod token;

pub use coffee_oracle::{kinds, RawToken, TokenOracle};
pub use error::ResolveError;
pub use reconciler::ResolvedTokens;
pub use token::ResolvedToken;

/// Reconciles tokenizer output with source positions.
///
/// Owns its oracle, because oracle construction is the expensive part
/// (process spawn, capture parse): a resolver is built once and reused
/// across calls. No other state persists between `resolve` calls.
pub struct Resolver<O> {
    oracle: O,
}

impl<O: TokenOracle> Resolver<O> {
    /// Build a resolver around an oracle.
    pub fn new(oracle: O) -> Self {
        Resolver { oracle }
    }

    /// Resolve `source` into a lazy stream of positioned tokens.
    ///
    /// The oracle is consulted once, up front; everything else happens
    /// during iteration. An oracle failure surfaces as a stream of swept
    /// comments only, per the oracle contract.
    pub fn resolve<'s>(&mut self, source: &'s str) -> ResolvedTokens<'s> {
        ResolvedTokens::new(source, self.oracle.raw_tokens(source))
    }

    /// Consume the resolver, handing the oracle back.
    pub fn into_oracle(self) -> O {
        self.oracle
    }
}
