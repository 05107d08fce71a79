//! coffeetok CLI
//!
//! Resolves a tokenizer capture against CoffeeScript source and dumps the
//! positioned token stream, as text or JSON.

pub mod commands;
