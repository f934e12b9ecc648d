//! # Wordbook
//!
//! A validated word dictionary engine for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Grammar-validated word storage (ASCII letters, bounded length)
//! - Trie-based prefix autocomplete
//! - Levenshtein-distance "Did you mean?" suggestions
//! - Flat-file persistence with a built-in seed word list

pub mod dictionary;
pub mod error;
pub mod spelling;
pub mod trie;

pub use dictionary::{DictionaryConfig, WordDictionary};
pub use spelling::suggest::Suggestion;
pub use trie::PrefixTrie;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
