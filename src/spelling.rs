//! Spelling suggestion support for Wordbook.
//!
//! This module provides the edit-distance computation and the ranked
//! "Did you mean?" suggestion machinery used by the dictionary.

pub mod levenshtein;
pub mod suggest;

// Re-export commonly used types
pub use levenshtein::*;
pub use suggest::*;
