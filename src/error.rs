//! Error types for the Wordbook library.
//!
//! This module provides error handling for all Wordbook operations.
//! All errors are represented by the [`WordbookError`] enum.
//!
//! # Examples
//!
//! ```
//! use wordbook::error::{Result, WordbookError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordbookError::storage("backing store is unwritable"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Wordbook operations.
///
/// Note that the dictionary's word-level operations report rejection through
/// boolean return values; this enum covers the fallible edges (persistence
/// and anything wrapping the library).
#[derive(Error, Debug)]
pub enum WordbookError {
    /// I/O errors (backing store reads and writes)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Backing-store errors beyond plain I/O
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordbookError.
pub type Result<T> = std::result::Result<T, WordbookError>;

impl WordbookError {
    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        WordbookError::Storage(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordbookError::Other(msg.into())
    }
}
