//! Validated, persisted word storage with fuzzy and prefix lookup.
//!
//! [`WordDictionary`] owns the canonical word set together with a
//! [`PrefixTrie`] kept in sync with it. Candidate words are validated
//! against the grammar rules before acceptance, and every successful
//! mutation rewrites the backing store.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::suggest::{Suggestion, rank_suggestions};
use crate::trie::PrefixTrie;

/// Shortest accepted word length.
pub const MIN_WORD_LEN: usize = 2;
/// Longest accepted word length.
pub const MAX_WORD_LEN: usize = 45;

/// Built-in default words loaded at construction, before the backing store.
const SEED_WORDS: &[&str] = &[
    "apple", "banana", "cat", "dog", "elephant", "happybirthday", "land", "coat", "cartoons",
    "meals", "holiday", "honour", "zebra", "gun", "pencil", "fish", "giraffe", "house", "ice",
    "jacket", "king", "lion", "monkey", "nest", "orange", "queen", "rabbit", "snake", "tiger",
    "umbrella", "violet", "water", "xylophone", "yellow", "book", "computer", "desk", "email",
    "folder", "garden", "hammer", "internet", "juice", "keyboard", "laptop", "mouse", "network",
    "phone", "printer", "router", "screen", "tablet", "website",
];

/// Configuration for a word dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Location of the backing store (flat text, one word per line).
    pub path: PathBuf,
    /// Default number of autocomplete suggestions to return.
    pub max_suggestions: usize,
    /// Default maximum edit distance for spelling suggestions.
    pub max_distance: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            path: PathBuf::from("dictionary.txt"),
            max_suggestions: 10,
            max_distance: 2,
        }
    }
}

/// A dictionary of validated words with prefix autocomplete and
/// edit-distance spelling suggestions.
///
/// The trie is a derived index of the word set: incrementally extended on
/// insertion, rebuilt wholesale on removal, so the two never drift apart.
#[derive(Debug, Clone)]
pub struct WordDictionary {
    words: BTreeSet<String>,
    trie: PrefixTrie,
    config: DictionaryConfig,
}

impl WordDictionary {
    /// Open a dictionary with the given configuration.
    ///
    /// The built-in seed words are loaded first, then whatever the backing
    /// store holds. A missing or unreadable backing file is treated as
    /// empty; use [`WordDictionary::reload_from_store`] to observe I/O
    /// failures explicitly.
    pub fn open(config: DictionaryConfig) -> Self {
        let mut dictionary = WordDictionary {
            words: BTreeSet::new(),
            trie: PrefixTrie::new(),
            config,
        };

        for seed in SEED_WORDS {
            dictionary.insert_in_memory(seed);
        }
        let _ = dictionary.load_store();

        dictionary
    }

    /// Open a dictionary backed by the given path, with default limits.
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        WordDictionary::open(DictionaryConfig {
            path: path.into(),
            ..Default::default()
        })
    }

    /// Check basic word shape: non-empty, 2-45 characters, ASCII letters
    /// only (case-insensitive).
    pub fn is_valid(&self, word: &str) -> bool {
        is_valid_word(word)
    }

    /// Check whether a word would be accepted: it must pass [`is_valid`]
    /// and contain no run of three identical consecutive characters
    /// (after lowercasing).
    ///
    /// [`is_valid`]: WordDictionary::is_valid
    pub fn check_grammar(&self, word: &str) -> bool {
        passes_grammar(&word.to_lowercase())
    }

    /// Add a word to the dictionary.
    ///
    /// The word is normalized to lowercase. Returns `false` without any
    /// mutation if it fails the grammar check; otherwise the word is
    /// inserted into the set and the trie, the store is rewritten, and the
    /// call reports `true` even if the word was already present.
    pub fn add_word(&mut self, word: &str) -> bool {
        let normalized = word.to_lowercase();
        if !passes_grammar(&normalized) {
            return false;
        }

        self.trie.insert(&normalized);
        self.words.insert(normalized);
        let _ = self.save();
        true
    }

    /// Remove a word from the dictionary.
    ///
    /// Returns `false` if the word is not present. On removal the trie is
    /// rebuilt from the remaining set and the store rewritten.
    pub fn remove_word(&mut self, word: &str) -> bool {
        let normalized = word.to_lowercase();
        if !self.words.remove(&normalized) {
            return false;
        }

        self.rebuild_trie();
        let _ = self.save();
        true
    }

    /// Check whether a word exists in the dictionary.
    pub fn exists(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get up to `max_suggestions` stored words starting with `prefix`.
    pub fn suggestions(&self, prefix: &str, max_suggestions: usize) -> Vec<String> {
        self.trie
            .suggestions(&prefix.to_lowercase(), max_suggestions)
    }

    /// Get autocomplete suggestions using the configured limit.
    pub fn suggestions_default(&self, prefix: &str) -> Vec<String> {
        self.suggestions(prefix, self.config.max_suggestions)
    }

    /// Get dictionary words within `max_distance` edits of `word`, closest
    /// first, with equal distances ordered lexicographically.
    ///
    /// The query is lowercased before the distance computation so that case
    /// differences never count as edits.
    pub fn spelling_suggestions(&self, word: &str, max_distance: usize) -> Vec<String> {
        self.spelling_suggestions_ranked(word, max_distance)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Like [`spelling_suggestions`], but exposing the edit distance of
    /// each match.
    ///
    /// [`spelling_suggestions`]: WordDictionary::spelling_suggestions
    pub fn spelling_suggestions_ranked(&self, word: &str, max_distance: usize) -> Vec<Suggestion> {
        let normalized = word.to_lowercase();
        rank_suggestions(
            &normalized,
            self.words.iter().map(String::as_str),
            max_distance,
        )
    }

    /// Get spelling suggestions using the configured distance limit.
    pub fn spelling_suggestions_default(&self, word: &str) -> Vec<String> {
        self.spelling_suggestions(word, self.config.max_distance)
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary stores no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stored words in lexicographic order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The configuration this dictionary was opened with.
    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Rewrite the backing store with the full current word set, one word
    /// per line in lexicographic order.
    pub fn save(&self) -> Result<()> {
        let mut file = File::create(&self.config.path)?;
        for word in &self.words {
            writeln!(file, "{word}")?;
        }
        Ok(())
    }

    /// Re-read the backing store, merging its entries into the in-memory
    /// set. Returns the number of lines accepted. Unlike construction this
    /// propagates I/O errors; in-memory state is untouched on failure.
    pub fn reload_from_store(&mut self) -> Result<usize> {
        self.load_store()
    }

    fn load_store(&mut self) -> Result<usize> {
        let file = File::open(&self.config.path)?;
        let reader = BufReader::new(file);

        let mut accepted = 0;
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() && self.insert_in_memory(word) {
                accepted += 1;
            }
        }

        Ok(accepted)
    }

    /// Normalize and insert a word into the set and trie without touching
    /// the backing store. Returns `false` for words failing the grammar
    /// check.
    fn insert_in_memory(&mut self, word: &str) -> bool {
        let normalized = word.to_lowercase();
        if !passes_grammar(&normalized) {
            return false;
        }

        self.trie.insert(&normalized);
        self.words.insert(normalized);
        true
    }

    fn rebuild_trie(&mut self) {
        self.trie.clear();
        for word in &self.words {
            self.trie.insert(word);
        }
    }
}

impl Default for WordDictionary {
    fn default() -> Self {
        WordDictionary::open(DictionaryConfig::default())
    }
}

fn is_valid_word(word: &str) -> bool {
    let len = word.chars().count();
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Grammar gate: valid shape and no three identical consecutive characters.
/// Expects an already-lowercased word.
fn passes_grammar(word: &str) -> bool {
    if !is_valid_word(word) {
        return false;
    }

    let chars: Vec<char> = word.chars().collect();
    !chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}
