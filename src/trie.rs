//! Prefix trie over lowercase words for autocomplete queries.
//!
//! Each node exclusively owns its children through a `BTreeMap`, so child
//! traversal is always in character order and enumeration results are
//! deterministic for a given set of stored words.

use std::collections::BTreeMap;

/// A single trie node: child edges keyed by character plus a marker for
/// whether a stored word ends here.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

/// A character-indexed tree storing a set of words and answering prefix,
/// membership, and bounded enumeration queries.
///
/// None of the operations fail: looking up a prefix containing characters
/// that were never inserted simply yields `false` or an empty result.
#[derive(Debug, Clone, Default)]
pub struct PrefixTrie {
    root: TrieNode,
    word_count: usize,
}

impl PrefixTrie {
    /// Create a new empty trie.
    pub fn new() -> Self {
        PrefixTrie {
            root: TrieNode::default(),
            word_count: 0,
        }
    }

    /// Insert a word, creating missing nodes along its path.
    ///
    /// Inserting a word that is already present is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut current = &mut self.root;
        for ch in word.chars() {
            current = current.children.entry(ch).or_default();
        }
        if !current.terminal {
            current.terminal = true;
            self.word_count += 1;
        }
    }

    /// Check whether the exact word is stored.
    ///
    /// A word that is merely a prefix of a longer stored word is not
    /// contained; the final node must carry the terminal marker.
    pub fn contains(&self, word: &str) -> bool {
        match self.walk(word) {
            Some(node) => node.terminal,
            None => false,
        }
    }

    /// Check whether any stored word starts with the given prefix.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Collect up to `max_suggestions` stored words starting with `prefix`.
    ///
    /// The prefix itself is collected first if it is a stored word, then
    /// descendants in character order. Returns an empty vector if no stored
    /// word starts with the prefix.
    pub fn suggestions(&self, prefix: &str, max_suggestions: usize) -> Vec<String> {
        let mut results = Vec::new();
        let Some(node) = self.walk(prefix) else {
            return results;
        };

        let mut buffer = String::from(prefix);
        Self::collect_words(node, &mut buffer, &mut results, max_suggestions);
        results
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check whether the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Discard all nodes, resetting to a single empty root.
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.word_count = 0;
    }

    /// Walk the path for `s`, returning the node it ends at if the full
    /// path exists.
    fn walk(&self, s: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for ch in s.chars() {
            current = current.children.get(&ch)?;
        }
        Some(current)
    }

    /// Depth-first collection of words below `node`, stopping at the limit.
    fn collect_words(
        node: &TrieNode,
        buffer: &mut String,
        results: &mut Vec<String>,
        max_results: usize,
    ) {
        if results.len() >= max_results {
            return;
        }

        if node.terminal {
            results.push(buffer.clone());
        }

        for (ch, child) in &node.children {
            if results.len() >= max_results {
                break;
            }
            buffer.push(*ch);
            Self::collect_words(child, buffer, results, max_results);
            buffer.pop();
        }
    }
}
