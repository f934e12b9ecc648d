//! Ranked spelling suggestions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::spelling::levenshtein::levenshtein_distance_threshold;

/// A spelling suggestion: a dictionary word together with its edit distance
/// from the queried word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the original word.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: usize) -> Self {
        Suggestion { word, distance }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Closest matches first; equal distances break ties lexicographically
        // so the ordering is deterministic.
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Scan candidate words and return those within `max_distance` edits of
/// `query`, sorted ascending by distance.
pub fn rank_suggestions<'a, I>(query: &str, candidates: I, max_distance: usize) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut suggestions: Vec<Suggestion> = candidates
        .into_iter()
        .filter_map(|candidate| {
            levenshtein_distance_threshold(query, candidate, max_distance)
                .map(|distance| Suggestion::new(candidate.to_string(), distance))
        })
        .collect();

    suggestions.sort();
    suggestions
}
