//! End-to-end scenarios driving the public dictionary API.

use tempfile::TempDir;
use wordbook::spelling::levenshtein::levenshtein_distance;
use wordbook::{DictionaryConfig, Suggestion, WordDictionary};

fn open_in(dir: &TempDir) -> WordDictionary {
    WordDictionary::with_path(dir.path().join("dictionary.txt"))
}

#[test]
fn test_accepted_word_is_findable() {
    let dir = TempDir::new().unwrap();
    let mut dictionary = open_in(&dir);

    let candidates = ["Bicycle", "scooter", "TRAIN"];
    for candidate in candidates {
        assert!(dictionary.check_grammar(candidate));
        assert!(dictionary.add_word(candidate));
        assert!(dictionary.exists(&candidate.to_lowercase()));
    }
}

#[test]
fn test_rejected_word_leaves_no_trace() {
    let dir = TempDir::new().unwrap();
    let mut dictionary = open_in(&dir);

    let rejects = ["", "q", "seventyseven7", "odd word", "bazzzar"];
    for reject in rejects {
        assert!(!dictionary.check_grammar(reject));
        assert!(!dictionary.add_word(reject));
        assert!(!dictionary.exists(reject));
    }
}

#[test]
fn test_add_remove_lifecycle() {
    let dir = TempDir::new().unwrap();
    let mut dictionary = open_in(&dir);

    assert!(!dictionary.remove_word("bicycle"));
    assert!(dictionary.add_word("bicycle"));
    assert!(dictionary.remove_word("bicycle"));
    assert!(!dictionary.exists("bicycle"));
}

#[test]
fn test_full_enumeration_matches_word_set() {
    let dir = TempDir::new().unwrap();
    let mut dictionary = open_in(&dir);

    dictionary.add_word("bicycle");
    dictionary.add_word("tricycle");
    dictionary.remove_word("banana");

    let enumerated = dictionary.suggestions("", dictionary.len());
    assert_eq!(enumerated.len(), dictionary.len());
    for word in &enumerated {
        assert!(dictionary.exists(word));
    }
    for word in dictionary.words() {
        assert!(enumerated.iter().any(|w| w == word));
    }
}

#[test]
fn test_distance_properties() {
    assert_eq!(levenshtein_distance("cat", "cats"), 1);
    assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    assert_eq!(
        levenshtein_distance("holiday", "honour"),
        levenshtein_distance("honour", "holiday")
    );
}

#[test]
fn test_did_you_mean_flow() {
    let dir = TempDir::new().unwrap();
    let dictionary = open_in(&dir);

    // "aple" is not a word, but the dictionary knows what was meant
    assert!(!dictionary.exists("aple"));
    let suggestions = dictionary.spelling_suggestions("aple", 2);
    assert!(suggestions.contains(&"apple".to_string()));

    let ranked = dictionary.spelling_suggestions_ranked("aple", 2);
    let apple = ranked.iter().find(|s| s.word == "apple").unwrap();
    assert_eq!(apple.distance, 1);
    for pair in ranked.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
}

#[test]
fn test_autocomplete_flow() {
    let dir = TempDir::new().unwrap();
    let mut dictionary = open_in(&dir);

    dictionary.add_word("cat");
    dictionary.add_word("car");

    let suggestions = dictionary.suggestions("ca", 10);
    assert!(suggestions.contains(&"car".to_string()));
    assert!(suggestions.contains(&"cartoons".to_string()));
    assert!(suggestions.contains(&"cat".to_string()));
    assert!(!suggestions.contains(&"dog".to_string()));

    // Default limit caps the result count
    let limited = dictionary.suggestions_default("");
    assert!(limited.len() <= dictionary.config().max_suggestions);
}

#[test]
fn test_state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");

    {
        let mut dictionary = WordDictionary::with_path(&path);
        assert!(dictionary.add_word("bicycle"));
        assert!(dictionary.add_word("scooter"));
    }

    let reopened = WordDictionary::with_path(&path);
    assert!(reopened.exists("bicycle"));
    assert!(reopened.exists("scooter"));
}

#[test]
fn test_config_with_custom_limits() {
    let dir = TempDir::new().unwrap();
    let dictionary = WordDictionary::open(DictionaryConfig {
        path: dir.path().join("dictionary.txt"),
        max_suggestions: 3,
        max_distance: 1,
    });

    assert_eq!(dictionary.suggestions_default("").len(), 3);
    // At distance 1 "aple" still reaches "apple", but nothing two edits away
    let suggestions = dictionary.spelling_suggestions_default("aple");
    assert!(suggestions.contains(&"apple".to_string()));
    let ranked = dictionary.spelling_suggestions_ranked("aple", 1);
    assert!(ranked.iter().all(|s| s.distance <= 1));
}

#[test]
fn test_suggestion_serialization() {
    let suggestion = Suggestion::new("apple".to_string(), 1);
    let json = serde_json::to_string(&suggestion).unwrap();
    let back: Suggestion = serde_json::from_str(&json).unwrap();
    assert_eq!(back, suggestion);
}
