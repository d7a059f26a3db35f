//! Dictionary spell checking for slide text
//!
//! A small built-in dictionary plus a table of common misspellings; words the
//! dictionary does not know are flagged with up to five suggestions. Known
//! corrections rank first, then dictionary words within edit distance one.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const BUILTIN_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "its", "may", "new", "now", "old",
    "see", "two", "way", "who", "boy", "did", "let", "put", "say", "she", "too", "use",
];

const BUILTIN_CORRECTIONS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("adn", "and"),
    ("recieve", "receive"),
    ("seperate", "separate"),
    ("occured", "occurred"),
    ("definately", "definitely"),
];

const MAX_SUGGESTIONS: usize = 5;

/// A flagged word with its character span and suggested corrections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingError {
    pub word: String,
    /// Start offset in the text (character index).
    pub start: usize,
    /// End offset in the text (character index).
    pub end: usize,
    pub suggestions: Vec<String>,
}

/// Spell checker backed by an in-memory word list.
#[derive(Debug, Clone)]
pub struct DictionarySpellChecker {
    dictionary: HashSet<String>,
    corrections: HashMap<String, String>,
}

impl DictionarySpellChecker {
    pub fn new() -> Self {
        Self {
            dictionary: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
            corrections: BUILTIN_CORRECTIONS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// Add a user word; it will no longer be flagged.
    pub fn add_word(&mut self, word: &str) {
        self.dictionary.insert(normalize(word));
    }

    /// Whether the dictionary knows this word.
    pub fn is_known(&self, word: &str) -> bool {
        self.dictionary.contains(&normalize(word))
    }

    /// Suggested corrections for a word, best first.
    pub fn suggestions(&self, word: &str) -> Vec<String> {
        let clean = normalize(word);
        if let Some(correction) = self.corrections.get(&clean) {
            return vec![correction.clone()];
        }

        let mut found: Vec<String> = self
            .dictionary
            .iter()
            .filter(|candidate| within_one_edit(candidate, &clean))
            .cloned()
            .collect();
        found.sort();
        found.truncate(MAX_SUGGESTIONS);
        found
    }

    /// Scan text and return every out-of-dictionary word with its span.
    pub fn check(&self, text: &str) -> Vec<SpellingError> {
        let mut errors = Vec::new();
        let mut word = String::new();
        let mut word_start = 0;

        for (offset, ch) in text.chars().chain(std::iter::once(' ')).enumerate() {
            if ch.is_alphabetic() {
                if word.is_empty() {
                    word_start = offset;
                }
                word.push(ch);
            } else if !word.is_empty() {
                if !self.is_known(&word) {
                    errors.push(SpellingError {
                        word: word.clone(),
                        start: word_start,
                        end: offset,
                        suggestions: self.suggestions(&word),
                    });
                }
                word.clear();
            }
        }
        errors
    }
}

impl Default for DictionarySpellChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(word: &str) -> String {
    word.chars()
        .filter(|ch| ch.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase()
}

/// Positional character difference of at most one. Cheaper than full edit
/// distance and good enough for short suggestion lists.
fn within_one_edit(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len().abs_diff(b.len()) > 1 {
        return false;
    }
    let max_len = a.len().max(b.len());
    let mut diff = 0;
    for i in 0..max_len {
        if a.get(i) != b.get(i) {
            diff += 1;
            if diff > 1 {
                return false;
            }
        }
    }
    true
}
