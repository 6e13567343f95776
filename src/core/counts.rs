// File: src/core/counts.rs
use crate::core::types::{PartOfSpeech, Token};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Running ADJ/NOUN tallies per surface word.
///
/// This is the only mutable stage of the pipeline. Once the whole corpus has
/// been recorded, [`FrequencyAccumulator::freeze`] hands back read-only
/// [`WordCounts`] and scoring can begin.
#[derive(Debug, Clone, Default)]
pub struct FrequencyAccumulator {
    adjective: HashMap<String, u64>,
    noun: HashMap<String, u64>,
}

impl FrequencyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `word` under `pos`. Tags other than ADJ and
    /// NOUN are ignored.
    pub fn record(&mut self, word: &str, pos: PartOfSpeech) {
        let map = match pos {
            PartOfSpeech::Adj => &mut self.adjective,
            PartOfSpeech::Noun => &mut self.noun,
            _ => return,
        };
        *map.entry(word.to_string()).or_insert(0) += 1;
    }

    /// Records every token of a document.
    pub fn record_all(&mut self, tokens: &[Token]) {
        for token in tokens {
            self.record(&token.text, token.pos);
        }
    }

    /// Folds another partial accumulator into this one.
    pub fn merge(&mut self, other: FrequencyAccumulator) {
        for (word, count) in other.adjective {
            *self.adjective.entry(word).or_insert(0) += count;
        }
        for (word, count) in other.noun {
            *self.noun.entry(word).or_insert(0) += count;
        }
    }

    pub fn freeze(self) -> WordCounts {
        WordCounts {
            adjective: self.adjective,
            noun: self.noun,
        }
    }
}

/// Frozen corpus-wide counts: how often each word was tagged ADJ and NOUN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCounts {
    adjective: HashMap<String, u64>,
    noun: HashMap<String, u64>,
}

impl WordCounts {
    pub fn adjective_count(&self, word: &str) -> u64 {
        self.adjective.get(word).copied().unwrap_or(0)
    }

    pub fn noun_count(&self, word: &str) -> u64 {
        self.noun.get(word).copied().unwrap_or(0)
    }

    /// `(adjective, noun)` counts for `word`.
    pub fn counts(&self, word: &str) -> (u64, u64) {
        (self.adjective_count(word), self.noun_count(word))
    }

    /// Whether the word was tagged ADJ or NOUN at least once.
    pub fn contains(&self, word: &str) -> bool {
        self.adjective.contains_key(word) || self.noun.contains_key(word)
    }

    /// Words attested both as an adjective and as a noun, sorted.
    pub fn dual_role_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .adjective
            .keys()
            .filter(|w| self.noun.contains_key(*w))
            .map(String::as_str)
            .collect();
        words.sort_unstable();
        words
    }

    /// Number of distinct words seen as ADJ or NOUN.
    pub fn vocabulary_size(&self) -> usize {
        self.adjective.len() + self.noun.keys().filter(|w| !self.adjective.contains_key(*w)).count()
    }
}
