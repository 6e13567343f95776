// File: src/core/score.rs
//! Nominal Character scoring.
//!
//! A word's nomchar score is `1 - a / (a + n)`, where `a` and `n` are the
//! number of times the corpus tagged it as an adjective and as a noun. Words
//! that are always nouns score 1, words that are always adjectives score 0.

use crate::core::counts::WordCounts;
use crate::error::{NomcharError, Result};
use std::collections::HashMap;

/// A score in `[0, 1]`; higher means more noun-like.
pub type NomcharScore = f64;

/// Scores a word from its `(adjective, noun)` counts.
///
/// Fails with [`NomcharError::UnknownWord`] when both counts are zero.
pub fn score_counts(word: &str, adjective: u64, noun: u64) -> Result<NomcharScore> {
    let total = adjective + noun;
    if total == 0 {
        return Err(NomcharError::UnknownWord { word: word.to_string() });
    }
    Ok(1.0 - adjective as f64 / total as f64)
}

/// Scores `word` against the frozen corpus counts.
pub fn nomchar(counts: &WordCounts, word: &str) -> Result<NomcharScore> {
    let (adjective, noun) = counts.counts(word);
    score_counts(word, adjective, noun)
}

impl WordCounts {
    pub fn score(&self, word: &str) -> Result<NomcharScore> {
        nomchar(self, word)
    }
}

/// Memoizes scores over one set of frozen counts.
pub struct ScoreCache<'a> {
    counts: &'a WordCounts,
    scores: HashMap<String, NomcharScore>,
}

impl<'a> ScoreCache<'a> {
    pub fn new(counts: &'a WordCounts) -> Self {
        Self { counts, scores: HashMap::new() }
    }

    pub fn score(&mut self, word: &str) -> Result<NomcharScore> {
        if let Some(&score) = self.scores.get(word) {
            return Ok(score);
        }
        let score = nomchar(self.counts, word)?;
        self.scores.insert(word.to_string(), score);
        Ok(score)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
