// File: src/core/ranker.rs
use crate::core::counts::WordCounts;
use crate::core::score::{NomcharScore, ScoreCache};
use crate::core::types::PhraseKind;
use crate::error::Result;
use serde::Serialize;
use tracing::debug;

/// Which adjective, if any, is the most noun-like in a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The adjective at this zero-based position has the unique highest score.
    Wins(usize),
    /// No adjective is strictly greater than all the others.
    Equal,
}

/// Picks the position with a strictly greater score than every other one.
///
/// Any tie for the maximum (including all scores equal) is `Equal`.
pub fn classify(scores: &[NomcharScore]) -> Outcome {
    for (i, &candidate) in scores.iter().enumerate() {
        let beats_all = scores
            .iter()
            .enumerate()
            .all(|(j, &other)| i == j || candidate > other);
        if beats_all {
            return Outcome::Wins(i);
        }
    }
    Outcome::Equal
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingResult {
    /// The phrase as it was extracted.
    pub phrase: String,
    /// One score per adjective, in phrase order.
    pub scores: Vec<NomcharScore>,
    pub outcome: Outcome,
}

/// Aggregate outcome counts for one phrase kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// `wins[k]` counts phrases where adjective `k` scored highest.
    pub wins: Vec<u64>,
    pub equal: u64,
}

impl Tally {
    pub fn new(kind: PhraseKind) -> Self {
        Self { wins: vec![0; kind.adjectives()], equal: 0 }
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Wins(position) => self.wins[position] += 1,
            Outcome::Equal => self.equal += 1,
        }
    }

    /// Number of phrases counted.
    pub fn total(&self) -> u64 {
        self.wins.iter().sum::<u64>() + self.equal
    }
}

/// Scores the adjectives of extracted phrases and classifies them.
pub struct PhraseRanker<'a> {
    cache: ScoreCache<'a>,
}

impl<'a> PhraseRanker<'a> {
    pub fn new(counts: &'a WordCounts) -> Self {
        Self { cache: ScoreCache::new(counts) }
    }

    /// Ranks one serialized phrase.
    ///
    /// Returns `Ok(None)` when the phrase doesn't split into exactly
    /// `kind.token_count()` words; such phrases are neither tallied nor
    /// reported.
    pub fn rank(&mut self, phrase: &str, kind: PhraseKind) -> Result<Option<RankingResult>> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        if words.len() != kind.token_count() {
            debug!(phrase, expected = kind.token_count(), found = words.len(), "skipping malformed phrase");
            return Ok(None);
        }

        let mut scores = Vec::with_capacity(kind.adjectives());
        for word in &words[..kind.adjectives()] {
            scores.push(self.cache.score(word)?);
        }
        let outcome = classify(&scores);

        Ok(Some(RankingResult { phrase: phrase.to_string(), scores, outcome }))
    }

    /// Ranks every phrase in order, handing each result to `on_row` before
    /// tallying it.
    pub fn rank_all<F>(&mut self, phrases: &[String], kind: PhraseKind, mut on_row: F) -> Result<Tally>
    where
        F: FnMut(&RankingResult) -> Result<()>,
    {
        let mut tally = Tally::new(kind);
        for phrase in phrases {
            if let Some(result) = self.rank(phrase, kind)? {
                on_row(&result)?;
                tally.record(result.outcome);
            }
        }
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counts::FrequencyAccumulator;
    use crate::core::types::PartOfSpeech::{Adj, Noun};
    use crate::error::NomcharError;
    use pretty_assertions::assert_eq;

    /// `adjective`/`noun` counts per word.
    fn counts(entries: &[(&str, u64, u64)]) -> WordCounts {
        let mut acc = FrequencyAccumulator::new();
        for &(word, a, n) in entries {
            for _ in 0..a {
                acc.record(word, Adj);
            }
            for _ in 0..n {
                acc.record(word, Noun);
            }
        }
        acc.freeze()
    }

    #[test]
    fn classify_two_scores() {
        assert_eq!(classify(&[0.8, 0.2]), Outcome::Wins(0));
        assert_eq!(classify(&[0.2, 0.8]), Outcome::Wins(1));
        assert_eq!(classify(&[0.5, 0.5]), Outcome::Equal);
    }

    #[test]
    fn classify_three_scores() {
        assert_eq!(classify(&[0.9, 0.1, 0.3]), Outcome::Wins(0));
        assert_eq!(classify(&[0.1, 0.9, 0.3]), Outcome::Wins(1));
        assert_eq!(classify(&[0.1, 0.3, 0.9]), Outcome::Wins(2));
        assert_eq!(classify(&[0.4, 0.4, 0.4]), Outcome::Equal);
        // A tie for the maximum has no winner even if the third is lower.
        assert_eq!(classify(&[0.9, 0.9, 0.1]), Outcome::Equal);
        assert_eq!(classify(&[0.1, 0.9, 0.9]), Outcome::Equal);
        // A tie below the maximum doesn't matter.
        assert_eq!(classify(&[0.9, 0.1, 0.1]), Outcome::Wins(0));
    }

    #[test]
    fn same_word_twice_is_equal() {
        let counts = counts(&[("red", 3, 1), ("car", 0, 2)]);
        let mut ranker = PhraseRanker::new(&counts);
        let result = ranker.rank("red red car", PhraseKind::Pair).unwrap().unwrap();
        assert_eq!(result.scores, vec![0.25, 0.25]);
        assert_eq!(result.outcome, Outcome::Equal);
    }

    #[test]
    fn strict_winner_only_moves_its_counter() {
        // light: 1 - 1/5 = 0.8, pale: 1 - 4/5 = 0.2
        let counts = counts(&[("light", 1, 4), ("pale", 4, 1), ("sky", 0, 1)]);
        let mut ranker = PhraseRanker::new(&counts);
        let tally = ranker
            .rank_all(&["light pale sky".to_string()], PhraseKind::Pair, |_| Ok(()))
            .unwrap();
        assert_eq!(tally, Tally { wins: vec![1, 0], equal: 0 });
    }

    #[test]
    fn malformed_phrases_are_skipped() {
        let counts = counts(&[("big", 1, 0), ("dog", 0, 1)]);
        let mut ranker = PhraseRanker::new(&counts);
        assert_eq!(ranker.rank("big dog", PhraseKind::Pair).unwrap(), None);

        let mut rows = Vec::new();
        let tally = ranker
            .rank_all(
                &["big dog".to_string(), "big big big dog".to_string()],
                PhraseKind::Pair,
                |row| {
                    rows.push(row.phrase.clone());
                    Ok(())
                },
            )
            .unwrap();
        assert!(rows.is_empty());
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn triples_tally_each_position() {
        let counts = counts(&[
            ("a", 1, 3), // 0.75
            ("b", 3, 1), // 0.25
            ("c", 2, 2), // 0.5
            ("n", 0, 1),
        ]);
        let phrases: Vec<String> = ["a b c n", "b a c n", "b c a n", "c c b n", "a a a n"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut ranker = PhraseRanker::new(&counts);
        let mut seen = Vec::new();
        let tally = ranker
            .rank_all(&phrases, PhraseKind::Triple, |row| {
                seen.push((row.phrase.clone(), row.outcome));
                Ok(())
            })
            .unwrap();

        assert_eq!(tally, Tally { wins: vec![1, 1, 1], equal: 2 });
        assert_eq!(seen[2], ("b c a n".to_string(), Outcome::Wins(2)));
    }

    #[test]
    fn unknown_adjective_aborts_ranking() {
        let counts = counts(&[("dog", 0, 1)]);
        let mut ranker = PhraseRanker::new(&counts);
        let err = ranker.rank("huge furry dog", PhraseKind::Pair).unwrap_err();
        assert!(matches!(err, NomcharError::UnknownWord { ref word } if word == "huge"));
    }

    #[test]
    fn head_noun_is_not_scored() {
        // The noun never needs counts of its own.
        let counts = counts(&[("big", 1, 0), ("red", 1, 0)]);
        let mut ranker = PhraseRanker::new(&counts);
        assert!(ranker.rank("big red unseen", PhraseKind::Pair).unwrap().is_some());
    }
}
