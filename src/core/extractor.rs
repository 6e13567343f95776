// File: src/core/extractor.rs
use crate::core::types::{Phrase, PhraseKind, Token};

/// Finds ADJ-ADJ-NOUN and ADJ-ADJ-ADJ-NOUN runs in tagged text.
///
/// Each pattern is matched independently at every offset, so overlapping
/// matches are all reported and neither pattern suppresses the other.
/// Matching looks at tags only.
#[derive(Debug, Clone, Default)]
pub struct SequenceExtractor {
    pairs: Vec<String>,
    triples: Vec<String>,
}

impl SequenceExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans one document and appends its matches, in document order.
    pub fn add_document(&mut self, tokens: &[Token]) {
        self.pairs
            .extend(find_matches(tokens, PhraseKind::Pair).iter().map(Phrase::text));
        self.triples
            .extend(find_matches(tokens, PhraseKind::Triple).iter().map(Phrase::text));
    }

    pub fn pairs(&self) -> &[String] {
        &self.pairs
    }

    pub fn triples(&self) -> &[String] {
        &self.triples
    }

    /// Consumes the extractor, yielding the pair and triple phrase lists.
    pub fn finish(self) -> (Vec<String>, Vec<String>) {
        (self.pairs, self.triples)
    }
}

/// Every contiguous window of `tokens` whose tags match `kind`'s pattern.
pub fn find_matches(tokens: &[Token], kind: PhraseKind) -> Vec<Phrase> {
    let pattern = kind.pattern();
    if tokens.len() < pattern.len() {
        return Vec::new();
    }

    tokens
        .windows(pattern.len())
        .filter(|window| window.iter().zip(&pattern).all(|(t, p)| t.pos == *p))
        .map(|window| Phrase { kind, tokens: window.to_vec() })
        .collect()
}
