// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Universal part-of-speech tags, as emitted by spaCy-style taggers.
///
/// Only [`PartOfSpeech::Adj`] and [`PartOfSpeech::Noun`] carry meaning for
/// scoring. Proper nouns are a separate tag and are not counted as nouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl PartOfSpeech {
    /// Parses a tag name. Unrecognized names map to `X`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_uppercase().as_str() {
            "ADJ" => PartOfSpeech::Adj,
            "ADP" => PartOfSpeech::Adp,
            "ADV" => PartOfSpeech::Adv,
            "AUX" => PartOfSpeech::Aux,
            "CCONJ" => PartOfSpeech::Cconj,
            "DET" => PartOfSpeech::Det,
            "INTJ" => PartOfSpeech::Intj,
            "NOUN" => PartOfSpeech::Noun,
            "NUM" => PartOfSpeech::Num,
            "PART" => PartOfSpeech::Part,
            "PRON" => PartOfSpeech::Pron,
            "PROPN" => PartOfSpeech::Propn,
            "PUNCT" => PartOfSpeech::Punct,
            "SCONJ" => PartOfSpeech::Sconj,
            "SYM" => PartOfSpeech::Sym,
            "VERB" => PartOfSpeech::Verb,
            _ => PartOfSpeech::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tagged unit of text produced by a tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: PartOfSpeech,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self { text: text.into(), pos }
    }
}

/// The two adjective-run patterns the extractor looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhraseKind {
    /// ADJ ADJ NOUN
    Pair,
    /// ADJ ADJ ADJ NOUN
    Triple,
}

impl PhraseKind {
    /// Number of tokens in a phrase of this kind, head noun included.
    pub fn token_count(&self) -> usize {
        self.adjectives() + 1
    }

    pub fn adjectives(&self) -> usize {
        match self {
            PhraseKind::Pair => 2,
            PhraseKind::Triple => 3,
        }
    }

    /// The tag sequence a phrase of this kind must match.
    pub fn pattern(&self) -> Vec<PartOfSpeech> {
        let mut pattern = vec![PartOfSpeech::Adj; self.adjectives()];
        pattern.push(PartOfSpeech::Noun);
        pattern
    }
}

/// A matched contiguous adjective run followed by its head noun.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub kind: PhraseKind,
    pub tokens: Vec<Token>,
}

impl Phrase {
    /// The phrase as its surface words joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!(PartOfSpeech::from_tag("adj"), PartOfSpeech::Adj);
        assert_eq!(PartOfSpeech::from_tag("NOUN"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_tag("PROPN"), PartOfSpeech::Propn);
        assert_eq!(PartOfSpeech::from_tag("NN"), PartOfSpeech::X);
    }

    #[test]
    fn tag_names_round_trip() {
        for tag in ["ADJ", "NOUN", "VERB", "PUNCT", "X"] {
            assert_eq!(PartOfSpeech::from_tag(tag).as_str(), tag);
        }
    }

    #[test]
    fn phrase_kind_patterns() {
        use PartOfSpeech::*;
        assert_eq!(PhraseKind::Pair.pattern(), vec![Adj, Adj, Noun]);
        assert_eq!(PhraseKind::Triple.pattern(), vec![Adj, Adj, Adj, Noun]);
        assert_eq!(PhraseKind::Triple.token_count(), 4);
    }

    #[test]
    fn phrase_text_is_space_joined() {
        let phrase = Phrase {
            kind: PhraseKind::Pair,
            tokens: vec![
                Token::new("big", PartOfSpeech::Adj),
                Token::new("red", PartOfSpeech::Adj),
                Token::new("dog", PartOfSpeech::Noun),
            ],
        };
        assert_eq!(phrase.text(), "big red dog");
    }
}
