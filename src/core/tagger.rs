// File: src/core/tagger.rs
use crate::core::types::{PartOfSpeech, Token};
use crate::error::Result;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Turns raw document text into a sequence of tagged tokens.
///
/// Implementations must be deterministic for a given input.
pub trait Tagger {
    fn tag(&self, text: &str) -> Vec<Token>;
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn tag(&self, text: &str) -> Vec<Token> {
        (**self).tag(text)
    }
}

/// Reads text that was tagged ahead of time, one `word/TAG` unit per
/// whitespace-separated chunk (e.g. `The/DET big/ADJ dog/NOUN`).
///
/// The split happens on the last slash so words like `either/or/CCONJ` keep
/// their inner slash. A chunk with no slash, or an empty word, is tagged `X`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlashTagger;

impl Tagger for SlashTagger {
    fn tag(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|unit| match unit.rsplit_once('/') {
                Some((word, tag)) if !word.is_empty() => {
                    Token::new(word, PartOfSpeech::from_tag(tag))
                }
                _ => Token::new(unit, PartOfSpeech::X),
            })
            .collect()
    }
}

/// Dictionary-driven tagger: every word gets the tag its lexicon entry names,
/// or the fallback tag when it has none.
///
/// Leading and trailing punctuation is split off into separate `PUNCT` tokens.
/// Lookups try the surface form first, then its lowercase form.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: HashMap<String, PartOfSpeech>,
    fallback: PartOfSpeech,
}

impl LexiconTagger {
    pub fn new(lexicon: HashMap<String, PartOfSpeech>) -> Self {
        Self { lexicon, fallback: PartOfSpeech::X }
    }

    pub fn with_fallback(mut self, fallback: PartOfSpeech) -> Self {
        self.fallback = fallback;
        self
    }

    /// Loads a JSON object mapping words to tag names, e.g.
    /// `{"big": "ADJ", "dog": "NOUN"}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let raw: HashMap<String, String> = serde_json::from_reader(reader)?;
        let lexicon = raw
            .into_iter()
            .map(|(word, tag)| (word, PartOfSpeech::from_tag(&tag)))
            .collect();
        Ok(Self::new(lexicon))
    }

    fn lookup(&self, word: &str) -> PartOfSpeech {
        self.lexicon
            .get(word)
            .or_else(|| self.lexicon.get(&word.to_lowercase()))
            .copied()
            .unwrap_or(self.fallback)
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            let core = chunk.trim_matches(|c: char| c.is_ascii_punctuation());
            if core.is_empty() {
                tokens.push(Token::new(chunk, PartOfSpeech::Punct));
                continue;
            }
            let start = chunk.len() - chunk.trim_start_matches(|c: char| c.is_ascii_punctuation()).len();
            let end = start + core.len();

            if start > 0 {
                tokens.push(Token::new(&chunk[..start], PartOfSpeech::Punct));
            }
            tokens.push(Token::new(core, self.lookup(core)));
            if end < chunk.len() {
                tokens.push(Token::new(&chunk[end..], PartOfSpeech::Punct));
            }
        }
        tokens
    }
}
