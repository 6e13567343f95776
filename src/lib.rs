// src/lib.rs

//! Nominal Character scoring for stacked adjectives.
//!
//! Tags a corpus, pulls out ADJ-ADJ-NOUN and ADJ-ADJ-ADJ-NOUN phrases, counts
//! how often each word is tagged ADJ versus NOUN, and checks which adjective
//! in each phrase is the most noun-like.

pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod persistence;
pub mod report;

pub use crate::core::counts::{FrequencyAccumulator, WordCounts};
pub use crate::core::engine::{analyze, CorpusStats, NomcharEngine};
pub use crate::core::score::{nomchar, NomcharScore};
pub use crate::core::tagger::{LexiconTagger, SlashTagger, Tagger};
pub use crate::error::{NomcharError, Result};
