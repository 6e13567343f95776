// src/core/mod.rs

pub mod counts;
pub mod engine;
pub mod extractor;
pub mod ranker;
pub mod score;
pub mod tagger;
pub mod types;
