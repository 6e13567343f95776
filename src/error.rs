// File: src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NomcharError {
    /// The word was never tagged ADJ or NOUN anywhere in the corpus, so its
    /// score would divide by zero.
    #[error("word '{word}' was never tagged as an adjective or a noun")]
    UnknownWord { word: String },

    #[error("corpus has no '{column}' column")]
    MissingColumn { column: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding error: {0}")]
    Cache(#[from] bincode::Error),

    #[error("corpus error: {0}")]
    Csv(#[from] csv::Error),

    #[error("lexicon error: {0}")]
    Lexicon(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NomcharError>;
