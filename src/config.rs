// File: src/config.rs
use std::path::{Path, PathBuf};

pub const DEFAULT_TEXT_COLUMN: &str = "plot_synopsis";
pub const DEFAULT_SNAPSHOT_PATH: &str = "nomchar_snapshot.bin";
pub const DEFAULT_PAIRS_FILE: &str = "pairs_results.tsv";
pub const DEFAULT_TRIPLES_FILE: &str = "triples_results.tsv";

/// Settings shared by the corpus pass and the report pass.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Header of the CSV column holding each document's text.
    pub text_column: String,
    /// File name of the ADJ-ADJ-NOUN report inside the output directory.
    pub pairs_file: String,
    /// File name of the ADJ-ADJ-ADJ-NOUN report inside the output directory.
    pub triples_file: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            text_column: DEFAULT_TEXT_COLUMN.to_string(),
            pairs_file: DEFAULT_PAIRS_FILE.to_string(),
            triples_file: DEFAULT_TRIPLES_FILE.to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn with_text_column(mut self, column: impl Into<String>) -> Self {
        self.text_column = column.into();
        self
    }

    pub fn with_report_files(mut self, pairs: impl Into<String>, triples: impl Into<String>) -> Self {
        self.pairs_file = pairs.into();
        self.triples_file = triples.into();
        self
    }

    pub fn pairs_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.pairs_file)
    }

    pub fn triples_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.triples_file)
    }
}
