use crate::core::counts::FrequencyAccumulator;
use crate::core::extractor::SequenceExtractor;
use crate::core::ranker::PhraseRanker;
use crate::core::tagger::Tagger;
use crate::core::types::PhraseKind;
use crate::corpus::read_documents;
use crate::error::Result;
use crate::persistence::CorpusSnapshot;
use crate::report::{ReportWriter, Summary};
use std::io::{Read, Write};
use tracing::{info, instrument};

/// Totals from the tagging pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub documents: usize,
    pub skipped_rows: usize,
    pub tokens: usize,
}

// The corpus pass: tags each document once and feeds the tokens to both the
// extractor and the accumulator. Scoring needs the frozen counts, so it only
// happens on the snapshot `finish` returns.
pub struct NomcharEngine<T: Tagger> {
    tagger: T,
    extractor: SequenceExtractor,
    accumulator: FrequencyAccumulator,
    stats: CorpusStats,
}

impl<T: Tagger> NomcharEngine<T> {
    pub fn new(tagger: T) -> Self {
        Self {
            tagger,
            extractor: SequenceExtractor::new(),
            accumulator: FrequencyAccumulator::new(),
            stats: CorpusStats::default(),
        }
    }

    pub fn ingest(&mut self, text: &str) {
        let tokens = self.tagger.tag(text);
        self.accumulator.record_all(&tokens);
        self.extractor.add_document(&tokens);
        self.stats.documents += 1;
        self.stats.tokens += tokens.len();
    }

    /// Ingests the `column` field of every row of a CSV corpus.
    #[instrument(skip_all, fields(column = %column))]
    pub fn ingest_csv<R: Read>(&mut self, reader: R, column: &str) -> Result<()> {
        let read = read_documents(reader, column, |text| self.ingest(text))?;
        self.stats.skipped_rows += read.skipped;
        info!(documents = read.documents, skipped = read.skipped, "corpus read");
        Ok(())
    }

    pub fn stats(&self) -> CorpusStats {
        self.stats
    }

    /// Freezes the counts and hands back everything scoring needs.
    #[instrument(skip_all)]
    pub fn finish(self) -> CorpusSnapshot {
        let counts = self.accumulator.freeze();
        let (pairs, triples) = self.extractor.finish();
        info!(
            documents = self.stats.documents,
            tokens = self.stats.tokens,
            vocabulary = counts.vocabulary_size(),
            dual_role = counts.dual_role_words().len(),
            pairs = pairs.len(),
            triples = triples.len(),
            "accumulation finished"
        );
        CorpusSnapshot { counts, pairs, triples }
    }
}

/// Ranks every phrase in the snapshot, writing one row per well-formed phrase
/// to the matching sink, and returns the outcome tallies.
#[instrument(skip_all)]
pub fn analyze<P: Write, Q: Write>(snapshot: &CorpusSnapshot, pairs_sink: P, triples_sink: Q) -> Result<Summary> {
    let mut ranker = PhraseRanker::new(&snapshot.counts);

    let mut pairs_report = ReportWriter::new(pairs_sink);
    let pairs = ranker.rank_all(&snapshot.pairs, PhraseKind::Pair, |row| pairs_report.write_row(row))?;
    info!(rows = pairs_report.rows(), skipped = snapshot.pairs.len() - pairs_report.rows(), "pairs ranked");
    pairs_report.finish()?.flush()?;

    let mut triples_report = ReportWriter::new(triples_sink);
    let triples = ranker.rank_all(&snapshot.triples, PhraseKind::Triple, |row| triples_report.write_row(row))?;
    info!(rows = triples_report.rows(), skipped = snapshot.triples.len() - triples_report.rows(), "triples ranked");
    triples_report.finish()?.flush()?;

    Ok(Summary { pairs, triples })
}
