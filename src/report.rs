// File: src/report.rs
use crate::core::ranker::{RankingResult, Tally};
use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

const POSITION_LABELS: [&str; 3] = ["Adjective One", "Adjective Two", "Adjective Three"];

/// Tab-delimited result rows: the phrase followed by one score per adjective.
///
/// Scores always carry a decimal point, so whole numbers read `0.0` and `1.0`.
pub struct ReportWriter<W: Write> {
    inner: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        let inner = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .terminator(csv::Terminator::Any(b'\n'))
            .has_headers(false)
            .flexible(true)
            .from_writer(sink);
        Self { inner, rows: 0 }
    }

    pub fn write_row(&mut self, result: &RankingResult) -> Result<()> {
        let mut record = Vec::with_capacity(result.scores.len() + 1);
        record.push(result.phrase.clone());
        record.extend(result.scores.iter().map(|s| format!("{s:?}")));
        self.inner.write_record(&record)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes buffered rows and returns the underlying sink.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        self.inner
            .into_inner()
            .map_err(|e| io::Error::new(e.error().kind(), e.error().to_string()).into())
    }
}

/// Outcome tallies for both phrase lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub pairs: Tally,
    pub triples: Tally,
}

fn write_tally(f: &mut fmt::Formatter<'_>, tally: &Tally) -> fmt::Result {
    for (label, count) in POSITION_LABELS.iter().zip(&tally.wins) {
        writeln!(f, "{label}: {count}")?;
    }
    writeln!(f, "Equal: {}", tally.equal)
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tally(f, &self.pairs)?;
        writeln!(f)?;
        write_tally(f, &self.triples)
    }
}
