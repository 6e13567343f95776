// File: src/corpus.rs
use crate::error::{NomcharError, Result};
use std::io::Read;
use tracing::warn;

/// Row counts from one pass over a CSV corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    pub documents: usize,
    pub skipped: usize,
}

/// Streams the `column` field of every CSV record to `on_document`.
///
/// Records that fail to parse, are too short to hold the column, or hold only
/// whitespace are skipped with a warning. A missing header column or an I/O
/// failure aborts the read.
pub fn read_documents<R, F>(reader: R, column: &str, mut on_document: F) -> Result<ReadStats>
where
    R: Read,
    F: FnMut(&str),
{
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let index = rdr
        .headers()?
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| NomcharError::MissingColumn { column: column.to_string() })?;

    let mut stats = ReadStats::default();
    for (row, record) in rdr.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                warn!(row, error = %e, "skipping unreadable corpus row");
                stats.skipped += 1;
                continue;
            }
        };
        match record.get(index) {
            Some(text) if !text.trim().is_empty() => {
                on_document(text);
                stats.documents += 1;
            }
            _ => {
                warn!(row, "skipping corpus row without text");
                stats.skipped += 1;
            }
        }
    }
    Ok(stats)
}
