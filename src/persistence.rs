// File: src/persistence.rs
use crate::core::counts::WordCounts;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Everything the scoring pass needs, so a corpus only has to be tagged once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusSnapshot {
    pub counts: WordCounts,
    /// ADJ-ADJ-NOUN phrases in extraction order.
    pub pairs: Vec<String>,
    /// ADJ-ADJ-ADJ-NOUN phrases in extraction order.
    pub triples: Vec<String>,
}

/// Writes the snapshot atomically: it goes to a temp file next to `path`
/// which then replaces `path`.
pub fn save_to_disk(snapshot: &CorpusSnapshot, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, snapshot)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), pairs = snapshot.pairs.len(), triples = snapshot.triples.len(), "snapshot saved");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<CorpusSnapshot> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: CorpusSnapshot = bincode::deserialize_from(reader)?;
    info!(path = %path.display(), pairs = snapshot.pairs.len(), triples = snapshot.triples.len(), "snapshot loaded");
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counts::FrequencyAccumulator;
    use crate::core::types::PartOfSpeech::{Adj, Noun};
    use crate::error::NomcharError;
    use pretty_assertions::assert_eq;

    fn sample() -> CorpusSnapshot {
        let mut acc = FrequencyAccumulator::new();
        acc.record("big", Adj);
        acc.record("light", Adj);
        acc.record("light", Noun);
        acc.record("dog", Noun);
        CorpusSnapshot {
            counts: acc.freeze(),
            pairs: vec!["big red dog".into(), "small blue car".into(), "big red dog".into()],
            triples: vec!["big old red barn".into()],
        }
    }

    #[test]
    fn snapshot_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("snapshot.bin");

        let snapshot = sample();
        save_to_disk(&snapshot, &path).unwrap();
        let loaded = load_from_disk(&path).unwrap();

        assert_eq!(loaded, snapshot);
        assert_eq!(loaded.counts.counts("light"), (1, 1));
    }

    #[test]
    fn saving_replaces_existing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.bin");

        save_to_disk(&sample(), &path).unwrap();
        save_to_disk(&CorpusSnapshot::default(), &path).unwrap();

        assert_eq!(load_from_disk(&path).unwrap(), CorpusSnapshot::default());
    }

    #[test]
    fn missing_snapshot_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_disk(&dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, NomcharError::Io(_)));
    }

    #[test]
    fn corrupt_snapshot_is_a_cache_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.bin");
        fs::write(&path, [0xff; 3]).unwrap();
        assert!(matches!(load_from_disk(&path).unwrap_err(), NomcharError::Cache(_)));
    }
}
