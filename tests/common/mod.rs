#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Pre-tagged movie plots. "light" is used both ways so it lands between 0 and 1.
pub const CORPUS: &str = "\
imdb_id,title,plot_synopsis
tt001,Storm,A/DET dark/ADJ cold/ADJ night/NOUN falls/VERB ./PUNCT
tt002,Lantern,The/DET light/NOUN fades/VERB over/ADP the/DET small/ADJ old/ADJ light/ADJ house/NOUN
tt003,Broken
tt004,Signal,She/PRON sees/VERB a/DET light/NOUN and/CCONJ a/DET dark/ADJ light/ADJ cloud/NOUN
";

pub struct TestEnv {
    tmp: TempDir,
    pub corpus: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let corpus = tmp.path().join("plots.csv");
        fs::write(&corpus, CORPUS).expect("write corpus");
        Self { tmp, corpus }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.tmp.path().join(name)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("nomchar");
        cmd.env_remove("NOMCHAR_CACHE").env_remove("NOMCHAR_LOG").current_dir(self.tmp.path());
        cmd
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("read output file")
    }
}
