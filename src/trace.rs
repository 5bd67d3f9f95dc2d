//! Trace file discovery.
//!
//! Traces are named `trace00.txt`, `trace01.txt`, ... and looked up by index
//! rather than by listing the directory, so a gap in the numbering is simply
//! a missing candidate.

use std::fmt;
use std::path::{Path, PathBuf};

/// A trace input file, identified by its path as displayed in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFile {
    path: PathBuf,
}

impl TraceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The trace with the given index inside `dir`.
    pub fn numbered(dir: &Path, index: usize) -> Self {
        Self::new(dir.join(trace_file_name(index)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The name used in reports and the failed-test list, e.g. `Test/trace01.txt`.
    pub fn identity(&self) -> String {
        self.path.display().to_string()
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl fmt::Display for TraceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// `trace07.txt` for 7; indices of three or more digits are not truncated.
pub fn trace_file_name(index: usize) -> String {
    format!("trace{:02}.txt", index)
}

/// Which traces a run should attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceSelection {
    /// `trace00.txt` up to but excluding `count` in `dir`.
    Numbered { dir: PathBuf, count: usize },
    /// A single file named on the command line.
    Single(PathBuf),
}

impl TraceSelection {
    /// Candidate traces in grading order. Candidates may not exist on disk.
    pub fn candidates(&self) -> Vec<TraceFile> {
        match self {
            Self::Numbered { dir, count } => {
                (0..*count).map(|i| TraceFile::numbered(dir, i)).collect()
            }
            Self::Single(path) => vec![TraceFile::new(path.clone())],
        }
    }
}
