//! Grader configuration.
//!
//! Defaults reproduce the classic grading setup: compile `Basic/*.cpp` into
//! `./testcode`, compare against `./Basic-Demo-64bit`, and read
//! `Test/trace00.txt` through `Test/trace99.txt`. A YAML file may override
//! any subset of the fields; command-line flags are applied on top of that.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{GraderError, GraderResult};

pub const DEFAULT_TRACE_COUNT: usize = 100;

const DEFAULT_SOURCES: &[&str] = &[
    "Basic/Basic.cpp",
    "Basic/evalstate.cpp",
    "Basic/exp.cpp",
    "Basic/parser.cpp",
    "Basic/program.cpp",
    "Basic/statement.cpp",
    "Basic/Utils/error.cpp",
    "Basic/Utils/tokenScanner.cpp",
    "Basic/Utils/strlib.cpp",
];

/// Where things are and how to build the subject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraderConfig {
    pub compiler: String,
    pub compiler_flags: Vec<String>,
    pub sources: Vec<PathBuf>,
    pub subject: PathBuf,
    pub reference: PathBuf,
    pub trace_dir: PathBuf,
    pub trace_count: usize,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            compiler: "g++".to_string(),
            compiler_flags: vec!["-std=c++17".to_string()],
            sources: DEFAULT_SOURCES.iter().map(PathBuf::from).collect(),
            subject: PathBuf::from("./testcode"),
            reference: PathBuf::from("./Basic-Demo-64bit"),
            trace_dir: PathBuf::from("Test"),
            trace_count: DEFAULT_TRACE_COUNT,
        }
    }
}

impl GraderConfig {
    /// Loads a YAML config file; absent keys keep their defaults.
    pub fn from_file(path: &Path) -> GraderResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| GraderError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| GraderError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate().map_err(|message| GraderError::ConfigInvalid {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(config)
    }

    /// Rejects settings the command line would also reject.
    pub fn validate(&self) -> Result<(), String> {
        if self.trace_count == 0 {
            return Err("trace_count must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// How much of the report to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Only print the final summary.
    pub quiet: bool,
    /// Print the failure header but not input, outputs or diff.
    pub hide_details: bool,
    /// Stop grading after the first mismatch.
    pub first_fail: bool,
}
