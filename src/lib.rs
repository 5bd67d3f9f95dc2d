//! Grades a student BASIC interpreter against a reference interpreter.
//!
//! The subject is compiled, then both interpreters are fed each numbered
//! trace file on stdin and their standard output is compared as exact text.

pub use crate::errors::{GraderError, GraderResult};

pub mod build;
pub mod cli;
pub mod config;
pub mod errors;
pub mod grader;
pub mod logging;
pub mod runner;
pub mod score;
pub mod trace;
