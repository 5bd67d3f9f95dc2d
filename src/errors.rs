//! Grader error handling.
//!
//! Only conditions that make the whole run meaningless are errors. Missing
//! trace files and output mismatches are ordinary grading outcomes and are
//! recorded on the [`Scorecard`](crate::score::Scorecard) instead.

use miette::Diagnostic;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::runner::Role;

/// Fatal failures that abort a grading run.
#[derive(Error, Diagnostic, Debug)]
pub enum GraderError {
    #[error("Build error: `{command}` exited with {status}")]
    #[diagnostic(
        code(grader::build::failed),
        help("fix the compiler errors above, or pass --skip-build to grade an existing binary")
    )]
    BuildFailed { command: String, status: String },

    #[error("Build error: could not launch compiler `{program}`")]
    #[diagnostic(
        code(grader::build::spawn),
        help("check that the compiler is installed and on PATH")
    )]
    BuildSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Run error: could not launch {role} interpreter `{}`", .program.display())]
    #[diagnostic(
        code(grader::run::spawn),
        help("both interpreters must exist and be executable in the working directory")
    )]
    Spawn {
        role: Role,
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Trace error: could not read `{}`", .path.display())]
    #[diagnostic(code(grader::trace::read))]
    TraceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config error: could not read `{}`", .path.display())]
    #[diagnostic(code(grader::config::read))]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config error: invalid YAML in `{}`", .path.display())]
    #[diagnostic(
        code(grader::config::parse),
        help("every key is optional; see GraderConfig for the accepted fields")
    )]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Config error: {message} in `{}`", .path.display())]
    #[diagnostic(code(grader::config::invalid))]
    ConfigInvalid { path: PathBuf, message: String },

    #[error("Report error: could not write the grading report")]
    #[diagnostic(code(grader::report::write))]
    Report {
        #[source]
        source: io::Error,
    },
}

pub type GraderResult<T> = Result<T, GraderError>;

/// Prints a `GraderError` with full miette diagnostics on stderr.
pub fn print_error(error: GraderError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_failure_carries_diagnostic_code() {
        let err = GraderError::BuildFailed {
            command: "g++ -o testcode Basic/Basic.cpp".into(),
            status: "exit status: 1".into(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("grader::build::failed"));
        assert!(err.to_string().contains("g++ -o testcode"));
    }

    #[test]
    fn spawn_error_names_the_role() {
        let err = GraderError::Spawn {
            role: Role::Reference,
            program: PathBuf::from("./Basic-Demo-64bit"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "Run error: could not launch reference interpreter `./Basic-Demo-64bit`"
        );
    }
}
