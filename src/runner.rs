//! Running interpreters against trace files.

use std::fmt;
use std::fs::File;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::errors::{GraderError, GraderResult};
use crate::trace::TraceFile;

/// Which side of the comparison an interpreter is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Subject,
    Reference,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Subject => write!(f, "subject"),
            Role::Reference => write!(f, "reference"),
        }
    }
}

/// Text captured from one interpreter run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    pub stdout: String,
    pub stderr: String,
}

/// Anything that can execute a trace and hand back what it printed.
///
/// Exit status is deliberately not part of the result: a crashing
/// interpreter is judged only by the output it produced before dying.
pub trait Interpreter {
    fn run(&self, trace: &TraceFile) -> GraderResult<Captured>;
}

/// An interpreter binary on disk, fed the trace through stdin.
#[derive(Debug, Clone)]
pub struct ProcessInterpreter {
    program: PathBuf,
    role: Role,
}

impl ProcessInterpreter {
    pub fn new(program: impl Into<PathBuf>, role: Role) -> Self {
        Self {
            program: program.into(),
            role,
        }
    }
}

impl Interpreter for ProcessInterpreter {
    fn run(&self, trace: &TraceFile) -> GraderResult<Captured> {
        let input = File::open(trace.path()).map_err(|source| GraderError::TraceRead {
            path: trace.path().to_path_buf(),
            source,
        })?;

        tracing::debug!(role = %self.role, program = %self.program.display(), trace = %trace, "running interpreter");

        // `output` drains stdout and stderr together, so a chatty child cannot
        // block on a full pipe.
        let output = Command::new(&self.program)
            .stdin(Stdio::from(input))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| GraderError::Spawn {
                role: self.role,
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            tracing::debug!(role = %self.role, status = %output.status, trace = %trace, "interpreter exited unsuccessfully");
        }

        Ok(Captured {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Both outputs for one trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub trace: TraceFile,
    pub subject: String,
    pub reference: String,
}

impl RunResult {
    /// Byte-for-byte text equality, whitespace and newlines included.
    pub fn matches(&self) -> bool {
        self.subject == self.reference
    }
}

/// Runs the subject and then the reference on `trace`.
pub fn run_trace(
    subject: &dyn Interpreter,
    reference: &dyn Interpreter,
    trace: &TraceFile,
) -> GraderResult<RunResult> {
    let subject_out = subject.run(trace)?;
    let reference_out = reference.run(trace)?;
    Ok(RunResult {
        trace: trace.clone(),
        subject: subject_out.stdout,
        reference: reference_out.stdout,
    })
}
