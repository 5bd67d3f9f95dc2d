//! The grading loop.
//!
//! [`grade`] walks the selected traces strictly in order, one subprocess at a
//! time, and returns a [`Scorecard`]. Everything the user sees while grading
//! goes through a [`ReportSink`], so the loop itself holds no output state.

use std::io;

use crate::config::ReportOptions;
use crate::errors::{GraderError, GraderResult};
use crate::runner::{run_trace, Interpreter, RunResult};
use crate::score::Scorecard;
use crate::trace::{TraceFile, TraceSelection};

/// Receives grading events as they happen.
pub trait ReportSink {
    /// A candidate trace was not found and will not be counted.
    fn missing(&mut self, trace: &TraceFile) -> io::Result<()>;
    /// Subject and reference disagreed. `input` is the trace's contents.
    fn mismatch(&mut self, result: &RunResult, input: &str) -> io::Result<()>;
    /// Grading finished.
    fn summary(&mut self, card: &Scorecard) -> io::Result<()>;
}

/// Grades every candidate in `selection` and reports as it goes.
pub fn grade(
    selection: &TraceSelection,
    subject: &dyn Interpreter,
    reference: &dyn Interpreter,
    options: &ReportOptions,
    sink: &mut dyn ReportSink,
) -> GraderResult<Scorecard> {
    let mut card = Scorecard::new();

    for trace in selection.candidates() {
        if !trace.exists() {
            tracing::debug!(trace = %trace, "trace file missing, skipping");
            sink.missing(&trace).map_err(report_error)?;
            continue;
        }

        let result = run_trace(subject, reference, &trace)?;
        if result.matches() {
            card.record_pass();
            continue;
        }

        tracing::info!(trace = %trace, "output mismatch");
        card.record_failure(trace.identity());
        let input = std::fs::read_to_string(trace.path()).map_err(|source| GraderError::TraceRead {
            path: trace.path().to_path_buf(),
            source,
        })?;
        sink.mismatch(&result, &input).map_err(report_error)?;

        if options.first_fail {
            tracing::info!("stopping at first failure");
            break;
        }
    }

    sink.summary(&card).map_err(report_error)?;
    Ok(card)
}

fn report_error(source: io::Error) -> GraderError {
    GraderError::Report { source }
}
