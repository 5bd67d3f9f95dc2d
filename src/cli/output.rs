//! Console rendering of a grading run.
//!
//! The console report colors trace input yellow, the subject's output red
//! and the reference output green, followed by a line diff of the two.
//! Write errors propagate; only color switching failures are ignored.

use difference::{Changeset, Difference};
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::config::ReportOptions;
use crate::grader::ReportSink;
use crate::runner::RunResult;
use crate::score::Scorecard;
use crate::trace::TraceFile;

/// Writes the grading report to any color-capable writer.
pub struct ConsoleReport<W: WriteColor> {
    out: W,
    options: ReportOptions,
}

impl<W: WriteColor> ConsoleReport<W> {
    pub fn new(out: W, options: ReportOptions) -> Self {
        Self { out, options }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn colored_line(&mut self, color: Color, bold: bool, text: &str) -> io::Result<()> {
        let _ = self
            .out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
        let written = writeln!(self.out, "{}", text);
        let _ = self.out.reset();
        written
    }

    fn print_diff(&mut self, diffs: &[Difference]) -> io::Result<()> {
        for diff in diffs {
            match diff {
                Difference::Same(ref x) => self.diff_chunk(' ', None, x)?,
                Difference::Rem(ref x) => self.diff_chunk('-', Some(Color::Green), x)?,
                Difference::Add(ref x) => self.diff_chunk('+', Some(Color::Red), x)?,
            }
        }
        Ok(())
    }

    /// Chunks are `\n`-joined segments, so splitting on `\n` recovers them
    /// exactly. An empty chunk is a lone trailing newline and still gets a
    /// marker line.
    fn diff_chunk(&mut self, marker: char, color: Option<Color>, chunk: &str) -> io::Result<()> {
        if color.is_some() {
            let _ = self.out.set_color(ColorSpec::new().set_fg(color));
        }
        let mut written = Ok(());
        for line in chunk.split('\n') {
            written = writeln!(self.out, "{}{}", marker, line);
            if written.is_err() {
                break;
            }
        }
        if color.is_some() {
            let _ = self.out.reset();
        }
        written
    }
}

impl<W: WriteColor> ReportSink for ConsoleReport<W> {
    fn missing(&mut self, trace: &TraceFile) -> io::Result<()> {
        if self.options.quiet {
            return Ok(());
        }
        writeln!(self.out, "{} does not exist.", trace)
    }

    fn mismatch(&mut self, result: &RunResult, input: &str) -> io::Result<()> {
        if self.options.quiet {
            return Ok(());
        }
        self.colored_line(
            Color::Red,
            true,
            &format!("Difference found in {}:", result.trace),
        )?;
        if self.options.hide_details {
            return Ok(());
        }
        self.colored_line(Color::Yellow, true, "Input Data:")?;
        self.colored_line(Color::Yellow, false, input)?;
        self.colored_line(Color::Red, true, "Student Output:")?;
        self.colored_line(Color::Red, false, &result.subject)?;
        self.colored_line(Color::Green, true, "Expected Output:")?;
        self.colored_line(Color::Green, false, &result.reference)?;

        writeln!(self.out, "Diff (- expected, + student):")?;
        let changeset = Changeset::new(&result.reference, &result.subject, "\n");
        self.print_diff(&changeset.diffs)?;
        writeln!(self.out)
    }

    fn summary(&mut self, card: &Scorecard) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Total Tests: {}", card.total())?;
        writeln!(self.out, "Failed Tests: {}", card.failed())?;
        writeln!(self.out, "Passed Tests: {}", card.passed())?;
        writeln!(self.out, "Score: {}", card.score_line())?;

        if !card.failed_traces().is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "Failed Test Cases:")?;
            for identity in card.failed_traces() {
                writeln!(self.out, "{}", identity)?;
            }
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn mismatch_result() -> RunResult {
        RunResult {
            trace: TraceFile::new("Test/trace01.txt"),
            subject: "1\n3\n".into(),
            reference: "1\n2\n".into(),
        }
    }

    fn render(
        options: ReportOptions,
        f: impl FnOnce(&mut ConsoleReport<Buffer>) -> io::Result<()>,
    ) -> String {
        let mut report = ConsoleReport::new(Buffer::no_color(), options);
        f(&mut report).unwrap();
        String::from_utf8(report.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn mismatch_shows_input_outputs_and_diff() {
        let text = render(ReportOptions::default(), |r| {
            r.mismatch(&mismatch_result(), "10 PRINT 1\n")
        });
        assert!(text.starts_with("Difference found in Test/trace01.txt:\n"));
        assert!(text.contains("Input Data:\n10 PRINT 1\n"));
        assert!(text.contains("Student Output:\n1\n3\n"));
        assert!(text.contains("Expected Output:\n1\n2\n"));
        assert!(text.contains("-2\n"));
        assert!(text.contains("+3\n"));
    }

    #[test]
    fn hide_details_keeps_only_header() {
        let options = ReportOptions {
            hide_details: true,
            ..ReportOptions::default()
        };
        let text = render(options, |r| r.mismatch(&mismatch_result(), "10 PRINT 1\n"));
        assert_eq!(text, "Difference found in Test/trace01.txt:\n");
    }

    #[test]
    fn quiet_prints_only_summary() {
        let options = ReportOptions {
            quiet: true,
            ..ReportOptions::default()
        };
        let mut card = Scorecard::new();
        card.record_failure("Test/trace01.txt");
        let text = render(options, |r| {
            r.missing(&TraceFile::new("Test/trace02.txt"))?;
            r.mismatch(&mismatch_result(), "")?;
            r.summary(&card)
        });
        assert!(!text.contains("does not exist"));
        assert!(!text.contains("Difference found"));
        assert!(text.contains("Score: 0.00%"));
    }

    #[test]
    fn summary_layout() {
        let mut card = Scorecard::new();
        card.record_pass();
        card.record_failure("Test/trace01.txt");
        let text = render(ReportOptions::default(), |r| r.summary(&card));
        assert_eq!(
            text,
            "\nTotal Tests: 2\nFailed Tests: 1\nPassed Tests: 1\nScore: 50.00%\n\nFailed Test Cases:\nTest/trace01.txt\n"
        );
    }

    #[test]
    fn empty_summary_does_not_divide() {
        let text = render(ReportOptions::default(), |r| r.summary(&Scorecard::new()));
        assert!(text.contains("Total Tests: 0\n"));
        assert!(text.contains("Score: N/A (no trace files found)\n"));
        assert!(!text.contains("Failed Test Cases"));
    }

    #[test]
    fn missing_trace_message() {
        let text = render(ReportOptions::default(), |r| {
            r.missing(&TraceFile::new("Test/trace42.txt"))
        });
        assert_eq!(text, "Test/trace42.txt does not exist.\n");
    }

    #[test]
    fn trailing_newline_difference_is_visible_in_diff() {
        let result = RunResult {
            trace: TraceFile::new("Test/trace03.txt"),
            subject: "1\n2".into(),
            reference: "1\n2\n".into(),
        };
        let text = render(ReportOptions::default(), |r| r.mismatch(&result, "10 PRINT 1\n"));
        let diff = text
            .split("Diff (- expected, + student):\n")
            .nth(1)
            .unwrap();
        let lines: Vec<_> = diff.lines().collect();
        assert!(lines.contains(&" 1"));
        assert!(lines.contains(&" 2"));
        assert!(lines.contains(&"-"), "diff was {:?}", diff);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl WriteColor for ClosedPipe {
        fn supports_color(&self) -> bool {
            false
        }
        fn set_color(&mut self, _spec: &ColorSpec) -> io::Result<()> {
            Ok(())
        }
        fn reset(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_are_reported() {
        let mut report = ConsoleReport::new(ClosedPipe, ReportOptions::default());
        let err = report.summary(&Scorecard::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(report.missing(&TraceFile::new("Test/trace00.txt")).is_err());
    }
}
