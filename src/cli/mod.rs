//! The grader command-line interface.
//!
//! Resolves configuration from defaults, an optional YAML file and flags,
//! builds the subject, grades the selected traces and prints the report.

use crate::build::{ensure_executable, remove_subject, BuildCommand};
use crate::cli::args::GraderArgs;
use crate::cli::output::ConsoleReport;
use crate::config::{GraderConfig, ReportOptions};
use crate::errors::{print_error, GraderResult};
use crate::grader::grade;
use crate::logging;
use crate::runner::{ProcessInterpreter, Role};
use crate::score::Scorecard;
use crate::trace::TraceSelection;
use clap::Parser;
use std::process;
use termcolor::StandardStream;

pub mod args;
pub mod output;

/// Parses arguments, grades, and exits 1 on a fatal error.
pub fn run() {
    logging::init_tracing();
    let args = GraderArgs::parse();

    if let Err(e) = execute(&args) {
        print_error(e);
        process::exit(1);
    }
}

/// Runs one full grading session for already-parsed arguments.
pub fn execute(args: &GraderArgs) -> GraderResult<Scorecard> {
    let config = resolve_config(args)?;
    let options = ReportOptions {
        quiet: args.quiet,
        hide_details: args.hide_details || args.quiet,
        first_fail: args.first_fail,
    };

    if args.skip_build {
        tracing::info!(subject = %config.subject.display(), "skipping build");
    } else {
        if !options.quiet {
            println!("Compiling code ...");
        }
        BuildCommand::from_config(&config).run()?;
    }
    ensure_executable(&config.reference);

    let selection = match &args.trace {
        Some(path) => TraceSelection::Single(path.clone()),
        None => TraceSelection::Numbered {
            dir: config.trace_dir.clone(),
            count: config.trace_count,
        },
    };

    let subject = ProcessInterpreter::new(&config.subject, Role::Subject);
    let reference = ProcessInterpreter::new(&config.reference, Role::Reference);
    let mut report = ConsoleReport::new(StandardStream::stdout(args.color.choice()), options);

    let graded = grade(&selection, &subject, &reference, &options, &mut report);
    // Only a binary this run compiled is ours to delete.
    if !args.skip_build && !args.keep_subject {
        remove_subject(&config.subject);
    }
    graded
}

/// Defaults, then the config file, then command-line flags.
fn resolve_config(args: &GraderArgs) -> GraderResult<GraderConfig> {
    let mut config = match &args.config {
        Some(path) => GraderConfig::from_file(path)?,
        None => GraderConfig::default(),
    };
    if let Some(subject) = &args.subject {
        config.subject = subject.clone();
    }
    if let Some(reference) = &args.reference {
        config.reference = reference.clone();
    }
    if let Some(dir) = &args.trace_dir {
        config.trace_dir = dir.clone();
    }
    if let Some(count) = args.trace_count {
        config.trace_count = count as usize;
    }
    Ok(config)
}
