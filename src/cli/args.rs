//! Command-line arguments for the grader.
//!
//! Every flag is optional; running with none grades `Test/trace00.txt`
//! through `Test/trace99.txt` against `./Basic-Demo-64bit`.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use termcolor::ColorChoice;

#[derive(Debug, Parser)]
#[command(
    name = "basic-grader",
    version,
    about = "Compile a BASIC interpreter and diff it against a reference over numbered trace files."
)]
pub struct GraderArgs {
    /// YAML file overriding the default build and path settings.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subject executable (also the compiler's output path).
    #[arg(short = 'e', long, value_name = "EXEC")]
    pub subject: Option<PathBuf>,

    /// Reference executable used as the oracle.
    #[arg(short = 's', long, value_name = "EXEC")]
    pub reference: Option<PathBuf>,

    /// Grade only this trace file.
    #[arg(short = 't', long, value_name = "FILE")]
    pub trace: Option<PathBuf>,

    /// Directory holding trace00.txt, trace01.txt, ...
    #[arg(long, value_name = "DIR")]
    pub trace_dir: Option<PathBuf>,

    /// Number of numbered traces to try.
    #[arg(short = 'n', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub trace_count: Option<u32>,

    /// Stop at the first failing trace.
    #[arg(short = 'f', long)]
    pub first_fail: bool,

    /// Do not print input and outputs of failing traces.
    #[arg(short = 'm', long)]
    pub hide_details: bool,

    /// Print the final score only.
    #[arg(short = 'q', long, conflicts_with_all = ["trace", "first_fail"])]
    pub quiet: bool,

    /// Grade the existing subject executable without compiling.
    #[arg(long)]
    pub skip_build: bool,

    /// Keep the compiled subject executable after grading.
    #[arg(long)]
    pub keep_subject: bool,

    /// When to color the report.
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl ColorArg {
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
            ColorArg::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorArg::Auto => ColorChoice::Never,
        }
    }
}
