use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::data::compare::SetComparison;
use crate::data::loader::{load_lines, load_mutations};
use crate::report::write_report;

pub const USAGE: &str = "Usage: compare-catalogues <path to cat1> <path to cat2> [-v]";

const VERBOSE_FLAG: &str = "-v";

// ---------------------------------------------------------------------------
// Argument handling
// ---------------------------------------------------------------------------

/// What a run should do once its arguments are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    pub cat1: PathBuf,
    pub cat2: PathBuf,
    /// List differing mutation records, not just their counts.
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Anything other than two paths and an optional `-v`.
    Usage,
    Compare(CompareOptions),
}

impl Invocation {
    /// Classify the arguments that follow the program name.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let verbose = match args {
            [_, _] => false,
            [_, _, flag] if flag.as_ref() == VERBOSE_FLAG => true,
            _ => return Invocation::Usage,
        };
        Invocation::Compare(CompareOptions {
            cat1: PathBuf::from(args[0].as_ref()),
            cat2: PathBuf::from(args[1].as_ref()),
            verbose,
        })
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Validate `args`, load both catalogues and write the report to `out`.
///
/// Bad arguments print the usage line and still succeed; loader failures
/// are returned as errors.
pub fn run<S: AsRef<str>, W: Write>(args: &[S], out: &mut W) -> Result<ExitCode> {
    let options = match Invocation::from_args(args) {
        Invocation::Usage => {
            writeln!(out, "{USAGE}")?;
            return Ok(ExitCode::SUCCESS);
        }
        Invocation::Compare(options) => options,
    };
    log::info!(
        "Comparing {} against {}",
        options.cat1.display(),
        options.cat2.display()
    );

    let lines1 = load_lines(&options.cat1).context("loading lines of catalogue 1")?;
    let lines2 = load_lines(&options.cat2).context("loading lines of catalogue 2")?;
    let mutations1 = load_mutations(&options.cat1).context("loading mutations of catalogue 1")?;
    let mutations2 = load_mutations(&options.cat2).context("loading mutations of catalogue 2")?;

    let line_cmp = SetComparison::new(&lines1, &lines2);
    let mutation_cmp = SetComparison::new(&mutations1, &mutations2);
    if mutation_cmp.is_identical() {
        log::info!("Catalogues hold the same mutations");
    }

    write_report(out, &line_cmp, &mutation_cmp, options.verbose).context("writing report")?;
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
