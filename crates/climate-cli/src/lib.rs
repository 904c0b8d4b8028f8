//! Command-line driver for the TDV climate analyzer
//!
//! Each input file aggregates into its own partial [`StateTable`]
//! (files run in parallel); partials then merge in argument order so
//! the report keeps the first-seen state ordering of a sequential pass.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use tracing::{debug, error, warn};

use climate_core::{parse_record, render_report, StateTable};

/// Summarize NOAA TDV climate observation files by state.
#[derive(Parser, Debug)]
#[command(name = "climate", version, about, long_about = None)]
pub struct Cli {
    /// Tab-delimited observation files to analyze
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Fail a file on its first malformed record instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

/// Outcome of one run, for logging and tests.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_processed: usize,
    pub failed_files: Vec<PathBuf>,
    pub records_folded: u64,
    pub records_skipped: u64,
}

/// Aggregation produced from a single input file.
struct FilePartial {
    table: StateTable,
    folded: u64,
    skipped: u64,
}

/// Process every input file and write the report to `out`.
///
/// A file that cannot be opened or read is logged and skipped; the
/// remaining files still produce a complete report.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<RunSummary> {
    let partials: Vec<(&Path, Result<FilePartial>)> = cli
        .files
        .par_iter()
        .map(|path| (path.as_path(), analyze_file(path, cli.strict)))
        .collect();

    let mut summary = RunSummary::default();
    let mut table = StateTable::new();

    for (path, result) in partials {
        match result {
            Ok(partial) => {
                summary.files_processed += 1;
                summary.records_folded += partial.folded;
                summary.records_skipped += partial.skipped;
                table.merge(partial.table);
            }
            Err(err) => {
                error!(file = %path.display(), error = %err, "skipping file");
                summary.failed_files.push(path.to_path_buf());
            }
        }
    }

    write!(out, "{}", render_report(&table, &chrono::Local))?;
    Ok(summary)
}

/// Aggregate one file into a partial table.
fn analyze_file(path: &Path, strict: bool) -> Result<FilePartial> {
    let file =
        File::open(path).with_context(|| format!("cannot open file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut partial = FilePartial {
        table: StateTable::new(),
        folded: 0,
        skipped: 0,
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read error in {}", path.display()))?;
        match parse_record(&line) {
            Ok(observation) => {
                partial.table.fold(&observation);
                partial.folded += 1;
            }
            Err(err) if strict => {
                return Err(err).with_context(|| {
                    format!("{}:{}: malformed record", path.display(), index + 1)
                });
            }
            Err(err) => {
                warn!(
                    file = %path.display(),
                    line = index + 1,
                    error = %err,
                    "skipping malformed record"
                );
                partial.skipped += 1;
            }
        }
    }

    debug!(
        file = %path.display(),
        records = partial.folded,
        skipped = partial.skipped,
        states = partial.table.len(),
        "file analyzed"
    );
    Ok(partial)
}
