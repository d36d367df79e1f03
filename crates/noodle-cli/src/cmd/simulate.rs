//! Implementation of `noodle simulate`.
//!
//! Runs the Monte Carlo driver and reports the empirical expectation next to
//! the exact value.
//!
//! Flags:
//! - `--histogram`: append a text bar chart of the loop-count distribution
//!   (human mode only; JSON always carries the frequency table).
//! - `--per-trial`: include every per-trial loop count in JSON output.
//! - `--output <file>`: write the frequency table as JSON to a file.
//!
//! Exit codes: 0 = success, 1 = output could not be written, 2 = invalid
//! parameters.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use noodle_core::{LoopHistogram, SimulationConfig, SimulationSummary, theoretical_expectation};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{histogram_json, write_bar_chart};

/// Presentation options for `simulate`.
#[derive(Debug, Clone, Default)]
pub struct SimulateOptions {
    /// Print the bar chart in human mode.
    pub histogram: bool,
    /// Include per-trial counts in JSON output.
    pub per_trial: bool,
    /// Destination for the frequency table.
    pub output: Option<PathBuf>,
}

/// Structured report emitted in JSON mode.
#[derive(Debug, Serialize)]
struct SimulationReport<'a> {
    config: &'a SimulationConfig,
    total_loops: u64,
    expected_loops: f64,
    theoretical_expectation: f64,
    std_error: f64,
    histogram: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_trial_loop_counts: Option<&'a [u32]>,
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `simulate` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if the core rejects the parameters.
/// - [`CliError`] exit code 1 if stdout or the output file cannot be written.
pub fn run(
    config: &SimulationConfig,
    options: &SimulateOptions,
    format: OutputFormat,
    colors: bool,
) -> Result<(), CliError> {
    let summary = noodle_core::run(config)?;
    let histogram = summary.histogram();

    if let Some(path) = &options.output {
        write_frequency_table(path, &summary, &histogram)?;
        tracing::info!(path = %path.display(), "wrote frequency table");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &summary, &histogram, options, colors),
        OutputFormat::Json => print_json(&mut out, config, &summary, &histogram, options),
    }
    .map_err(|e| CliError::stdout(&e))
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Writes the human-readable report.
fn print_human<W: Write>(
    w: &mut W,
    summary: &SimulationSummary,
    histogram: &LoopHistogram,
    options: &SimulateOptions,
    colors: bool,
) -> std::io::Result<()> {
    let std_error = summary.stats().map_or(0.0, |s| s.std_error);
    writeln!(w, "Expected loops: {:.4}", summary.expected_loops)?;
    writeln!(
        w,
        "Exact expectation: {:.4}",
        theoretical_expectation(summary.noodles)
    )?;
    writeln!(w, "Standard error: {std_error:.4}")?;
    writeln!(
        w,
        "Trials: {} (noodles={}, total loops={})",
        summary.trials(),
        summary.noodles,
        summary.total_loops
    )?;
    if options.histogram {
        writeln!(w)?;
        write_bar_chart(w, histogram, summary.noodles, colors)?;
    }
    Ok(())
}

/// Writes the JSON report.
fn print_json<W: Write>(
    w: &mut W,
    config: &SimulationConfig,
    summary: &SimulationSummary,
    histogram: &LoopHistogram,
    options: &SimulateOptions,
) -> std::io::Result<()> {
    let report = SimulationReport {
        config,
        total_loops: summary.total_loops,
        expected_loops: summary.expected_loops,
        theoretical_expectation: theoretical_expectation(summary.noodles),
        std_error: summary.stats().map_or(0.0, |s| s.std_error),
        histogram: histogram_json(histogram),
        per_trial_loop_counts: options
            .per_trial
            .then_some(summary.per_trial_loop_counts.as_slice()),
    };
    let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

/// Writes `{"noodles", "trials", "histogram"}` to `path`.
fn write_frequency_table(
    path: &Path,
    summary: &SimulationSummary,
    histogram: &LoopHistogram,
) -> Result<(), CliError> {
    let to_cli = |detail: String| CliError::OutputFile {
        path: path.to_path_buf(),
        detail,
    };
    let file = File::create(path).map_err(|e| to_cli(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    let table = serde_json::json!({
        "noodles": summary.noodles,
        "trials": summary.trials(),
        "histogram": histogram_json(histogram),
    });
    serde_json::to_writer_pretty(&mut writer, &table).map_err(|e| to_cli(e.to_string()))?;
    writeln!(writer).map_err(|e| to_cli(e.to_string()))?;
    writer.flush().map_err(|e| to_cli(e.to_string()))
}
