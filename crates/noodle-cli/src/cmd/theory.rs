//! Implementation of `noodle theory`.
//!
//! Prints the exact expected loop count `sum_{k=1}^{N} 1/(2k-1)`.
use std::io::Write;

use noodle_core::{SimulationConfig, theoretical_expectation};

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `theory` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if `noodles` is zero.
/// - [`CliError`] exit code 1 if stdout cannot be written.
pub fn run(noodles: usize, format: OutputFormat) -> Result<(), CliError> {
    SimulationConfig::new(noodles, 1).validate()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_theory(&mut out, noodles, format).map_err(|e| CliError::stdout(&e))
}

fn write_theory<W: Write>(
    w: &mut W,
    noodles: usize,
    format: OutputFormat,
) -> std::io::Result<()> {
    let expected = theoretical_expectation(noodles);
    match format {
        OutputFormat::Human => {
            writeln!(w, "Exact expected loops (noodles={noodles}): {expected:.4}")
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "noodles": noodles,
                "theoretical_expectation": expected,
            });
            writeln!(w, "{json}")
        }
    }
}
