//! Implementation of `noodle sample`.
//!
//! Draws one random pairing and prints its adjacency matrix, the loop count
//! and the size of each loop. Useful for eyeballing the generator on small
//! bowls.
use std::io::Write;

use noodle_core::{
    Matching, SimulationConfig, count_loops, loop_sizes, random_matching, seeded_rng,
};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::write_matrix;

/// Runs the `sample` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if `noodles` is zero.
/// - [`CliError`] exit code 1 if stdout cannot be written.
pub fn run(noodles: usize, seed: Option<u64>, format: OutputFormat) -> Result<(), CliError> {
    SimulationConfig::new(noodles, 1).validate()?;
    let matching = random_matching(noodles, &mut seeded_rng(seed));
    tracing::debug!(noodles, seed = ?seed, "drew sample matching");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &matching),
        OutputFormat::Json => print_json(&mut out, &matching),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: Write>(w: &mut W, matching: &Matching) -> std::io::Result<()> {
    write_matrix(w, matching)?;
    writeln!(w)?;
    writeln!(w, "Loops: {}", count_loops(matching))?;
    let sizes: Vec<String> = loop_sizes(matching).iter().map(u32::to_string).collect();
    writeln!(w, "Loop sizes: {}", sizes.join(" "))
}

fn print_json<W: Write>(w: &mut W, matching: &Matching) -> std::io::Result<()> {
    let rows: Vec<Vec<u8>> = (0..matching.len()).map(|i| matching.row(i)).collect();
    let json = serde_json::json!({
        "noodles": matching.len(),
        "matrix": rows,
        "loops": count_loops(matching),
        "loop_sizes": loop_sizes(matching),
    });
    let text = serde_json::to_string_pretty(&json).map_err(std::io::Error::other)?;
    writeln!(w, "{text}")
}
