/// Text and JSON rendering of simulation results.
///
/// The core hands back raw numbers; this module turns them into:
///
/// - a horizontal text bar chart of the loop-count distribution, one bar per
///   loop count from 1 to the largest observed, color-coded when stdout is a
///   terminal and colors are not disabled;
/// - the adjacency matrix of a single matching, four columns per cell;
/// - JSON values for the frequency table.
use std::io::{IsTerminal as _, Write};

use noodle_core::{LoopHistogram, Matching};

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stdout.
///
/// Colors are disabled when `no_color_flag` is set, when the `NO_COLOR`
/// environment variable is present, or when stdout is not a TTY.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const ANSI_CYAN: &str = "\x1b[36m";
const ANSI_RESET: &str = "\x1b[0m";

/// Width in characters of the longest bar.
pub const BAR_WIDTH: u64 = 50;

// ---------------------------------------------------------------------------
// Bar chart
// ---------------------------------------------------------------------------

/// Writes the loop-count distribution as a text bar chart.
///
/// Every loop count from 1 to the maximum gets a row, including counts no
/// trial produced. Bars are scaled so the most frequent count spans
/// [`BAR_WIDTH`] characters; any non-zero frequency gets at least one.
///
/// # Errors
///
/// Returns an error only if writing to `w` fails.
pub fn write_bar_chart<W: Write>(
    w: &mut W,
    histogram: &LoopHistogram,
    noodles: usize,
    colors: bool,
) -> std::io::Result<()> {
    writeln!(w, "Loop Count Distribution (noodles={noodles})")?;
    let bins = histogram.dense_bins();
    let peak = bins.iter().copied().max().unwrap_or(0);
    if peak == 0 {
        return writeln!(w, "  (no trials)");
    }

    for (loops, &trials) in (1u32..).zip(bins.iter()) {
        let len = usize::try_from((trials * BAR_WIDTH).div_ceil(peak)).unwrap_or(0);
        let bar = "#".repeat(len);
        if colors {
            writeln!(w, "{loops:>4} | {ANSI_CYAN}{bar}{ANSI_RESET} {trials}")?;
        } else {
            writeln!(w, "{loops:>4} | {bar} {trials}")?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Matrix
// ---------------------------------------------------------------------------

/// Writes the dense adjacency matrix of `matching`, one row per line.
///
/// # Errors
///
/// Returns an error only if writing to `w` fails.
pub fn write_matrix<W: Write>(w: &mut W, matching: &Matching) -> std::io::Result<()> {
    for i in 0..matching.len() {
        let line: String = matching
            .row(i)
            .iter()
            .map(|cell| format!("{cell:>4} "))
            .collect();
        writeln!(w, "{}", line.trim_end())?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Converts a histogram to a JSON array of `{"loops": k, "trials": n}`.
pub fn histogram_json(histogram: &LoopHistogram) -> serde_json::Value {
    serde_json::Value::Array(
        histogram
            .iter()
            .map(|(loops, trials)| serde_json::json!({ "loops": loops, "trials": trials }))
            .collect(),
    )
}
