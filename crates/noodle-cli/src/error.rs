/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `noodle` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure: the simulation parameters were
///   rejected before any trial ran.
/// - Exit code **1**: output failure: the run completed but its results
///   could not be written.
use std::fmt;
use std::path::PathBuf;

use noodle_core::SimulationError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `noodle` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// The core rejected a parameter.
    InvalidParameter {
        /// The core error message.
        detail: String,
    },

    // --- Exit code 1: output failures ---
    /// Writing to stdout failed.
    StdoutWrite {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Writing the frequency table file failed.
    OutputFile {
        /// The destination path.
        path: PathBuf,
        /// The underlying error message.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidParameter { .. } => 2,
            Self::StdoutWrite { .. } | Self::OutputFile { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidParameter { detail } => format!("error: {detail}"),
            Self::StdoutWrite { detail } => format!("error: failed to write output: {detail}"),
            Self::OutputFile { path, detail } => {
                format!("error: cannot write {}: {detail}", path.display())
            }
        }
    }

    /// Wraps a stdout write failure.
    pub fn stdout(e: &std::io::Error) -> Self {
        Self::StdoutWrite {
            detail: e.to_string(),
        }
    }
}

impl From<SimulationError> for CliError {
    fn from(e: SimulationError) -> Self {
        Self::InvalidParameter {
            detail: e.to_string(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_is_exit_2() {
        let e = CliError::from(SimulationError::InvalidParameter {
            name: "trials",
            value: 0,
        });
        assert_eq!(e.exit_code(), 2);
        assert!(e.message().contains("trials"), "message: {}", e.message());
    }

    #[test]
    fn stdout_write_is_exit_1() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let e = CliError::stdout(&io);
        assert_eq!(e.exit_code(), 1);
        assert!(e.message().contains("broken pipe"));
    }

    #[test]
    fn output_file_message_contains_path() {
        let e = CliError::OutputFile {
            path: PathBuf::from("/nonexistent/loops.json"),
            detail: "No such file or directory".to_owned(),
        };
        assert_eq!(e.exit_code(), 1);
        let msg = e.message();
        assert!(msg.contains("/nonexistent/loops.json"), "message: {msg}");
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::InvalidParameter {
            detail: "bad".to_owned(),
        };
        assert_eq!(format!("{e}"), e.message());
    }
}
