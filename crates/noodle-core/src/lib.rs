#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod loops;
pub mod matching;
pub mod simulation;

pub use aggregate::{LoopHistogram, SampleStats, theoretical_expectation};
pub use config::{DEFAULT_NOODLES, DEFAULT_TRIALS, SimulationConfig};
pub use error::{InvariantViolation, SimulationError};
pub use loops::{LoopCounter, count_loops, loop_sizes};
pub use matching::{Matching, MatchingGenerator, fill_random_matching, random_matching};
pub use simulation::{SimulationSummary, run, seeded_rng, simulate, simulate_parallel};

/// Returns the current version of the noodle-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
