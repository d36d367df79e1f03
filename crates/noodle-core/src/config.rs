//! Simulation parameters.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Default number of noodles in the bowl.
pub const DEFAULT_NOODLES: usize = 100;

/// Default number of Monte Carlo trials.
pub const DEFAULT_TRIALS: usize = 1_000_000;

/// Parameters for one Monte Carlo run.
///
/// `seed` makes a run reproducible; when `None` the random source is seeded
/// from OS entropy. `workers` greater than 1 selects the parallel driver,
/// which splits the trials into one contiguous chunk per worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of noodles (`N`), each with two endpoints.
    pub noodles: usize,
    /// Number of independent trials (`T`).
    pub trials: usize,
    /// Seed for the master random source.
    pub seed: Option<u64>,
    /// Number of independent workers.
    pub workers: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            noodles: DEFAULT_NOODLES,
            trials: DEFAULT_TRIALS,
            seed: None,
            workers: 1,
        }
    }
}

impl SimulationConfig {
    /// Creates a sequential, entropy-seeded configuration.
    pub fn new(noodles: usize, trials: usize) -> Self {
        Self {
            noodles,
            trials,
            ..Self::default()
        }
    }

    /// Returns this configuration with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns this configuration with the given worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Rejects zero noodles, trials or workers.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] naming the first
    /// parameter found below 1.
    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [
            ("noodles", self.noodles),
            ("trials", self.trials),
            ("workers", self.workers),
        ] {
            if value < 1 {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}
