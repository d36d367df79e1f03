//! Monte Carlo driver.
//!
//! [`simulate`] runs every trial on the calling thread with one advancing
//! random source. [`simulate_parallel`] draws one seed per worker from that
//! source, runs each worker's contiguous block of trials on the `rayon` pool
//! with a private [`StdRng`], matching buffer and counter, then concatenates
//! the blocks in worker order. Both are deterministic for a given seed (and,
//! for the parallel driver, a given worker count).
//!
//! [`run`] is the convenience entry: it seeds the master source from the
//! configuration and dispatches on `workers`.
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aggregate::{LoopHistogram, SampleStats};
use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::loops::LoopCounter;
use crate::matching::{Matching, MatchingGenerator};

// ---------------------------------------------------------------------------
// SimulationSummary
// ---------------------------------------------------------------------------

/// Result of a Monte Carlo run.
///
/// `per_trial_loop_counts` holds the raw loop count of every trial in the
/// order the trials were run (worker-major for the parallel driver).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Number of noodles per trial.
    pub noodles: usize,
    /// Sum of all per-trial loop counts.
    pub total_loops: u64,
    /// `total_loops / trials`.
    pub expected_loops: f64,
    /// Loop count of each trial.
    pub per_trial_loop_counts: Vec<u32>,
}

impl SimulationSummary {
    fn from_counts(noodles: usize, total_loops: u64, counts: Vec<u32>) -> Self {
        let expected_loops = if counts.is_empty() {
            0.0
        } else {
            total_loops as f64 / counts.len() as f64
        };
        Self {
            noodles,
            total_loops,
            expected_loops,
            per_trial_loop_counts: counts,
        }
    }

    /// Number of trials run.
    pub fn trials(&self) -> usize {
        self.per_trial_loop_counts.len()
    }

    /// Frequency table of the per-trial counts.
    pub fn histogram(&self) -> LoopHistogram {
        LoopHistogram::from_counts(&self.per_trial_loop_counts)
    }

    /// Sample statistics of the per-trial counts.
    pub fn stats(&self) -> Option<SampleStats> {
        SampleStats::from_counts(&self.per_trial_loop_counts)
    }
}

// ---------------------------------------------------------------------------
// Drivers
// ---------------------------------------------------------------------------

/// Runs `config.trials` trials sequentially, drawing from `rng`.
///
/// `config.seed` and `config.workers` are ignored; the caller owns the
/// random source.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] if `noodles` or `trials`
/// is zero.
pub fn simulate<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulationSummary, SimulationError> {
    config.validate()?;
    let (total, counts) = run_trials(config.noodles, config.trials, rng);
    Ok(SimulationSummary::from_counts(config.noodles, total, counts))
}

/// Runs `config.trials` trials split across `config.workers` workers.
///
/// One seed per worker is drawn from `rng` up front. Worker `w` runs the
/// `w`-th contiguous block of trials; blocks differ in size by at most one.
/// Never spawns more workers than trials.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] if `noodles`, `trials` or
/// `workers` is zero.
pub fn simulate_parallel<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulationSummary, SimulationError> {
    config.validate()?;
    let workers = config.workers.min(config.trials);
    let blocks: Vec<(u64, usize)> = partition(config.trials, workers)
        .into_iter()
        .map(|trials| (rng.next_u64(), trials))
        .collect();

    let noodles = config.noodles;
    let results: Vec<(u64, Vec<u32>)> = blocks
        .into_par_iter()
        .map(|(seed, trials)| {
            let mut worker_rng = StdRng::seed_from_u64(seed);
            run_trials(noodles, trials, &mut worker_rng)
        })
        .collect();

    let mut total = 0u64;
    let mut counts = Vec::with_capacity(config.trials);
    for (block_total, block_counts) in results {
        total += block_total;
        counts.extend(block_counts);
    }
    Ok(SimulationSummary::from_counts(noodles, total, counts))
}

/// Seeds a master source from `config.seed` (OS entropy when `None`) and
/// runs the sequential or parallel driver depending on `config.workers`.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] for zero parameters.
pub fn run(config: &SimulationConfig) -> Result<SimulationSummary, SimulationError> {
    config.validate()?;
    debug!(
        noodles = config.noodles,
        trials = config.trials,
        workers = config.workers,
        seed = ?config.seed,
        "starting simulation"
    );

    let started = Instant::now();
    let mut rng = seeded_rng(config.seed);
    let summary = if config.workers > 1 {
        simulate_parallel(config, &mut rng)?
    } else {
        simulate(config, &mut rng)?
    };

    info!(
        total_loops = summary.total_loops,
        expected_loops = summary.expected_loops,
        elapsed = ?started.elapsed(),
        "simulation finished"
    );
    Ok(summary)
}

/// Returns a [`StdRng`] seeded from `seed`, or from OS entropy when `None`.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Runs `trials` trials over `noodles` nodes, reusing one matching buffer.
fn run_trials<R: Rng + ?Sized>(noodles: usize, trials: usize, rng: &mut R) -> (u64, Vec<u32>) {
    let mut matching = Matching::empty(noodles);
    let mut generator = MatchingGenerator::new();
    let mut counter = LoopCounter::new();
    let mut counts = Vec::with_capacity(trials);
    let mut total = 0u64;

    for _ in 0..trials {
        generator.fill(&mut matching, rng);
        debug_assert!(
            matching.check_invariants().is_ok(),
            "generator produced a malformed matching"
        );
        let loops = counter.count(&matching);
        total += u64::from(loops);
        counts.push(loops);
    }
    (total, counts)
}

/// Splits `total` into `parts` block sizes differing by at most one, larger
/// blocks first.
fn partition(total: usize, parts: usize) -> Vec<usize> {
    if parts == 0 {
        return Vec::new();
    }
    let base = total / parts;
    let extra = total % parts;
    (0..parts).map(|i| base + usize::from(i < extra)).collect()
}
