//! Workload tiers and correctness checkers for benchmarking `noodle-core`.
//!
//! Benchmarks and invariant tests share the same deterministic workloads so
//! that a regression caught by one can be reproduced by the other.

pub mod correctness;

use noodle_core::SimulationConfig;

/// Predefined simulation sizes for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// 10 noodles, 10,000 trials
    Small,
    /// 100 noodles, 10,000 trials (the reference bowl)
    Medium,
    /// 1,000 noodles, 2,000 trials
    Large,
    /// 10,000 noodles, 200 trials
    XLarge,
}

impl Workload {
    /// All tiers, smallest first.
    pub const ALL: [Workload; 4] = [
        Workload::Small,
        Workload::Medium,
        Workload::Large,
        Workload::XLarge,
    ];

    /// Short label used in benchmark IDs.
    pub fn label(self) -> &'static str {
        match self {
            Workload::Small => "S",
            Workload::Medium => "M",
            Workload::Large => "L",
            Workload::XLarge => "XL",
        }
    }

    /// Number of noodles per trial.
    pub fn noodles(self) -> usize {
        match self {
            Workload::Small => 10,
            Workload::Medium => 100,
            Workload::Large => 1_000,
            Workload::XLarge => 10_000,
        }
    }

    /// Number of trials.
    pub fn trials(self) -> usize {
        match self {
            Workload::Small | Workload::Medium => 10_000,
            Workload::Large => 2_000,
            Workload::XLarge => 200,
        }
    }

    /// Returns the seeded `SimulationConfig` for this tier.
    pub fn config(self, seed: u64) -> SimulationConfig {
        SimulationConfig::new(self.noodles(), self.trials()).with_seed(seed)
    }
}
