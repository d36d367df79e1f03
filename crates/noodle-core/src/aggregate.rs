//! Aggregation of per-trial loop counts.
//!
//! Everything here is a pure function of the raw per-trial counts returned
//! by the driver. Counts are never rescaled before binning; a frequency table
//! is built from the raw integers and any normalisation for display is left
//! to the consumer.
use std::collections::BTreeMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// LoopHistogram
// ---------------------------------------------------------------------------

/// Frequency table mapping a loop count to the number of trials that
/// produced it. Keys are ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoopHistogram {
    bins: BTreeMap<u32, u64>,
}

impl LoopHistogram {
    /// Bins `counts`. Zero entries are skipped since a non-empty matching
    /// always has at least one loop.
    pub fn from_counts(counts: &[u32]) -> Self {
        let mut bins = BTreeMap::new();
        for &loops in counts.iter().filter(|&&c| c > 0) {
            *bins.entry(loops).or_insert(0u64) += 1;
        }
        Self { bins }
    }

    /// Number of trials that produced exactly `loops` loops.
    pub fn frequency(&self, loops: u32) -> u64 {
        self.bins.get(&loops).copied().unwrap_or(0)
    }

    /// Iterates `(loop_count, trials)` in ascending loop count.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.bins.iter().map(|(&k, &v)| (k, v))
    }

    /// Returns `true` if no trial was binned.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Smallest observed loop count.
    pub fn min_loops(&self) -> Option<u32> {
        self.bins.keys().next().copied()
    }

    /// Largest observed loop count.
    pub fn max_loops(&self) -> Option<u32> {
        self.bins.keys().next_back().copied()
    }

    /// Number of binned trials.
    pub fn total_trials(&self) -> u64 {
        self.bins.values().sum()
    }

    /// Most frequent loop count; ties go to the smaller count.
    pub fn mode(&self) -> Option<u32> {
        let mut best: Option<(u32, u64)> = None;
        for (loops, trials) in self.iter() {
            match best {
                Some((_, top)) if trials <= top => {}
                _ => best = Some((loops, trials)),
            }
        }
        best.map(|(loops, _)| loops)
    }

    /// Mean loop count over the binned trials.
    pub fn mean(&self) -> Option<f64> {
        let trials = self.total_trials();
        if trials == 0 {
            return None;
        }
        let weighted: f64 = self
            .iter()
            .map(|(loops, n)| f64::from(loops) * n as f64)
            .sum();
        Some(weighted / trials as f64)
    }

    /// Frequencies for loop counts `1..=max_loops`, zero-filled.
    ///
    /// This is the bar heights of a loop-count bar chart with one bar per
    /// integer.
    pub fn dense_bins(&self) -> Vec<u64> {
        match self.max_loops() {
            Some(max) => (1..=max).map(|k| self.frequency(k)).collect(),
            None => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// SampleStats
// ---------------------------------------------------------------------------

/// Mean, unbiased variance and standard error of a sample of loop counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleStats {
    /// Sample size.
    pub trials: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Unbiased sample variance (0 for a single trial).
    pub variance: f64,
    /// Standard error of the mean.
    pub std_error: f64,
}

impl SampleStats {
    /// Computes the statistics of `counts`, or `None` when empty.
    pub fn from_counts(counts: &[u32]) -> Option<Self> {
        if counts.is_empty() {
            return None;
        }
        let trials = counts.len();
        let n = trials as f64;
        let mean = counts.iter().map(|&c| f64::from(c)).sum::<f64>() / n;
        let variance = if trials > 1 {
            counts
                .iter()
                .map(|&c| (f64::from(c) - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0)
        } else {
            0.0
        };
        Some(Self {
            trials,
            mean,
            variance,
            std_error: (variance / n).sqrt(),
        })
    }
}

// ---------------------------------------------------------------------------
// Exact expectation
// ---------------------------------------------------------------------------

/// Exact expected number of loops for `n` noodles: `sum_{k=1}^{n} 1/(2k-1)`.
///
/// With `k` noodles left, the first free end is tied to its own noodle's
/// other end with probability `1/(2k-1)`, closing a loop; otherwise two
/// noodles fuse into one and `k` drops by one either way.
pub fn theoretical_expectation(n: usize) -> f64 {
    (1..=n).map(|k| 1.0 / (2 * k - 1) as f64).sum()
}
