//! Statistical convergence of the Monte Carlo estimate.
//!
//! These tests assert closeness within a tolerance band, never equality.
//! With 100 noodles the per-trial standard deviation is about 1.43 loops, so
//! 100,000 trials give a standard error near 0.0045; the 0.05 band is more
//! than ten standard errors wide.
#![allow(clippy::expect_used)]

use noodle_core::{
    SimulationConfig, seeded_rng, simulate, simulate_parallel, theoretical_expectation,
};

const TOLERANCE: f64 = 0.05;

#[test]
fn hundred_noodles_converge_across_seeds() {
    let exact = theoretical_expectation(100);
    for seed in [1, 2, 3] {
        let config = SimulationConfig::new(100, 100_000).with_workers(4);
        let summary =
            simulate_parallel(&config, &mut seeded_rng(Some(seed))).expect("valid config");
        let error = (summary.expected_loops - exact).abs();
        assert!(
            error < TOLERANCE,
            "seed {seed}: estimate {} vs exact {exact} (error {error})",
            summary.expected_loops
        );
        let stats = summary.stats().expect("non-empty");
        assert!(
            error < 6.0 * stats.std_error + 1e-3,
            "seed {seed}: error {error} exceeds six standard errors ({})",
            stats.std_error
        );
    }
}

#[test]
fn small_bowls_converge_sequentially() {
    for n in [1usize, 3, 10] {
        let config = SimulationConfig::new(n, 40_000);
        let summary = simulate(&config, &mut seeded_rng(Some(n as u64))).expect("valid config");
        let exact = theoretical_expectation(n);
        assert!(
            (summary.expected_loops - exact).abs() < TOLERANCE,
            "n={n}: estimate {} vs exact {exact}",
            summary.expected_loops
        );
    }
}

#[test]
fn expectation_grows_with_noodles() {
    let small = simulate(&SimulationConfig::new(5, 20_000), &mut seeded_rng(Some(40)))
        .expect("valid config");
    let large = simulate(&SimulationConfig::new(200, 20_000), &mut seeded_rng(Some(41)))
        .expect("valid config");
    assert!(large.expected_loops > small.expected_loops + 1.0);
}

#[test]
fn histogram_mode_near_expectation() {
    let summary = simulate_parallel(
        &SimulationConfig::new(100, 50_000).with_workers(4),
        &mut seeded_rng(Some(99)),
    )
    .expect("valid config");
    let histogram = summary.histogram();
    let mode = histogram.mode().expect("non-empty");
    assert!((2..=4).contains(&mode), "mode {mode}");
    assert_eq!(histogram.total_trials(), 50_000);
    assert_eq!(histogram.min_loops().map(|m| m >= 1), Some(true));
}
