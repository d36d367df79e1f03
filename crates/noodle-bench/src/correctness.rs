//! Post-operation invariant checkers for correctness validation.
//!
//! These re-derive every property from scratch (dense scans, `petgraph`
//! component counting) rather than trusting the structures under test.

use noodle_core::{Matching, SimulationConfig, SimulationSummary};
use petgraph::algo::connected_components;

/// Verifies symmetry and the degree invariant with a dense `O(N^2)` scan.
pub fn check_matching_invariants(matching: &Matching) -> Result<(), String> {
    let n = matching.len();
    for i in 0..n {
        let mut degree = 2 * u32::from(matching.get(i, i));
        for j in 0..n {
            if i == j {
                continue;
            }
            let forward = matching.get(i, j);
            let backward = matching.get(j, i);
            if forward != backward {
                return Err(format!(
                    "asymmetric entry: A[{i}][{j}]={forward}, A[{j}][{i}]={backward}"
                ));
            }
            degree += u32::from(forward);
        }
        if degree != 2 {
            return Err(format!("node {i} has endpoint degree {degree}, expected 2"));
        }
        if matching.get(i, i) > 1 {
            return Err(format!("node {i} has more than one self-pairing"));
        }
    }
    Ok(())
}

/// Verifies that `loops` lies in `1..=N` and equals the number of connected
/// components of the matching graph.
pub fn check_loop_count(matching: &Matching, loops: u32) -> Result<(), String> {
    let n = matching.len();
    let loops = loops as usize;
    if n > 0 && !(1..=n).contains(&loops) {
        return Err(format!("loop count {loops} outside 1..={n}"));
    }
    let components = connected_components(matching.graph());
    if loops != components {
        return Err(format!(
            "loop count {loops} disagrees with {components} connected components"
        ));
    }
    Ok(())
}

/// Verifies a simulation summary against the configuration that produced it:
/// trial count, per-trial bounds, total and expectation consistency.
pub fn check_summary(
    summary: &SimulationSummary,
    config: &SimulationConfig,
) -> Result<(), String> {
    if summary.noodles != config.noodles {
        return Err(format!(
            "noodle count mismatch: summary={}, config={}",
            summary.noodles, config.noodles
        ));
    }
    if summary.trials() != config.trials {
        return Err(format!(
            "trial count mismatch: summary={}, config={}",
            summary.trials(),
            config.trials
        ));
    }
    let mut total = 0u64;
    for (trial, &loops) in summary.per_trial_loop_counts.iter().enumerate() {
        if loops == 0 || loops as usize > config.noodles {
            return Err(format!("trial {trial} has {loops} loops"));
        }
        total += u64::from(loops);
    }
    if total != summary.total_loops {
        return Err(format!(
            "total mismatch: summed={total}, reported={}",
            summary.total_loops
        ));
    }
    let expected = total as f64 / config.trials as f64;
    if (expected - summary.expected_loops).abs() > 1e-9 {
        return Err(format!(
            "expectation mismatch: computed={expected}, reported={}",
            summary.expected_loops
        ));
    }
    Ok(())
}
