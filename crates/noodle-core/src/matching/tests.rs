#![allow(clippy::expect_used)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ---------------------------------------------------------------------------
// Hand-built matchings
// ---------------------------------------------------------------------------

#[test]
fn empty_has_no_entries() {
    let m = Matching::empty(4);
    assert_eq!(m.len(), 4);
    assert!(!m.is_empty());
    assert!(m.entries().is_empty());
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(m.get(i, j), 0);
        }
    }
}

#[test]
fn zero_nodes_is_empty() {
    let m = Matching::empty(0);
    assert!(m.is_empty());
    assert!(m.check_invariants().is_ok());
}

#[test]
fn from_entries_is_symmetric() {
    let m = Matching::from_entries(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]).expect("valid");
    for (i, j) in [(0, 1), (1, 2), (0, 2)] {
        assert_eq!(m.get(i, j), 1);
        assert_eq!(m.get(j, i), 1);
    }
    assert!(m.check_invariants().is_ok());
}

#[test]
fn from_entries_accumulates_multiplicity() {
    let m = Matching::from_entries(2, &[(0, 1, 1), (1, 0, 1)]).expect("valid");
    assert_eq!(m.get(0, 1), 2);
    assert_eq!(m.get(1, 0), 2);
    assert_eq!(m.entries(), vec![(0, 1, 2)]);
}

#[test]
fn from_entries_ignores_zero_multiplicity() {
    let m = Matching::from_entries(2, &[(0, 1, 0)]).expect("valid");
    assert!(m.entries().is_empty());
}

#[test]
fn from_entries_rejects_out_of_range_node() {
    let err = Matching::from_entries(2, &[(0, 2, 1)]).expect_err("node 2 is out of range");
    assert_eq!(err, InvariantViolation::NodeOutOfRange { node: 2, len: 2 });
}

#[test]
fn get_out_of_range_is_zero() {
    let m = Matching::from_entries(1, &[(0, 0, 1)]).expect("valid");
    assert_eq!(m.get(0, 5), 0);
    assert_eq!(m.get(5, 5), 0);
}

#[test]
fn self_pair_degree_is_two() {
    let m = Matching::from_entries(1, &[(0, 0, 1)]).expect("valid");
    assert_eq!(m.self_pairs(0), 1);
    assert_eq!(m.degree(0), 2);
    assert_eq!(m.neighbours(0).count(), 0);
    assert!(m.check_invariants().is_ok());
}

#[test]
fn row_is_dense() {
    let m = Matching::from_entries(3, &[(0, 0, 1), (1, 2, 2)]).expect("valid");
    assert_eq!(m.row(0), vec![1, 0, 0]);
    assert_eq!(m.row(1), vec![0, 0, 2]);
    assert_eq!(m.row(2), vec![0, 2, 0]);
}

#[test]
fn degree_violation_is_reported() {
    let m = Matching::from_entries(3, &[(0, 1, 1)]).expect("valid");
    assert_eq!(
        m.check_invariants(),
        Err(InvariantViolation::DegreeMismatch { node: 0, degree: 1 })
    );
}

#[test]
fn self_pair_with_extra_edge_violates_degree() {
    let m = Matching::from_entries(2, &[(0, 0, 1), (0, 1, 1), (1, 1, 1)]).expect("valid");
    assert!(matches!(
        m.check_invariants(),
        Err(InvariantViolation::DegreeMismatch { node: 0, degree: 3 })
    ));
}

#[test]
fn clear_keeps_nodes() {
    let mut m = Matching::from_entries(2, &[(0, 1, 2)]).expect("valid");
    m.clear();
    assert_eq!(m.len(), 2);
    assert!(m.entries().is_empty());
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

#[test]
fn single_noodle_always_self_pairs() {
    let m = random_matching(1, &mut rng(1));
    assert_eq!(m.entries(), vec![(0, 0, 1)]);
}

#[test]
fn zero_noodles_yields_empty_matching() {
    let m = random_matching(0, &mut rng(1));
    assert!(m.is_empty());
}

#[test]
fn generated_matchings_satisfy_invariants() {
    let mut r = rng(7);
    let mut generator = MatchingGenerator::new();
    for n in 1..40 {
        let m = generator.generate(n, &mut r);
        assert_eq!(m.len(), n);
        m.check_invariants()
            .unwrap_or_else(|e| unreachable!("n={n}: {e}"));
    }
}

#[test]
fn total_multiplicity_is_n_pairs() {
    let m = random_matching(25, &mut rng(3));
    let pairs: u32 = m.entries().iter().map(|&(_, _, w)| u32::from(w)).sum();
    assert_eq!(pairs, 25);
}

#[test]
fn same_seed_same_matching() {
    let a = random_matching(30, &mut rng(42));
    let b = random_matching(30, &mut rng(42));
    assert_eq!(a.entries(), b.entries());
}

#[test]
fn refill_does_not_leak_previous_trial() {
    let mut r = rng(11);
    let mut generator = MatchingGenerator::new();
    let mut m = Matching::empty(20);
    for _ in 0..50 {
        generator.fill(&mut m, &mut r);
        assert!(m.check_invariants().is_ok());
    }
}

#[test]
fn two_noodles_cover_both_shapes() {
    let mut r = rng(5);
    let mut seen_self = false;
    let mut seen_cross = false;
    for _ in 0..200 {
        let m = random_matching(2, &mut r);
        match m.entries().as_slice() {
            [(0, 0, 1), (1, 1, 1)] => seen_self = true,
            [(0, 1, 2)] => seen_cross = true,
            other => unreachable!("impossible matching for two noodles: {other:?}"),
        }
    }
    assert!(seen_self && seen_cross);
}

#[test]
fn fill_random_matching_replaces_previous_draw() {
    let mut m = Matching::from_entries(4, &[(0, 1, 2), (2, 3, 2)]).expect("valid entries");
    fill_random_matching(&mut m, &mut rng(77));
    assert_eq!(m.len(), 4);
    assert!(m.check_invariants().is_ok());
    assert_eq!(m.entries(), random_matching(4, &mut rng(77)).entries());
}
