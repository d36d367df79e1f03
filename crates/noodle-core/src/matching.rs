//! Random perfect matchings of noodle endpoints.
//!
//! A bowl of `N` noodles has `2N` loose ends. Tying the ends together two at
//! a time, uniformly at random, yields a perfect matching of the endpoints.
//! Projected onto the noodles this is a multigraph in which every node has
//! endpoint-degree exactly 2:
//!
//! - a noodle whose two ends are tied to each other carries a self-pairing
//!   (`A[i][i] = 1`);
//! - two noodles tied end-to-end twice share an edge of multiplicity 2;
//! - otherwise a noodle has two distinct neighbours with multiplicity 1.
//!
//! [`Matching`] stores this structure as an undirected `petgraph` graph with
//! one edge per distinct node pair whose weight is the pair multiplicity. The
//! graph keeps its `N` nodes across [`Matching::clear`], so a single buffer
//! can be refilled for every trial at `O(N)` cost.
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::InvariantViolation;

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Symmetric multiplicity structure over `N` noodles.
///
/// `get(i, j)` returns the number of endpoint pairs joining noodles `i` and
/// `j`; `get(i, i)` returns the number of self-pairings of `i`. Symmetry
/// holds by construction because every entry is a single undirected edge.
#[derive(Debug, Clone)]
pub struct Matching {
    graph: UnGraph<(), u8>,
}

impl Matching {
    /// Creates a matching over `n` nodes with no pairs.
    pub fn empty(n: usize) -> Self {
        let mut graph = UnGraph::with_capacity(n, n);
        for _ in 0..n {
            graph.add_node(());
        }
        Self { graph }
    }

    /// Builds a matching by hand from `(i, j, multiplicity)` entries.
    ///
    /// Entries accumulate: listing the same unordered pair twice adds the
    /// multiplicities. Zero multiplicities are ignored. The degree invariant
    /// is deliberately not enforced so that degenerate inputs can be fed to
    /// the loop counter; use [`Matching::check_invariants`] to test it.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::NodeOutOfRange`] if an entry names a
    /// node outside `0..n`.
    pub fn from_entries(
        n: usize,
        entries: &[(usize, usize, u8)],
    ) -> Result<Self, InvariantViolation> {
        let mut matching = Self::empty(n);
        for &(i, j, multiplicity) in entries {
            for node in [i, j] {
                if node >= n {
                    return Err(InvariantViolation::NodeOutOfRange { node, len: n });
                }
            }
            for _ in 0..multiplicity {
                matching.add_pair(i, j);
            }
        }
        Ok(matching)
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns `true` if the matching has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns `A[i][j]`, or 0 when either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.graph
            .find_edge(NodeIndex::new(i), NodeIndex::new(j))
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the number of self-pairings of `node` (`A[node][node]`).
    pub fn self_pairs(&self, node: usize) -> u8 {
        self.get(node, node)
    }

    /// Iterates the positive off-diagonal entries of row `node` as
    /// `(neighbour, multiplicity)`.
    pub fn neighbours(&self, node: usize) -> impl Iterator<Item = (usize, u8)> + '_ {
        let a = NodeIndex::new(node);
        self.graph.edges(a).filter_map(move |edge| {
            let other = if edge.source() == a {
                edge.target()
            } else {
                edge.source()
            };
            (other != a && *edge.weight() > 0).then_some((other.index(), *edge.weight()))
        })
    }

    /// Returns `2 * A[node][node] + sum_{j != node} A[node][j]`.
    pub fn degree(&self, node: usize) -> u32 {
        let off_diagonal: u32 = self.neighbours(node).map(|(_, w)| u32::from(w)).sum();
        2 * u32::from(self.self_pairs(node)) + off_diagonal
    }

    /// Returns row `node` as a dense vector of length `len()`.
    pub fn row(&self, node: usize) -> Vec<u8> {
        (0..self.len()).map(|j| self.get(node, j)).collect()
    }

    /// Returns every positive entry once as `(i, j, multiplicity)` with
    /// `i <= j`, sorted.
    pub fn entries(&self) -> Vec<(usize, usize, u8)> {
        let mut entries: Vec<(usize, usize, u8)> = self
            .graph
            .edge_references()
            .filter(|e| *e.weight() > 0)
            .map(|e| {
                let (s, t) = (e.source().index(), e.target().index());
                (s.min(t), s.max(t), *e.weight())
            })
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Returns the underlying undirected multiplicity graph.
    pub fn graph(&self) -> &UnGraph<(), u8> {
        &self.graph
    }

    /// Checks symmetry and the degree invariant for every node.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found, scanning nodes in
    /// index order.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for i in 0..self.len() {
            for (j, forward) in self.neighbours(i) {
                let backward = self.get(j, i);
                if forward != backward {
                    return Err(InvariantViolation::Asymmetric {
                        i,
                        j,
                        forward,
                        backward,
                    });
                }
            }
            let degree = self.degree(i);
            if degree != 2 {
                return Err(InvariantViolation::DegreeMismatch { node: i, degree });
            }
        }
        Ok(())
    }

    /// Removes every pair, keeping the nodes.
    pub fn clear(&mut self) {
        self.graph.clear_edges();
    }

    /// Records one endpoint pair between `u` and `v` (a self-pairing when
    /// `u == v`). Both indices must be in range.
    pub(crate) fn add_pair(&mut self, u: usize, v: usize) {
        let (a, b) = (NodeIndex::new(u), NodeIndex::new(v));
        match self.graph.find_edge(a, b) {
            Some(e) => {
                if let Some(w) = self.graph.edge_weight_mut(e) {
                    *w = w.saturating_add(1);
                }
            }
            None => {
                self.graph.add_edge(a, b, 1);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// MatchingGenerator
// ---------------------------------------------------------------------------

/// Draws uniformly random perfect matchings of noodle endpoints.
///
/// Owns the endpoint token buffer so that repeated draws do not allocate
/// once the buffer has grown to `2N`.
#[derive(Debug, Clone, Default)]
pub struct MatchingGenerator {
    tokens: Vec<usize>,
}

impl MatchingGenerator {
    /// Creates a generator with an empty token buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears `matching` and refills it with a fresh random matching over
    /// its `len()` nodes.
    ///
    /// Tokens `2k` and `2k + 1` carry label `k`; the token sequence is
    /// shuffled (Fisher–Yates) and consumed two at a time.
    pub fn fill<R: Rng + ?Sized>(&mut self, matching: &mut Matching, rng: &mut R) {
        let n = matching.len();
        matching.clear();

        self.tokens.clear();
        self.tokens.extend((0..n).flat_map(|k| [k, k]));
        self.tokens.shuffle(rng);

        for pair in self.tokens.chunks_exact(2) {
            if let &[u, v] = pair {
                matching.add_pair(u, v);
            }
        }
    }

    /// Draws a new matching over `n` nodes.
    pub fn generate<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Matching {
        let mut matching = Matching::empty(n);
        self.fill(&mut matching, rng);
        matching
    }
}

/// Draws one uniformly random matching over `n` noodles.
///
/// `n = 0` yields an empty matching.
pub fn random_matching<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Matching {
    MatchingGenerator::new().generate(n, rng)
}

/// Redraws `matching` in place, keeping its node count.
///
/// Allocates a fresh token buffer; loops that refill many times should hold
/// a [`MatchingGenerator`] instead.
pub fn fill_random_matching<R: Rng + ?Sized>(matching: &mut Matching, rng: &mut R) {
    MatchingGenerator::new().fill(matching, rng);
}

#[cfg(test)]
mod tests;
