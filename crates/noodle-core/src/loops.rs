//! Loop counting over a [`Matching`].
//!
//! Nodes are processed in index order, each visited exactly once:
//!
//! 1. A node with a positive diagonal entry (a noodle tied to itself) is one
//!    loop on its own. Its off-diagonal entries are not inspected.
//! 2. Any other unvisited node seeds a breadth-first traversal over positive
//!    off-diagonal entries. The whole component is one loop.
//!
//! Under the degree invariant a self-paired node has no capacity left for
//! other edges, so rule 1 agrees with plain connected components. On
//! degenerate hand-built input the rule still applies: the self-paired node
//! is counted alone, and a traversal that reaches it from a neighbour absorbs
//! it into that neighbour's loop without following its self edge.
use std::collections::VecDeque;

use crate::matching::Matching;

/// Reusable traversal state for counting loops.
///
/// Holding one `LoopCounter` across trials avoids reallocating the visited
/// flags and BFS queue for every matching.
#[derive(Debug, Clone, Default)]
pub struct LoopCounter {
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl LoopCounter {
    /// Creates a counter with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of loops in `matching`.
    ///
    /// An empty matching has zero loops.
    pub fn count(&mut self, matching: &Matching) -> u32 {
        let mut count = 0;
        self.for_each_loop(matching, |_| count += 1);
        count
    }

    /// Returns the number of noodles in each loop, in discovery order.
    pub fn loop_sizes(&mut self, matching: &Matching) -> Vec<u32> {
        let mut sizes = Vec::new();
        self.for_each_loop(matching, |size| sizes.push(size));
        sizes
    }

    fn for_each_loop<F: FnMut(u32)>(&mut self, matching: &Matching, mut on_loop: F) {
        let n = matching.len();
        self.visited.clear();
        self.visited.resize(n, false);

        for start in 0..n {
            if self.visited[start] {
                continue;
            }
            self.visited[start] = true;

            if matching.self_pairs(start) > 0 {
                on_loop(1);
                continue;
            }

            let mut size = 0u32;
            self.queue.clear();
            self.queue.push_back(start);
            while let Some(u) = self.queue.pop_front() {
                size += 1;
                for (v, _) in matching.neighbours(u) {
                    if !self.visited[v] {
                        self.visited[v] = true;
                        self.queue.push_back(v);
                    }
                }
            }
            on_loop(size);
        }
    }
}

/// Counts the loops in `matching` with a fresh [`LoopCounter`].
pub fn count_loops(matching: &Matching) -> u32 {
    LoopCounter::new().count(matching)
}

/// Returns the size of each loop in `matching` with a fresh [`LoopCounter`].
pub fn loop_sizes(matching: &Matching) -> Vec<u32> {
    LoopCounter::new().loop_sizes(matching)
}
