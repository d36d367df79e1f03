//! Error types for simulation parameters and matching invariants.
//!
//! Two families are kept apart:
//!
//! - [`SimulationError`] is returned to callers when a simulation is asked to
//!   run with parameters that have no meaningful expectation.
//! - [`InvariantViolation`] describes a malformed [`crate::Matching`]. The
//!   generator never produces one; it is surfaced by
//!   [`crate::Matching::check_invariants`] in tests and debug builds, and by
//!   [`crate::Matching::from_entries`] for out-of-range node indices.

// ---------------------------------------------------------------------------
// SimulationError
// ---------------------------------------------------------------------------

/// Errors that can occur before a simulation starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// A count parameter (`noodles`, `trials` or `workers`) was below 1.
    #[error("invalid parameter {name}: {value} (must be at least 1)")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },
}

// ---------------------------------------------------------------------------
// InvariantViolation
// ---------------------------------------------------------------------------

/// A structural defect in a [`crate::Matching`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// An entry refers to a node outside `0..len`.
    #[error("node {node} is out of range for a matching over {len} nodes")]
    NodeOutOfRange {
        /// The offending node index.
        node: usize,
        /// Number of nodes in the matching.
        len: usize,
    },

    /// `A[i][j]` and `A[j][i]` disagree.
    #[error("asymmetric entry: A[{i}][{j}] = {forward}, A[{j}][{i}] = {backward}")]
    Asymmetric {
        /// Row of the forward lookup.
        i: usize,
        /// Column of the forward lookup.
        j: usize,
        /// Value of `A[i][j]`.
        forward: u8,
        /// Value of `A[j][i]`.
        backward: u8,
    },

    /// A node does not consume exactly two endpoints.
    #[error("node {node} consumes {degree} endpoints, expected 2")]
    DegreeMismatch {
        /// The offending node index.
        node: usize,
        /// `2 * A[node][node] + sum of off-diagonal entries`.
        degree: u32,
    },
}
