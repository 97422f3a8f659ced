//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Reason an edge list is not a proper binary tree.
///
/// The validator never returns this as an `Err`; it is carried inside
/// [`Verdict::Invalid`](crate::domain::Verdict) so callers can explain a
/// rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation<N> {
    #[error("node {node:?} already has {limit} children")]
    ArityExceeded { node: N, limit: usize },

    #[error("found {count} roots, expected exactly one")]
    MultipleRoots { count: usize },

    #[error("no root: every node appears as a child")]
    NoRoot,

    #[error("cycle detected through node {node:?}")]
    CycleDetected { node: N },
}
