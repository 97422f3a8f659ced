//! Graph construction from an unordered edge list.
//!
//! This is the first validation phase: nodes are created lazily while the
//! edges are scanned once, and the arity limit is enforced at insertion time.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use generational_arena::Index;
use tracing::{instrument, trace};

use crate::domain::arena::NodeArena;
use crate::domain::edge::Edge;
use crate::domain::error::Violation;

/// Children allowed per node in a binary tree.
pub const BINARY_ARITY: usize = 2;

/// Nodes built from an edge list plus the set of nodes seen as a child.
#[derive(Debug)]
pub struct EdgeGraph<N> {
    pub nodes: NodeArena<N>,
    child_nodes: HashSet<Index>,
    edge_count: usize,
}

impl<N> EdgeGraph<N>
where
    N: Eq + Hash + Clone + Debug,
{
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes that never appear as the child of any edge.
    pub fn roots(&self) -> impl Iterator<Item = Index> + '_ {
        self.nodes
            .iter()
            .map(|(idx, _)| idx)
            .filter(|idx| !self.child_nodes.contains(idx))
    }
}

/// Builds an [`EdgeGraph`], rejecting the first edge that overfills a parent.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    max_children: usize,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(BINARY_ARITY)
    }
}

impl GraphBuilder {
    pub fn new(max_children: usize) -> Self {
        Self { max_children }
    }

    /// Scan `edges` in order.
    ///
    /// The parent's child count at insertion time decides rejection, so with
    /// permuted input a different edge may trigger the same violation.
    #[instrument(level = "debug", skip(self, edges), fields(max_children = self.max_children))]
    pub fn build<N, I, E>(&self, edges: I) -> Result<EdgeGraph<N>, Violation<N>>
    where
        N: Eq + Hash + Clone + Debug,
        I: IntoIterator<Item = E>,
        E: Into<Edge<N>>,
    {
        let mut nodes = NodeArena::new();
        let mut child_nodes = HashSet::new();
        let mut edge_count = 0;

        for edge in edges {
            let Edge { child, parent } = edge.into();
            let child_idx = nodes.get_or_insert(&child);
            let parent_idx = nodes.get_or_insert(&parent);

            if !nodes.attach(parent_idx, child_idx, self.max_children) {
                trace!(?child, ?parent, "arity limit reached");
                return Err(Violation::ArityExceeded {
                    node: parent,
                    limit: self.max_children,
                });
            }
            child_nodes.insert(child_idx);
            edge_count += 1;
        }

        Ok(EdgeGraph {
            nodes,
            child_nodes,
            edge_count,
        })
    }
}
