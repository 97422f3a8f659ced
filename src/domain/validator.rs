//! Proper binary tree validation.
//!
//! Three phases run in order and the first failure wins:
//! 1. construction with the arity check ([`GraphBuilder`]),
//! 2. root uniqueness (ids never seen as a child),
//! 3. cycle detection by depth-first descent with path-local membership.

use std::collections::HashSet;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::str::FromStr;

use generational_arena::Index;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::arena::NodeArena;
use crate::domain::builder::{GraphBuilder, BINARY_ARITY};
use crate::domain::edge::Edge;
use crate::domain::error::Violation;
use crate::domain::verdict::Verdict;

/// How the cycle phase walks the graph.
///
/// Both strategies return the same verdict for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleStrategy {
    /// Fresh descent from every node, forgetting earlier starts; O(V * (V + E)).
    PathLocal,
    /// Nodes whose subtree is fully explored are skipped later; O(V + E).
    #[default]
    Memoized,
}

impl fmt::Display for CycleStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleStrategy::PathLocal => write!(f, "path-local"),
            CycleStrategy::Memoized => write!(f, "memoized"),
        }
    }
}

impl FromStr for CycleStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "path-local" | "path_local" => Ok(CycleStrategy::PathLocal),
            "memoized" => Ok(CycleStrategy::Memoized),
            other => Err(format!(
                "unknown cycle strategy '{}' (expected 'path-local' or 'memoized')",
                other
            )),
        }
    }
}

/// Knobs for a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Children allowed per node
    pub max_children: usize,
    /// Verdict for an empty edge list: `Valid` when true, `NoRoot` otherwise
    pub empty_is_tree: bool,
    pub cycle_strategy: CycleStrategy,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            max_children: BINARY_ARITY,
            empty_is_tree: true,
            cycle_strategy: CycleStrategy::default(),
        }
    }
}

/// Stateless validator; every call builds and drops its own graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    #[instrument(level = "debug", skip_all)]
    pub fn validate<N, I, E>(&self, edges: I) -> Verdict<N>
    where
        N: Eq + Hash + Clone + Debug,
        I: IntoIterator<Item = E>,
        E: Into<Edge<N>>,
    {
        let graph = match GraphBuilder::new(self.options.max_children).build(edges) {
            Ok(graph) => graph,
            Err(violation) => {
                debug!(%violation, "construction failed");
                return violation.into();
            }
        };
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );

        if graph.is_empty() {
            return if self.options.empty_is_tree {
                Verdict::Valid
            } else {
                Violation::NoRoot.into()
            };
        }

        let root_count = graph.roots().count();
        debug!(root_count, "roots counted");
        if root_count > 1 {
            return Violation::MultipleRoots { count: root_count }.into();
        }

        if let Some(node) = find_cycle(&graph.nodes, self.options.cycle_strategy) {
            debug!(?node, "cycle found");
            return Violation::CycleDetected { node }.into();
        }

        // Unreachable for finite input: zero roots implies a cycle.
        if root_count == 0 {
            return Violation::NoRoot.into();
        }

        Verdict::Valid
    }

    pub fn is_proper_binary_tree<N, I, E>(&self, edges: I) -> bool
    where
        N: Eq + Hash + Clone + Debug,
        I: IntoIterator<Item = E>,
        E: Into<Edge<N>>,
    {
        self.validate(edges).is_valid()
    }
}

/// Validate with default options and return the tagged verdict.
pub fn validate<N, I, E>(edges: I) -> Verdict<N>
where
    N: Eq + Hash + Clone + Debug,
    I: IntoIterator<Item = E>,
    E: Into<Edge<N>>,
{
    Validator::default().validate(edges)
}

/// True iff `edges` (as `(child, parent)` pairs) form a proper binary tree.
///
/// ```
/// use treecheck::is_proper_binary_tree;
///
/// assert!(is_proper_binary_tree([(1, 2), (2, 4), (5, 7), (7, 2), (9, 5)]));
/// assert!(!is_proper_binary_tree([(1, 2), (2, 3), (3, 1)]));
/// ```
pub fn is_proper_binary_tree<N, I, E>(edges: I) -> bool
where
    N: Eq + Hash + Clone + Debug,
    I: IntoIterator<Item = E>,
    E: Into<Edge<N>>,
{
    validate(edges).is_valid()
}

/// Returns the id of a node revisited on the active descent path, if any.
///
/// The walk keeps an explicit stack of `(node, leaving)` frames: a node joins
/// the path when first popped and leaves it when its `leaving` frame pops,
/// after all of its descendants. A node reached twice through different
/// parents is therefore not a cycle.
///
/// A node whose descent finished without finding a cycle is not walked again.
/// `PathLocal` forgets finished nodes at each new start, `Memoized` keeps
/// them for the whole run and skips finished starts.
pub(crate) fn find_cycle<N>(nodes: &NodeArena<N>, strategy: CycleStrategy) -> Option<N>
where
    N: Eq + Hash + Clone + Debug,
{
    let memoize = strategy == CycleStrategy::Memoized;
    let mut finished: HashSet<Index> = HashSet::new();

    for (start, _) in nodes.iter() {
        if memoize {
            if finished.contains(&start) {
                continue;
            }
        } else {
            finished.clear();
        }

        let mut path: HashSet<Index> = HashSet::new();
        let mut stack = vec![(start, false)];

        while let Some((idx, leaving)) = stack.pop() {
            if leaving {
                path.remove(&idx);
                finished.insert(idx);
                continue;
            }
            if path.contains(&idx) {
                return nodes.get_node(idx).map(|node| node.id.clone());
            }
            if finished.contains(&idx) {
                continue;
            }

            path.insert(idx);
            stack.push((idx, true));
            if let Some(node) = nodes.get_node(idx) {
                for &child in node.children.iter().rev() {
                    stack.push((child, false));
                }
            }
        }
    }
    None
}
