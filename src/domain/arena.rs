//! Arena-backed node storage for one validation run.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use generational_arena::{Arena, Index};
use tracing::instrument;

/// Node in the edge graph.
#[derive(Debug)]
pub struct GraphNode<N> {
    /// Caller-supplied identifier
    pub id: N,
    /// Arena indices of child nodes, in edge order
    pub children: Vec<Index>,
}

/// Owns every node created while scanning an edge list.
///
/// Nodes are looked up by id in O(1) and are never removed, so iteration
/// order is insertion order (first sighting of an id).
#[derive(Debug)]
pub struct NodeArena<N> {
    arena: Arena<GraphNode<N>>,
    by_id: HashMap<N, Index>,
}

impl<N> Default for NodeArena<N>
where
    N: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> NodeArena<N>
where
    N: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            by_id: HashMap::new(),
        }
    }

    /// Returns the index for `id`, creating the node on first sight.
    #[instrument(level = "trace", skip(self))]
    pub fn get_or_insert(&mut self, id: &N) -> Index {
        if let Some(&idx) = self.by_id.get(id) {
            return idx;
        }
        let idx = self.arena.insert(GraphNode {
            id: id.clone(),
            children: Vec::new(),
        });
        self.by_id.insert(id.clone(), idx);
        idx
    }

    /// Appends `child` to `parent` unless `parent` already holds `limit` children.
    ///
    /// Returns `false` without modifying anything when the limit is reached.
    pub fn attach(&mut self, parent: Index, child: Index, limit: usize) -> bool {
        match self.arena.get_mut(parent) {
            Some(node) if node.children.len() < limit => {
                node.children.push(child);
                true
            }
            _ => false,
        }
    }

    pub fn get_node(&self, idx: Index) -> Option<&GraphNode<N>> {
        self.arena.get(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Index, &GraphNode<N>)> {
        self.arena.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_repeated_id_when_inserting_then_returns_same_index() {
        let mut arena = NodeArena::new();
        let a = arena.get_or_insert(&"a");
        let b = arena.get_or_insert(&"b");
        assert_ne!(a, b);
        assert_eq!(arena.get_or_insert(&"a"), a);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn given_full_parent_when_attaching_then_refuses() {
        let mut arena = NodeArena::new();
        let p = arena.get_or_insert(&0);
        let c1 = arena.get_or_insert(&1);
        let c2 = arena.get_or_insert(&2);
        let c3 = arena.get_or_insert(&3);

        assert!(arena.attach(p, c1, 2));
        assert!(arena.attach(p, c2, 2));
        assert!(!arena.attach(p, c3, 2));
        assert_eq!(arena.get_node(p).map(|n| n.children.clone()), Some(vec![c1, c2]));
    }

    #[test]
    fn given_insertions_when_iterating_then_yields_first_sighting_order() {
        let mut arena = NodeArena::new();
        for id in [5, 3, 5, 9] {
            arena.get_or_insert(&id);
        }
        let ids: Vec<i32> = arena.iter().map(|(_, n)| n.id).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }
}
