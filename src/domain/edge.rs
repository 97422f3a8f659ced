//! Parent/child edge as supplied by callers.

/// One `(child, parent)` relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<N> {
    pub child: N,
    pub parent: N,
}

impl<N> Edge<N> {
    pub fn new(child: N, parent: N) -> Self {
        Self { child, parent }
    }
}

impl<N> From<(N, N)> for Edge<N> {
    fn from((child, parent): (N, N)) -> Self {
        Self { child, parent }
    }
}

impl<N: Clone> From<&(N, N)> for Edge<N> {
    fn from((child, parent): &(N, N)) -> Self {
        Self {
            child: child.clone(),
            parent: parent.clone(),
        }
    }
}

impl<N: Clone> From<&Edge<N>> for Edge<N> {
    fn from(edge: &Edge<N>) -> Self {
        edge.clone()
    }
}
