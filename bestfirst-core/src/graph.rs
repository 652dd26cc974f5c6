/// A directed arc produced by a [`GraphProvider`] for one expansion.
///
/// Edges are transient: the engine reads them during relaxation and never
/// stores them. `cost` must be non-negative; the engine does not validate
/// this, and a negative cost silently breaks optimality.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<N> {
    pub from: N,
    pub to: N,
    pub cost: f64,
}

impl<N> Edge<N> {
    pub fn new(from: N, to: N, cost: f64) -> Self {
        Self { from, to, cost }
    }
}

/// The graph adapter consumed by the search engine.
///
/// Implementors supply successor generation for an opaque node type. The
/// node's `Ord` impl is the engine's notion of identity: two nodes that
/// compare equal are the same node for deduplication. The order must be a
/// consistent total order for the duration of one search call.
///
/// `successors` must terminate and be side-effect-free; it may be called
/// once per expanded node in any order. Adapters backed by I/O can fail,
/// which aborts the search with [`crate::errors::SearchError::Graph`].
pub trait GraphProvider {
    type Node: Clone + Ord;

    fn successors(&self, node: &Self::Node) -> anyhow::Result<Vec<Edge<Self::Node>>>;
}
