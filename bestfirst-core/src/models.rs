use serde::{Deserialize, Serialize};

/// Outcome of a successful search.
///
/// `path` runs from the start node to the first goal-satisfying node
/// inclusive; `cost` is the accumulated edge cost of that path; `expanded`
/// counts the nodes that were selected for expansion before the goal was
/// reached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<N> {
    pub path: Vec<N>,
    pub cost: f64,
    pub expanded: u64,
}
