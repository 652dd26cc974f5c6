use std::time::Duration;

use tracing::debug;

use crate::errors::SearchError;
use crate::graph::GraphProvider;
use crate::models::SearchResult;
use crate::options::SearchOptions;

use super::deadline::Deadline;
use super::frontier::Frontier;
use super::visited::Visited;

/// Best-first search over a borrowed graph adapter.
///
/// One `search` call owns its open and closed sets exclusively and carries
/// no state across calls; separate calls are independent and may run on
/// separate threads with their own adapters.
///
/// Optimality holds only when edge costs are non-negative and the heuristic
/// is admissible and consistent. The engine does not verify either; a
/// violation produces a suboptimal path, not an error.
pub struct AStar<'a, G: GraphProvider> {
    graph: &'a G,
}

impl<'a, G: GraphProvider> AStar<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Run the search with the wall-clock budget from `options`, captured
    /// as a deadline at entry.
    pub fn search<P, H>(
        &self,
        start: G::Node,
        is_goal: P,
        heuristic: H,
        options: &SearchOptions,
    ) -> Result<SearchResult<G::Node>, SearchError>
    where
        P: Fn(&G::Node) -> bool,
        H: Fn(&G::Node) -> f64,
    {
        let deadline = Deadline::after(Duration::from_millis(options.timeout_ms));
        self.search_until(start, is_goal, heuristic, options, deadline)
    }

    /// Run the search against a caller-constructed [`Deadline`].
    pub fn search_until<P, H>(
        &self,
        start: G::Node,
        is_goal: P,
        heuristic: H,
        options: &SearchOptions,
        deadline: Deadline,
    ) -> Result<SearchResult<G::Node>, SearchError>
    where
        P: Fn(&G::Node) -> bool,
        H: Fn(&G::Node) -> f64,
    {
        let mut open: Frontier<G::Node> = Frontier::new();
        let mut closed: Visited<G::Node> = Visited::new();
        let mut expanded: u64 = 0;

        let h0 = heuristic(&start);
        open.push(start, 0.0, h0, None);

        loop {
            if open.is_empty() {
                debug!(expanded, "frontier_exhausted");
                return Err(SearchError::Exhausted { expanded });
            }
            if deadline.expired() {
                let elapsed_ms = deadline.elapsed().as_millis() as u64;
                debug!(expanded, elapsed_ms, "search_timeout");
                return Err(SearchError::TimedOut { expanded, elapsed_ms });
            }

            let Some(current) = open.pop() else {
                return Err(SearchError::Exhausted { expanded });
            };

            // The popped entry is cost-finalized; record it before the goal
            // test so reconstruction can walk uniformly from the anchor.
            closed.insert(current.node.clone(), current.g, current.parent.clone());
            expanded += 1;
            if expanded > options.max_expansions {
                debug!(expanded, "expansion_limit");
                return Err(SearchError::ExpansionLimit { expanded });
            }

            // Goal test on the node selected for expansion, never on a
            // freshly generated successor.
            if is_goal(&current.node) {
                let path = reconstruct(&closed, &current.node);
                debug!(expanded, cost = current.g, path_len = path.len(), "goal_found");
                return Ok(SearchResult { path, cost: current.g, expanded });
            }

            for edge in self.graph.successors(&current.node)? {
                let tentative = current.g + edge.cost;
                // Expanded nodes are never reopened
                if closed.contains(&edge.to) {
                    continue;
                }
                if !open.improves(&edge.to, tentative) {
                    continue;
                }
                let h = heuristic(&edge.to);
                open.push(edge.to, tentative, h, Some(current.node.clone()));
            }
        }
    }
}

/// Walk parent links backward from the goal anchor, then reverse into
/// start-to-goal order. The start's record has no parent, which terminates
/// the walk; a start that is itself the goal yields a single-node path.
fn reconstruct<N: Clone + Ord>(closed: &Visited<N>, goal: &N) -> Vec<N> {
    let mut path = vec![goal.clone()];
    let mut cursor = closed.get(goal).and_then(|e| e.parent.clone());
    while let Some(node) = cursor {
        cursor = closed.get(&node).and_then(|e| e.parent.clone());
        path.push(node);
    }
    path.reverse();
    path
}
