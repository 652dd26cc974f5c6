use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Budgets for one search invocation.
///
/// `timeout_ms` is the wall-clock budget, captured as a deadline at call
/// entry; a budget of zero fails the search immediately with `TimedOut`
/// before any expansion. `max_expansions` bounds the number of nodes
/// selected for expansion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub timeout_ms: u64,
    pub max_expansions: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

impl SearchOptions {
    pub fn with_timeout_ms(timeout_ms: u64) -> Self {
        Self { timeout_ms, ..Self::default() }
    }
}
