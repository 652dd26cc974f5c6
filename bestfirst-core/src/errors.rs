use thiserror::Error;

/// Terminal failure states of one search invocation.
///
/// The variants are never collapsed: `TimedOut` means "give me more time",
/// `Exhausted` means "no path exists", `ExpansionLimit` means the node
/// budget ran out first. All carry the number of expansions performed.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("search budget exhausted after {expanded} expansions ({elapsed_ms}ms)")]
    TimedOut { expanded: u64, elapsed_ms: u64 },

    #[error("frontier exhausted after {expanded} expansions; no goal reachable")]
    Exhausted { expanded: u64 },

    #[error("expansion limit reached after {expanded} expansions")]
    ExpansionLimit { expanded: u64 },

    #[error(transparent)]
    Graph(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_distinguishes_failure_kinds() {
        let t = SearchError::TimedOut { expanded: 3, elapsed_ms: 12 };
        let e = SearchError::Exhausted { expanded: 4 };
        let l = SearchError::ExpansionLimit { expanded: 5 };
        assert!(t.to_string().contains("budget"));
        assert!(e.to_string().contains("no goal reachable"));
        assert!(l.to_string().contains("expansion limit"));
    }

    #[test]
    fn graph_errors_pass_through() {
        let err: SearchError = anyhow::anyhow!("backend unavailable").into();
        assert_eq!(err.to_string(), "backend unavailable");
    }
}
