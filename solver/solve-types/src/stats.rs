//! Statistics reported by a completed search.

use std::time::Duration;

/// Bookkeeping about how a search ran.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use solve_types::SearchStats;
///
/// let stats = SearchStats::new("BFS")
///     .with_nodes_expanded(42)
///     .with_elapsed(Duration::from_millis(3));
///
/// assert_eq!(stats.algorithm(), "BFS");
/// assert_eq!(stats.nodes_expanded(), 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStats {
    algorithm: String,
    nodes_expanded: usize,
    elapsed: Duration,
}

impl SearchStats {
    /// Creates stats for the named algorithm.
    #[must_use]
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            nodes_expanded: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Sets the number of cells dequeued during the search.
    #[must_use]
    pub fn with_nodes_expanded(mut self, nodes: usize) -> Self {
        self.nodes_expanded = nodes;
        self
    }

    /// Sets the wall-clock time the search took.
    #[must_use]
    pub const fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Returns the algorithm name.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Returns the number of cells dequeued.
    #[must_use]
    pub const fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Returns the wall-clock time the search took.
    #[must_use]
    pub const fn time_elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_builder() {
        let stats = SearchStats::new("BFS")
            .with_nodes_expanded(9)
            .with_elapsed(Duration::from_micros(120));
        assert_eq!(stats.algorithm(), "BFS");
        assert_eq!(stats.nodes_expanded(), 9);
        assert_eq!(stats.time_elapsed(), Duration::from_micros(120));
    }

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::default();
        assert_eq!(stats.algorithm(), "");
        assert_eq!(stats.nodes_expanded(), 0);
    }
}
