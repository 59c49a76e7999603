//! Search configuration and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared flag for cooperative cancellation of a running search.
///
/// The Manager keeps one clone and hands another to the search query;
/// the engine polls the flag each time a cell is dequeued and winds down
/// with a `Cancelled` outcome when it is set. This lets a caller enforce
/// a time budget during live exploration without killing the thread.
///
/// # Example
///
/// ```
/// use solve_types::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
///
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a fresh, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. All clones of this token observe the
    /// request.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Configuration for breadth-first maze searches.
///
/// Defaults to no node budget and no cancellation token. A search query
/// owns its traversal state, so independent queries against the same
/// maze may run concurrently with separate configs.
///
/// # Example
///
/// ```
/// use solve_types::{BfsConfig, CancelToken};
///
/// let token = CancelToken::new();
/// let config = BfsConfig::default()
///     .with_max_nodes(50_000)
///     .with_cancel(token.clone());
///
/// assert_eq!(config.max_nodes(), Some(50_000));
/// assert!(config.cancel().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BfsConfig {
    /// Maximum number of cells to dequeue before giving up.
    max_nodes: Option<usize>,
    /// Cancellation token polled at each dequeue.
    cancel: Option<CancelToken>,
}

impl BfsConfig {
    /// Creates a configuration with no limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of cells to dequeue.
    ///
    /// A breadth-first search is already bounded by the maze's total
    /// cell count; this budget only matters for callers that want to
    /// give up earlier.
    #[must_use]
    pub const fn with_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = Some(max);
        self
    }

    /// Removes the node budget.
    #[must_use]
    pub const fn without_max_nodes(mut self) -> Self {
        self.max_nodes = None;
        self
    }

    /// Sets the cancellation token.
    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Returns the node budget, if set.
    #[must_use]
    pub const fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Returns the cancellation token, if set.
    #[must_use]
    pub const fn cancel(&self) -> Option<&CancelToken> {
        self.cancel.as_ref()
    }
}
