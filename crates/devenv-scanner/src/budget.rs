//! File-count budget shared by one traversal

/// Default number of files a workspace walk may visit
pub const DEFAULT_FILE_BUDGET: usize = 20_000;

/// Ceiling on the number of files a single traversal may visit.
///
/// One budget is created per walk and threaded through it by `&mut`;
/// nothing is shared between scans.
#[derive(Debug, Clone)]
pub struct ScanBudget {
    limit: usize,
    visited: usize,
    exhausted: bool,
}

impl ScanBudget {
    /// Create a budget allowing `limit` files
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            visited: 0,
            exhausted: false,
        }
    }

    /// Check whether another entry may be visited.
    ///
    /// Once the ceiling has been reached this latches the exhausted flag,
    /// so a walk that hits the limit with entries left over reports that
    /// it stopped early.
    pub fn check(&mut self) -> bool {
        if self.visited >= self.limit {
            self.exhausted = true;
        }
        !self.exhausted
    }

    /// Record one visited file
    pub fn record_file(&mut self) {
        self.visited += 1;
    }

    /// Files visited so far
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Configured ceiling
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether the walk was cut short by this budget
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl Default for ScanBudget {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_BUDGET)
    }
}
