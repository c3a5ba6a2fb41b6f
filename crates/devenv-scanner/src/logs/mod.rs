//! Log scanning: locate, tail-read, extract, summarize
//!
//! Candidates are found by [`LogLocator`], sliced to the file cap, read
//! through [`read_bounded`], analysed by [`IssueExtractor`], and folded
//! into a [`LogScanResult`] by [`summarize`]. Files are processed one at a
//! time in discovery order.

pub mod analyze;
pub mod extension;
pub mod locate;
pub mod reader;
pub mod summary;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use analyze::{IssueExtractor, LogAnalysis};
pub use locate::LogLocator;
pub use reader::{read_bounded, BoundedText};
pub use summary::summarize;

/// Maximum number of candidate files read per scan
pub const DEFAULT_MAX_FILES: usize = 20;

/// Result of a log scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogScanResult {
    /// Files that were read, in processing order
    pub scanned_files: Vec<PathBuf>,
    /// Candidate files found (may exceed `scanned_files`)
    pub total_files: usize,
    /// Warning lines across scanned files
    pub warning_count: usize,
    /// Error lines across scanned files
    pub error_count: usize,
    /// Most recent performance-related lines across scanned files
    pub performance_issues: Vec<String>,
    /// One-line human-readable summary
    pub summary: String,
    /// False if the root did not exist or could not be read
    pub root_accessible: bool,
}

/// Configurable log scanner
#[derive(Debug, Clone)]
pub struct LogScanner {
    locator: LogLocator,
    extractor: IssueExtractor,
    max_files: usize,
    tail_bytes: u64,
    max_total_lines: usize,
}

impl Default for LogScanner {
    fn default() -> Self {
        Self {
            locator: LogLocator::default(),
            extractor: IssueExtractor::default(),
            max_files: DEFAULT_MAX_FILES,
            tail_bytes: reader::DEFAULT_TAIL_BYTES,
            max_total_lines: summary::DEFAULT_TOTAL_LINES,
        }
    }
}

impl LogScanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom locator
    #[must_use]
    pub fn with_locator(mut self, locator: LogLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Use a custom extractor
    #[must_use]
    pub fn with_extractor(mut self, extractor: IssueExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Set the maximum number of files read
    #[must_use]
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    /// Set the size above which only the file's tail is read
    #[must_use]
    pub fn with_tail_bytes(mut self, tail_bytes: u64) -> Self {
        self.tail_bytes = tail_bytes;
        self
    }

    /// Set the aggregate line cap
    #[must_use]
    pub fn with_max_total_lines(mut self, max_total_lines: usize) -> Self {
        self.max_total_lines = max_total_lines;
        self
    }

    /// Read and analyse a single file
    pub fn analyze_file(&self, path: &Path) -> LogAnalysis {
        let text = read_bounded(path, self.tail_bytes);
        self.extractor.analyze(text.text())
    }

    /// Scan `root` for logs and summarize what they report
    pub fn scan(&self, root: &Path) -> LogScanResult {
        let root_accessible = fs::read_dir(root).is_ok();
        if !root_accessible {
            log::debug!("Log root not readable: {}", root.display());
        }

        let candidates = self.locator.find_log_files(root);
        let total_files = candidates.len();
        log::debug!(
            "Found {total_files} log candidates under {}, reading up to {}",
            root.display(),
            self.max_files
        );

        let analyses = candidates
            .into_iter()
            .take(self.max_files)
            .map(|path| {
                let analysis = self.analyze_file(&path);
                (path, analysis)
            })
            .collect();

        summarize(analyses, total_files, self.max_total_lines, root_accessible)
    }
}

/// Scan `root` with the default configuration
pub fn scan_logs(root: &Path) -> LogScanResult {
    LogScanner::new().scan(root)
}
