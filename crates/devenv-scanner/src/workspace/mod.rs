//! Workspace statistics: budgeted tree walk plus complexity score
//!
//! The walk is a depth-first, pre-order traversal in file-name order.
//! It counts every non-directory entry against a [`ScanBudget`], never
//! descends into ignored directories, and measures each major directory
//! in full with [`directory_size`], independent of the budget.

pub mod score;
pub mod sizer;

use crate::budget::{ScanBudget, DEFAULT_FILE_BUDGET};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use score::{bytes_to_mb, complexity_score};
pub use sizer::directory_size;

/// Directories never descended into when counting files
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".dart_tool",
    ".gradle",
    ".idea",
    ".vscode",
    "build",
    "dist",
    "out",
    ".next",
    "target",
    "bin",
    "obj",
];

/// Directories always sized in full, matched by exact name
pub const DEFAULT_MAJOR_DIRS: &[&str] = &[".git", "node_modules", ".dart_tool"];

/// Substring marking project directories that are also sized in full
pub const DEFAULT_MAJOR_MARKER: &str = "wawapp";

/// Raw outcome of a budgeted walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOutcome {
    /// Non-directory entries visited
    pub file_count: usize,
    /// Cumulative bytes per major directory name
    pub directory_bytes: BTreeMap<String, u64>,
    /// Whether the budget ran out before the walk finished
    pub stopped_early: bool,
    /// Whether the root directory could be listed at all
    pub root_accessible: bool,
}

/// Workspace statistics report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceStats {
    /// Root that was walked
    pub root: PathBuf,
    /// Files visited (never more than the budget)
    pub total_files: usize,
    /// Major directory sizes in megabytes, rounded to 2 decimals
    pub directory_sizes: BTreeMap<String, f64>,
    /// Complexity score in `0.0..=20.0`
    pub complexity_score: f64,
    /// True if the file budget stopped the walk early
    pub scan_stopped: bool,
    /// False if the root did not exist or could not be read
    pub root_accessible: bool,
    /// File budget the walk ran with
    pub max_files: usize,
}

/// Configurable workspace walker
#[derive(Debug, Clone)]
pub struct WorkspaceScanner {
    budget: usize,
    ignore_dirs: BTreeSet<String>,
    major_dirs: BTreeSet<String>,
    major_marker: Option<String>,
}

impl Default for WorkspaceScanner {
    fn default() -> Self {
        Self {
            budget: DEFAULT_FILE_BUDGET,
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| (*s).to_string()).collect(),
            major_dirs: DEFAULT_MAJOR_DIRS.iter().map(|s| (*s).to_string()).collect(),
            major_marker: Some(DEFAULT_MAJOR_MARKER.to_string()),
        }
    }
}

impl WorkspaceScanner {
    /// Create a scanner with the default budget and directory sets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of files to visit
    #[must_use]
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// Replace the set of directories that are never descended into
    #[must_use]
    pub fn with_ignore_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the exact-name major directory set
    #[must_use]
    pub fn with_major_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.major_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Set (or clear) the case-insensitive major directory marker
    #[must_use]
    pub fn with_major_marker(mut self, marker: Option<&str>) -> Self {
        self.major_marker = marker.map(str::to_lowercase);
        self
    }

    /// Configured file budget
    pub fn budget(&self) -> usize {
        self.budget
    }

    fn is_major(&self, name: &str) -> bool {
        self.major_dirs.contains(name)
            || self
                .major_marker
                .as_deref()
                .is_some_and(|marker| name.to_lowercase().contains(marker))
    }

    fn is_ignored(&self, name: &str) -> bool {
        self.ignore_dirs.contains(name)
    }

    /// Walk `root` under the configured budget.
    ///
    /// A missing or unreadable root yields an empty outcome with
    /// `root_accessible` unset. Unreadable subdirectories contribute
    /// nothing and the walk continues with their siblings.
    pub fn walk(&self, root: &Path) -> WalkOutcome {
        let mut outcome = WalkOutcome {
            root_accessible: fs::read_dir(root).is_ok(),
            ..WalkOutcome::default()
        };
        if !outcome.root_accessible {
            log::debug!("Workspace root not readable: {}", root.display());
            return outcome;
        }

        let mut budget = ScanBudget::new(self.budget);
        let mut entries = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(next) = entries.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(err) => {
                    log::debug!("Skipping unreadable entry: {err}");
                    continue;
                }
            };

            if !budget.check() {
                log::debug!(
                    "File budget of {} reached under {}",
                    budget.limit(),
                    root.display()
                );
                break;
            }

            if entry.file_type().is_dir() {
                let name = entry.file_name().to_string_lossy();
                if self.is_major(&name) {
                    let bytes = directory_size(entry.path());
                    *outcome.directory_bytes.entry(name.to_string()).or_insert(0) += bytes;
                }
                if self.is_ignored(&name) {
                    entries.skip_current_dir();
                }
            } else {
                budget.record_file();
            }
        }

        outcome.file_count = budget.visited();
        outcome.stopped_early = budget.is_exhausted();
        outcome
    }

    /// Walk `root` and reduce the outcome to a [`WorkspaceStats`] report
    pub fn scan(&self, root: &Path) -> WorkspaceStats {
        let outcome = self.walk(root);
        let complexity_score = complexity_score(outcome.file_count, &outcome.directory_bytes);

        WorkspaceStats {
            root: root.to_path_buf(),
            total_files: outcome.file_count,
            directory_sizes: outcome
                .directory_bytes
                .iter()
                .map(|(name, bytes)| (name.clone(), bytes_to_mb(*bytes)))
                .collect(),
            complexity_score,
            scan_stopped: outcome.stopped_early,
            root_accessible: outcome.root_accessible,
            max_files: self.budget,
        }
    }
}

/// Collect workspace statistics with the default configuration
pub fn workspace_stats(root: &Path, max_files: usize) -> WorkspaceStats {
    WorkspaceScanner::new().with_budget(max_files).scan(root)
}
