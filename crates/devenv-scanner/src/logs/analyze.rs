//! Per-file issue extraction

use crate::retention::RetainedLines;
use serde::{Deserialize, Serialize};

/// Lines kept per file
pub const DEFAULT_LINES_PER_FILE: usize = 10;

/// Keywords that flag a line as performance related
pub const DEFAULT_PERFORMANCE_KEYWORDS: &[&str] = &[
    "slow",
    "latency",
    "timeout",
    "delay",
    "performance",
    "workspace indexing",
    "indexing",
    "telemetry",
    "memory",
    "cpu",
    "hang",
    "freeze",
];

/// Findings from one log file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogAnalysis {
    /// Lines containing "warn" (case-insensitive)
    pub warnings: usize,
    /// Lines containing "error" (case-insensitive)
    pub errors: usize,
    /// Most recent performance-related lines, trimmed, oldest first
    pub performance_lines: Vec<String>,
}

/// Line scanner counting warnings/errors and retaining keyword hits
#[derive(Debug, Clone)]
pub struct IssueExtractor {
    keywords: Vec<String>,
    max_lines: usize,
}

impl Default for IssueExtractor {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_PERFORMANCE_KEYWORDS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
            max_lines: DEFAULT_LINES_PER_FILE,
        }
    }
}

impl IssueExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the keyword list; matching is case-insensitive
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Set how many matching lines a single file may retain
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Scan `text` line by line.
    ///
    /// A line may count as both a warning and an error. A line matching
    /// several keywords is retained once.
    pub fn analyze(&self, text: &str) -> LogAnalysis {
        let mut warnings = 0;
        let mut errors = 0;
        let mut retained = RetainedLines::new(self.max_lines);

        for line in text.lines() {
            let lower = line.to_lowercase();

            if lower.contains("warn") {
                warnings += 1;
            }
            if lower.contains("error") {
                errors += 1;
            }
            if self.keywords.iter().any(|k| lower.contains(k.as_str())) {
                retained.push(line.trim().to_string());
            }
        }

        LogAnalysis {
            warnings,
            errors,
            performance_lines: retained.into_vec(),
        }
    }
}
