//! Aggregation of per-file log analyses

use super::analyze::LogAnalysis;
use super::LogScanResult;
use crate::retention::RetainedLines;
use std::path::PathBuf;

/// Lines kept across all scanned files
pub const DEFAULT_TOTAL_LINES: usize = 20;

/// Fold per-file analyses, in processing order, into one report.
///
/// `total_files` is the number of candidates found, which may exceed the
/// number of files actually scanned. Aggregate lines keep only the most
/// recent `max_lines` entries; the summary counts every line the files
/// retained before that cap.
pub fn summarize(
    analyses: Vec<(PathBuf, LogAnalysis)>,
    total_files: usize,
    max_lines: usize,
    root_accessible: bool,
) -> LogScanResult {
    let mut scanned_files = Vec::with_capacity(analyses.len());
    let mut warning_count = 0;
    let mut error_count = 0;
    let mut retained_total = 0;
    let mut performance_issues = RetainedLines::new(max_lines);

    for (path, analysis) in analyses {
        warning_count += analysis.warnings;
        error_count += analysis.errors;
        retained_total += analysis.performance_lines.len();
        performance_issues.extend(analysis.performance_lines);
        scanned_files.push(path);
    }

    let summary = format!(
        "Scanned {} log files. Found {warning_count} warnings, {error_count} errors, and {retained_total} performance-related entries.",
        scanned_files.len()
    );

    LogScanResult {
        scanned_files,
        total_files,
        warning_count,
        error_count,
        performance_issues: performance_issues.into_vec(),
        summary,
        root_accessible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(warnings: usize, errors: usize, prefix: &str, lines: usize) -> LogAnalysis {
        LogAnalysis {
            warnings,
            errors,
            performance_lines: (0..lines).map(|i| format!("{prefix} slow {i}")).collect(),
        }
    }

    #[test]
    fn test_sums_counts_and_caps_lines() {
        let analyses = vec![
            (PathBuf::from("a.log"), analysis(1, 2, "a", 10)),
            (PathBuf::from("b.log"), analysis(3, 0, "b", 10)),
            (PathBuf::from("c.log"), analysis(0, 4, "c", 5)),
        ];

        let result = summarize(analyses, 42, DEFAULT_TOTAL_LINES, true);

        assert_eq!(result.total_files, 42);
        assert_eq!(result.scanned_files.len(), 3);
        assert_eq!(result.warning_count, 4);
        assert_eq!(result.error_count, 6);
        assert_eq!(result.performance_issues.len(), 20);
        assert_eq!(result.performance_issues.first().unwrap(), "a slow 5");
        assert_eq!(result.performance_issues.last().unwrap(), "c slow 4");
        assert_eq!(
            result.summary,
            "Scanned 3 log files. Found 4 warnings, 6 errors, and 25 performance-related entries."
        );
    }

    #[test]
    fn test_empty_input() {
        let result = summarize(Vec::new(), 0, DEFAULT_TOTAL_LINES, false);
        assert!(result.scanned_files.is_empty());
        assert!(result.performance_issues.is_empty());
        assert!(!result.root_accessible);
        assert_eq!(
            result.summary,
            "Scanned 0 log files. Found 0 warnings, 0 errors, and 0 performance-related entries."
        );
    }
}
