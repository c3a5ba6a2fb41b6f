//! Markdown output formatter

use crate::logs::LogScanResult;
use crate::workspace::WorkspaceStats;

/// Render workspace statistics as a Markdown report
#[must_use]
pub fn workspace_markdown(stats: &WorkspaceStats) -> String {
    let mut output = String::new();

    output.push_str("# Workspace Statistics\n\n");
    output.push_str(&format!("- **Root:** {}\n", stats.root.display()));
    if !stats.root_accessible {
        output.push_str("- **Root accessible:** no\n");
    }
    output.push_str(&format!("- **Files:** {}\n", stats.total_files));
    output.push_str(&format!(
        "- **Complexity score:** {} / 20\n",
        stats.complexity_score
    ));
    if stats.scan_stopped {
        output.push_str(&format!(
            "- **Scan stopped early:** file budget of {} reached\n",
            stats.max_files
        ));
    }
    output.push('\n');

    output.push_str("## Major Directories\n\n");
    if stats.directory_sizes.is_empty() {
        output.push_str("_No major directories found_\n");
    } else {
        output.push_str("| Directory | Size (MB) |\n|---|---|\n");
        for (name, mb) in &stats.directory_sizes {
            output.push_str(&format!("| {name} | {mb:.2} |\n"));
        }
    }

    output
}

/// Render a log scan as a Markdown report
#[must_use]
pub fn log_scan_markdown(result: &LogScanResult) -> String {
    let mut output = String::new();

    output.push_str("# Log Scan\n\n");
    output.push_str(&format!("{}\n\n", result.summary));
    output.push_str(&format!(
        "- **Candidates:** {} ({} scanned)\n",
        result.total_files,
        result.scanned_files.len()
    ));
    output.push_str(&format!("- **Warnings:** {}\n", result.warning_count));
    output.push_str(&format!("- **Errors:** {}\n\n", result.error_count));

    output.push_str("## Scanned Files\n\n");
    if result.scanned_files.is_empty() {
        output.push_str("_No log files found_\n\n");
    } else {
        for path in &result.scanned_files {
            output.push_str(&format!("- `{}`\n", path.display()));
        }
        output.push('\n');
    }

    output.push_str("## Performance Entries\n\n");
    if result.performance_issues.is_empty() {
        output.push_str("_None_\n");
    } else {
        output.push_str("```\n");
        for line in &result.performance_issues {
            output.push_str(&format!("{line}\n"));
        }
        output.push_str("```\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    #[test]
    fn test_workspace_markdown() {
        let stats = WorkspaceStats {
            root: PathBuf::from("/work/app"),
            total_files: 20_000,
            directory_sizes: BTreeMap::from([("node_modules".to_string(), 412.5)]),
            complexity_score: 14.13,
            scan_stopped: true,
            root_accessible: true,
            max_files: 20_000,
        };

        let md = workspace_markdown(&stats);
        assert!(md.contains("- **Files:** 20000"));
        assert!(md.contains("| node_modules | 412.50 |"));
        assert!(md.contains("file budget of 20000 reached"));
    }

    #[test]
    fn test_log_scan_markdown_empty() {
        let result = crate::logs::summarize(Vec::new(), 0, 20, true);
        let md = log_scan_markdown(&result);
        assert!(md.contains("_No log files found_"));
        assert!(md.contains("_None_"));
    }
}
