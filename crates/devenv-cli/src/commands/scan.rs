//! Bounded scan commands
//!
//! Handles: devenv workspace, devenv logs

use anyhow::Result;
use std::path::Path;

use devenv_scanner::output::{log_scan_markdown, workspace_markdown};
use devenv_scanner::{LogScanner, WorkspaceScanner};

use super::print_json;
use crate::OutputFormat;

pub fn run_workspace(root: &Path, max_files: usize, format: OutputFormat) -> Result<()> {
    let stats = WorkspaceScanner::new().with_budget(max_files).scan(root);

    if !stats.root_accessible {
        log::warn!("Workspace root is not readable: {}", root.display());
    }

    match format {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Markdown => {
            print!("{}", workspace_markdown(&stats));
            Ok(())
        }
    }
}

pub fn run_logs(root: &Path, max_files: usize, format: OutputFormat) -> Result<()> {
    let result = LogScanner::new().with_max_files(max_files).scan(root);

    if !result.root_accessible {
        log::warn!("Log root is not readable: {}", root.display());
    }

    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Markdown => {
            print!("{}", log_scan_markdown(&result));
            Ok(())
        }
    }
}
