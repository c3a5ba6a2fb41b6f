//! Editor inspection commands
//!
//! Handles: devenv vscode, devenv extension-logs

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use devenv_scanner::logs::extension::{
    collect_extension_logs, workspace_storage_dir, ExtensionLogOptions, DEFAULT_EXTENSION_IDS,
};
use devenv_scanner::VsCodeInfo;

use super::print_json;

pub fn run_vscode(workspace: &Path, code_binary: &str) -> Result<()> {
    print_json(&VsCodeInfo::collect(workspace, code_binary))
}

pub fn run_extension_logs(
    extensions: &[String],
    storage: Option<PathBuf>,
    options: &ExtensionLogOptions,
) -> Result<()> {
    let storage = match storage {
        Some(dir) => dir,
        None => workspace_storage_dir().context("Could not determine the config directory")?,
    };

    let ids: Vec<&str> = if extensions.is_empty() {
        DEFAULT_EXTENSION_IDS.to_vec()
    } else {
        extensions.iter().map(String::as_str).collect()
    };

    let report = collect_extension_logs(&storage, &ids, options);
    for error in &report.errors {
        log::warn!("{error}");
    }
    print_json(&report)
}
