//! Editor extension logs kept under the VS Code workspace storage

use super::reader::{read_bounded, BoundedText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension identifiers whose logs are collected by default
pub const DEFAULT_EXTENSION_IDS: &[&str] = &["amazonwebservices.amazon-q-vscode", "anthropic.claude-code"];

const TRUNCATION_MARKER: &str = "...[truncated]...\n";

/// Options for collecting extension logs
#[derive(Debug, Clone)]
pub struct ExtensionLogOptions {
    /// Attach file content to the newest files
    pub include_content: bool,
    /// Number of newest files that get content attached
    pub max_files: usize,
    /// Bytes read from the end of each file
    pub max_bytes: u64,
}

impl Default for ExtensionLogOptions {
    fn default() -> Self {
        Self {
            include_content: true,
            max_files: 5,
            max_bytes: 50_000,
        }
    }
}

/// A single extension log file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionLogFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Logs for one extension, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionLogs {
    pub extension_id: String,
    pub files: Vec<ExtensionLogFile>,
}

/// Logs for all requested extensions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtensionLogsReport {
    pub storage_dir: PathBuf,
    pub extensions: Vec<ExtensionLogs>,
    /// Problems that prevented collection
    pub errors: Vec<String>,
}

/// Default VS Code workspace storage directory for this platform
pub fn workspace_storage_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join("Code").join("User").join("workspaceStorage"))
}

/// Collect logs for every id in `extension_ids` under `storage_dir`
pub fn collect_extension_logs(
    storage_dir: &Path,
    extension_ids: &[&str],
    options: &ExtensionLogOptions,
) -> ExtensionLogsReport {
    let mut report = ExtensionLogsReport {
        storage_dir: storage_dir.to_path_buf(),
        ..ExtensionLogsReport::default()
    };

    let workspaces = match fs::read_dir(storage_dir) {
        Ok(entries) => {
            let mut dirs: Vec<PathBuf> = entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.is_dir())
                .collect();
            dirs.sort();
            dirs
        }
        Err(err) => {
            report.errors.push(format!(
                "Workspace storage path not accessible: {} ({err})",
                storage_dir.display()
            ));
            return report;
        }
    };

    for extension_id in extension_ids {
        let mut files: Vec<ExtensionLogFile> = workspaces
            .iter()
            .flat_map(|workspace| list_log_files(&workspace.join(extension_id).join("logs")))
            .collect();

        files.sort_by(|a, b| b.modified.cmp(&a.modified));

        if options.include_content {
            for file in files.iter_mut().take(options.max_files) {
                file.content = Some(match read_bounded(&file.path, options.max_bytes) {
                    BoundedText::Whole(text) => text,
                    BoundedText::Tail(text) => format!("{TRUNCATION_MARKER}{text}"),
                    BoundedText::Unreadable => "Error reading file".to_string(),
                });
            }
        }

        report.extensions.push(ExtensionLogs {
            extension_id: (*extension_id).to_string(),
            files,
        });
    }

    report
}

fn list_log_files(logs_dir: &Path) -> Vec<ExtensionLogFile> {
    let Ok(entries) = fs::read_dir(logs_dir) else {
        return Vec::new();
    };

    entries
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            if !(name.ends_with(".log") || name.ends_with(".txt")) {
                return None;
            }
            let metadata = entry.metadata().ok()?;
            if !metadata.is_file() {
                return None;
            }
            Some(ExtensionLogFile {
                path: entry.path(),
                name,
                size: metadata.len(),
                modified: metadata.modified().ok().map(DateTime::<Utc>::from),
                content: None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    const EXT: &str = "amazonwebservices.amazon-q-vscode";

    fn write_log(dir: &Path, name: &str, content: &str, age_secs: u64) {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        let file = File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
            .unwrap();
    }

    #[test]
    fn test_collects_newest_first_with_content() {
        let temp = TempDir::new().unwrap();
        let storage = temp.path();
        write_log(&storage.join("ws1").join(EXT).join("logs"), "old.log", "old", 600);
        write_log(&storage.join("ws2").join(EXT).join("logs"), "new.txt", "new", 10);
        write_log(&storage.join("ws2").join(EXT).join("logs"), "skip.json", "{}", 10);

        let options = ExtensionLogOptions {
            max_files: 1,
            ..ExtensionLogOptions::default()
        };
        let report = collect_extension_logs(storage, &[EXT], &options);

        assert!(report.errors.is_empty());
        let files = &report.extensions[0].files;
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "new.txt");
        assert_eq!(files[0].content.as_deref(), Some("new"));
        assert!(files[1].content.is_none());
    }

    #[test]
    fn test_large_log_is_truncated() {
        let temp = TempDir::new().unwrap();
        let logs = temp.path().join("ws").join(EXT).join("logs");
        write_log(&logs, "big.log", &"x".repeat(100), 0);

        let options = ExtensionLogOptions {
            max_bytes: 10,
            ..ExtensionLogOptions::default()
        };
        let report = collect_extension_logs(temp.path(), &[EXT], &options);

        let content = report.extensions[0].files[0].content.clone().unwrap();
        assert_eq!(content, format!("{TRUNCATION_MARKER}xxxxxxxxxx"));
    }

    #[test]
    fn test_missing_storage_reports_error() {
        let temp = TempDir::new().unwrap();
        let report = collect_extension_logs(
            &temp.path().join("missing"),
            DEFAULT_EXTENSION_IDS,
            &ExtensionLogOptions::default(),
        );

        assert!(report.extensions.is_empty());
        assert_eq!(report.errors.len(), 1);
    }
}
