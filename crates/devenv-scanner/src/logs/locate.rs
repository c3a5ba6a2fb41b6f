//! Candidate log file discovery

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File-name markers identifying the extension's own logs
pub const DEFAULT_NAME_MARKERS: &[&str] = &["amazon-q", "lserver"];

/// Directory-path markers identifying the extension's log folders
pub const DEFAULT_DIR_MARKERS: &[&str] = &["amazon-q"];

/// Extension that always qualifies a file as a log
pub const DEFAULT_LOG_EXTENSION: &str = "log";

/// Heuristics deciding which files are log candidates
#[derive(Debug, Clone)]
pub struct LogLocator {
    name_markers: Vec<String>,
    dir_markers: Vec<String>,
    extension: String,
}

impl Default for LogLocator {
    fn default() -> Self {
        Self {
            name_markers: DEFAULT_NAME_MARKERS.iter().map(|m| (*m).to_string()).collect(),
            dir_markers: DEFAULT_DIR_MARKERS.iter().map(|m| (*m).to_string()).collect(),
            extension: DEFAULT_LOG_EXTENSION.to_string(),
        }
    }
}

impl LogLocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the file-name markers (matched against the lowercase name)
    #[must_use]
    pub fn with_name_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.name_markers = markers.into_iter().map(|m| m.as_ref().to_lowercase()).collect();
        self
    }

    /// Replace the directory-path markers (matched against the lowercase parent path)
    #[must_use]
    pub fn with_dir_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dir_markers = markers.into_iter().map(|m| m.as_ref().to_lowercase()).collect();
        self
    }

    /// Whether a file at `path` looks like a log
    pub fn is_candidate(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if self.name_markers.iter().any(|m| name.contains(m.as_str())) {
            return true;
        }

        let parent = path
            .parent()
            .map(|p| p.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if self.dir_markers.iter().any(|m| parent.contains(m.as_str())) {
            return true;
        }

        name.ends_with(&format!(".{}", self.extension))
    }

    /// Recursively list candidate log files under `root`.
    ///
    /// There is no budget here; callers slice the result before reading.
    /// Entries are visited in file-name order so the result is stable for
    /// an unchanged tree. Unreadable directories contribute nothing.
    pub fn find_log_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut found = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::debug!("Skipping unreadable entry: {err}");
                    continue;
                }
            };

            if entry.file_type().is_file() && self.is_candidate(entry.path()) {
                found.push(entry.into_path());
            }
        }

        found
    }
}
