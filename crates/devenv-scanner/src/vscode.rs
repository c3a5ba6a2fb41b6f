//! VS Code installation, extension, and settings inspection

use crate::error::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Extension id prefix looked up by default
pub const DEFAULT_EXTENSION_PREFIX: &str = "amazonwebservices.amazon-q-vscode";

/// Setting key markers kept by default
pub const DEFAULT_SETTING_MARKERS: &[&str] = &["amazonq", "amazon-q"];

/// Editor launcher used when none is given
pub const DEFAULT_CODE_BINARY: &str = if cfg!(windows) { "code.cmd" } else { "code" };

/// Installed extension details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionInfo {
    pub installed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Extension-related settings from user and workspace scopes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelevantSettings {
    pub user: Map<String, Value>,
    pub workspace: Map<String, Value>,
}

/// Editor information report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VsCodeInfo {
    /// First line of `code --version`, if the editor could be run
    pub version: Option<String>,
    pub extension: ExtensionInfo,
    pub settings: RelevantSettings,
}

impl VsCodeInfo {
    /// Collect editor information for this machine.
    ///
    /// `workspace_dir` is the project whose `.vscode/settings.json` is read.
    pub fn collect(workspace_dir: &Path, code_binary: &str) -> Self {
        let version = match editor_version(code_binary) {
            Ok(version) => Some(version),
            Err(err) => {
                log::debug!("Editor version unavailable: {err}");
                None
            }
        };

        let extension = dirs::home_dir()
            .map(|home| home.join(".vscode").join("extensions"))
            .map(|dir| find_extension(&dir, DEFAULT_EXTENSION_PREFIX))
            .unwrap_or_default();

        let user = user_settings_path()
            .map(|path| filtered_settings(&path, DEFAULT_SETTING_MARKERS))
            .unwrap_or_default();
        let workspace = filtered_settings(
            &workspace_dir.join(".vscode").join("settings.json"),
            DEFAULT_SETTING_MARKERS,
        );

        Self {
            version,
            extension,
            settings: RelevantSettings { user, workspace },
        }
    }
}

/// Platform path of the VS Code user settings file
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join("Code").join("User").join("settings.json"))
}

/// Run `<binary> --version` and return the first line of its output
pub fn editor_version(binary: &str) -> ScanResult<String> {
    let output = Command::new(binary)
        .arg("--version")
        .output()
        .map_err(|e| ScanError::CommandFailed(format!("{binary}: {e}")))?;

    if !output.status.success() {
        return Err(ScanError::CommandFailed(format!(
            "{binary} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .ok_or_else(|| ScanError::CommandFailed(format!("{binary} printed no version")))
}

/// Find the first extension directory (by name) starting with `prefix`
pub fn find_extension(extensions_dir: &Path, prefix: &str) -> ExtensionInfo {
    let Ok(entries) = fs::read_dir(extensions_dir) else {
        return ExtensionInfo::default();
    };

    let mut matches: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(prefix))
        .map(|entry| entry.path())
        .collect();
    matches.sort();

    let Some(path) = matches.into_iter().next() else {
        return ExtensionInfo::default();
    };

    let version = match read_package_version(&path.join("package.json")) {
        Ok(version) => version,
        Err(err) => {
            log::warn!("Failed to read extension manifest in {path:?}: {err}");
            "unknown".to_string()
        }
    };

    ExtensionInfo {
        installed: true,
        version: Some(version),
        path: Some(path),
    }
}

fn read_package_version(manifest: &Path) -> ScanResult<String> {
    #[derive(Deserialize)]
    struct PackageJson {
        version: Option<String>,
    }

    let content = fs::read_to_string(manifest)?;
    let package: PackageJson = serde_json::from_str(&content)?;
    package
        .version
        .ok_or_else(|| {
            ScanError::MissingField(format!("version in {}", manifest.display()))
        })
}

/// Read a JSON settings file, keeping only keys containing one of `markers`.
///
/// A missing or unparsable file yields an empty map.
pub fn filtered_settings(path: &Path, markers: &[&str]) -> Map<String, Value> {
    if !path.exists() {
        return Map::new();
    }

    match read_settings(path) {
        Ok(settings) => settings
            .into_iter()
            .filter(|(key, _)| {
                let key = key.to_lowercase();
                markers.iter().any(|m| key.contains(m))
            })
            .collect(),
        Err(err) => {
            log::warn!("Failed to parse settings at {path:?}: {err}");
            Map::new()
        }
    }
}

fn read_settings(path: &Path) -> ScanResult<Map<String, Value>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
