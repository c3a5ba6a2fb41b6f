//! PATH and tool-home environment inspection

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// Tool-home variables reported, as `(reported name, source variable)`.
/// When two sources map to one name the later one wins.
const TOOL_HOME_VARS: &[(&str, &str)] = &[
    ("JAVA_HOME", "JAVA_HOME"),
    ("ANDROID_HOME", "ANDROID_HOME"),
    ("ANDROID_HOME", "ANDROID_SDK_ROOT"),
    ("GRADLE_HOME", "GRADLE_HOME"),
    ("FLUTTER_HOME", "FLUTTER_HOME"),
    ("FLUTTER_HOME", "FLUTTER_ROOT"),
    ("DART_HOME", "DART_HOME"),
    ("NODE_HOME", "NODE_HOME"),
    ("PYTHON_HOME", "PYTHON_HOME"),
];

/// PATH entries and tool-home variables of the current process
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvInspection {
    pub path: Vec<PathBuf>,
    pub tool_homes: BTreeMap<String, String>,
}

impl EnvInspection {
    /// Inspect the current process environment
    #[must_use]
    pub fn current() -> Self {
        Self::from_lookup(std::env::var_os("PATH"), |name| std::env::var(name).ok())
    }

    /// Build an inspection from a raw PATH value and a variable lookup
    pub fn from_lookup<F>(path: Option<OsString>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path
            .map(|raw| {
                std::env::split_paths(&raw)
                    .filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let mut tool_homes = BTreeMap::new();
        for (name, source) in TOOL_HOME_VARS {
            if let Some(value) = lookup(source) {
                tool_homes.insert((*name).to_string(), value);
            }
        }

        Self { path, tool_homes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_splits_path_and_drops_empty_entries() {
        let mut with_empty = std::env::join_paths(["/usr/bin", "/opt/tool/bin"]).unwrap();
        with_empty.push(if cfg!(windows) { ";" } else { ":" });

        let inspection = EnvInspection::from_lookup(Some(with_empty), |_| None);
        assert_eq!(
            inspection.path,
            vec![PathBuf::from("/usr/bin"), PathBuf::from("/opt/tool/bin")]
        );
        assert!(inspection.tool_homes.is_empty());
    }

    #[test]
    fn test_alias_overrides_primary_variable() {
        let vars: HashMap<&str, &str> = [
            ("ANDROID_HOME", "/sdk/old"),
            ("ANDROID_SDK_ROOT", "/sdk/new"),
            ("JAVA_HOME", "/jdk"),
        ]
        .into_iter()
        .collect();

        let inspection =
            EnvInspection::from_lookup(None, |name| vars.get(name).map(|v| (*v).to_string()));

        assert!(inspection.path.is_empty());
        assert_eq!(inspection.tool_homes.get("ANDROID_HOME").map(String::as_str), Some("/sdk/new"));
        assert_eq!(inspection.tool_homes.get("JAVA_HOME").map(String::as_str), Some("/jdk"));
        assert_eq!(inspection.tool_homes.len(), 2);
    }
}
