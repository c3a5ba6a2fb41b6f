//! Machine profiles and the comparison that explains performance gaps
//!
//! A profile bundles hardware, editor, and workspace facts from one
//! machine. Profiles are exchanged as JSON, so every field is defaulted
//! and the camelCase names used by older reports are accepted as aliases.

use crate::error::ScanResult;
use crate::host::HostInfo;
use crate::vscode::{ExtensionInfo, VsCodeInfo};
use crate::workspace::score::round2;
use crate::workspace::WorkspaceScanner;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// Everything known about one machine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineProfile {
    pub system: SystemProfile,
    pub vscode: EditorProfile,
    pub workspace: WorkspaceProfile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemProfile {
    pub os: String,
    pub cpu: CpuProfile,
    pub memory: Option<MemoryProfile>,
    pub disk: DiskProfile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuProfile {
    pub name: Option<String>,
    #[serde(alias = "logicalCores")]
    pub logical_cores: usize,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryProfile {
    #[serde(alias = "totalGB")]
    pub total_gb: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskProfile {
    pub drives: Vec<DriveProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveProfile {
    pub name: String,
    /// Media type, e.g. `SSD` or `HDD`
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(alias = "sizeGB")]
    pub size_gb: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorProfile {
    pub version: String,
    #[serde(alias = "amazonQExtension")]
    pub extension: ExtensionInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceProfile {
    #[serde(alias = "totalFiles")]
    pub total_files: usize,
    /// Major directory sizes in megabytes
    #[serde(alias = "directorySizes")]
    pub directory_sizes: BTreeMap<String, f64>,
    #[serde(alias = "complexityScore")]
    pub complexity_score: f64,
}

impl MachineProfile {
    /// Build this machine's profile, walking `root` with `max_files` budget
    pub fn collect(root: &Path, max_files: usize, code_binary: &str) -> Self {
        let host = HostInfo::current();
        let editor = VsCodeInfo::collect(root, code_binary);
        let stats = WorkspaceScanner::new().with_budget(max_files).scan(root);

        Self {
            system: SystemProfile {
                os: format!("{} {}", host.os, host.arch),
                cpu: CpuProfile {
                    name: host.cpu_name,
                    logical_cores: host.logical_cores,
                },
                memory: host.memory.map(|m| MemoryProfile {
                    total_gb: m.total_gb,
                }),
                disk: DiskProfile {
                    drives: host
                        .drives
                        .into_iter()
                        .map(|drive| DriveProfile {
                            name: drive.name,
                            media_type: drive.media_type,
                            size_gb: drive.size_gb,
                        })
                        .collect(),
                },
            },
            vscode: EditorProfile {
                version: editor.version.unwrap_or_default(),
                extension: editor.extension,
            },
            workspace: WorkspaceProfile {
                total_files: stats.total_files,
                directory_sizes: stats.directory_sizes,
                complexity_score: stats.complexity_score,
            },
        }
    }

    /// Parse a profile from JSON
    pub fn from_json(content: &str) -> ScanResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    fn has_ssd(&self) -> bool {
        self.system
            .disk
            .drives
            .iter()
            .any(|d| d.media_type.eq_ignore_ascii_case("ssd"))
    }

    /// Whether any drive has a known SSD/HDD media type
    fn knows_storage(&self) -> bool {
        self.system.disk.drives.iter().any(|d| {
            d.media_type.eq_ignore_ascii_case("ssd") || d.media_type.eq_ignore_ascii_case("hdd")
        })
    }

    fn node_modules_mb(&self) -> f64 {
        self.workspace
            .directory_sizes
            .get("node_modules")
            .copied()
            .unwrap_or(0.0)
    }
}

/// Findings grouped by area
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonDetails {
    pub hardware: Vec<String>,
    pub software: Vec<String>,
    pub workspace: Vec<String>,
}

/// Explanation of why one machine outperforms another
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceComparison {
    pub summary: String,
    pub advantages: Vec<String>,
    pub recommendations: Vec<String>,
    pub details: ComparisonDetails,
}

/// Compare `this` machine against `other`.
///
/// Advantages describe where `this` is ahead; recommendations describe
/// what would bring `this` up to `other`.
pub fn analyze_performance_difference(
    this: &MachineProfile,
    other: &MachineProfile,
) -> PerformanceComparison {
    let mut report = PerformanceComparison::default();

    let (ours, theirs) = (this.system.cpu.logical_cores, other.system.cpu.logical_cores);
    if ours > theirs {
        report
            .advantages
            .push(format!("More CPU cores ({ours} vs {theirs})"));
        report.details.hardware.push(format!(
            "CPU advantage: {} additional cores",
            ours - theirs
        ));
    } else if ours < theirs {
        report.recommendations.push(format!(
            "Upgrade CPU or use a machine with more cores (currently {ours} vs {theirs})"
        ));
    }

    if let (Some(ours), Some(theirs)) = (this.system.memory, other.system.memory) {
        let (ours, theirs) = (ours.total_gb, theirs.total_gb);
        if ours > theirs {
            report
                .advantages
                .push(format!("More RAM ({ours}GB vs {theirs}GB)"));
            report.details.hardware.push(format!(
                "Memory advantage: {}GB additional RAM",
                round2(ours - theirs)
            ));
        } else if ours < theirs {
            report
                .recommendations
                .push(format!("Add more RAM (currently {ours}GB vs {theirs}GB)"));
        }
    }

    let storage_known = this.knows_storage() && other.knows_storage();
    match (this.has_ssd(), other.has_ssd()) {
        _ if !storage_known => {}
        (true, false) => {
            report.advantages.push("SSD storage vs HDD".to_string());
            report.details.hardware.push(
                "SSD provides significantly faster file I/O for indexing and compilation"
                    .to_string(),
            );
        }
        (false, true) => {
            report
                .recommendations
                .push("Upgrade to SSD storage for faster file operations".to_string());
        }
        _ => {}
    }

    let (ours, theirs) = (
        parse_version(&this.vscode.version),
        parse_version(&other.vscode.version),
    );
    if ours > theirs {
        report.advantages.push(format!(
            "Newer VS Code version ({} vs {})",
            this.vscode.version, other.vscode.version
        ));
        report
            .details
            .software
            .push("Newer VS Code versions often include performance improvements".to_string());
    } else if ours < theirs {
        report.recommendations.push(format!(
            "Update VS Code to latest version (currently {})",
            this.vscode.version
        ));
    }

    match (
        this.vscode.extension.installed,
        other.vscode.extension.installed,
    ) {
        (true, false) => report
            .details
            .software
            .push("Amazon Q extension is properly installed".to_string()),
        (false, true) => report
            .recommendations
            .push("Install Amazon Q extension".to_string()),
        _ => {}
    }

    let (ours, theirs) = (this.workspace.total_files, other.workspace.total_files);
    if ours < theirs {
        report
            .advantages
            .push(format!("Fewer files to index ({ours} vs {theirs})"));
        report
            .details
            .workspace
            .push(format!("{} fewer files to process", theirs - ours));
    } else if ours > theirs {
        report.recommendations.push(
            "Consider cleaning up unused files or using .gitignore to exclude build artifacts"
                .to_string(),
        );
    }

    let (ours, theirs) = (
        this.workspace.complexity_score,
        other.workspace.complexity_score,
    );
    if ours < theirs {
        report
            .advantages
            .push(format!("Lower workspace complexity ({ours} vs {theirs})"));
        report
            .details
            .workspace
            .push("Simpler workspace structure reduces indexing overhead".to_string());
    }

    let (ours, theirs) = (this.node_modules_mb(), other.node_modules_mb());
    if ours < theirs {
        report
            .advantages
            .push(format!("Smaller node_modules ({ours}MB vs {theirs}MB)"));
    } else if ours > theirs {
        report
            .recommendations
            .push("Clean up node_modules or exclude from VS Code indexing".to_string());
    }

    report.summary = if report.advantages.is_empty() {
        "No clear hardware/software advantages detected. Performance differences may be due to other factors.".to_string()
    } else {
        format!(
            "This machine is faster due to: {}",
            report.advantages.join(", ")
        )
    };

    report
}

/// Reduce the first `X.Y.Z` in `version` to a comparable number
pub fn parse_version(version: &str) -> u64 {
    static VERSION: OnceLock<Regex> = OnceLock::new();
    let re = VERSION
        .get_or_init(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("valid version regex"));

    let Some(caps) = re.captures(version) else {
        return 0;
    };
    let part = |i: usize| -> u64 { caps[i].parse().unwrap_or(0) };
    part(1) * 10_000 + part(2) * 100 + part(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(cores: usize, ram: f64, drive: &str, version: &str, files: usize) -> MachineProfile {
        MachineProfile {
            system: SystemProfile {
                os: "linux".to_string(),
                cpu: CpuProfile {
                    name: None,
                    logical_cores: cores,
                },
                memory: Some(MemoryProfile { total_gb: ram }),
                disk: DiskProfile {
                    drives: vec![DriveProfile {
                        name: "disk0".to_string(),
                        media_type: drive.to_string(),
                        size_gb: 512.0,
                    }],
                },
            },
            vscode: EditorProfile {
                version: version.to_string(),
                extension: ExtensionInfo {
                    installed: true,
                    ..ExtensionInfo::default()
                },
            },
            workspace: WorkspaceProfile {
                total_files: files,
                directory_sizes: BTreeMap::new(),
                complexity_score: files as f64 / 1000.0,
            },
        }
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("1.95.3"), 19_503);
        assert_eq!(parse_version("Code 1.102.0 (x64)"), 20_200);
        assert_eq!(parse_version("not installed"), 0);
    }

    #[test]
    fn test_faster_machine_advantages() {
        let fast = profile(16, 32.0, "SSD", "1.95.0", 1000);
        let slow = profile(8, 16.0, "HDD", "1.90.0", 5000);

        let report = analyze_performance_difference(&fast, &slow);

        assert!(report.recommendations.is_empty());
        assert_eq!(report.advantages[0], "More CPU cores (16 vs 8)");
        assert_eq!(report.advantages[1], "More RAM (32GB vs 16GB)");
        assert!(report.advantages.contains(&"SSD storage vs HDD".to_string()));
        assert!(report
            .advantages
            .contains(&"Fewer files to index (1000 vs 5000)".to_string()));
        assert_eq!(report.details.hardware.len(), 3);
        assert!(report.summary.starts_with("This machine is faster due to: More CPU cores"));
    }

    #[test]
    fn test_slower_machine_recommendations() {
        let fast = profile(16, 32.0, "SSD", "1.95.0", 1000);
        let mut slow = profile(8, 16.0, "HDD", "1.90.0", 5000);
        slow.vscode.extension.installed = false;
        slow.workspace
            .directory_sizes
            .insert("node_modules".to_string(), 850.5);

        let report = analyze_performance_difference(&slow, &fast);

        assert!(report.advantages.is_empty());
        assert!(report.summary.starts_with("No clear hardware/software advantages"));
        assert!(report
            .recommendations
            .contains(&"Install Amazon Q extension".to_string()));
        assert!(report
            .recommendations
            .contains(&"Update VS Code to latest version (currently 1.90.0)".to_string()));
        assert!(report
            .recommendations
            .contains(&"Clean up node_modules or exclude from VS Code indexing".to_string()));
        assert_eq!(report.recommendations.len(), 7);
    }

    #[test]
    fn test_unknown_memory_is_not_compared() {
        let mut a = profile(4, 8.0, "SSD", "1.0.0", 10);
        let b = profile(4, 64.0, "SSD", "1.0.0", 10);
        a.system.memory = None;

        let report = analyze_performance_difference(&a, &b);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_unknown_storage_is_not_compared() {
        let mut a = profile(4, 8.0, "SSD", "1.0.0", 10);
        let b = profile(4, 8.0, "SSD", "1.0.0", 10);
        a.system.disk.drives.clear();

        let report = analyze_performance_difference(&a, &b);
        assert!(report.recommendations.is_empty());
        assert!(analyze_performance_difference(&b, &a).advantages.is_empty());

        a.system.disk.drives.push(DriveProfile {
            name: "disk0".to_string(),
            media_type: "Unspecified".to_string(),
            size_gb: 256.0,
        });
        assert!(analyze_performance_difference(&a, &b).recommendations.is_empty());
    }

    #[test]
    fn test_collected_profile_against_itself() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path();
        std::fs::create_dir_all(root.join("node_modules").join("pkg")).unwrap();
        std::fs::write(
            root.join("node_modules").join("pkg").join("index.js"),
            vec![b'x'; 2048],
        )
        .unwrap();
        std::fs::create_dir_all(root.join("src")).unwrap();
        for name in ["a.rs", "b.rs", "c.rs"] {
            std::fs::write(root.join("src").join(name), "fn main() {}").unwrap();
        }

        let collected = MachineProfile::collect(root, 100, "devenv-no-such-editor");
        assert_eq!(collected.workspace.total_files, 3);
        assert!(collected.workspace.directory_sizes.contains_key("node_modules"));
        assert!(collected.system.cpu.logical_cores >= 1);
        assert!(collected.vscode.version.is_empty());

        let reloaded =
            MachineProfile::from_json(&serde_json::to_string(&collected).unwrap()).unwrap();
        let report = analyze_performance_difference(&collected, &reloaded);
        assert!(report.advantages.is_empty());
        assert!(report.recommendations.is_empty());

        assert!(collected
            .system
            .disk
            .drives
            .iter()
            .all(|d| d.media_type == "SSD" || d.media_type == "HDD"));
    }

    #[test]
    fn test_profile_accepts_camel_case_json() {
        let json = r#"{
            "system": {
                "cpu": {"name": "Ryzen", "logicalCores": 12},
                "memory": {"totalGB": 31.9},
                "disk": {"drives": [{"name": "NVMe", "type": "SSD", "sizeGB": 953.87}]}
            },
            "vscode": {"version": "1.96.2", "amazonQExtension": {"installed": true, "version": "1.40.0"}},
            "workspace": {"totalFiles": 15234, "directorySizes": {"node_modules": 512.4}, "complexityScore": 12.5}
        }"#;

        let profile = MachineProfile::from_json(json).unwrap();
        assert_eq!(profile.system.cpu.logical_cores, 12);
        assert!(profile.has_ssd());
        assert!((profile.node_modules_mb() - 512.4).abs() < f64::EPSILON);
        assert_eq!(profile.workspace.total_files, 15234);
        assert_eq!(profile.vscode.extension.version.as_deref(), Some("1.40.0"));
    }
}
