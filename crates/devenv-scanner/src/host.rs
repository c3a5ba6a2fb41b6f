//! Host system information

use crate::workspace::score::round2;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Host system information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// Current username
    pub username: String,
    /// Home directory path
    pub home_dir: PathBuf,
    /// CPU model name, when the platform exposes it
    pub cpu_name: Option<String>,
    /// Logical CPU cores available to this process
    pub logical_cores: usize,
    /// Memory figures, when the platform exposes them
    pub memory: Option<MemoryInfo>,
    /// Physical block devices; empty when they cannot be listed
    pub drives: Vec<DriveInfo>,
}

/// Physical memory in gigabytes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total_gb: f64,
    pub available_gb: f64,
}

/// One physical drive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveInfo {
    pub name: String,
    /// `SSD` or `HDD`
    pub media_type: String,
    pub size_gb: f64,
}

impl HostInfo {
    /// Create `HostInfo` for the current system
    #[must_use]
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            username: whoami_username(),
            home_dir: dirs_home_dir(),
            cpu_name: read_cpu_name(),
            logical_cores: std::thread::available_parallelism().map_or(0, std::num::NonZeroUsize::get),
            memory: read_memory_info(),
            drives: read_drives(),
        }
    }
}

fn whoami_username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

fn dirs_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(if cfg!(windows) { "C:\\" } else { "/" }))
}

#[cfg(target_os = "linux")]
fn read_memory_info() -> Option<MemoryInfo> {
    let content = std::fs::read_to_string("/proc/meminfo").ok()?;
    parse_meminfo(&content)
}

#[cfg(not(target_os = "linux"))]
fn read_memory_info() -> Option<MemoryInfo> {
    None
}

/// Parse `MemTotal`/`MemAvailable` (in kB) from `/proc/meminfo` text
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_meminfo(content: &str) -> Option<MemoryInfo> {
    const KB_PER_GB: f64 = 1024.0 * 1024.0;

    let field = |key: &str| -> Option<u64> {
        content
            .lines()
            .find_map(|line| line.strip_prefix(key))
            .and_then(|rest| rest.trim_start_matches(':').split_whitespace().next())
            .and_then(|value| value.parse().ok())
    };

    let total = field("MemTotal")?;
    let available = field("MemAvailable").or_else(|| field("MemFree")).unwrap_or(0);

    Some(MemoryInfo {
        total_gb: round2(total as f64 / KB_PER_GB),
        available_gb: round2(available as f64 / KB_PER_GB),
    })
}

#[cfg(target_os = "linux")]
fn read_cpu_name() -> Option<String> {
    let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
    parse_cpu_model(&content)
}

#[cfg(not(target_os = "linux"))]
fn read_cpu_name() -> Option<String> {
    None
}

/// First `model name` entry of `/proc/cpuinfo` text
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_cpu_model(content: &str) -> Option<String> {
    content
        .lines()
        .filter(|line| line.starts_with("model name"))
        .find_map(|line| line.split_once(':'))
        .map(|(_, name)| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(target_os = "linux")]
fn read_drives() -> Vec<DriveInfo> {
    block_devices(Path::new("/sys/block"))
}

#[cfg(not(target_os = "linux"))]
fn read_drives() -> Vec<DriveInfo> {
    Vec::new()
}

/// Classify the devices under a `/sys/block`-style directory.
///
/// Virtual devices (loop, ram, zram) and devices without a
/// `queue/rotational` flag are skipped.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn block_devices(sys_block: &Path) -> Vec<DriveInfo> {
    const SECTOR_BYTES: f64 = 512.0;
    const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

    let Ok(entries) = std::fs::read_dir(sys_block) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !["loop", "ram", "zram"].iter().any(|p| name.starts_with(p)))
        .collect();
    names.sort();

    names
        .into_iter()
        .filter_map(|name| {
            let device = sys_block.join(&name);
            let rotational = std::fs::read_to_string(device.join("queue").join("rotational")).ok()?;
            let media_type = match rotational.trim() {
                "0" => "SSD",
                "1" => "HDD",
                _ => return None,
            };
            let sectors: u64 = std::fs::read_to_string(device.join("size"))
                .ok()
                .and_then(|size| size.trim().parse().ok())
                .unwrap_or(0);

            Some(DriveInfo {
                name,
                media_type: media_type.to_string(),
                size_gb: round2(sectors as f64 * SECTOR_BYTES / BYTES_PER_GB),
            })
        })
        .collect()
}
