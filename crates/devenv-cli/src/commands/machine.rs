//! Machine-level commands
//!
//! Handles: devenv env, devenv host, devenv profile, devenv compare

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use devenv_scanner::{
    analyze_performance_difference, EnvInspection, HostInfo, MachineProfile,
};

use super::print_json;

pub fn run_env() -> Result<()> {
    print_json(&EnvInspection::current())
}

pub fn run_host() -> Result<()> {
    print_json(&HostInfo::current())
}

pub fn run_profile(root: &Path, max_files: usize, code_binary: &str) -> Result<()> {
    print_json(&MachineProfile::collect(root, max_files, code_binary))
}

pub fn run_compare(this: &Path, other: &Path) -> Result<()> {
    let this = load_profile(this)?;
    let other = load_profile(other)?;
    print_json(&analyze_performance_difference(&this, &other))
}

fn load_profile(path: &Path) -> Result<MachineProfile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    MachineProfile::from_json(&content)
        .with_context(|| format!("Invalid profile {}", path.display()))
}
