//! devenv scanner - bounded developer-environment diagnostics
//!
//! This crate provides read-only scanning of a developer machine:
//! workspace statistics, extension log scans, editor configuration,
//! and host/environment facts. Every scan is bounded by a file budget
//! or a size ceiling and degrades to a smaller result instead of failing.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::too_many_lines,
    clippy::items_after_statements,
    clippy::single_match_else,
    clippy::unnecessary_debug_formatting,
    clippy::option_if_let_else,
    clippy::map_unwrap_or,
    clippy::manual_let_else,
    clippy::cast_precision_loss
)]

pub mod budget;
pub mod compare;
pub mod env_paths;
pub mod error;
pub mod host;
pub mod logs;
pub mod output;
pub mod retention;
pub mod vscode;
pub mod workspace;

pub use budget::ScanBudget;
pub use compare::{analyze_performance_difference, MachineProfile, PerformanceComparison};
pub use env_paths::EnvInspection;
pub use error::{ScanError, ScanResult};
pub use host::HostInfo;
pub use logs::{LogScanResult, LogScanner};
pub use vscode::VsCodeInfo;
pub use workspace::{WorkspaceScanner, WorkspaceStats};
