//! CLI command handlers
//!
//! Each handler builds one report from the scanner crate and prints it.

pub mod editor;
pub mod machine;
pub mod scan;

use anyhow::Result;
use serde::Serialize;

/// Print a report as pretty JSON on stdout
fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", devenv_scanner::output::to_json(report)?);
    Ok(())
}
