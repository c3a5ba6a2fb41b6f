//! JSON output formatter

use crate::error::ScanResult;
use serde::Serialize;

/// Convert any report to a pretty-printed JSON string
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_json<T: Serialize>(report: &T) -> ScanResult<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
