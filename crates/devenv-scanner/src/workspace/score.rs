//! Workspace complexity scoring

use std::collections::BTreeMap;

/// Bytes in one megabyte
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

const FILES_PER_POINT: f64 = 1000.0;
const BYTES_PER_POINT: f64 = 100.0 * BYTES_PER_MB;
const COMPONENT_CAP: f64 = 10.0;

/// Score a workspace from its file count and tracked directory sizes.
///
/// Two components, each capped at 10: one point per thousand files and
/// one point per 100 MB of major-directory content. The sum is rounded
/// to two decimals, so the result is always within `0.0..=20.0`.
pub fn complexity_score(file_count: usize, directory_bytes: &BTreeMap<String, u64>) -> f64 {
    let total_bytes: u64 = directory_bytes.values().sum();
    let size_component = (file_count as f64 / FILES_PER_POINT).min(COMPONENT_CAP);
    let volume_component = (total_bytes as f64 / BYTES_PER_POINT).min(COMPONENT_CAP);
    round2(size_component + volume_component)
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a byte count to megabytes rounded to two decimals
pub fn bytes_to_mb(bytes: u64) -> f64 {
    round2(bytes as f64 / BYTES_PER_MB)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(entries: &[(&str, u64)]) -> BTreeMap<String, u64> {
        entries
            .iter()
            .map(|(name, bytes)| ((*name).to_string(), *bytes))
            .collect()
    }

    #[test]
    fn test_score_components() {
        assert!((complexity_score(2500, &BTreeMap::new()) - 2.5).abs() < f64::EPSILON);

        let tracked = sizes(&[("node_modules", 150 * 1024 * 1024)]);
        assert!((complexity_score(0, &tracked) - 1.5).abs() < f64::EPSILON);
        assert!((complexity_score(1000, &tracked) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_is_capped() {
        let huge = sizes(&[
            ("node_modules", 4 * 1024 * 1024 * 1024),
            (".git", 2 * 1024 * 1024 * 1024),
        ]);
        assert!((complexity_score(1_000_000, &huge) - 20.0).abs() < f64::EPSILON);
        assert!((complexity_score(50_000, &BTreeMap::new()) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut previous = 0.0;
        for files in (0..15_000).step_by(750) {
            let score = complexity_score(files, &BTreeMap::new());
            assert!(score >= previous);
            previous = score;
        }

        let mut previous = 0.0;
        for mb in (0..1500_u64).step_by(50) {
            let score = complexity_score(10, &sizes(&[(".git", mb * 1024 * 1024)]));
            assert!(score >= previous);
            assert!((0.0..=20.0).contains(&score));
            previous = score;
        }
    }

    #[test]
    fn test_small_workspace_rounds_up() {
        // 5 files -> 0.005, rounded half away from zero
        assert!((complexity_score(5, &BTreeMap::new()) - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bytes_to_mb_rounding() {
        assert!(bytes_to_mb(600).abs() < f64::EPSILON);
        assert!((bytes_to_mb(1024 * 1024) - 1.0).abs() < f64::EPSILON);
        assert!((bytes_to_mb(1_572_864) - 1.5).abs() < f64::EPSILON);
    }
}
