//! Unbounded subtree sizing for major directories

use std::path::Path;
use walkdir::WalkDir;

/// Sum the sizes of all regular files under `dir`.
///
/// This ignores the walk budget: a major directory is always measured in
/// full. Entries that cannot be read contribute zero bytes. Symlinks are
/// not followed.
pub fn directory_size(dir: &Path) -> u64 {
    let mut total = 0;

    for entry in WalkDir::new(dir).min_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::trace!("Size walk skipped entry under {}: {err}", dir.display());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => total += metadata.len(),
            Err(err) => {
                log::trace!("No metadata for {}: {err}", entry.path().display());
            }
        }
    }

    total
}
