//! Bounded file reads that favour the end of large files

use crate::error::ScanResult;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Tail threshold used by the log scan
pub const DEFAULT_TAIL_BYTES: u64 = 256 * 1024;

/// Text retrieved from a bounded read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundedText {
    /// The whole file fit under the threshold
    Whole(String),
    /// Only the final `max_bytes` bytes were read
    Tail(String),
    /// The file could not be read; treat as "no findings"
    Unreadable,
}

impl BoundedText {
    /// Retrieved text, empty when the file was unreadable
    pub fn text(&self) -> &str {
        match self {
            Self::Whole(text) | Self::Tail(text) => text,
            Self::Unreadable => "",
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Tail(_))
    }
}

/// Read `path` whole if it is at most `max_bytes` long, otherwise read
/// only its last `max_bytes` bytes.
///
/// Bytes are decoded lossily, so a tail window starting mid-character
/// or a file with invalid UTF-8 still yields text. Any I/O failure
/// becomes [`BoundedText::Unreadable`].
pub fn read_bounded(path: &Path, max_bytes: u64) -> BoundedText {
    match try_read_bounded(path, max_bytes) {
        Ok(text) => text,
        Err(err) => {
            log::debug!("Could not read {}: {err}", path.display());
            BoundedText::Unreadable
        }
    }
}

fn try_read_bounded(path: &Path, max_bytes: u64) -> ScanResult<BoundedText> {
    let file = File::open(path)?;
    let size = file.metadata()?.len();
    read_window(file, size, max_bytes)
}

/// Read at most `max_bytes` from `reader`, whose length was observed as
/// `size`. Bytes appended after `size` was taken are never read past
/// the bound.
fn read_window<R: Read + Seek>(
    mut reader: R,
    size: u64,
    max_bytes: u64,
) -> ScanResult<BoundedText> {
    let mut buffer = Vec::new();
    if size <= max_bytes {
        reader.take(max_bytes).read_to_end(&mut buffer)?;
        return Ok(BoundedText::Whole(String::from_utf8_lossy(&buffer).into_owned()));
    }

    reader.seek(SeekFrom::Start(size - max_bytes))?;
    reader.take(max_bytes).read_to_end(&mut buffer)?;
    Ok(BoundedText::Tail(String::from_utf8_lossy(&buffer).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_small_file_is_read_whole() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("small.log");
        fs::write(&path, "first\nsecond\n").unwrap();

        let text = read_bounded(&path, 1024);
        assert_eq!(text, BoundedText::Whole("first\nsecond\n".to_string()));
        assert!(!text.is_truncated());
    }

    #[test]
    fn test_large_file_reads_tail_only() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("big.log");

        let mut content = vec![b'a'; 300 * 1024 - 6];
        content.extend_from_slice(b"ending");
        fs::write(&path, &content).unwrap();

        let text = read_bounded(&path, DEFAULT_TAIL_BYTES);
        assert!(text.is_truncated());
        assert_eq!(text.text().len(), 262_144);
        assert!(text.text().ends_with("ending"));
        assert_eq!(
            text.text().as_bytes(),
            &content[content.len() - 262_144..]
        );
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bin.log");
        fs::write(&path, [b'o', b'k', 0xff, b'\n']).unwrap();

        let text = read_bounded(&path, 1024);
        assert!(text.text().starts_with("ok"));
        assert!(text.text().contains('\u{FFFD}'));
    }

    #[test]
    fn test_growth_after_size_check_stays_bounded() {
        // Observed as 4 bytes, but 6 more were appended before the read.
        let grown = std::io::Cursor::new(b"abcdEFGHIJ".to_vec());
        let text = read_window(grown, 4, 8).unwrap();
        assert_eq!(text, BoundedText::Whole("abcdEFGH".to_string()));

        let grown = std::io::Cursor::new(b"abcdefghijKLMN".to_vec());
        let text = read_window(grown, 10, 4).unwrap();
        assert_eq!(text, BoundedText::Tail("ghij".to_string()));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let temp = TempDir::new().unwrap();
        let text = read_bounded(&temp.path().join("gone.log"), 1024);
        assert_eq!(text, BoundedText::Unreadable);
        assert_eq!(text.text(), "");
    }
}
