//! Sector dump loader
//!
//! The loader collaborator owns the truncation policy: it reads at most the
//! first 512 bytes of the source file and hands the core a raw buffer plus
//! source metadata. Files under 512 bytes are passed through as-is so the
//! core reports the size error itself.

use anyhow::{Context, Result};
use mbrscope_core::{SourceMetadata, SECTOR_SIZE};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read the first sector of `path` along with its source metadata
pub fn load_sector(path: &Path) -> Result<(Vec<u8>, SourceMetadata)> {
    let file = File::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    let file_len = file
        .metadata()
        .with_context(|| format!("cannot stat {}", path.display()))?
        .len();

    let mut data = Vec::with_capacity(SECTOR_SIZE);
    file.take(SECTOR_SIZE as u64)
        .read_to_end(&mut data)
        .with_context(|| format!("cannot read {}", path.display()))?;

    if file_len > SECTOR_SIZE as u64 {
        tracing::warn!(
            "{} is {} bytes, analyzing the first {} only",
            path.display(),
            file_len,
            SECTOR_SIZE
        );
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let metadata = SourceMetadata {
        file_name,
        path: path.display().to_string(),
        byte_size: data.len() as u64,
    };

    Ok((data, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file_with(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_exact_sector() {
        let file = temp_file_with(&[0xABu8; 512]);
        let (data, meta) = load_sector(file.path()).unwrap();

        assert_eq!(data.len(), 512);
        assert_eq!(meta.byte_size, 512);
        assert_eq!(meta.path, file.path().display().to_string());
    }

    #[test]
    fn test_load_truncates_to_first_sector() {
        let mut bytes = vec![0x11u8; 512];
        bytes.extend_from_slice(&[0x22u8; 300]);
        let file = temp_file_with(&bytes);

        let (data, meta) = load_sector(file.path()).unwrap();

        assert_eq!(data.len(), 512);
        assert!(data.iter().all(|&b| b == 0x11));
        assert_eq!(meta.byte_size, 512);
    }

    #[test]
    fn test_short_file_passed_through() {
        let file = temp_file_with(&[0u8; 100]);
        let (data, meta) = load_sector(file.path()).unwrap();

        // The core owns the size check; the loader reports what it read
        assert_eq!(data.len(), 100);
        assert_eq!(meta.byte_size, 100);
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(load_sector(Path::new("/nonexistent/dump.bin")).is_err());
    }
}
