//! 512-byte sector image and region splitting
//!
//! The Master Boot Record occupies the first sector of a legacy-partitioned
//! disk and divides into three fixed regions:
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  -----
//! 0x000   446   Bootstrap code
//! 0x1BE   64    Partition table (4 entries x 16 bytes)
//! 0x1FE   2     Boot signature (0x55 0xAA)
//! ```

use crate::error::{Error, Result};

/// Size of one MBR sector in bytes (always 512)
pub const SECTOR_SIZE: usize = 512;

/// Size of the bootstrap code region
pub const BOOT_CODE_SIZE: usize = 446;

/// Offset of the first partition entry
pub const PARTITION_TABLE_OFFSET: usize = 0x1BE;

/// Size of the partition table region
pub const PARTITION_TABLE_SIZE: usize = 64;

/// Offset of the boot signature
pub const SIGNATURE_OFFSET: usize = 0x1FE;

/// An immutable 512-byte sector image
///
/// Inputs longer than one sector are silently truncated to the first 512
/// bytes; inputs shorter than one sector are rejected. Once constructed the
/// image never changes.
#[derive(Debug, Clone)]
pub struct SectorImage {
    data: [u8; SECTOR_SIZE],
}

/// Non-owning views of the three MBR regions of a sector
#[derive(Debug, Clone, Copy)]
pub struct SectorRegions<'a> {
    /// Bytes [0, 446): bootstrap code
    pub boot_code: &'a [u8],
    /// Bytes [446, 510): partition table
    pub partition_table: &'a [u8],
    /// Bytes [510, 512): boot signature
    pub signature: &'a [u8],
}

impl SectorImage {
    /// Build a sector image from a raw byte buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if the buffer holds fewer than 512
    /// bytes. Longer buffers are truncated to the first sector, never
    /// rejected.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < SECTOR_SIZE {
            return Err(Error::invalid_size(data.len()));
        }

        let mut sector = [0u8; SECTOR_SIZE];
        sector.copy_from_slice(&data[..SECTOR_SIZE]);

        Ok(Self { data: sector })
    }

    /// Get the full sector contents
    pub fn as_bytes(&self) -> &[u8; SECTOR_SIZE] {
        &self.data
    }

    /// Split the sector into its three MBR regions
    pub fn regions(&self) -> SectorRegions<'_> {
        SectorRegions {
            boot_code: &self.data[..BOOT_CODE_SIZE],
            partition_table: &self.data[PARTITION_TABLE_OFFSET..SIGNATURE_OFFSET],
            signature: &self.data[SIGNATURE_OFFSET..],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_exact() {
        let image = SectorImage::from_bytes(&[0u8; 512]).unwrap();
        assert_eq!(image.as_bytes().len(), 512);
    }

    #[test]
    fn test_from_bytes_truncates_longer_input() {
        let mut data = vec![0u8; 1024];
        data[511] = 0xAA;
        data[512] = 0xBB; // Beyond the first sector, must be dropped

        let image = SectorImage::from_bytes(&data).unwrap();
        assert_eq!(image.as_bytes()[511], 0xAA);
    }

    #[test]
    fn test_from_bytes_rejects_short_input() {
        let result = SectorImage::from_bytes(&[0u8; 511]);
        assert!(matches!(
            result,
            Err(Error::InvalidSize { actual: 511, expected: 512 })
        ));
    }

    #[test]
    fn test_region_split_sizes() {
        let image = SectorImage::from_bytes(&[0u8; 512]).unwrap();
        let regions = image.regions();

        assert_eq!(regions.boot_code.len(), 446);
        assert_eq!(regions.partition_table.len(), 64);
        assert_eq!(regions.signature.len(), 2);
    }

    #[test]
    fn test_region_split_offsets() {
        let mut data = [0u8; 512];
        data[445] = 0x01;
        data[446] = 0x02;
        data[509] = 0x03;
        data[510] = 0x04;

        let image = SectorImage::from_bytes(&data).unwrap();
        let regions = image.regions();

        assert_eq!(regions.boot_code[445], 0x01);
        assert_eq!(regions.partition_table[0], 0x02);
        assert_eq!(regions.partition_table[63], 0x03);
        assert_eq!(regions.signature[0], 0x04);
    }
}
