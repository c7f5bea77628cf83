//! Sector hex dump model
//!
//! Splits the full 512-byte sector into 32 rows of 16 bytes, each tagged with
//! the MBR region its starting offset falls in. A row that spans a region
//! boundary (the row at 0x1B0 covers both boot code and partition table) is
//! tagged by its starting offset only; downstream consumers depend on that
//! tagging, so it must not change.

use crate::sector::{BOOT_CODE_SIZE, SECTOR_SIZE, SIGNATURE_OFFSET};
use serde::Serialize;

/// Bytes per hex dump row
pub const ROW_SIZE: usize = 16;

/// Rows in a full sector dump
pub const ROW_COUNT: usize = SECTOR_SIZE / ROW_SIZE;

/// The MBR region an offset falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectorRegion {
    BootCode,
    PartitionTable,
    Signature,
}

impl SectorRegion {
    /// Classify an absolute sector offset
    pub fn at_offset(offset: usize) -> Self {
        if offset < BOOT_CODE_SIZE {
            Self::BootCode
        } else if offset < SIGNATURE_OFFSET {
            Self::PartitionTable
        } else {
            Self::Signature
        }
    }

    /// Human-readable region name
    pub fn name(&self) -> &'static str {
        match self {
            Self::BootCode => "Boot code",
            Self::PartitionTable => "Partition table",
            Self::Signature => "Signature",
        }
    }
}

/// One 16-byte row of the sector dump
#[derive(Debug, Clone, Serialize)]
pub struct HexDumpLine {
    /// Starting offset of the row within the sector
    pub offset: u16,

    /// The row's raw bytes
    pub bytes: [u8; ROW_SIZE],

    /// ASCII rendering: printable 0x20-0x7E verbatim, everything else '.'
    pub ascii: String,

    /// Region tag, from the row's starting offset
    pub region: SectorRegion,
}

impl HexDumpLine {
    /// Space-separated uppercase hex rendering of the row
    pub fn hex(&self) -> String {
        self.bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Build the 32-row dump covering the sector exactly once, in order
pub fn build(data: &[u8; SECTOR_SIZE]) -> Vec<HexDumpLine> {
    (0..ROW_COUNT)
        .map(|row| {
            let offset = row * ROW_SIZE;
            let mut bytes = [0u8; ROW_SIZE];
            bytes.copy_from_slice(&data[offset..offset + ROW_SIZE]);

            let ascii = bytes
                .iter()
                .map(|&b| if (0x20..=0x7E).contains(&b) { b as char } else { '.' })
                .collect();

            HexDumpLine {
                offset: offset as u16,
                bytes,
                ascii,
                region: SectorRegion::at_offset(offset),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_sector_exactly_once() {
        let mut data = [0u8; 512];
        for (i, b) in data.iter_mut().enumerate() {
            *b = i as u8;
        }

        let dump = build(&data);
        assert_eq!(dump.len(), 32);

        let mut reassembled = Vec::with_capacity(512);
        for (row, line) in dump.iter().enumerate() {
            assert_eq!(line.offset as usize, row * 16);
            reassembled.extend_from_slice(&line.bytes);
        }
        assert_eq!(reassembled, data);
    }

    #[test]
    fn test_region_tags_by_row_start() {
        let dump = build(&[0u8; 512]);

        assert_eq!(dump[0].region, SectorRegion::BootCode);
        assert_eq!(dump[26].region, SectorRegion::BootCode);
        // Row at 0x1B0 (432) spans the boot code / partition table boundary
        // but is tagged by its start
        assert_eq!(dump[27].offset, 432);
        assert_eq!(dump[27].region, SectorRegion::BootCode);
        assert_eq!(dump[28].region, SectorRegion::PartitionTable);
        // The last row starts at 496 < 510, so the Signature tag never
        // appears on 16-byte-aligned rows
        assert_eq!(dump[31].offset, 496);
        assert_eq!(dump[31].region, SectorRegion::PartitionTable);
    }

    #[test]
    fn test_region_at_offset() {
        assert_eq!(SectorRegion::at_offset(0), SectorRegion::BootCode);
        assert_eq!(SectorRegion::at_offset(445), SectorRegion::BootCode);
        assert_eq!(SectorRegion::at_offset(446), SectorRegion::PartitionTable);
        assert_eq!(SectorRegion::at_offset(509), SectorRegion::PartitionTable);
        assert_eq!(SectorRegion::at_offset(510), SectorRegion::Signature);
        assert_eq!(SectorRegion::at_offset(511), SectorRegion::Signature);
    }

    #[test]
    fn test_ascii_rendering() {
        let mut data = [0u8; 512];
        data[0..5].copy_from_slice(b"GRUB\x00");
        data[5] = 0x1F; // Below printable range
        data[6] = 0x7F; // Above printable range
        data[7] = b'~'; // 0x7E, last printable

        let dump = build(&data);
        assert!(dump[0].ascii.starts_with("GRUB...~"));
        assert_eq!(dump[0].ascii.len(), 16);
    }

    #[test]
    fn test_hex_rendering() {
        let mut data = [0u8; 512];
        data[0] = 0xEB;
        data[1] = 0x3C;

        let dump = build(&data);
        assert!(dump[0].hex().starts_with("EB 3C 00"));
    }
}
