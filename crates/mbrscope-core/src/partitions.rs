//! Partition table decoding
//!
//! The 64-byte partition table holds 4 fixed-size 16-byte entries:
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  -----
//! 0x0     1     Status (0x80 = bootable)
//! 0x1     3     CHS start address
//! 0x4     1     Partition type code
//! 0x5     3     CHS end address
//! 0x8     4     LBA of first sector (little-endian)
//! 0xC     4     Sector count (little-endian)
//! ```
//!
//! Decoding is total: malformed-but-well-sized data yields warned values,
//! never errors.

use crate::sector::PARTITION_TABLE_OFFSET;
use serde::Serialize;

/// Size of each partition entry
pub const ENTRY_SIZE: usize = 16;

/// Number of partition entries in an MBR
pub const ENTRY_COUNT: usize = 4;

/// Status byte value marking a partition as bootable
pub const BOOTABLE_FLAG: u8 = 0x80;

/// Type code of a GPT protective partition
pub const GPT_PROTECTIVE_TYPE: u8 = 0xEE;

/// First LBA conventionally usable by a partition on legacy disks
const FIRST_STANDARD_LBA: u32 = 63;

/// Look up the human-readable name for a partition type code
///
/// Static mapping, unknown codes yield `"Unknown"`.
pub fn partition_type_name(code: u8) -> &'static str {
    match code {
        0x00 => "Empty",
        0x01 => "FAT12",
        0x04 => "FAT16 <32M",
        0x05 => "Extended",
        0x06 => "FAT16",
        0x07 => "NTFS/exFAT/HPFS",
        0x0B => "FAT32",
        0x0C => "FAT32 (LBA)",
        0x0E => "FAT16 (LBA)",
        0x0F => "Extended (LBA)",
        0x11 => "Hidden FAT12",
        0x14 => "Hidden FAT16 <32M",
        0x16 => "Hidden FAT16",
        0x1B => "Hidden FAT32",
        0x1C => "Hidden FAT32 (LBA)",
        0x1E => "Hidden FAT16 (LBA)",
        0x82 => "Linux swap",
        0x83 => "Linux",
        0x85 => "Linux extended",
        0x8E => "Linux LVM",
        0xEE => "GPT Protective",
        0xEF => "EFI System",
        0xFD => "Linux RAID",
        0xFF => "BBT",
        _ => "Unknown",
    }
}

/// Decoded fields of a non-empty partition entry
#[derive(Debug, Clone, Serialize)]
pub struct DecodedPartition {
    /// True iff the status byte is exactly 0x80
    pub bootable: bool,

    /// Raw partition type code
    pub type_code: u8,

    /// Human-readable type name from the static lookup table
    pub type_name: &'static str,

    /// LBA of the partition's first sector
    pub lba_start: u32,

    /// Number of sectors in the partition
    pub sector_count: u32,

    /// sector_count * 512, exact
    pub size_bytes: u64,

    /// size_bytes / 1 MiB
    pub size_mb: f64,

    /// size_mb / 1024
    pub size_gb: f64,

    /// Set when sector_count == 0
    pub zero_size_warning: bool,

    /// Set when 0 < lba_start < 63
    pub non_standard_start_warning: bool,
}

/// One of the 4 partition table slots, in on-disk order
#[derive(Debug, Clone, Serialize)]
pub struct PartitionEntry {
    /// 1-based slot number
    pub index: usize,

    /// Absolute offset of this entry within the sector
    pub offset: usize,

    /// The entry's 16 raw bytes
    pub raw: [u8; ENTRY_SIZE],

    /// Decoded fields, `None` for an empty slot
    pub decoded: Option<DecodedPartition>,
}

impl PartitionEntry {
    /// True if this slot is unused (status byte and type code both zero)
    pub fn is_empty(&self) -> bool {
        self.decoded.is_none()
    }

    /// True if this slot holds a bootable partition
    pub fn is_bootable(&self) -> bool {
        self.decoded.as_ref().map(|d| d.bootable).unwrap_or(false)
    }

    /// True if this slot holds a GPT protective partition (type 0xEE)
    pub fn is_gpt_protective(&self) -> bool {
        self.decoded
            .as_ref()
            .map(|d| d.type_code == GPT_PROTECTIVE_TYPE)
            .unwrap_or(false)
    }
}

/// Decoded partition table: always exactly 4 entries, table order
#[derive(Debug, Clone, Serialize)]
pub struct PartitionTableReport {
    pub entries: Vec<PartitionEntry>,
}

impl PartitionTableReport {
    /// Count of non-empty slots
    pub fn used_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_empty()).count()
    }

    /// Count of empty slots
    pub fn empty_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_empty()).count()
    }

    /// Count of bootable partitions
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_bootable()).count()
    }

    /// Count of GPT protective partitions
    pub fn gpt_protective_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_gpt_protective()).count()
    }
}

/// Decode the 64-byte partition table region
///
/// An entry is empty iff its status byte and type code are both zero. Any
/// nonzero status byte other than 0x80 means "not bootable", not an error.
pub fn decode(table: &[u8]) -> PartitionTableReport {
    let entries = (0..ENTRY_COUNT)
        .map(|i| {
            let start = i * ENTRY_SIZE;
            let mut raw = [0u8; ENTRY_SIZE];
            raw.copy_from_slice(&table[start..start + ENTRY_SIZE]);

            PartitionEntry {
                index: i + 1,
                offset: PARTITION_TABLE_OFFSET + start,
                raw,
                decoded: decode_entry(&raw),
            }
        })
        .collect();

    PartitionTableReport { entries }
}

fn decode_entry(raw: &[u8; ENTRY_SIZE]) -> Option<DecodedPartition> {
    if raw[0] == 0 && raw[4] == 0 {
        return None;
    }

    let type_code = raw[4];
    let lba_start = u32::from_le_bytes([raw[8], raw[9], raw[10], raw[11]]);
    let sector_count = u32::from_le_bytes([raw[12], raw[13], raw[14], raw[15]]);

    let size_bytes = sector_count as u64 * 512;
    let size_mb = size_bytes as f64 / 1_048_576.0;

    Some(DecodedPartition {
        bootable: raw[0] == BOOTABLE_FLAG,
        type_code,
        type_name: partition_type_name(type_code),
        lba_start,
        sector_count,
        size_bytes,
        size_mb,
        size_gb: size_mb / 1024.0,
        zero_size_warning: sector_count == 0,
        non_standard_start_warning: lba_start > 0 && lba_start < FIRST_STANDARD_LBA,
    })
}
