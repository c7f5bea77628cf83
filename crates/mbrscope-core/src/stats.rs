//! Disk-level statistics and classification

use crate::bootcode::BootCodeReport;
use crate::partitions::{PartitionTableReport, ENTRY_COUNT};
use crate::signature::SignatureReport;
use serde::Serialize;

/// Overall disk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiskType {
    /// At least one GPT protective partition (type 0xEE) present
    GptProtective,
    /// All 4 partition slots empty
    Empty,
    /// A regular MBR-partitioned disk
    MbrStandard,
}

impl DiskType {
    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::GptProtective => "GPT (with protective MBR)",
            Self::Empty => "Empty disk",
            Self::MbrStandard => "MBR disk",
        }
    }
}

/// Aggregate counts and classification over the whole sector
#[derive(Debug, Clone, Serialize)]
pub struct DiskStatistics {
    /// Always 4 for an MBR
    pub total_partitions: usize,
    pub used_count: usize,
    pub empty_count: usize,
    /// Bootable partitions
    pub active_count: usize,
    /// Partitions of type 0xEE
    pub gpt_protective_count: usize,
    pub disk_type: DiskType,
    pub signature_valid: bool,
    pub boot_code_present: bool,
}

impl DiskStatistics {
    /// More than one bootable partition; can confuse legacy BIOSes.
    /// A warning condition for the presentation layer, never an error.
    pub fn multiple_active(&self) -> bool {
        self.active_count > 1
    }
}

/// Combine the per-region reports into disk statistics
///
/// Classification priority: any GPT protective partition wins, then a fully
/// empty table, then standard MBR.
pub fn aggregate(
    table: &PartitionTableReport,
    signature: &SignatureReport,
    boot_code: &BootCodeReport,
) -> DiskStatistics {
    let empty_count = table.empty_count();
    let gpt_protective_count = table.gpt_protective_count();

    let disk_type = if gpt_protective_count > 0 {
        DiskType::GptProtective
    } else if empty_count == ENTRY_COUNT {
        DiskType::Empty
    } else {
        DiskType::MbrStandard
    };

    DiskStatistics {
        total_partitions: ENTRY_COUNT,
        used_count: table.used_count(),
        empty_count,
        active_count: table.active_count(),
        gpt_protective_count,
        disk_type,
        signature_valid: signature.is_valid,
        boot_code_present: boot_code.has_data,
    }
}
