//! Analysis result assembly
//!
//! Single forward pass: buffer -> per-region analyzers -> aggregator ->
//! result structure. The result is built once per analyzed file and never
//! mutated; presentation and serialization layers only read it.

use crate::bootcode::{self, BootCodeReport};
use crate::error::{Error, Result};
use crate::hexdump::{self, HexDumpLine};
use crate::partitions::{self, PartitionTableReport};
use crate::sector::{SectorImage, SECTOR_SIZE};
use crate::signature::SignatureReport;
use crate::stats::{self, DiskStatistics};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where the analyzed sector came from, supplied by the loader collaborator
#[derive(Debug, Clone, Serialize)]
pub struct SourceMetadata {
    /// Base name of the source file
    pub file_name: String,

    /// Full path as given to the loader
    pub path: String,

    /// Number of bytes the loader actually read (at most 512)
    pub byte_size: u64,
}

/// Complete, immutable result of analyzing one MBR sector
#[derive(Debug, Clone, Serialize)]
pub struct MbrAnalysisResult {
    pub file_name: String,
    pub path: String,
    pub byte_size: u64,
    pub analyzed_at: DateTime<Utc>,
    pub boot_code: BootCodeReport,
    pub partition_table: PartitionTableReport,
    pub signature: SignatureReport,
    pub statistics: DiskStatistics,
    pub hex_dump: Vec<HexDumpLine>,
}

/// Analyze a raw sector buffer and assemble the full result
///
/// The buffer length is checked here before the sector image runs its own
/// size check, so a short buffer never produces a partial result.
///
/// # Errors
///
/// Returns [`Error::InputTooSmall`] if the buffer holds fewer than 512
/// bytes.
pub fn analyze(data: &[u8], source: SourceMetadata) -> Result<MbrAnalysisResult> {
    if data.len() < SECTOR_SIZE {
        return Err(Error::input_too_small(data.len()));
    }

    let image = SectorImage::from_bytes(data)?;
    Ok(analyze_sector(&image, source))
}

/// Assemble the result from an already-validated sector image
pub fn analyze_sector(image: &SectorImage, source: SourceMetadata) -> MbrAnalysisResult {
    let regions = image.regions();

    let boot_code = bootcode::analyze(regions.boot_code);
    let partition_table = partitions::decode(regions.partition_table);
    let signature = SignatureReport::from_bytes(regions.signature);
    let statistics = stats::aggregate(&partition_table, &signature, &boot_code);

    MbrAnalysisResult {
        file_name: source.file_name,
        path: source.path,
        byte_size: source.byte_size,
        analyzed_at: Utc::now(),
        boot_code,
        partition_table,
        signature,
        statistics,
        hex_dump: hexdump::build(image.as_bytes()),
    }
}
