//! # mbrscope-core
//!
//! Pure MBR decoding and classification engine for forensic inspection of
//! 512-byte sector dumps.
//!
//! The pipeline is a single forward pass over one immutable buffer:
//!
//! 1. [`sector`] — splits the sector into boot code, partition table, and
//!    signature regions
//! 2. [`bootcode`] — classifies the bootstrap code (loader signatures,
//!    embedded strings, instruction-density heuristic)
//! 3. [`partitions`] — decodes the 4 fixed partition entries
//! 4. [`signature`] — validates the trailing boot signature
//! 5. [`stats`] — aggregates everything into a disk-level classification
//! 6. [`report`] — assembles the immutable [`MbrAnalysisResult`]
//!
//! The engine performs no I/O and holds no state between invocations.
//! The only failure mode is a buffer under 512 bytes; every anomaly in
//! well-sized input (missing boot code, invalid signature, zero-size
//! partitions) is surfaced as a warning inside a fully built result.
//!
//! ## Example
//!
//! ```rust
//! use mbrscope_core::{analyze, SourceMetadata};
//!
//! let sector = vec![0u8; 512];
//! let result = analyze(&sector, SourceMetadata {
//!     file_name: "blank.img".into(),
//!     path: "/images/blank.img".into(),
//!     byte_size: 512,
//! }).unwrap();
//!
//! assert!(!result.statistics.signature_valid);
//! ```

pub mod bootcode;
pub mod error;
pub mod hexdump;
pub mod partitions;
pub mod report;
pub mod sector;
pub mod signature;
pub mod stats;

// Re-export commonly used items
pub use bootcode::{BootCodeReport, BootLoader};
pub use error::{Error, Result};
pub use hexdump::{HexDumpLine, SectorRegion};
pub use partitions::{DecodedPartition, PartitionEntry, PartitionTableReport};
pub use report::{analyze, analyze_sector, MbrAnalysisResult, SourceMetadata};
pub use sector::{SectorImage, SectorRegions, SECTOR_SIZE};
pub use signature::SignatureReport;
pub use stats::{DiskStatistics, DiskType};
