//! Analyzer error types

use thiserror::Error;

/// The main error type for MBR analysis
#[derive(Error, Debug)]
pub enum Error {
    /// Sector buffer smaller than one full MBR sector
    #[error("Invalid sector size: got {actual} bytes, need exactly {expected}")]
    InvalidSize { actual: usize, expected: usize },

    /// Report builder received a buffer below the MBR minimum
    #[error("Input too small for MBR analysis: {actual} bytes (minimum {minimum})")]
    InputTooSmall { actual: usize, minimum: usize },

    /// I/O error while loading a sector dump
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for MBR analysis operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid size error for a buffer of `actual` bytes
    pub fn invalid_size(actual: usize) -> Self {
        Error::InvalidSize {
            actual,
            expected: crate::sector::SECTOR_SIZE,
        }
    }

    /// Create an input-too-small error for a buffer of `actual` bytes
    pub fn input_too_small(actual: usize) -> Self {
        Error::InputTooSmall {
            actual,
            minimum: crate::sector::SECTOR_SIZE,
        }
    }
}
