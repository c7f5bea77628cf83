//! Boot signature validation
//!
//! BIOS accepts a sector as bootable only when the trailing two bytes are
//! exactly 0x55 0xAA.

use serde::Serialize;

/// The boot signature expected at offset 0x1FE
pub const BOOT_SIGNATURE: [u8; 2] = [0x55, 0xAA];

/// Report on the 2-byte boot signature region
#[derive(Debug, Clone, Serialize)]
pub struct SignatureReport {
    /// Byte at offset 0x1FE
    pub byte1: u8,

    /// Byte at offset 0x1FF
    pub byte2: u8,

    /// True iff the bytes are exactly 0x55 0xAA
    pub is_valid: bool,

    /// True iff the bytes are 0xAA 0x55, informational only
    pub is_reversed: bool,
}

impl SignatureReport {
    /// Validate the 2-byte signature region. No failure modes.
    pub fn from_bytes(signature: &[u8]) -> Self {
        let byte1 = signature[0];
        let byte2 = signature[1];

        Self {
            byte1,
            byte2,
            is_valid: [byte1, byte2] == BOOT_SIGNATURE,
            is_reversed: [byte1, byte2] == [BOOT_SIGNATURE[1], BOOT_SIGNATURE[0]],
        }
    }

    /// Hex rendering of byte 1, e.g. `0x55`
    pub fn byte1_hex(&self) -> String {
        format!("0x{:02X}", self.byte1)
    }

    /// Hex rendering of byte 2
    pub fn byte2_hex(&self) -> String {
        format!("0x{:02X}", self.byte2)
    }

    /// Binary rendering of byte 1, e.g. `01010101`
    pub fn byte1_binary(&self) -> String {
        format!("{:08b}", self.byte1)
    }

    /// Binary rendering of byte 2
    pub fn byte2_binary(&self) -> String {
        format!("{:08b}", self.byte2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_signature() {
        let report = SignatureReport::from_bytes(&[0x55, 0xAA]);
        assert!(report.is_valid);
        assert!(!report.is_reversed);
    }

    #[test]
    fn test_reversed_signature() {
        let report = SignatureReport::from_bytes(&[0xAA, 0x55]);
        assert!(!report.is_valid);
        assert!(report.is_reversed);
    }

    #[test]
    fn test_missing_signature() {
        let report = SignatureReport::from_bytes(&[0x00, 0x00]);
        assert!(!report.is_valid);
        assert!(!report.is_reversed);
        assert_eq!(report.byte1, 0x00);
        assert_eq!(report.byte2, 0x00);
    }

    #[test]
    fn test_partial_signature_is_invalid() {
        assert!(!SignatureReport::from_bytes(&[0x55, 0x00]).is_valid);
        assert!(!SignatureReport::from_bytes(&[0x00, 0xAA]).is_valid);
    }

    #[test]
    fn test_renderings() {
        let report = SignatureReport::from_bytes(&[0x55, 0xAA]);
        assert_eq!(report.byte1_hex(), "0x55");
        assert_eq!(report.byte2_hex(), "0xAA");
        assert_eq!(report.byte1_binary(), "01010101");
        assert_eq!(report.byte2_binary(), "10101010");
    }
}
