//! Bootstrap code analysis
//!
//! Classifies the 446-byte boot code region: empty vs. present, known
//! loader signatures, embedded printable strings, and a rough
//! opcode-frequency heuristic for instruction density.

use serde::Serialize;

/// Byte values counted by the instruction-density heuristic
/// (NOP, ADD, JMP rel8, JMP rel16, and padding)
const OPCODE_SET: [u8; 5] = [0x90, 0x00, 0xFF, 0xEB, 0xE9];

/// Minimum length for an embedded string to be reported
const MIN_STRING_LEN: usize = 4;

/// At most this many embedded strings are kept, in scan order
const MAX_STRINGS: usize = 3;

/// Boot loader detected in the bootstrap code region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BootLoader {
    /// Region is all zeros, no loader present
    None,
    /// Standard Windows MBR bootstrap
    WindowsStandard,
    /// GRUB stage 1 opcode signature
    GrubSignature,
    /// GRUB identified by embedded string
    Grub,
    /// LILO identified by embedded string
    Lilo,
    /// MS-DOS style jump stub
    MsDos,
    /// Code present but no known loader matched
    Unknown,
}

impl BootLoader {
    /// Get a human-readable name for this loader
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::WindowsStandard => "Windows MBR (standard)",
            Self::GrubSignature => "GRUB loader (signature)",
            Self::Grub => "GRUB loader",
            Self::Lilo => "LILO loader",
            Self::MsDos => "MS-DOS loader",
            Self::Unknown => "Unknown or custom",
        }
    }
}

/// Report on the bootstrap code region
#[derive(Debug, Clone, Serialize)]
pub struct BootCodeReport {
    /// True if any byte in the region is nonzero
    pub has_data: bool,

    /// Loader classification, first match in the probe chain wins
    pub detected_loader: BootLoader,

    /// Printable-ASCII runs of length >= 4, first 3 in scan order
    pub embedded_strings: Vec<String>,

    /// Count of bytes matching the common-opcode set
    pub opcode_hit_count: usize,

    /// Count of zero bytes in the region
    pub zero_byte_count: usize,

    /// zero_byte_count divided by the region length
    pub zero_byte_ratio: f64,
}

/// Analyze the 446-byte bootstrap code region
///
/// Pure function of the input bytes; no failure modes.
pub fn analyze(boot_code: &[u8]) -> BootCodeReport {
    let has_data = boot_code.iter().any(|&b| b != 0);

    let detected_loader = if has_data {
        detect_loader(boot_code)
    } else {
        BootLoader::None
    };

    let zero_byte_count = boot_code.iter().filter(|&&b| b == 0).count();

    BootCodeReport {
        has_data,
        detected_loader,
        embedded_strings: extract_strings(boot_code),
        opcode_hit_count: boot_code
            .iter()
            .filter(|&&b| OPCODE_SET.contains(&b))
            .count(),
        zero_byte_count,
        zero_byte_ratio: zero_byte_count as f64 / boot_code.len() as f64,
    }
}

/// One loader probe: predicate over the region plus the tag it assigns
type Probe = (fn(&[u8]) -> bool, BootLoader);

/// Ordered probe chain, evaluated first-match-wins
///
/// Ordering matters: the MS-DOS prefix `EB 3C` would also accept inputs the
/// longer Windows prefix rejects, so the more specific probes run first.
const PROBES: [Probe; 5] = [
    (is_windows_standard, BootLoader::WindowsStandard),
    (is_grub_signature, BootLoader::GrubSignature),
    (has_grub_string, BootLoader::Grub),
    (has_lilo_string, BootLoader::Lilo),
    (is_msdos_stub, BootLoader::MsDos),
];

fn detect_loader(boot_code: &[u8]) -> BootLoader {
    PROBES
        .iter()
        .find(|(probe, _)| probe(boot_code))
        .map(|&(_, tag)| tag)
        .unwrap_or(BootLoader::Unknown)
}

fn is_windows_standard(code: &[u8]) -> bool {
    code.starts_with(&[0xEB, 0x63, 0x90, 0x4D, 0x53])
}

fn is_grub_signature(code: &[u8]) -> bool {
    code.starts_with(&[0xFA, 0xFC, 0x31])
}

fn has_grub_string(code: &[u8]) -> bool {
    contains(code, b"GRUB") || contains(code, b"grub")
}

fn has_lilo_string(code: &[u8]) -> bool {
    contains(code, b"LILO")
}

fn is_msdos_stub(code: &[u8]) -> bool {
    code.starts_with(&[0xEB, 0x3C])
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Extract maximal runs of printable ASCII (0x20-0x7E) of length >= 4
fn extract_strings(data: &[u8]) -> Vec<String> {
    let mut found = Vec::new();
    let mut current = String::new();

    for &byte in data {
        if (0x20..=0x7E).contains(&byte) {
            current.push(byte as char);
        } else {
            if current.len() >= MIN_STRING_LEN {
                found.push(std::mem::take(&mut current));
                if found.len() == MAX_STRINGS {
                    return found;
                }
            }
            current.clear();
        }
    }

    if current.len() >= MIN_STRING_LEN {
        found.push(current);
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_with_prefix(prefix: &[u8]) -> Vec<u8> {
        let mut code = vec![0u8; 446];
        code[..prefix.len()].copy_from_slice(prefix);
        code
    }

    #[test]
    fn test_empty_region() {
        let report = analyze(&[0u8; 446]);

        assert!(!report.has_data);
        assert_eq!(report.detected_loader, BootLoader::None);
        assert!(report.embedded_strings.is_empty());
        assert_eq!(report.zero_byte_count, 446);
        assert_eq!(report.zero_byte_ratio, 1.0);
        // 0x00 is in the opcode set, so an all-zero region hits on every byte
        assert_eq!(report.opcode_hit_count, 446);
    }

    #[test]
    fn test_windows_standard_prefix() {
        let code = region_with_prefix(&[0xEB, 0x63, 0x90, 0x4D, 0x53]);
        assert_eq!(analyze(&code).detected_loader, BootLoader::WindowsStandard);
    }

    #[test]
    fn test_grub_opcode_signature() {
        let code = region_with_prefix(&[0xFA, 0xFC, 0x31]);
        assert_eq!(analyze(&code).detected_loader, BootLoader::GrubSignature);
    }

    #[test]
    fn test_grub_string_anywhere() {
        let mut code = vec![0u8; 446];
        code[200..204].copy_from_slice(b"GRUB");
        assert_eq!(analyze(&code).detected_loader, BootLoader::Grub);

        let mut code = vec![0u8; 446];
        code[10..14].copy_from_slice(b"grub");
        assert_eq!(analyze(&code).detected_loader, BootLoader::Grub);
    }

    #[test]
    fn test_lilo_string() {
        let mut code = vec![0u8; 446];
        code[100..104].copy_from_slice(b"LILO");
        assert_eq!(analyze(&code).detected_loader, BootLoader::Lilo);
    }

    #[test]
    fn test_msdos_stub() {
        let code = region_with_prefix(&[0xEB, 0x3C]);
        assert_eq!(analyze(&code).detected_loader, BootLoader::MsDos);
    }

    #[test]
    fn test_probe_ordering_grub_signature_beats_grub_string() {
        // Both the opcode signature and the embedded string are present;
        // the earlier probe in the chain must win.
        let mut code = region_with_prefix(&[0xFA, 0xFC, 0x31]);
        code[300..304].copy_from_slice(b"GRUB");
        assert_eq!(analyze(&code).detected_loader, BootLoader::GrubSignature);
    }

    #[test]
    fn test_unknown_loader() {
        let code = region_with_prefix(&[0x33, 0xC0, 0x8E, 0xD0]);
        assert_eq!(analyze(&code).detected_loader, BootLoader::Unknown);
    }

    #[test]
    fn test_embedded_strings_keeps_first_three() {
        let mut code = vec![0u8; 446];
        code[0..4].copy_from_slice(b"AAAA");
        code[10..15].copy_from_slice(b"BBBBB");
        code[20..24].copy_from_slice(b"CCCC");
        code[30..34].copy_from_slice(b"DDDD");

        let report = analyze(&code);
        assert_eq!(report.embedded_strings, vec!["AAAA", "BBBBB", "CCCC"]);
    }

    #[test]
    fn test_embedded_strings_minimum_length() {
        let mut code = vec![0u8; 446];
        code[0..3].copy_from_slice(b"abc"); // Too short
        code[10..14].copy_from_slice(b"defg");

        let report = analyze(&code);
        assert_eq!(report.embedded_strings, vec!["defg"]);
    }

    #[test]
    fn test_embedded_string_run_at_end_of_region() {
        let mut code = vec![0u8; 446];
        code[442..446].copy_from_slice(b"TAIL");

        let report = analyze(&code);
        assert_eq!(report.embedded_strings, vec!["TAIL"]);
    }

    #[test]
    fn test_opcode_and_zero_counts() {
        let mut code = vec![0x01u8; 446];
        code[0] = 0x90;
        code[1] = 0xEB;
        code[2] = 0xE9;
        code[3] = 0xFF;
        code[4] = 0x00;

        let report = analyze(&code);
        assert_eq!(report.opcode_hit_count, 5);
        assert_eq!(report.zero_byte_count, 1);
        assert!((report.zero_byte_ratio - 1.0 / 446.0).abs() < 1e-12);
    }
}
