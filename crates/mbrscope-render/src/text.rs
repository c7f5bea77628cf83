//! Plain-text report and annotated hex dump rendering

use mbrscope_core::{
    BootCodeReport, DecodedPartition, MbrAnalysisResult, SectorRegion, SignatureReport,
};

const RULE: &str = "======================================================================";

/// Threshold above which the opcode heuristic reports executable code
const OPCODE_CODE_THRESHOLD: usize = 100;

/// Render the full plain-text analysis report
pub fn render_text(result: &MbrAnalysisResult) -> String {
    let mut out = Vec::new();

    out.push(RULE.to_string());
    out.push("MBR ANALYSIS REPORT".to_string());
    out.push(RULE.to_string());
    out.push(format!("File: {}", result.file_name));
    out.push(format!("Full path: {}", result.path));
    out.push(format!("Size: {} bytes", result.byte_size));
    out.push(format!("Analyzed at: {}", result.analyzed_at.to_rfc3339()));
    out.push(format!(
        "Disk type: {}",
        result.statistics.disk_type.description()
    ));
    out.push(String::new());

    out.push(RULE.to_string());
    out.push("1. BOOT CODE (446 bytes, 0x000-0x1BD)".to_string());
    out.push(RULE.to_string());
    out.extend(boot_code_lines(&result.boot_code));
    out.push(String::new());

    out.push(RULE.to_string());
    out.push("2. PARTITION TABLE (64 bytes, 0x1BE-0x1FD)".to_string());
    out.push(RULE.to_string());
    out.push(format!(
        "Slots used: {}/{}, active: {}",
        result.statistics.used_count,
        result.statistics.total_partitions,
        result.statistics.active_count
    ));
    out.push(String::new());

    for entry in &result.partition_table.entries {
        out.push(format!(
            "PARTITION {} (offset 0x{:03X}):",
            entry.index, entry.offset
        ));
        out.push(format!("  HEX: {}", hex_bytes(&entry.raw)));

        match &entry.decoded {
            None => out.push("  Empty slot".to_string()),
            Some(decoded) => out.extend(partition_lines(decoded)),
        }
        out.push(String::new());
    }

    out.push(RULE.to_string());
    out.push("3. SIGNATURE (2 bytes, 0x1FE-0x1FF)".to_string());
    out.push(RULE.to_string());
    out.extend(signature_lines(&result.signature));
    out.push(String::new());

    out.push(RULE.to_string());
    out.push("4. FULL HEX DUMP".to_string());
    out.push(RULE.to_string());
    out.push(render_hex_dump(result));

    out.push(RULE.to_string());
    out.push("5. SUMMARY".to_string());
    out.push(RULE.to_string());

    let issues = issues(result);
    let warnings = warnings(result);

    if issues.is_empty() {
        out.push("MBR structure is intact, all checks passed".to_string());
    } else {
        out.push("Problems found:".to_string());
        for issue in &issues {
            out.push(format!("  - {}", issue));
        }
    }

    if !warnings.is_empty() {
        out.push("Warnings:".to_string());
        for warning in &warnings {
            out.push(format!("  - {}", warning));
        }
    }

    out.push(String::new());
    out.push(format!(
        "Disk type: {}",
        result.statistics.disk_type.description()
    ));
    out.push(format!(
        "Partitions used: {}/{}",
        result.statistics.used_count, result.statistics.total_partitions
    ));
    out.push(format!(
        "Active partitions: {}",
        result.statistics.active_count
    ));
    out.push(format!(
        "Signature valid: {}",
        yes_no(result.statistics.signature_valid)
    ));
    out.push(format!(
        "Boot code present: {}",
        yes_no(result.statistics.boot_code_present)
    ));

    out.join("\n")
}

/// Render the full 32-row hex dump with per-row region labels
pub fn render_hex_dump(result: &MbrAnalysisResult) -> String {
    let mut out = Vec::new();

    out.push(
        "Offset  00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F  ASCII             Region"
            .to_string(),
    );

    for line in &result.hex_dump {
        out.push(format!(
            "0x{:03X}   {}  {:<16}  {}",
            line.offset,
            line.hex(),
            line.ascii,
            region_label(line.offset as usize, line.region)
        ));
    }

    out.join("\n")
}

/// Hard findings: structural problems a forensic examiner should see first
pub fn issues(result: &MbrAnalysisResult) -> Vec<&'static str> {
    let mut issues = Vec::new();

    if !result.statistics.boot_code_present {
        issues.push("Boot code is absent");
    }
    if result.statistics.empty_count == result.statistics.total_partitions {
        issues.push("Partition table is empty");
    }
    if !result.statistics.signature_valid {
        issues.push("MBR signature is invalid");
    }

    issues
}

/// Soft findings: unusual but not necessarily broken
pub fn warnings(result: &MbrAnalysisResult) -> Vec<&'static str> {
    let mut warnings = Vec::new();

    if result.statistics.gpt_protective_count > 0 {
        warnings.push("GPT protective partition found, this is a GPT disk");
    }
    if result.statistics.multiple_active() {
        warnings.push("Multiple active partitions may prevent booting");
    }

    warnings
}

fn boot_code_lines(report: &BootCodeReport) -> Vec<String> {
    let mut lines = Vec::new();

    if !report.has_data {
        lines.push("Boot code: ABSENT (all bytes zero)".to_string());
        lines.push("The MBR carries no loader; blank disk, damaged MBR, or GPT disk".to_string());
    } else {
        lines.push("Boot code: PRESENT".to_string());
        lines.push(format!("Loader: {}", report.detected_loader.name()));

        if !report.embedded_strings.is_empty() {
            lines.push(format!(
                "Embedded strings: {}",
                report.embedded_strings.join(", ")
            ));
        }

        if report.opcode_hit_count > OPCODE_CODE_THRESHOLD {
            lines.push(format!(
                "Executable code detected (~{} opcode bytes)",
                report.opcode_hit_count
            ));
        }
    }

    lines.push(format!(
        "Zero bytes: {}/446 ({:.1}%)",
        report.zero_byte_count,
        report.zero_byte_ratio * 100.0
    ));

    lines
}

fn partition_lines(decoded: &DecodedPartition) -> Vec<String> {
    let mut lines = vec![
        format!("  Active: {}", yes_no(decoded.bootable)),
        format!("  Type: {} (0x{:02X})", decoded.type_name, decoded.type_code),
        format!("  First LBA: {}", decoded.lba_start),
        format!("  Sectors: {}", decoded.sector_count),
        format!(
            "  Size: {:.2} MB ({:.3} GB)",
            decoded.size_mb, decoded.size_gb
        ),
    ];

    if decoded.zero_size_warning {
        lines.push("  Warning: partition size is zero".to_string());
    }
    if decoded.non_standard_start_warning {
        lines.push("  Warning: non-standard partition start".to_string());
    }

    lines
}

fn signature_lines(signature: &SignatureReport) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Byte 1 (0x1FE): {} = {} binary",
            signature.byte1_hex(),
            signature.byte1_binary()
        ),
        format!(
            "Byte 2 (0x1FF): {} = {} binary",
            signature.byte2_hex(),
            signature.byte2_binary()
        ),
    ];

    if signature.is_valid {
        lines.push("Signature VALID: 0x55 0xAA".to_string());
        lines.push("BIOS will accept this sector as bootable".to_string());
    } else {
        lines.push("Signature INVALID: expected 0x55 0xAA".to_string());
        if signature.is_reversed {
            lines.push("Reversed signature detected (AA 55)".to_string());
        }
    }

    lines
}

/// Region column label, refined to the partition slot where applicable
///
/// The tag comes from the row's starting offset only, matching the core's
/// hex dump model: the row at 0x1F0 is labeled PART4 even though it also
/// covers the signature bytes.
fn region_label(offset: usize, region: SectorRegion) -> &'static str {
    match region {
        SectorRegion::BootCode => "BOOT",
        SectorRegion::Signature => "SIGN",
        SectorRegion::PartitionTable => match offset {
            446..=461 => "PART1",
            462..=477 => "PART2",
            478..=493 => "PART3",
            _ => "PART4",
        },
    }
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
