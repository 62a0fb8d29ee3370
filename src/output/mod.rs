// mod.rs - Offset map writers

use crate::core::GenomicOffsets;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Ensure parent directory exists before creating file
pub(crate) fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e)),
        _ => Ok(()),
    }
}

/// Write the genomic element offsets in TSV format
pub fn write_offsets_tsv(
    file_path: &str,
    offsets: &GenomicOffsets,
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(Path::new(file_path))?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    // Write command header
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# wgdplot v{}", env!("CARGO_PKG_VERSION")).map_err(|e| format!("Write error: {}", e))?;

    writeln!(writer, "element\toffset\textent").map_err(|e| format!("Write error: {}", e))?;
    for (name, span) in &offsets.elements {
        writeln!(writer, "{}\t{}\t{}", name, span.offset, span.extent)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Element offsets written to: {}", file_path);
    Ok(())
}

/// Write the genomic element offsets as a JSON document
pub fn write_offsets_json(file_path: &str, offsets: &GenomicOffsets) -> Result<(), String> {
    ensure_parent_dir(Path::new(file_path))?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, offsets)
        .map_err(|e| format!("Failed to serialize offsets: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Element offsets written to: {} (JSON format)", file_path);
    Ok(())
}

/// Write the offsets in the format implied by the file extension (.json or TSV)
pub fn write_offsets(
    file_path: &str,
    offsets: &GenomicOffsets,
    command_line: &str,
) -> Result<(), String> {
    let is_json = Path::new(file_path)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        write_offsets_json(file_path, offsets)
    } else {
        write_offsets_tsv(file_path, offsets, command_line)
    }
}
