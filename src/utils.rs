use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// `notes.txt` -> `notes.bin`, in the same directory.
pub fn compressed_path(input: &Path) -> PathBuf {
    input.with_extension("bin")
}

/// `notes.bin` -> `notes_decompressed.txt`, in the same directory.
pub fn decompressed_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_decompressed.txt"))
}

/// Read entire file into a Vec<u8>
pub fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Write bytes to a file (overwrite)
pub fn write_file(path: &Path, data: &[u8]) -> io::Result<()> {
    fs::write(path, data)
}

/// Format bytes into human-readable string (e.g. 1024 -> "1.00 KB")
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}

/// Compressed size as a percentage of the original size.
pub fn compression_ratio(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    compressed as f64 / original as f64 * 100.0
}
