//! Program Loader.
//!
//! This module provides utilities for placing a program image in memory. It performs:
//! 1. **Hex parsing:** Reads `.x` images, one 32-bit hexadecimal word per line.
//! 2. **Word loading:** Writes the parsed words little-endian from a base address.
//! 3. **Binary loading:** Copies a raw byte image verbatim.
//!
//! In a hex image, blank lines are skipped, a `0x` prefix is optional, and
//! anything after `#` or `//` is a comment.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::error::LoadError;
use crate::soc::memory::Ram;

/// Comment markers recognised in hex images.
const COMMENT_MARKERS: [&str; 2] = ["#", "//"];

/// Parses a hex program image into instruction words.
///
/// # Arguments
///
/// * `text` - Contents of a `.x` file.
///
/// # Returns
///
/// The words in file order, or the first malformed line.
///
/// # Examples
///
/// ```
/// use legv8_core::sim::loader::parse_hex_program;
///
/// let words = parse_hex_program("0xb1001401  # adds x1, x0, #5\n\nd4400000\n").unwrap();
/// assert_eq!(words, vec![0xB100_1401, 0xD440_0000]);
/// ```
pub fn parse_hex_program(text: &str) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        let digits = line
            .strip_prefix("0x")
            .or_else(|| line.strip_prefix("0X"))
            .unwrap_or(line);
        let word = digits
            .chars()
            .all(|c| c.is_ascii_hexdigit())
            .then(|| u32::from_str_radix(digits, 16).ok())
            .flatten()
            .ok_or_else(|| LoadError::InvalidWord {
                line: idx + 1,
                text: line.to_string(),
            })?;
        words.push(word);
    }
    Ok(words)
}

/// Returns the part of `line` before the first comment marker.
fn strip_comment(line: &str) -> &str {
    COMMENT_MARKERS
        .iter()
        .filter_map(|marker| line.find(marker))
        .min()
        .map_or(line, |pos| &line[..pos])
}

/// Writes instruction words little-endian starting at `addr`.
///
/// The whole program must fit in the region containing `addr`.
pub fn load_words(ram: &mut Ram, addr: u64, words: &[u32]) -> Result<(), LoadError> {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    ram.load_bytes(addr, &bytes)?;
    Ok(())
}

/// Reads a hex image from disk and loads it at `addr`.
///
/// # Returns
///
/// The number of instruction words loaded.
pub fn load_program(ram: &mut Ram, path: &Path, addr: u64) -> Result<usize, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_hex_program(&text)?;
    load_words(ram, addr, &words)?;
    info!("loaded {} words from {} at {addr:#x}", words.len(), path.display());
    Ok(words.len())
}

/// Copies a raw binary image from disk into memory at `addr`.
///
/// # Returns
///
/// The number of bytes loaded.
pub fn load_binary(ram: &mut Ram, path: &Path, addr: u64) -> Result<usize, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ram.load_bytes(addr, &bytes)?;
    info!("loaded {} bytes from {} at {addr:#x}", bytes.len(), path.display());
    Ok(bytes.len())
}
