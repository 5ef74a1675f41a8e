//! Bitmask-to-text reporting: rendering bit-flag transitions and per-bit
//! value maps for status registers.

use std::fmt::Write;

/// Renders the transition between two flag words, highest masked bit first.
///
/// Each bit selected by `mask` contributes one entry prefixed by its state:
/// `~` still set, `^` newly set, `_` newly cleared. Bits clear in both words
/// are skipped. `labels` is indexed by bit position; positions without a
/// label render as `N/xBIT`.
///
/// Returns an empty string when `mask` is zero or both words are zero.
pub fn decode_changes(prev: u32, curr: u32, mask: u32, labels: &[&str]) -> String {
    let mut out = String::new();
    if mask == 0 || (prev == 0 && curr == 0) {
        return out;
    }
    for index in (0..u32::BITS as usize).rev() {
        let bit = 1_u32 << index;
        if mask & bit == 0 {
            continue;
        }
        let marker = match (prev & bit != 0, curr & bit != 0) {
            (true, true) => '~',
            (false, true) => '^',
            (true, false) => '_',
            (false, false) => continue,
        };
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(marker);
        match labels.get(index) {
            Some(label) if !label.is_empty() => out.push_str(label),
            _ => {
                let _ = write!(out, "{index}/x{bit:X}");
            }
        }
    }
    out
}

/// Renders `value` against a per-bit character template, most significant
/// template position first.
///
/// `template` assigns one character per bit, its first character naming the
/// highest bit covered; positions whose bit is clear render as `-`.
/// Templates longer than 32 characters are truncated to the low 32 bits.
pub fn value_map(template: &str, value: u32) -> String {
    let width = template.chars().count().min(u32::BITS as usize);
    let mut out = String::with_capacity(width);
    for (offset, symbol) in template.chars().take(width).enumerate() {
        let bit = 1_u32 << (width - 1 - offset);
        out.push(if value & bit != 0 { symbol } else { '-' });
    }
    out
}
