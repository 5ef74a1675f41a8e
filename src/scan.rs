//! Bounded-window scanning primitives shared by the parsers.

use crate::ParseError;
use std::borrow::Cow;

/// Case folding applied while extracting a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFold {
    #[default]
    Preserve,
    Lower,
    Upper,
}

/// Truncates an input remainder for use in error messages.
pub(crate) fn snippet(s: &str) -> String {
    s.chars().take(24).collect()
}

/// Returns the byte offset of the first occurrence of any character in
/// `delims` within the first `window` bytes of `src`, comparing ASCII
/// case-insensitively. A `window` of zero scans the whole string. Reaching
/// the end of the string before the window is exhausted is `None`, not an
/// error; an empty delimiter set never matches.
pub fn find_delim(src: &str, delims: &str, window: usize) -> Option<usize> {
    let limit = if window == 0 { src.len() } else { window.min(src.len()) };
    src.as_bytes()[..limit]
        .iter()
        .position(|b| delims.bytes().any(|d| d.eq_ignore_ascii_case(b)))
}

/// Counts leading characters of `src` that appear in `delims` (exact match),
/// scanning at most `window` bytes; zero means the whole string.
pub fn skip_delim(src: &str, delims: &str, window: usize) -> usize {
    let limit = if window == 0 { src.len() } else { window.min(src.len()) };
    src.as_bytes()[..limit]
        .iter()
        .take_while(|b| delims.bytes().any(|d| d == **b))
        .count()
}

/// Counts leading blanks (space or tab).
pub fn count_spaces(src: &str) -> usize {
    src.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

/// Counts leading carriage-return / line-feed characters.
pub fn count_crlf(src: &str) -> usize {
    src.bytes().take_while(|b| *b == b'\r' || *b == b'\n').count()
}

/// Parses a run of ASCII digits (no sign, no radix prefix) and verifies the
/// value lies in `lo..=hi`.
///
/// On success returns the value and the remainder positioned just past the
/// consumed digits. Any failure aborts the caller's whole operation; no
/// partial value is reported.
///
/// # Errors
/// `ParseError::MissingDigits` when `src` does not start with a digit,
/// `ParseError::OutOfRange` when the parsed value falls outside the bounds.
pub fn parse_ranged(src: &str, lo: u32, hi: u32) -> Result<(u32, &str), ParseError> {
    let digits = src.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(ParseError::MissingDigits(snippet(src)));
    }
    let mut value: u64 = 0;
    for &b in &src.as_bytes()[..digits] {
        value = value * 10 + u64::from(b - b'0');
        if value > u64::from(u32::MAX) {
            return Err(ParseError::OutOfRange { value: u32::MAX, lo, hi });
        }
    }
    let value = value as u32;
    if !(lo..=hi).contains(&value) {
        return Err(ParseError::OutOfRange { value, lo, hi });
    }
    Ok((value, &src[digits..]))
}

/// Extracts the next token from `src`: leading blanks are skipped, then
/// characters are taken until a delimiter, the end of the string, or
/// `max_len` characters (zero meaning unlimited), with optional case folding.
///
/// Returns the token and the remainder, which starts at the terminating
/// delimiter (not consumed); callers walking a delimited list advance past
/// the separators with [`skip_delim`] between calls.
pub fn parse_token<'a>(
    src: &'a str,
    delims: &str,
    fold: CaseFold,
    max_len: usize,
) -> (Cow<'a, str>, &'a str) {
    let src = &src[count_spaces(src)..];
    let mut taken = 0usize;
    let mut end = src.len();
    for (idx, c) in src.char_indices() {
        if delims.contains(c) || (max_len != 0 && taken == max_len) {
            end = idx;
            break;
        }
        taken += 1;
    }
    let token = &src[..end];
    let token = match fold {
        CaseFold::Preserve => Cow::Borrowed(token),
        CaseFold::Lower => Cow::Owned(token.to_lowercase()),
        CaseFold::Upper => Cow::Owned(token.to_uppercase()),
    };
    (token, &src[end..])
}
