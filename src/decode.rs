//! Escape and literal decoding: percent escapes, `%uXXXX` unicode escapes,
//! hex byte strings and dotted IPv4 addresses.

use std::net::Ipv4Addr;

use thiserror::Error;

use crate::ParseError;
use crate::scan::{parse_ranged, snippet};

/// Errors from the escape and hex decoders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A character outside `[0-9a-fA-F]` where a hex digit was required.
    #[error("invalid hex digit {0:?}")]
    InvalidHexDigit(char),

    /// The input ended in the middle of an escape sequence.
    #[error("truncated escape at {0:?}")]
    TruncatedEscape(String),

    /// A `%uXXXX` escape named a code point that is not a valid scalar.
    #[error("invalid unicode scalar {0:#06x}")]
    InvalidScalar(u32),

    /// Percent-decoded bytes did not form valid UTF-8.
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Value of a single hex digit, or `None` for any other byte.
pub const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

fn hex_pair(bytes: &[u8], src: &str) -> Result<u8, DecodeError> {
    let (Some(&hi), Some(&lo)) = (bytes.first(), bytes.get(1)) else {
        return Err(DecodeError::TruncatedEscape(snippet(src)));
    };
    let hi = hex_value(hi).ok_or(DecodeError::InvalidHexDigit(char::from(hi)))?;
    let lo = hex_value(lo).ok_or(DecodeError::InvalidHexDigit(char::from(lo)))?;
    Ok((hi << 4) | lo)
}

/// Decodes `%XX` percent escapes in `src`.
///
/// Bytes outside escapes pass through unchanged; the decoded byte sequence
/// must form valid UTF-8.
///
/// # Errors
/// Fails on a non-hex digit or truncated escape, or when the decoded bytes
/// are not UTF-8.
pub fn decode_percent(src: &str) -> Result<String, DecodeError> {
    let bytes = src.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            out.push(hex_pair(&bytes[i + 1..], &src[i..])?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| DecodeError::InvalidUtf8)
}

/// Decodes `%uXXXX` unicode escapes and `%XX` byte escapes in `src`.
///
/// A `%uXXXX` escape names a unicode scalar directly; a plain `%XX` escape
/// decodes as the character with that code, so non-ASCII bytes come out as
/// their Latin-1 characters rather than raw bytes.
///
/// # Errors
/// Fails on a non-hex digit, a truncated escape, or a `%uXXXX` value in the
/// surrogate range.
pub fn decode_unicode(src: &str) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(src.len());
    let mut rest = src;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let esc = &rest[pos..];
        let bytes = esc.as_bytes();
        if matches!(bytes.get(1), Some(b'u' | b'U')) {
            let Some(run) = bytes.get(2..6) else {
                return Err(DecodeError::TruncatedEscape(snippet(esc)));
            };
            let mut code: u32 = 0;
            for &b in run {
                let digit = hex_value(b).ok_or(DecodeError::InvalidHexDigit(char::from(b)))?;
                code = (code << 4) | u32::from(digit);
            }
            out.push(char::from_u32(code).ok_or(DecodeError::InvalidScalar(code))?);
            rest = &esc[6..];
        } else {
            out.push(char::from(hex_pair(&bytes[1..], esc)?));
            rest = &esc[3..];
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// Parses a run of hex digits into bytes, stopping at the first space or the
/// end of input.
///
/// An odd-length run is read most-significant-first: the leading digit forms
/// a byte on its own, so `"ABC"` decodes to `[0x0A, 0xBC]`.
///
/// # Errors
/// Fails on any character that is neither a hex digit nor the terminating
/// space.
pub fn parse_hex_bytes(src: &str) -> Result<Vec<u8>, DecodeError> {
    let raw = src.as_bytes();
    let end = raw.iter().position(|&b| b == b' ').unwrap_or(raw.len());

    let mut nibbles = Vec::with_capacity(end);
    for &b in &raw[..end] {
        nibbles.push(hex_value(b).ok_or(DecodeError::InvalidHexDigit(char::from(b)))?);
    }

    let mut out = Vec::with_capacity(nibbles.len().div_ceil(2));
    let mut rest: &[u8] = &nibbles;
    if rest.len() % 2 == 1 {
        out.push(rest[0]);
        rest = &rest[1..];
    }
    for pair in rest.chunks_exact(2) {
        out.push((pair[0] << 4) | pair[1]);
    }
    Ok(out)
}

/// Parses a dotted-quad IPv4 address from the start of `src`, after skipping
/// leading spaces. Returns the address and the unconsumed remainder.
///
/// # Errors
/// Fails when an octet is missing, exceeds 255, or a dot separator is absent.
pub fn parse_ipv4(src: &str) -> Result<(Ipv4Addr, &str), ParseError> {
    let mut s = src.trim_start_matches(' ');
    let mut octets = [0_u8; 4];
    for (index, slot) in octets.iter_mut().enumerate() {
        let (value, rest) = parse_ranged(s, 0, 255)?;
        *slot = u8::try_from(value).unwrap_or(u8::MAX);
        s = rest;
        if index < 3 {
            let Some(after) = s.strip_prefix('.') else {
                return Err(ParseError::InvalidFormat(snippet(s)));
            };
            s = after;
        }
    }
    Ok((Ipv4Addr::from(octets), s))
}
