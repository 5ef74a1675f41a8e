mod bitmap;
mod calendar;
mod consts;
mod datetime;
mod decode;
mod prelude;
mod scan;
mod types;

pub use bitmap::{decode_changes, value_map};
pub use calendar::{
    day_of_week, day_of_year, days_in_month, days_since_epoch, is_leap_year, seconds_from_fields,
};
pub use consts::*;
pub use datetime::{ParsedDateTime, parse_datetime};
pub use decode::{
    DecodeError, decode_percent, decode_unicode, hex_value, parse_hex_bytes, parse_ipv4,
};
pub use scan::{
    CaseFold, count_crlf, count_spaces, find_delim, parse_ranged, parse_token, skip_delim,
};
pub use types::{CalendarFields, Timestamp};

use crate::prelude::*;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty input string")]
    EmptyInput,
    #[display(fmt = "Expected digits at: {_0}")]
    MissingDigits(String),
    #[display(fmt = "Value {value} out of range {lo}-{hi}")]
    OutOfRange { value: u32, lo: u32, hi: u32 },
    #[display(fmt = "Bad fractional seconds at: {_0}")]
    BadFraction(String),
    #[display(fmt = "Invalid format at: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Unexpected trailing input: {_0}")]
    TrailingInput(String),
}

impl std::error::Error for ParseError {}

/// A fully consumed date/time/duration expression: the recovered calendar
/// fields plus the packed microsecond timestamp.
///
/// Unlike [`parse_datetime`], which stops at the first unrecognized character
/// and hands back the remainder, `FromStr` here demands that the whole string
/// (spaces aside) is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, serde::Serialize, serde::Deserialize)]
#[display(fmt = "{timestamp}")]
pub struct DateTimeValue {
    pub fields: CalendarFields,
    pub timestamp: Timestamp,
}

impl FromStr for DateTimeValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let parsed = parse_datetime(trimmed)?;
        if !parsed.rest.trim_start_matches(' ').is_empty() {
            return Err(ParseError::TrailingInput(parsed.rest.to_owned()));
        }
        Ok(Self {
            fields: parsed.fields,
            timestamp: parsed.timestamp,
        })
    }
}

impl From<ParsedDateTime<'_>> for DateTimeValue {
    fn from(parsed: ParsedDateTime<'_>) -> Self {
        Self {
            fields: parsed.fields,
            timestamp: parsed.timestamp,
        }
    }
}
