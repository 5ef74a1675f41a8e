use crate::consts::MICROS_IN_SECOND;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar/time components recovered from a parsed string.
///
/// Every field starts at zero and is only written when the corresponding
/// portion of the input was recognized. In elapsed-duration mode the fields
/// hold plain counts rather than calendar components.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarFields {
    /// Years since [`YEAR_BASE_MIN`](crate::YEAR_BASE_MIN) when an absolute
    /// calendar year was recognized, otherwise a raw elapsed-years count.
    pub year: u32,
    /// Month of year, 0-based (January = 0).
    pub month: u32,
    /// Day of month (1..=31), or an elapsed-days count (1..=365) when no
    /// year/month was recognized.
    pub day: u32,
    /// Hour (0..=23), or elapsed hours (0..=8760) in duration mode.
    pub hour: u32,
    /// Minute (0..=59), or elapsed minutes (0..=525600) in duration mode.
    pub minute: u32,
    /// Second (0..=59), or elapsed seconds (0..=31622399) in duration mode.
    pub second: u32,
    /// Day of week (0 = Sunday). Derived; only valid when year, month and
    /// day were all explicitly parsed.
    pub weekday: u32,
    /// Day of year, 0-based. Derived under the same condition as `weekday`.
    pub yearday: u32,
}

impl CalendarFields {
    /// Absolute calendar year, assuming `year` holds a base-relative offset.
    pub const fn absolute_year(&self) -> u32 {
        self.year + crate::consts::YEAR_BASE_MIN
    }

    /// Month of year as conventionally written (1..=12).
    pub const fn month_number(&self) -> u32 {
        self.month + 1
    }
}

/// Whole seconds since the epoch combined with a microsecond fraction,
/// packed as `seconds * 1_000_000 + micros`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize,
)]
#[serde(from = "u64", into = "u64")]
pub struct Timestamp(u64);

impl Timestamp {
    /// Packs whole seconds and a microsecond fraction into one value.
    pub const fn new(seconds: u32, micros: u32) -> Self {
        Self(seconds as u64 * MICROS_IN_SECOND as u64 + micros as u64)
    }

    /// Total microseconds since the epoch.
    #[inline]
    pub const fn as_micros(self) -> u64 {
        self.0
    }

    /// Whole seconds since the epoch.
    #[inline]
    pub const fn seconds(self) -> u32 {
        (self.0 / MICROS_IN_SECOND as u64) as u32
    }

    /// Microsecond fraction (0..=999_999).
    #[inline]
    pub const fn subsec_micros(self) -> u32 {
        (self.0 % MICROS_IN_SECOND as u64) as u32
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.seconds(), self.subsec_micros())
    }
}
