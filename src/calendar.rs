//! Gregorian calendar arithmetic backing the datetime parser.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_WEEK, EPOCH_WEEKDAY, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, SECONDS_IN_DAY, SECONDS_IN_HOUR,
    SECONDS_IN_MINUTE, SECONDS_IN_YEAR, YEAR_BASE_MIN,
};
use crate::types::CalendarFields;

pub const fn is_leap_year(year: u32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Leap days occurring in `[YEAR_BASE_MIN, year)`.
const fn leap_days_before(year: u32) -> u32 {
    const fn leaps(y: u32) -> u32 {
        y / LEAP_YEAR_CYCLE - y / CENTURY_CYCLE + y / GREGORIAN_CYCLE
    }
    leaps(year - 1) - leaps(YEAR_BASE_MIN - 1)
}

/// Days in the month currently populated in `fields`, leap-year aware.
pub fn days_in_month(fields: &CalendarFields) -> u32 {
    let month = fields.month_number();
    debug_assert!(month >= 1 && month <= MAX_MONTH);
    if month == FEBRUARY && is_leap_year(fields.absolute_year()) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// 0-based day of year for a fully populated year/month/day.
pub fn day_of_year(fields: &CalendarFields) -> u32 {
    let leap = is_leap_year(fields.absolute_year());
    let mut days = fields.day - 1;
    for month in 1..fields.month_number() {
        days += if month == FEBRUARY && leap {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[month as usize]
        };
    }
    days
}

/// Whole days from the epoch to the date populated in `fields`.
pub fn days_since_epoch(fields: &CalendarFields) -> u32 {
    fields.year * 365 + leap_days_before(fields.absolute_year()) + day_of_year(fields)
}

/// Weekday index for a fully populated date, 0 = Sunday.
pub fn day_of_week(fields: &CalendarFields) -> u32 {
    (days_since_epoch(fields) + EPOCH_WEEKDAY) % DAYS_IN_WEEK
}

/// Whole seconds represented by `fields`.
///
/// In absolute mode the fields describe a calendar date+time and the result
/// is seconds since the epoch. In relative mode each field is a plain count
/// summed with fixed unit conversions (months carry no fixed length and are
/// ignored).
pub fn seconds_from_fields(fields: &CalendarFields, relative: bool) -> u32 {
    let time = u64::from(fields.hour) * u64::from(SECONDS_IN_HOUR)
        + u64::from(fields.minute) * u64::from(SECONDS_IN_MINUTE)
        + u64::from(fields.second);
    let total = if relative {
        u64::from(fields.year) * u64::from(SECONDS_IN_YEAR)
            + u64::from(fields.day) * u64::from(SECONDS_IN_DAY)
            + time
    } else {
        u64::from(days_since_epoch(fields)) * u64::from(SECONDS_IN_DAY) + time
    };
    // The packed counter is 32-bit; totals past its horizon wrap
    (total & u64::from(u32::MAX)) as u32
}
