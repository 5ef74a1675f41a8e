//! Flexible date/time/duration string parser.
//!
//! Accepts partial and full ISO-8601-like expressions with inconsistent
//! delimiters, e.g. `2019-04-15`, `2019/04/15T1:23:45.678901Z`,
//! `2019-04-15t01h23m45s678901z`, and mixed forms such as
//! `2019/04-15 1:23m45.678901`. Which fields are present is inferred from the
//! position of separators within bounded lookahead windows; when no
//! higher-order field is recognized the digits are read as elapsed-duration
//! counts instead of calendar components.

use crate::ParseError;
use crate::calendar;
use crate::consts::{
    DATE_DELIMS, DATE_TIME_DELIMS, DAY_WIDE_WINDOW, DAY_WINDOW, DAYS_IN_YEAR, FRACTION_DELIMS,
    FRACTION_LEAD, FRACTION_WINDOW, HOUR_DELIMS, HOUR_WIDE_WINDOW, HOUR_WINDOW, HOURS_IN_DAY,
    HOURS_IN_YEAR, MAX_MONTH, MICROS_IN_SECOND, MINUTE_DELIMS, MINUTE_WIDE_WINDOW, MINUTE_WINDOW,
    MINUTES_IN_HOUR, MINUTES_IN_YEAR, MONTH_WINDOW, SECOND_DELIMS, SECOND_WIDE_WINDOW,
    SECOND_WINDOW, SECONDS_IN_LEAPYEAR, SECONDS_IN_MINUTE, YEAR_BASE_MAX, YEAR_BASE_MIN,
    YEAR_WINDOW,
};
use crate::scan::{find_delim, parse_ranged, snippet};
use crate::types::{CalendarFields, Timestamp};

/// Result of a successful parse: the recovered fields, the packed timestamp,
/// and the unconsumed remainder of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDateTime<'a> {
    pub fields: CalendarFields,
    pub timestamp: Timestamp,
    pub rest: &'a str,
}

/// Which fields were recognized so far. Selects the numeric bounds of later
/// stages and the absolute-vs-relative assembly at the end.
#[derive(Debug, Default, Clone, Copy)]
struct Seen {
    year: bool,
    month: bool,
    day: bool,
    hour: bool,
    minute: bool,
}

impl Seen {
    const fn any_date(&self) -> bool {
        self.year || self.month || self.day
    }
}

/// Steps past the separator that the preceding lookahead located.
fn skip_separator(s: &str) -> &str {
    s.get(1..).unwrap_or("")
}

/// Parses a date/time/duration expression from the start of `input`.
///
/// Leading spaces are skipped. Fields that cannot be recognized are left at
/// zero; parsing stops at the first character that no stage claims, returned
/// as `rest`. See the module docs for the accepted shapes.
///
/// # Errors
/// Fails when any recognized field has no digits or is out of its
/// stage-specific range, or when a fractional-second run has no terminator
/// within its window. The partially populated fields are not returned.
pub fn parse_datetime(input: &str) -> Result<ParsedDateTime<'_>, ParseError> {
    let mut fields = CalendarFields::default();
    let mut seen = Seen::default();
    let mut s = input.trim_start_matches(' ');

    // Year: fires on a "CCYY?MM?" shape, i.e. a date separator inside the
    // year window with a second one following inside the month window.
    let this = find_delim(s, DATE_DELIMS, YEAR_WINDOW);
    let next = match this {
        Some(t) if t > 0 => find_delim(&s[t + 1..], DATE_DELIMS, MONTH_WINDOW),
        _ => None,
    };
    if matches!(next, Some(n) if n >= 1) {
        let (value, rest) = parse_ranged(s, 0, YEAR_BASE_MAX)?;
        // CCYY form is stored base-relative, smaller values are already
        // relative (elapsed-years count)
        fields.year = if (YEAR_BASE_MIN..=YEAR_BASE_MAX).contains(&value) {
            value - YEAR_BASE_MIN
        } else {
            value
        };
        seen.year = true;
        s = skip_separator(rest);
    }

    // Month: a recognized year forces it; otherwise the "MM?DD?" lookahead
    // must match exactly, or the whole remainder must be "MMxDD" shaped.
    let this = find_delim(s, DATE_DELIMS, MONTH_WINDOW);
    let next = match this {
        Some(t) if t > 0 => find_delim(&s[t + 1..], DATE_TIME_DELIMS, DAY_WINDOW),
        _ => None,
    };
    let exact_pair =
        matches!(this, Some(t) if t > 0 && next.is_none() && s.len() == t + DAY_WINDOW);
    if seen.year || next == Some(2) || exact_pair {
        let (value, rest) = parse_ranged(s, 1, MAX_MONTH)?;
        fields.month = value - 1; // make 0 relative
        seen.month = true;
        s = skip_separator(rest);
    }

    // Day: bounded by the actual month length when a date is being built,
    // otherwise a bare day-of-year / elapsed-days count up to 365.
    let (window, limit) = if seen.year || seen.month {
        (DAY_WINDOW, calendar::days_in_month(&fields))
    } else {
        (DAY_WIDE_WINDOW, DAYS_IN_YEAR)
    };
    let this = find_delim(s, DATE_TIME_DELIMS, window);
    let transition = matches!(this, Some(t) if t > 0 && s.as_bytes()[t].eq_ignore_ascii_case(&b't'));
    if seen.month || transition {
        let (value, rest) = parse_ranged(s, 1, limit)?;
        fields.day = value;
        seen.day = true;
        s = rest; // the transition character is consumed below
    }

    // Day of year only makes sense for a full calendar date
    if seen.year && seen.month && seen.day {
        fields.yearday = calendar::day_of_year(&fields);
    }

    // Single date-to-time transition character
    if matches!(s.as_bytes().first(), Some(b'T' | b't' | b' ')) {
        s = &s[1..];
    }

    // Hour: only recognized when a minute separator follows the hour
    // separator, i.e. an "HH?MM?" shape.
    let (window, limit) = if seen.any_date() {
        (HOUR_WINDOW, HOURS_IN_DAY - 1)
    } else {
        (HOUR_WIDE_WINDOW, HOURS_IN_YEAR)
    };
    let this = find_delim(s, HOUR_DELIMS, window);
    let next = match this {
        Some(t) if t > 0 => find_delim(&s[t + 1..], MINUTE_DELIMS, HOUR_WINDOW),
        _ => None,
    };
    if matches!(next, Some(n) if n > 0) {
        let (value, rest) = parse_ranged(s, 0, limit)?;
        fields.hour = value;
        seen.hour = true;
        s = skip_separator(rest);
    }

    // Minute: mirrors the month stage, including the exact "SSx" trailer test
    let (window, limit) = if seen.any_date() || seen.hour {
        (MINUTE_WINDOW, MINUTES_IN_HOUR - 1)
    } else {
        (MINUTE_WIDE_WINDOW, MINUTES_IN_YEAR)
    };
    let this = find_delim(s, MINUTE_DELIMS, window);
    let next = match this {
        Some(t) if t > 0 => find_delim(&s[t + 1..], SECOND_DELIMS, SECOND_WINDOW),
        _ => None,
    };
    let exact_pair =
        matches!(this, Some(t) if t > 0 && next.is_none() && s.len() == t + SECOND_WINDOW);
    if seen.hour || next == Some(2) || exact_pair {
        let (value, rest) = parse_ranged(s, 0, limit)?;
        fields.minute = value;
        seen.minute = true;
        s = skip_separator(rest);
    }

    // Second: when no higher field was recognized the wide bound admits a
    // long relative duration, so a bare multi-digit run parses as elapsed
    // seconds.
    let (window, limit) = if seen.any_date() || seen.hour || seen.minute {
        (SECOND_WINDOW, SECONDS_IN_MINUTE - 1)
    } else {
        (SECOND_WIDE_WINDOW, SECONDS_IN_LEAPYEAR - 1)
    };
    let this = find_delim(s, SECOND_DELIMS, window);
    let bare = this.unwrap_or(0) == 0 && (1..window).contains(&s.len());
    // A consumed minute makes the second optional: fire only when digits
    // actually follow, so a "..HHhMMm" prefix parses with the second at zero
    let digit_led = s.as_bytes().first().is_some_and(u8::is_ascii_digit);
    if (seen.minute && digit_led) || matches!(this, Some(t) if t > 0) || bare {
        let (value, rest) = parse_ranged(s, 0, limit)?;
        fields.second = value;
        s = rest; // next is the fraction marker or a terminal 'Z', no skip
    }

    // Fractional seconds, introduced by '.' or 's' and left-padded to
    // microsecond precision
    let mut micros: u32 = 0;
    if find_delim(s, FRACTION_LEAD, 1) == Some(0) {
        s = &s[1..];
        let digits = match find_delim(s, FRACTION_DELIMS, FRACTION_WINDOW) {
            Some(t) if (1..FRACTION_WINDOW).contains(&t) => t,
            _ => {
                // No terminator inside the window; a natural string end
                // within the digit allowance is accepted as the boundary
                let n = s.len();
                if !(1..FRACTION_WINDOW).contains(&n) {
                    return Err(ParseError::BadFraction(snippet(s)));
                }
                n
            }
        };
        let (value, rest) = parse_ranged(s, 0, MICROS_IN_SECOND - 1)?;
        micros = value;
        for _ in digits..6 {
            micros *= 10;
        }
        s = rest;
    }

    // Trailing 'Z'/'z'
    if matches!(s.as_bytes().first(), Some(b'Z' | b'z')) {
        s = &s[1..];
    }

    let seconds = if seen.year {
        // Full calendar date recognized: derive the day-based fields and use
        // absolute seconds since the epoch
        fields.weekday = calendar::day_of_week(&fields);
        fields.yearday = calendar::day_of_year(&fields);
        calendar::seconds_from_fields(&fields, false)
    } else {
        calendar::seconds_from_fields(&fields, true)
    };
    Ok(ParsedDateTime {
        fields,
        timestamp: Timestamp::new(seconds, micros),
        rest: s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(input: &str) -> CalendarFields {
        parse_datetime(input).unwrap().fields
    }

    fn micros(input: &str) -> u32 {
        parse_datetime(input).unwrap().timestamp.subsec_micros()
    }

    const APRIL_15: CalendarFields = CalendarFields {
        year: 49,
        month: 3,
        day: 15,
        hour: 0,
        minute: 0,
        second: 0,
        weekday: 1,
        yearday: 104,
    };

    #[test]
    fn test_date_only_all_terminators() {
        for input in [
            "2019-04-15",
            "2019/04/15",
            "2019-04-15 ",
            "2019-04-15T",
            "2019-04-15t",
            "2019/04/15 ",
            "2019/04/15T",
            "2019/04/15t",
        ] {
            assert_eq!(fields(input), APRIL_15, "input {input:?}");
        }
    }

    #[test]
    fn test_full_datetime_format_families_identical() {
        let expected = CalendarFields { hour: 1, minute: 23, second: 45, ..APRIL_15 };
        for input in [
            "2019-04-15T01h23m45s678901Z",
            "2019/04/15T1:23:45.678901Z",
            "2019-04-15t01h23m45s678901z",
            "2019/04-15 1:23m45.678901",
            "2019-04/15t01h23:45s678901",
        ] {
            let parsed = parse_datetime(input).unwrap();
            assert_eq!(parsed.fields, expected, "input {input:?}");
            assert_eq!(parsed.timestamp.subsec_micros(), 678_901, "input {input:?}");
            assert_eq!(parsed.timestamp.seconds(), 1_555_291_425, "input {input:?}");
            assert_eq!(parsed.rest, "", "input {input:?}");
        }
    }

    #[test]
    fn test_bare_seconds_mode() {
        let expected = CalendarFields { second: 1, ..CalendarFields::default() };
        for input in ["1", "1 ", "01", "01Z", "1z"] {
            assert_eq!(fields(input), expected, "input {input:?}");
        }
        // Large run still parses when nothing higher was recognized
        assert_eq!(fields("31622399").second, 31_622_399);
    }

    #[test]
    fn test_fraction_padding_law() {
        assert_eq!(micros("1.1"), 100_000);
        assert_eq!(micros("1.12"), 120_000);
        assert_eq!(micros("1.123"), 123_000);
        assert_eq!(micros("1.1234"), 123_400);
        assert_eq!(micros("1.12345"), 123_450);
        assert_eq!(micros("1.000001"), 1);
        assert_eq!(micros("1.678901"), 678_901);
    }

    #[test]
    fn test_fraction_terminator_variants() {
        for input in ["1.1", "1.1 ", "1.1Z", "1.1z"] {
            let parsed = parse_datetime(input).unwrap();
            assert_eq!(parsed.fields.second, 1, "input {input:?}");
            assert_eq!(parsed.timestamp.as_micros(), 1_100_000, "input {input:?}");
        }
        for input in ["1.000001", "1.000001 ", "1.000001Z", "1.000001z"] {
            let parsed = parse_datetime(input).unwrap();
            assert_eq!(parsed.timestamp.as_micros(), 1_000_001, "input {input:?}");
        }
    }

    #[test]
    fn test_fraction_too_long_fails() {
        assert!(matches!(
            parse_datetime("1.1234567"),
            Err(ParseError::BadFraction(_))
        ));
    }

    #[test]
    fn test_fraction_no_digits_fails() {
        assert!(parse_datetime("1.z").is_err());
    }

    #[test]
    fn test_prefixes_populate_only_their_fields() {
        let d = fields("2019-04-15");
        assert_eq!((d.hour, d.minute, d.second), (0, 0, 0));

        let d = fields("2019-04-15T01h23m");
        assert_eq!((d.hour, d.minute, d.second), (1, 23, 0));
        assert_eq!((d.year, d.month, d.day), (49, 3, 15));

        let d = fields("2019-04-15T01h23m45");
        assert_eq!((d.hour, d.minute, d.second), (1, 23, 45));
    }

    #[test]
    fn test_minute_terminated_prefix_leaves_second_zero() {
        let parsed = parse_datetime("2019-04-15T01h23m").unwrap();
        assert_eq!(parsed.fields.minute, 23);
        assert_eq!(parsed.fields.second, 0);
        assert_eq!(parsed.rest, "");
        // A digit run after the minute is still range-checked
        assert!(matches!(
            parse_datetime("2019-04-15T1:23:61"),
            Err(ParseError::OutOfRange { value: 61, lo: 0, hi: 59 })
        ));
    }

    #[test]
    fn test_month_out_of_range() {
        assert!(matches!(
            parse_datetime("2019-13-01"),
            Err(ParseError::OutOfRange { value: 13, lo: 1, hi: 12 })
        ));
    }

    #[test]
    fn test_day_exceeding_month_length() {
        // 2019 is not a leap year
        assert!(matches!(
            parse_datetime("2019-02-29"),
            Err(ParseError::OutOfRange { value: 29, lo: 1, hi: 28 })
        ));
        // 2020 is
        assert_eq!(fields("2020-02-29").day, 29);
        assert!(parse_datetime("2020-02-30").is_err());
    }

    #[test]
    fn test_second_out_of_range_after_date() {
        // With a date present the narrow bound applies
        assert!(parse_datetime("2019-04-15T1:23:61").is_err());
    }

    #[test]
    fn test_weekday_yearday_consistency() {
        let d = fields("2019-04-15T1:23:45.678901Z");
        assert_eq!(d.weekday, crate::calendar::day_of_week(&d));
        assert_eq!(d.yearday, crate::calendar::day_of_year(&d));
        assert_eq!(d.weekday, 1); // Monday
        assert_eq!(d.yearday, 104);
    }

    #[test]
    fn test_leading_spaces_skipped() {
        assert_eq!(fields("   2019-04-15"), APRIL_15);
        assert_eq!(fields(" 1").second, 1);
    }

    #[test]
    fn test_absolute_seconds_wrap_past_horizon() {
        // Last accepted calendar year exceeds the 32-bit second counter
        let parsed = parse_datetime("2106-12-31").unwrap();
        assert_eq!(parsed.fields.absolute_year(), 2106);
        assert_eq!(parsed.timestamp.seconds(), 28_229_504);

        // A sub-base year is kept raw; its absolute total wraps the same way
        let parsed = parse_datetime("1969/1-1").unwrap();
        assert_eq!(parsed.fields.year, 1969);
        assert_eq!(parsed.timestamp.seconds(), 2_006_054_656);
    }

    #[test]
    fn test_relative_year_kept_raw() {
        // Too small for the calendar base: stored as-is, but a recognized
        // year still selects absolute assembly (here 1971-01-01, a Friday)
        let d = fields("1/1-1");
        assert_eq!(d.year, 1);
        assert_eq!(d.month, 0);
        assert_eq!(d.day, 1);
        assert_eq!(d.weekday, 5);
    }

    #[test]
    fn test_bare_month_day_pair_is_relative() {
        // "MM/DD" with nothing else: month and day recognized, duration mode
        let parsed = parse_datetime("04/15").unwrap();
        assert_eq!(parsed.fields.month, 3);
        assert_eq!(parsed.fields.day, 15);
        assert_eq!(parsed.fields.yearday, 0);
        // Relative assembly: day count only, months carry no fixed length
        assert_eq!(parsed.timestamp.seconds(), 15 * 86_400);
    }

    #[test]
    fn test_rest_points_at_unconsumed_input() {
        let parsed = parse_datetime("2019-04-15T01h rest").unwrap();
        assert_eq!(parsed.fields.day, 15);
        // The bare "01h" trailer matches no stage and is left unconsumed
        assert_eq!(parsed.rest, "01h rest");
    }

    #[test]
    fn test_empty_input_yields_zeroes() {
        let parsed = parse_datetime("").unwrap();
        assert_eq!(parsed.fields, CalendarFields::default());
        assert_eq!(parsed.timestamp.as_micros(), 0);
        assert_eq!(parsed.rest, "");
    }

    #[test]
    fn test_epoch_timestamp_round_trip() {
        let parsed = parse_datetime("1970-01-01T0:00:00Z").unwrap();
        assert_eq!(parsed.timestamp.as_micros(), 0);
        assert_eq!(parsed.fields.weekday, 4); // Thursday
    }
}
