/// First absolute calendar year; parsed years at or above this are stored
/// as an offset from it, smaller values are kept raw as elapsed-year counts.
pub const YEAR_BASE_MIN: u32 = 1970;

/// Last absolute calendar year accepted (epoch seconds stay within u32).
pub const YEAR_BASE_MAX: u32 = 2106;

/// Maximum valid month number (December)
pub const MAX_MONTH: u32 = 12;

/// Month number for February
pub const FEBRUARY: u32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u32 = 400;

/// Upper bound for a bare day-of-year / elapsed-days value
pub const DAYS_IN_YEAR: u32 = 365;
pub const DAYS_IN_WEEK: u32 = 7;
pub const HOURS_IN_DAY: u32 = 24;
/// Upper bound for a bare elapsed-hours value
pub const HOURS_IN_YEAR: u32 = 8760;
pub const MINUTES_IN_HOUR: u32 = 60;
/// Upper bound for a bare elapsed-minutes value
pub const MINUTES_IN_YEAR: u32 = 525_600;
pub const SECONDS_IN_MINUTE: u32 = 60;
pub const SECONDS_IN_HOUR: u32 = 3600;
pub const SECONDS_IN_DAY: u32 = 86_400;
/// Non-leap year, used for elapsed-years conversion
pub const SECONDS_IN_YEAR: u32 = 31_536_000;
/// Upper bound (exclusive) for a bare elapsed-seconds value
pub const SECONDS_IN_LEAPYEAR: u32 = 31_622_400;
pub const MICROS_IN_SECOND: u32 = 1_000_000;

/// 1970-01-01 was a Thursday (weekday 0 = Sunday)
pub(crate) const EPOCH_WEEKDAY: u32 = 4;

/// Date field separators, either family accepted anywhere
pub(crate) const DATE_DELIMS: &str = "-/";
/// Date-to-time transition characters ('t' matched case-insensitively)
pub(crate) const DATE_TIME_DELIMS: &str = "t ";
/// Hour field terminators
pub(crate) const HOUR_DELIMS: &str = "h:";
/// Minute field terminators
pub(crate) const MINUTE_DELIMS: &str = "m:";
/// Second field terminators
pub(crate) const SECOND_DELIMS: &str = "sz. ";
/// Fractional-second terminators
pub(crate) const FRACTION_DELIMS: &str = "z ";
/// Characters introducing a fractional-second field
pub(crate) const FRACTION_LEAD: &str = ".s";

// Lookahead windows: longest literal text of the field under test plus one
// position for its trailing separator.
pub(crate) const YEAR_WINDOW: usize = 5; // "CCYY"
pub(crate) const MONTH_WINDOW: usize = 3; // "MM"
pub(crate) const DAY_WINDOW: usize = 3; // "DD"
pub(crate) const DAY_WIDE_WINDOW: usize = 4; // "365"
pub(crate) const HOUR_WINDOW: usize = 3; // "HH"
pub(crate) const HOUR_WIDE_WINDOW: usize = 5; // "8760"
pub(crate) const MINUTE_WINDOW: usize = 3; // "MM"
pub(crate) const MINUTE_WIDE_WINDOW: usize = 7; // "525600"
pub(crate) const SECOND_WINDOW: usize = 3; // "SS"
pub(crate) const SECOND_WIDE_WINDOW: usize = 9; // "31622399"
pub(crate) const FRACTION_WINDOW: usize = 7; // "999999"
