/// Number of months in a year (months are 0-indexed, 0 = January)
pub const MONTHS_PER_YEAR: u8 = 12;

/// Number of days in a week (weekdays are 0-indexed from the locale's first day)
pub const DAYS_PER_WEEK: u8 = 7;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in each 0-indexed month of a non-leap year
/// February shows 28 days (adjusted by the leap-year check)
pub const DAYS_IN_MONTH: [u8; 12] = [
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

/// 0-indexed month number for February
pub(crate) const FEBRUARY: u8 = 1;
/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Output template token replaced by the 4-digit year
pub const YEAR_TOKEN: &str = "yyyy";
/// Output template token replaced by the 2-digit, 1-based month
pub const MONTH_TOKEN: &str = "mm";
/// Output template token replaced by the 2-digit day
pub const DAY_TOKEN: &str = "dd";

/// Message template placeholder for month values and month-name partials
pub(crate) const MONTH_PLACEHOLDER: &str = "%month%";
/// Message template placeholder for day values and weekday-name partials
pub(crate) const DAY_PLACEHOLDER: &str = "%day%";
/// Message template placeholder for locale codes
pub(crate) const LOCALE_PLACEHOLDER: &str = "%locale%";
