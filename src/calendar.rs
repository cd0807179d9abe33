use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MIN_DAY, MONTHS_PER_YEAR,
};
use crate::error::ParseError;
use chrono::Datelike;
use derive_more::Display;

/// Days between 0000-03-01 and 1970-01-01 in the proleptic Gregorian calendar,
/// used to rebase day numbers onto the Unix epoch.
const EPOCH_SHIFT: i64 = 719_468;
/// Days in one 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// Returns `true` if the given year is a leap year under the proleptic
/// Gregorian rules: divisible by 4, but century years only when divisible
/// by 400.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns the number of days in the given 0-based month.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month < MONTHS_PER_YEAR);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// An immutable, always-valid calendar date: year, 0-based month (0 =
/// January), 1-based day. Only constructible through the validating
/// [`CalendarDate::new`], so every value a caller holds satisfies the
/// month/day bounds for its year.
///
/// `Display` is the locale-independent ISO form `yyyy-mm-dd`; locale-aware
/// rendering goes through [`crate::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "i32::from(*month) + 1", "day")]
pub struct CalendarDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl CalendarDate {
    /// Creates a date after checking the month and day bounds.
    ///
    /// The month and day arguments are deliberately wide and signed: rule
    /// handlers compute them from captured text (e.g. `month = b - 1`), and a
    /// result of `-1` must surface as out-of-range rather than wrap.
    ///
    /// # Errors
    /// Returns `ParseError::MonthOutOfRange` if `month` is outside `0..=11`,
    /// or `ParseError::DayOutOfRange` if `day` is outside
    /// `1..=days_in_month(year, month)`.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, ParseError> {
        if month < 0 || month >= i32::from(MONTHS_PER_YEAR) {
            return Err(ParseError::MonthOutOfRange { month });
        }
        let max = days_in_month(year, month as u8);
        if day < i32::from(MIN_DAY) || day > i32::from(max) {
            return Err(ParseError::DayOutOfRange { day, max });
        }
        Ok(Self {
            year,
            month: month as u8,
            day: day as u8,
        })
    }

    /// The current local date from the system clock.
    pub fn today() -> Self {
        let now = chrono::Local::now().date_naive();
        Self {
            year:  now.year(),
            month: now.month0() as u8,
            day:   now.day() as u8,
        }
    }

    /// Returns the year component
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the 0-based month component (0 = January)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the 1-based day component
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the weekday, 0 = Sunday through 6 = Saturday.
    pub const fn weekday(self) -> u8 {
        // 1970-01-01 (day number 0) was a Thursday.
        ((self.day_number() + 4).rem_euclid(DAYS_PER_WEEK as i64)) as u8
    }

    /// Returns a new date offset by `n` days (positive or negative), rolling
    /// over month and year boundaries. Goes through the absolute day number,
    /// not repeated single-day stepping, so large offsets stay exact.
    pub const fn add_days(self, n: i64) -> Self {
        Self::from_day_number(self.day_number() + n)
    }

    /// Days since 1970-01-01, negative for earlier dates.
    pub(crate) const fn day_number(self) -> i64 {
        // Standard civil-calendar conversion over 400-year eras, with years
        // rebased to start in March so the leap day falls last.
        let m = self.month as i64 + 1;
        let y = if m <= 2 {
            self.year as i64 - 1
        } else {
            self.year as i64
        };
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let mp = (m + 9) % 12;
        let doy = (153 * mp + 2) / 5 + self.day as i64 - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * DAYS_PER_ERA + doe - EPOCH_SHIFT
    }

    /// Inverse of [`day_number`](Self::day_number); the result is valid by
    /// construction.
    pub(crate) const fn from_day_number(n: i64) -> Self {
        let z = n + EPOCH_SHIFT;
        let era = if z >= 0 { z } else { z - (DAYS_PER_ERA - 1) } / DAYS_PER_ERA;
        let doe = z - era * DAYS_PER_ERA;
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let m = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = if m <= 2 { y + 1 } else { y };
        Self {
            year:  year as i32,
            month: (m - 1) as u8,
            day:   day as u8,
        }
    }

    /// Parses the ISO `yyyy-mm-dd` form produced by `Display`; used by the
    /// serde impls so the serialized shape stays locale-independent.
    pub(crate) fn from_iso(text: &str) -> Result<Self, ParseError> {
        let unknown = || ParseError::UnknownFormat {
            input: text.to_owned(),
        };
        let parts: Vec<&str> = text.split('-').collect();
        if parts.len() != 3 {
            return Err(unknown());
        }
        let year: i32 = parts[0].parse().map_err(|_| unknown())?;
        let month: i32 = parts[1].parse().map_err(|_| unknown())?;
        let day: i32 = parts[2].parse().map_err(|_| unknown())?;
        Self::new(year, month - 1, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_iso(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: i32, day: i32) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("test date should be valid")
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2004,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2004, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
    }

    #[test]
    fn test_days_in_month_fixed_months() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 0..12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "month index {month}"
            );
        }
    }

    #[test]
    fn test_new_accepts_every_valid_day() {
        for month in 0..12 {
            let max = days_in_month(2023, month);
            for day in 1..=max {
                assert!(
                    CalendarDate::new(2023, i32::from(month), i32::from(day)).is_ok(),
                    "2023 month {month} day {day} should be valid"
                );
            }
            let result = CalendarDate::new(2023, i32::from(month), i32::from(max) + 1);
            assert!(
                matches!(result, Err(ParseError::DayOutOfRange { max: m, .. }) if m == max),
                "2023 month {month} day {} should be out of range",
                max + 1
            );
        }
    }

    #[test]
    fn test_new_month_out_of_range() {
        assert!(matches!(
            CalendarDate::new(2023, -1, 1),
            Err(ParseError::MonthOutOfRange { month: -1 })
        ));
        assert!(matches!(
            CalendarDate::new(2023, 12, 1),
            Err(ParseError::MonthOutOfRange { month: 12 })
        ));
    }

    #[test]
    fn test_new_day_out_of_range() {
        assert!(matches!(
            CalendarDate::new(2023, 0, 0),
            Err(ParseError::DayOutOfRange { day: 0, max: 31 })
        ));
        assert!(matches!(
            CalendarDate::new(2023, 1, 29),
            Err(ParseError::DayOutOfRange { day: 29, max: 28 })
        ));
        assert!(CalendarDate::new(2024, 1, 29).is_ok());
    }

    #[test]
    fn test_add_days_month_boundary() {
        assert_eq!(date(2023, 0, 31).add_days(1), date(2023, 1, 1));
        assert_eq!(date(2023, 1, 1).add_days(-1), date(2023, 0, 31));
    }

    #[test]
    fn test_add_days_year_boundary() {
        assert_eq!(date(2023, 11, 31).add_days(1), date(2024, 0, 1));
        assert_eq!(date(2024, 0, 1).add_days(-1), date(2023, 11, 31));
    }

    #[test]
    fn test_add_days_leap_day() {
        assert_eq!(date(2024, 1, 28).add_days(1), date(2024, 1, 29));
        assert_eq!(date(2023, 1, 28).add_days(1), date(2023, 2, 1));
    }

    #[test]
    fn test_add_days_round_trip() {
        let samples = [
            date(2023, 0, 31),
            date(2024, 1, 29),
            date(1999, 11, 31),
            date(1970, 0, 1),
        ];
        for d in samples {
            assert_eq!(d.add_days(1).add_days(-1), d, "round trip failed for {d}");
            assert_eq!(d.add_days(400).add_days(-400), d);
        }
    }

    #[test]
    fn test_add_days_multi_day_offsets() {
        // 2023 is not a leap year; 2024 is.
        assert_eq!(date(2023, 0, 1).add_days(365), date(2024, 0, 1));
        assert_eq!(date(2024, 0, 1).add_days(366), date(2025, 0, 1));
        assert_eq!(date(2000, 0, 1).add_days(146_097), date(2400, 0, 1));
    }

    #[test]
    fn test_day_number_epoch() {
        assert_eq!(date(1970, 0, 1).day_number(), 0);
        assert_eq!(date(1970, 0, 2).day_number(), 1);
        assert_eq!(date(1969, 11, 31).day_number(), -1);
    }

    #[test]
    fn test_weekday_known_dates() {
        // 1970-01-01 was a Thursday, 2000-01-01 a Saturday,
        // 2023-06-15 a Thursday, 2023-12-25 a Monday.
        assert_eq!(date(1970, 0, 1).weekday(), 4);
        assert_eq!(date(2000, 0, 1).weekday(), 6);
        assert_eq!(date(2023, 5, 15).weekday(), 4);
        assert_eq!(date(2023, 11, 25).weekday(), 1);
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2023, 0, 31) < date(2023, 1, 1));
        assert!(date(2023, 11, 31) < date(2024, 0, 1));
        assert!(date(2023, 5, 15) < date(2023, 5, 16));
    }

    #[test]
    fn test_display_iso() {
        assert_eq!(date(2010, 0, 4).to_string(), "2010-01-04");
        assert_eq!(date(1999, 11, 31).to_string(), "1999-12-31");
    }

    #[test]
    fn test_from_iso() {
        assert_eq!(
            CalendarDate::from_iso("2010-01-04").expect("valid ISO date"),
            date(2010, 0, 4)
        );
        assert!(matches!(
            CalendarDate::from_iso("2010-01"),
            Err(ParseError::UnknownFormat { .. })
        ));
        assert!(matches!(
            CalendarDate::from_iso("2010-13-01"),
            Err(ParseError::MonthOutOfRange { .. })
        ));
        assert!(matches!(
            CalendarDate::from_iso("2010-02-30"),
            Err(ParseError::DayOutOfRange { .. })
        ));
    }

    #[test]
    fn test_serde_string_round_trip() {
        let d = date(2010, 0, 4);
        let json = serde_json::to_string(&d).expect("serialization should succeed");
        assert_eq!(json, r#""2010-01-04""#);

        let parsed: CalendarDate = serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(parsed, d);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2010-02-30""#);
        assert!(result.is_err());
    }
}
