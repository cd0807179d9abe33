use crate::consts::{DAY_PLACEHOLDER, LOCALE_PLACEHOLDER, MONTH_PLACEHOLDER};
use crate::locale::LocaleDefinition;

/// Failure taxonomy for the interpreter. Every variant is a recoverable,
/// data-driven outcome; the enum carries the offending values and leaves
/// user-facing wording to [`render_message`] at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The locale code is not in the built-in table.
    #[error("unsupported locale '{code}'")]
    UnsupportedLocale { code: String },

    /// No rule matched the input, or every matching rule declined.
    #[error("unrecognized date format: '{input}'")]
    UnknownFormat { input: String },

    /// A computed 0-based month fell outside `0..=11`.
    #[error("month {month} is out of range")]
    MonthOutOfRange { month: i32 },

    /// A day fell outside `1..=max` for its month.
    #[error("day {day} is out of range (1-{max})")]
    DayOutOfRange { day: i32, max: u8 },

    /// No month name in the locale starts with the partial.
    #[error("no month name starts with '{partial}'")]
    NoSuchMonthName { partial: String },

    /// More than one month name starts with the partial.
    #[error("month name '{partial}' is ambiguous")]
    AmbiguousMonthName { partial: String },

    /// No weekday name in the locale starts with the partial.
    #[error("no weekday name starts with '{partial}'")]
    NoSuchWeekdayName { partial: String },

    /// More than one weekday name starts with the partial.
    #[error("weekday name '{partial}' is ambiguous")]
    AmbiguousWeekdayName { partial: String },
}

/// Renders a failure into the locale's user-facing message, substituting the
/// `%month%`/`%day%`/`%locale%` placeholders of its message templates.
///
/// Out-of-range month values are echoed 1-based, matching what the user
/// typed rather than the engine's 0-based representation.
pub fn render_message(error: &ParseError, locale: &LocaleDefinition) -> String {
    let templates = &locale.messages;
    match error {
        ParseError::UnsupportedLocale { code } => {
            templates.unsupported_locale.replace(LOCALE_PLACEHOLDER, code)
        }
        ParseError::UnknownFormat { .. } => templates.unknown_format.to_owned(),
        ParseError::MonthOutOfRange { month } => templates
            .month_out_of_range
            .replace(MONTH_PLACEHOLDER, &(month + 1).to_string()),
        ParseError::DayOutOfRange { day, .. } => templates
            .day_out_of_range
            .replace(DAY_PLACEHOLDER, &day.to_string()),
        ParseError::NoSuchMonthName { partial } => {
            templates.no_such_month.replace(MONTH_PLACEHOLDER, partial)
        }
        ParseError::AmbiguousMonthName { partial } => {
            templates.ambiguous_month.replace(MONTH_PLACEHOLDER, partial)
        }
        ParseError::NoSuchWeekdayName { partial } => {
            templates.no_such_weekday.replace(DAY_PLACEHOLDER, partial)
        }
        ParseError::AmbiguousWeekdayName { partial } => {
            templates.ambiguous_weekday.replace(DAY_PLACEHOLDER, partial)
        }
    }
}
