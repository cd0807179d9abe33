//! Prefix-based resolution of partial month and weekday names.
//!
//! Matching is case-insensitive and prefix-only (never substring or
//! edit-distance). An ambiguous prefix is a hard error: the caller must know
//! the input was underspecified rather than have the first table entry win.

use crate::error::ParseError;
use crate::locale::LocaleDefinition;

enum Matches {
    None,
    Unique(usize),
    Many,
}

/// Linear scan; the tables hold 12 and 7 entries, so nothing fancier is
/// warranted.
fn prefix_matches(partial: &str, names: &[&str]) -> Matches {
    let partial = partial.to_lowercase();
    let mut found = Matches::None;
    for (index, name) in names.iter().enumerate() {
        if name.to_lowercase().starts_with(&partial) {
            found = match found {
                Matches::None => Matches::Unique(index),
                Matches::Unique(_) | Matches::Many => return Matches::Many,
            };
        }
    }
    found
}

/// Resolves a partial month name to its 0-based index in the locale's table.
///
/// # Errors
/// `NoSuchMonthName` if nothing matches, `AmbiguousMonthName` if more than
/// one name shares the prefix.
pub fn resolve_month(partial: &str, locale: &LocaleDefinition) -> Result<usize, ParseError> {
    match prefix_matches(partial, &locale.months) {
        Matches::Unique(index) => Ok(index),
        Matches::None => Err(ParseError::NoSuchMonthName {
            partial: partial.to_owned(),
        }),
        Matches::Many => Err(ParseError::AmbiguousMonthName {
            partial: partial.to_owned(),
        }),
    }
}

/// Resolves a partial weekday name to its 0-based index in the locale's
/// table (index 0 = the locale's first day of the week).
///
/// # Errors
/// `NoSuchWeekdayName` / `AmbiguousWeekdayName`, mirroring [`resolve_month`].
pub fn resolve_weekday(partial: &str, locale: &LocaleDefinition) -> Result<usize, ParseError> {
    match prefix_matches(partial, &locale.weekdays) {
        Matches::Unique(index) => Ok(index),
        Matches::None => Err(ParseError::NoSuchWeekdayName {
            partial: partial.to_owned(),
        }),
        Matches::Many => Err(ParseError::AmbiguousWeekdayName {
            partial: partial.to_owned(),
        }),
    }
}
