//! Canonical formatting of resolved dates.

use crate::calendar::CalendarDate;
use crate::consts::{DAY_TOKEN, MONTH_TOKEN, YEAR_TOKEN};
use crate::locale::LocaleDefinition;

/// Renders a date into the locale's canonical textual form by substituting
/// the `yyyy`/`mm`/`dd` tokens of its output template. The month is written
/// 1-based and zero-padded; the output is the same fixed template no matter
/// which rule produced the date.
pub fn format(date: CalendarDate, locale: &LocaleDefinition) -> String {
    locale
        .template
        .replace(YEAR_TOKEN, &format!("{:04}", date.year()))
        .replace(MONTH_TOKEN, &format!("{:02}", u16::from(date.month()) + 1))
        .replace(DAY_TOKEN, &format!("{:02}", date.day()))
}
