//! Locale-aware interpretation of loosely formatted date entry.
//!
//! This crate is the engine behind a date-entry text field: it takes whatever
//! the user typed (`"tomorrow"`, `"next fri"`, `"4. jan 2003"`,
//! `"01/04/2010"`), interprets it under a locale, and hands back a validated
//! [`CalendarDate`] that can be re-rendered in the locale's canonical form
//! and nudged a day at a time from arrow keys or a scroll wheel.
//!
//! Interpretation runs an ordered rule table: relative keywords first, then
//! "next"/"last" weekday phrases, then dates with month names, then the
//! regional numeric forms, then ISO. Which numeric interpretation applies
//! (day-first vs month-first) is decided by the locale's flags, not by the
//! text, so the same `"01/04/2010"` is April 1st in one locale and
//! January 4th in another.
//!
//! ```
//! use datefield::{get_locale, parse, format, step};
//!
//! let en = get_locale("en")?;
//! let date = parse("Jan 4 2010", en)?;
//! assert_eq!(format(date, en), "01/04/2010");
//! assert_eq!(format(step(date, 1), en), "01/05/2010");
//! # Ok::<(), datefield::ParseError>(())
//! ```
//!
//! Every operation is a pure function of its explicit inputs; the locale is
//! always a parameter (or held by a [`DateEntry`] session you own), so the
//! crate is reentrant without synchronization.

mod calendar;
mod consts;
mod error;
mod format;
mod fuzzy;
mod locale;
mod rules;

pub use calendar::{CalendarDate, days_in_month, is_leap_year};
pub use consts::{DAY_TOKEN, MONTH_TOKEN, YEAR_TOKEN};
pub use error::{ParseError, render_message};
pub use format::format;
pub use fuzzy::{resolve_month, resolve_weekday};
pub use locale::{FormatFlags, LocaleDefinition, available_locales, get_locale};

/// Interprets `text` under `locale`, using the system clock as "today" for
/// relative expressions and defaulted components.
///
/// # Errors
/// Any [`ParseError`] except `UnsupportedLocale`; a failed parse carries no
/// partial state.
pub fn parse(text: &str, locale: &LocaleDefinition) -> Result<CalendarDate, ParseError> {
    rules::resolve(text, locale, CalendarDate::today())
}

/// Like [`parse`], but with an explicit reference date. This is the
/// deterministic entry point for tests and for hosts that pin "today"
/// per event.
///
/// # Errors
/// See [`parse`].
pub fn parse_at(
    text: &str,
    locale: &LocaleDefinition,
    today: CalendarDate,
) -> Result<CalendarDate, ParseError> {
    rules::resolve(text, locale, today)
}

/// Steps a resolved date by `delta` days (positive or negative). Both arrow
/// keys and wheel scrolling funnel into this; callers only invoke it on a
/// date that already parsed.
pub const fn step(date: CalendarDate, delta: i64) -> CalendarDate {
    date.add_days(delta)
}

/// A date-entry session: the active locale plus the parse/format/step
/// surface the field glue calls. The locale reference is swapped in a single
/// assignment, so a switch is complete before any later call observes it.
#[derive(Debug, Clone, Copy)]
pub struct DateEntry {
    locale: &'static LocaleDefinition,
}

impl DateEntry {
    /// Creates a session with the given active locale.
    ///
    /// # Errors
    /// `UnsupportedLocale` if `code` is not built in.
    pub fn new(code: &str) -> Result<Self, ParseError> {
        Ok(Self {
            locale: locale::get_locale(code)?,
        })
    }

    /// The active locale.
    pub const fn locale(&self) -> &'static LocaleDefinition {
        self.locale
    }

    /// Switches the active locale. Validation happens before the swap, so a
    /// failed switch leaves the previous locale active.
    ///
    /// # Errors
    /// `UnsupportedLocale` if `code` is not built in.
    pub fn set_locale(&mut self, code: &str) -> Result<(), ParseError> {
        self.locale = locale::get_locale(code)?;
        Ok(())
    }

    /// [`parse`] under the active locale.
    ///
    /// # Errors
    /// See [`parse`].
    pub fn parse(&self, text: &str) -> Result<CalendarDate, ParseError> {
        parse(text, self.locale)
    }

    /// [`parse_at`] under the active locale.
    ///
    /// # Errors
    /// See [`parse`].
    pub fn parse_at(&self, text: &str, today: CalendarDate) -> Result<CalendarDate, ParseError> {
        parse_at(text, self.locale, today)
    }

    /// [`format`] under the active locale.
    pub fn format(&self, date: CalendarDate) -> String {
        format(date, self.locale)
    }

    /// Parses the field text and re-renders it canonically; what the glue
    /// runs on a "value changed" event. On failure the caller keeps the raw
    /// text untouched and shows [`Self::message`] instead.
    ///
    /// # Errors
    /// See [`parse`].
    pub fn canonicalize(&self, text: &str) -> Result<String, ParseError> {
        Ok(self.format(self.parse(text)?))
    }

    /// Parses, steps by `delta` days, and re-renders; what the glue runs on
    /// "step up"/"step down" events. An unparseable field propagates its
    /// error, which the glue treats as a no-op.
    ///
    /// # Errors
    /// See [`parse`].
    pub fn step_text(&self, text: &str, delta: i64) -> Result<String, ParseError> {
        Ok(self.format(step(self.parse(text)?, delta)))
    }

    /// The canonical rendering of the current date; what the glue inserts on
    /// an "insert today" trigger.
    pub fn today_text(&self) -> String {
        self.format(CalendarDate::today())
    }

    /// Renders a failure as the active locale's user-facing message.
    pub fn message(&self, error: &ParseError) -> String {
        render_message(error, self.locale)
    }
}
