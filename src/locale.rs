//! Locale definitions and the built-in registry.
//!
//! A locale bundles everything the rule engine consults: month and weekday
//! vocabulary, the regional numeric-date flags, the canonical output
//! template, a set of precompiled patterns (keyword spellings interpolated
//! into fixed shapes), and the user-facing error message templates.
//!
//! Definitions are compiled-in, read-only data with process lifetime; adding
//! a locale means adding a constructor below and recompiling. The registry
//! itself is immutable after first access, so lookups are lock-free and the
//! crate stays reentrant.

use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

/// Regional flags controlling which numeric-date rules are active for a
/// locale. `euro` and `us` gate the two interpretations of the shared
/// `d/m/y`-shaped pattern and are never both set; `iso` gates `yyyy-mm-dd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatFlags {
    /// Numeric dates read day-first (`31/12/2023`)
    pub euro: bool,
    /// Numeric dates read month-first (`12/31/2023`)
    pub us:   bool,
    /// ISO `yyyy-mm-dd` input is accepted
    pub iso:  bool,
}

/// User-facing error message templates. `%month%` stands in for month values
/// and month-name partials, `%day%` for day values and weekday-name partials,
/// `%locale%` for locale codes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MessageTemplates {
    pub unknown_format:     &'static str,
    pub month_out_of_range: &'static str,
    pub day_out_of_range:   &'static str,
    pub no_such_month:      &'static str,
    pub ambiguous_month:    &'static str,
    pub no_such_weekday:    &'static str,
    pub ambiguous_weekday:  &'static str,
    pub unsupported_locale: &'static str,
}

/// The locale-specific surface words interpolated into the pattern set.
struct Keywords {
    today:     &'static str,
    tomorrow:  &'static str,
    yesterday: &'static str,
    next:      &'static str,
    last:      &'static str,
}

/// One compiled regular expression per parse rule, built once per locale.
/// The numeric pattern is shared by the day-first and month-first rules;
/// which handler gets to use it is decided by [`FormatFlags`], not here.
#[derive(Debug)]
pub(crate) struct PatternSet {
    pub today:        Regex,
    pub tomorrow:     Regex,
    pub yesterday:    Regex,
    pub next_weekday: Regex,
    pub last_weekday: Regex,
    pub day_first:    Regex,
    pub month_first:  Regex,
    pub numeric:      Regex,
    pub iso:          Regex,
}

/// Compiles `body` anchored to the whole (already trimmed) input,
/// case-insensitively. All bodies are fixed literals, so a compile failure
/// is a bug caught by the registry tests.
fn anchored(body: &str) -> Regex {
    RegexBuilder::new(&format!("^(?:{body})$"))
        .case_insensitive(true)
        .build()
        .expect("pattern body is a fixed literal")
}

/// A bare keyword, matched exactly.
fn keyword(word: &'static str) -> Regex {
    anchored(&regex::escape(word))
}

/// A keyword followed by a single word captured for fuzzy weekday lookup.
fn keyword_then_name(word: &'static str) -> Regex {
    anchored(&format!(r"{}\s+(\p{{L}}+)", regex::escape(word)))
}

impl PatternSet {
    fn compile(keywords: &Keywords) -> Self {
        Self {
            today:        keyword(keywords.today),
            tomorrow:     keyword(keywords.tomorrow),
            yesterday:    keyword(keywords.yesterday),
            next_weekday: keyword_then_name(keywords.next),
            last_weekday: keyword_then_name(keywords.last),
            // "4", "4.", "4th", "4 jan", "4. jan 2003"
            day_first:    anchored(
                r"(\d{1,2})(?:st|nd|rd|th)?\.?(?:\s+(\p{L}+)\.?)?(?:\s+(\d{4}))?",
            ),
            // "jan 4", "Jan. 4th", "Jan 4, 2010"
            month_first:  anchored(
                r"(\p{L}+)\.?\s+(\d{1,2})(?:st|nd|rd|th)?(?:(?:\s*,\s*|\s+)(\d{4}))?",
            ),
            // "1/4", "01-04-2010", "1.4.10" -- day/month order decided by flags
            numeric:      anchored(r"(\d{1,2})[./-](\d{1,2})(?:[./-](\d{2}|\d{4}))?"),
            iso:          anchored(r"(\d{4})-(\d{1,2})-(\d{1,2})"),
        }
    }
}

/// A named bundle of month/weekday vocabulary, regional flags, the canonical
/// output template, compiled patterns, and message templates. See the module
/// docs for lifecycle.
#[derive(Debug)]
pub struct LocaleDefinition {
    /// Registry key, e.g. `"en"` or `"da"`
    pub code:          &'static str,
    /// Month names, index 0 = January
    pub months:        [&'static str; 12],
    /// Weekday names, index 0 = the locale's first day of the week
    pub weekdays:      [&'static str; 7],
    /// Offset of `weekdays[0]` from Sunday (0 = Sunday-first, 1 = Monday-first)
    pub first_weekday: u8,
    /// Which numeric-date rules are active
    pub flags:         FormatFlags,
    /// Canonical output template over `yyyy`/`mm`/`dd` tokens
    pub template:      &'static str,
    pub(crate) patterns: PatternSet,
    pub(crate) messages: MessageTemplates,
}

fn english_us() -> LocaleDefinition {
    LocaleDefinition {
        code:          "en",
        months:        [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ],
        weekdays:      [
            "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
        ],
        first_weekday: 0,
        flags:         FormatFlags {
            euro: false,
            us:   true,
            iso:  true,
        },
        template:      "mm/dd/yyyy",
        patterns:      PatternSet::compile(&Keywords {
            today:     "today",
            tomorrow:  "tomorrow",
            yesterday: "yesterday",
            next:      "next",
            last:      "last",
        }),
        messages:      ENGLISH_MESSAGES,
    }
}

fn english_gb() -> LocaleDefinition {
    LocaleDefinition {
        code:          "en-GB",
        months:        english_us().months,
        weekdays:      [
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ],
        first_weekday: 1,
        flags:         FormatFlags {
            euro: true,
            us:   false,
            iso:  true,
        },
        template:      "dd/mm/yyyy",
        patterns:      PatternSet::compile(&Keywords {
            today:     "today",
            tomorrow:  "tomorrow",
            yesterday: "yesterday",
            next:      "next",
            last:      "last",
        }),
        messages:      ENGLISH_MESSAGES,
    }
}

const ENGLISH_MESSAGES: MessageTemplates = MessageTemplates {
    unknown_format:     "Unrecognized date",
    month_out_of_range: "Month %month% is out of range",
    day_out_of_range:   "Day %day% is out of range",
    no_such_month:      "No month name matches '%month%'",
    ambiguous_month:    "'%month%' matches more than one month",
    no_such_weekday:    "No weekday name matches '%day%'",
    ambiguous_weekday:  "'%day%' matches more than one weekday",
    unsupported_locale: "Unsupported locale '%locale%'",
};

fn danish() -> LocaleDefinition {
    LocaleDefinition {
        code:          "da",
        months:        [
            "januar", "februar", "marts", "april", "maj", "juni", "juli", "august",
            "september", "oktober", "november", "december",
        ],
        weekdays:      [
            "mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag", "søndag",
        ],
        first_weekday: 1,
        flags:         FormatFlags {
            euro: true,
            us:   false,
            iso:  false,
        },
        template:      "dd-mm-yyyy",
        patterns:      PatternSet::compile(&Keywords {
            today:     "i dag",
            tomorrow:  "i morgen",
            yesterday: "i går",
            next:      "næste",
            last:      "sidste",
        }),
        messages:      MessageTemplates {
            unknown_format:     "Ukendt datoformat",
            month_out_of_range: "Måned %month% er uden for intervallet",
            day_out_of_range:   "Dag %day% er uden for intervallet",
            no_such_month:      "Intet månedsnavn matcher '%month%'",
            ambiguous_month:    "'%month%' matcher mere end én måned",
            no_such_weekday:    "Intet ugedagsnavn matcher '%day%'",
            ambiguous_weekday:  "'%day%' matcher mere end én ugedag",
            unsupported_locale: "Ikke-understøttet sprog '%locale%'",
        },
    }
}

fn german() -> LocaleDefinition {
    LocaleDefinition {
        code:          "de",
        months:        [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
            "September", "Oktober", "November", "Dezember",
        ],
        weekdays:      [
            "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
        ],
        first_weekday: 1,
        flags:         FormatFlags {
            euro: true,
            us:   false,
            iso:  true,
        },
        template:      "dd.mm.yyyy",
        patterns:      PatternSet::compile(&Keywords {
            today:     "heute",
            tomorrow:  "morgen",
            yesterday: "gestern",
            next:      "nächsten",
            last:      "letzten",
        }),
        messages:      MessageTemplates {
            unknown_format:     "Unbekanntes Datumsformat",
            month_out_of_range: "Monat %month% liegt außerhalb des Bereichs",
            day_out_of_range:   "Tag %day% liegt außerhalb des Bereichs",
            no_such_month:      "Kein Monatsname passt zu '%month%'",
            ambiguous_month:    "'%month%' passt auf mehrere Monate",
            no_such_weekday:    "Kein Wochentagsname passt zu '%day%'",
            ambiguous_weekday:  "'%day%' passt auf mehrere Wochentage",
            unsupported_locale: "Nicht unterstützte Sprache '%locale%'",
        },
    }
}

static REGISTRY: Lazy<HashMap<&'static str, LocaleDefinition>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for locale in [english_us(), english_gb(), danish(), german()] {
        map.insert(locale.code, locale);
    }
    map
});

/// Looks up a locale by code.
///
/// # Errors
/// Returns `ParseError::UnsupportedLocale` if `code` is not in the table.
pub fn get_locale(code: &str) -> Result<&'static LocaleDefinition, ParseError> {
    REGISTRY.get(code).ok_or_else(|| ParseError::UnsupportedLocale {
        code: code.to_owned(),
    })
}

/// The codes of every built-in locale, sorted.
pub fn available_locales() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = REGISTRY.keys().copied().collect();
    codes.sort_unstable();
    codes
}
