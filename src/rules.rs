//! The ordered rule engine.
//!
//! Rules are evaluated in a fixed priority order against the trimmed input;
//! the first rule whose pattern matches *and* whose handler does not decline
//! wins. A rule declines when its textual pattern matched but its regional
//! flag is off; this is how one shared numeric pattern serves both the
//! day-first and month-first interpretations. Validity errors raised while a
//! handler builds its date propagate immediately; an out-of-range date is a
//! definite error, not a reason to try the next rule.

use crate::calendar::CalendarDate;
use crate::consts::{CENTURY_CYCLE, DAYS_PER_WEEK};
use crate::error::ParseError;
use crate::fuzzy;
use crate::locale::LocaleDefinition;

/// Three-way outcome of running one rule: the pattern matched and produced a
/// date, the pattern matched but the rule's regional flag is inactive, or the
/// pattern did not match at all.
pub(crate) enum RuleOutcome {
    Matched(CalendarDate),
    Declined,
    NoMatch,
}

type Handler = fn(&str, &LocaleDefinition, CalendarDate) -> Result<RuleOutcome, ParseError>;

/// Priority order: relative keywords, weekday phrases, combined name dates,
/// regional numeric dates, ISO. Both numeric interpretations are always in
/// the table so switching locales never rebuilds it.
const RULES: [Handler; 10] = [
    today_keyword,
    tomorrow_keyword,
    yesterday_keyword,
    next_weekday,
    last_weekday,
    day_first,
    month_first,
    numeric_day_first,
    numeric_month_first,
    iso_numeric,
];

/// Runs the rule table over `text`, with `today` as the reference point for
/// relative rules and defaulted components.
pub(crate) fn resolve(
    text: &str,
    locale: &LocaleDefinition,
    today: CalendarDate,
) -> Result<CalendarDate, ParseError> {
    let trimmed = text.trim();
    for rule in RULES {
        match rule(trimmed, locale, today)? {
            RuleOutcome::Matched(date) => return Ok(date),
            RuleOutcome::Declined | RuleOutcome::NoMatch => {}
        }
    }
    Err(ParseError::UnknownFormat {
        input: trimmed.to_owned(),
    })
}

/// Parses a captured digit group. The patterns only capture digits, so the
/// error arm is unreachable in practice, but the typed path keeps the engine
/// panic-free.
fn number(digits: &str, input: &str) -> Result<i32, ParseError> {
    digits.parse().map_err(|_| ParseError::UnknownFormat {
        input: input.to_owned(),
    })
}

/// Expands an optional captured year: absent → current year, two digits →
/// current century plus the value, four digits → as written.
fn expand_year(capture: Option<&str>, today: CalendarDate, input: &str) -> Result<i32, ParseError> {
    match capture {
        None => Ok(today.year()),
        Some(digits) => {
            let value = number(digits, input)?;
            if digits.len() == 2 {
                Ok(today.year() / CENTURY_CYCLE * CENTURY_CYCLE + value)
            } else {
                Ok(value)
            }
        }
    }
}

/// Today's weekday in the locale's own numbering. Only differences mod 7 are
/// ever used, so rotating both sides by `first_weekday` is harmless.
fn locale_weekday(date: CalendarDate, locale: &LocaleDefinition) -> i32 {
    i32::from((date.weekday() + DAYS_PER_WEEK - locale.first_weekday) % DAYS_PER_WEEK)
}

fn today_keyword(
    text: &str,
    locale: &LocaleDefinition,
    today: CalendarDate,
) -> Result<RuleOutcome, ParseError> {
    if locale.patterns.today.is_match(text) {
        Ok(RuleOutcome::Matched(today))
    } else {
        Ok(RuleOutcome::NoMatch)
    }
}

fn tomorrow_keyword(
    text: &str,
    locale: &LocaleDefinition,
    today: CalendarDate,
) -> Result<RuleOutcome, ParseError> {
    if locale.patterns.tomorrow.is_match(text) {
        Ok(RuleOutcome::Matched(today.add_days(1)))
    } else {
        Ok(RuleOutcome::NoMatch)
    }
}

fn yesterday_keyword(
    text: &str,
    locale: &LocaleDefinition,
    today: CalendarDate,
) -> Result<RuleOutcome, ParseError> {
    if locale.patterns.yesterday.is_match(text) {
        Ok(RuleOutcome::Matched(today.add_days(-1)))
    } else {
        Ok(RuleOutcome::NoMatch)
    }
}

fn next_weekday(
    text: &str,
    locale: &LocaleDefinition,
    today: CalendarDate,
) -> Result<RuleOutcome, ParseError> {
    let Some(caps) = locale.patterns.next_weekday.captures(text) else {
        return Ok(RuleOutcome::NoMatch);
    };
    let target = fuzzy::resolve_weekday(&caps[1], locale)? as i32;
    let current = locale_weekday(today, locale);
    // Strictly in the future, never today: asking for the current weekday
    // jumps a full week ahead. The classic off-by-one trap in this engine.
    let mut offset = target - current;
    if offset <= 0 {
        offset += i32::from(DAYS_PER_WEEK);
    }
    Ok(RuleOutcome::Matched(today.add_days(offset.into())))
}

fn last_weekday(
    text: &str,
    locale: &LocaleDefinition,
    today: CalendarDate,
) -> Result<RuleOutcome, ParseError> {
    let Some(caps) = locale.patterns.last_weekday.captures(text) else {
        return Ok(RuleOutcome::NoMatch);
    };
    let target = fuzzy::resolve_weekday(&caps[1], locale)? as i32;
    let current = locale_weekday(today, locale);
    // Mirror of the "next" rule: strictly in the past, same weekday means a
    // full week back.
    let mut offset = -((current + i32::from(DAYS_PER_WEEK) - target) % i32::from(DAYS_PER_WEEK));
    if offset == 0 {
        offset = -i32::from(DAYS_PER_WEEK);
    }
    Ok(RuleOutcome::Matched(today.add_days(offset.into())))
}

fn day_first(
    text: &str,
    locale: &LocaleDefinition,
    today: CalendarDate,
) -> Result<RuleOutcome, ParseError> {
    let Some(caps) = locale.patterns.day_first.captures(text) else {
        return Ok(RuleOutcome::NoMatch);
    };
    let day = number(&caps[1], text)?;
    let month = match caps.get(2) {
        Some(name) => fuzzy::resolve_month(name.as_str(), locale)? as i32,
        None => i32::from(today.month()),
    };
    let year = match caps.get(3) {
        Some(digits) => number(digits.as_str(), text)?,
        None => today.year(),
    };
    Ok(RuleOutcome::Matched(CalendarDate::new(year, month, day)?))
}

fn month_first(
    text: &str,
    locale: &LocaleDefinition,
    today: CalendarDate,
) -> Result<RuleOutcome, ParseError> {
    let Some(caps) = locale.patterns.month_first.captures(text) else {
        return Ok(RuleOutcome::NoMatch);
    };
    let month = fuzzy::resolve_month(&caps[1], locale)? as i32;
    let day = number(&caps[2], text)?;
    let year = match caps.get(3) {
        Some(digits) => number(digits.as_str(), text)?,
        None => today.year(),
    };
    Ok(RuleOutcome::Matched(CalendarDate::new(year, month, day)?))
}

fn numeric_day_first(
    text: &str,
    locale: &LocaleDefinition,
    today: CalendarDate,
) -> Result<RuleOutcome, ParseError> {
    let Some(caps) = locale.patterns.numeric.captures(text) else {
        return Ok(RuleOutcome::NoMatch);
    };
    if !locale.flags.euro {
        return Ok(RuleOutcome::Declined);
    }
    let day = number(&caps[1], text)?;
    let month = number(&caps[2], text)? - 1;
    let year = expand_year(caps.get(3).map(|m| m.as_str()), today, text)?;
    Ok(RuleOutcome::Matched(CalendarDate::new(year, month, day)?))
}

fn numeric_month_first(
    text: &str,
    locale: &LocaleDefinition,
    today: CalendarDate,
) -> Result<RuleOutcome, ParseError> {
    let Some(caps) = locale.patterns.numeric.captures(text) else {
        return Ok(RuleOutcome::NoMatch);
    };
    if !locale.flags.us {
        return Ok(RuleOutcome::Declined);
    }
    let month = number(&caps[1], text)? - 1;
    let day = number(&caps[2], text)?;
    let year = expand_year(caps.get(3).map(|m| m.as_str()), today, text)?;
    Ok(RuleOutcome::Matched(CalendarDate::new(year, month, day)?))
}

fn iso_numeric(
    text: &str,
    locale: &LocaleDefinition,
    _today: CalendarDate,
) -> Result<RuleOutcome, ParseError> {
    let Some(caps) = locale.patterns.iso.captures(text) else {
        return Ok(RuleOutcome::NoMatch);
    };
    if !locale.flags.iso {
        return Ok(RuleOutcome::Declined);
    }
    let year = number(&caps[1], text)?;
    let month = number(&caps[2], text)? - 1;
    let day = number(&caps[3], text)?;
    Ok(RuleOutcome::Matched(CalendarDate::new(year, month, day)?))
}
