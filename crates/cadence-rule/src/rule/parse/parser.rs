//! Field parsers for recurrence rule text.

use std::collections::BTreeSet;
use std::num::NonZeroU32;

use cadence_core::constants::DATE_FORMAT;
use chrono::NaiveDate;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rule::core::{
    Frequency, MonthDay, MonthlyPattern, RecurrenceRule, Termination, WeekOfMonth, Weekday,
};

/// Frequency word of the first field, before its options are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrequencyKeyword {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Parses recurrence rule text such as `weekly2:2025-12-31:MWF`.
///
/// Surrounding whitespace is ignored. An empty termination field means the
/// rule never terminates, and an empty options field is the same as none.
///
/// ## Errors
/// Returns a `ParseError` describing the first field that does not follow the
/// rule grammar. No partially parsed rule is ever returned.
pub fn parse_rule(text: &str) -> ParseResult<RecurrenceRule> {
    let text = text.trim();
    match parse_fields(text) {
        Ok(rule) => {
            tracing::trace!(
                rule = %text,
                frequency = rule.frequency().keyword(),
                interval = rule.interval().get(),
                "Parsed recurrence rule"
            );
            Ok(rule)
        }
        Err(err) => {
            tracing::debug!(rule = %text, error = %err, "Rejected recurrence rule");
            Err(err)
        }
    }
}

fn parse_fields(text: &str) -> ParseResult<RecurrenceRule> {
    let fields: Vec<&str> = text.split(':').collect();
    let (spec, termination, options) = match fields.as_slice() {
        [spec, termination] => (*spec, *termination, None),
        [spec, termination, options] => (*spec, *termination, Some(*options)),
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::MalformedStructure,
                format!(
                    "expected 2 or 3 colon-separated fields, found {}",
                    fields.len()
                ),
            ));
        }
    };

    let (keyword, interval) = parse_frequency_spec(spec)?;
    let termination = parse_termination(termination)?;
    let options = options.filter(|options| !options.is_empty());

    let frequency = match keyword {
        FrequencyKeyword::Daily => Frequency::Daily,
        FrequencyKeyword::Weekly => Frequency::Weekly {
            weekdays: options.map(parse_weekdays).transpose()?.unwrap_or_default(),
        },
        FrequencyKeyword::Monthly => Frequency::Monthly {
            pattern: options.map(parse_monthly_pattern).transpose()?,
        },
        FrequencyKeyword::Yearly => Frequency::Yearly,
    };

    Ok(RecurrenceRule::new(frequency)
        .with_interval(interval)
        .with_termination(termination))
}

/// Parses the frequency word and its optional interval (e.g., "weekly2").
fn parse_frequency_spec(spec: &str) -> ParseResult<(FrequencyKeyword, NonZeroU32)> {
    let lowered = spec.to_ascii_lowercase();
    let split = lowered
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(lowered.len());
    let (word, digits) = lowered.split_at(split);

    let keyword = match word {
        "daily" => FrequencyKeyword::Daily,
        "weekly" => FrequencyKeyword::Weekly,
        "monthly" => FrequencyKeyword::Monthly,
        "yearly" => FrequencyKeyword::Yearly,
        _ => {
            return Err(ParseError::unexpected(
                ParseErrorKind::UnknownFrequency,
                "daily, weekly, monthly or yearly",
                spec,
            ));
        }
    };

    if digits.is_empty() {
        return Ok((keyword, NonZeroU32::MIN));
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::unexpected(
            ParseErrorKind::UnknownFrequency,
            "a frequency word followed by an optional interval",
            spec,
        ));
    }

    let interval = digits
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| {
            ParseError::unexpected(ParseErrorKind::BadInterval, "an interval of at least 1", digits)
        })?;

    Ok((keyword, interval))
}

/// Parses the COUNT or UNTIL field.
fn parse_termination(field: &str) -> ParseResult<Option<Termination>> {
    if field.is_empty() {
        return Ok(None);
    }

    if field.chars().all(|c| c.is_ascii_digit()) {
        let count = field
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                ParseError::unexpected(ParseErrorKind::BadCount, "a count of at least 1", field)
            })?;
        return Ok(Some(Termination::Count(count)));
    }

    if !has_iso_date_shape(field) {
        return Err(ParseError::unexpected(
            ParseErrorKind::BadUntilDate,
            "a YYYY-MM-DD calendar date",
            field,
        ));
    }

    NaiveDate::parse_from_str(field, DATE_FORMAT)
        .map(|until| Some(Termination::Until(until)))
        .map_err(|err| {
            ParseError::new(
                ParseErrorKind::BadUntilDate,
                format!("{field:?} is not a YYYY-MM-DD calendar date ({err})"),
            )
        })
}

/// Exact `YYYY-MM-DD` layout. `chrono` alone also accepts unpadded or signed
/// fields.
fn has_iso_date_shape(field: &str) -> bool {
    field.len() == 10
        && field.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses weekly options: a run of weekday letters.
fn parse_weekdays(field: &str) -> ParseResult<BTreeSet<Weekday>> {
    field
        .chars()
        .map(|c| {
            Weekday::from_letter(c).ok_or_else(|| {
                ParseError::new(
                    ParseErrorKind::UnknownWeekday,
                    format!("{c:?} is not one of U, M, T, W, R, F, S"),
                )
            })
        })
        .collect()
}

/// Parses monthly options: a day number ("15") or a weekday pattern ("2W", "-F").
fn parse_monthly_pattern(field: &str) -> ParseResult<MonthlyPattern> {
    if field.len() <= 2 && field.chars().all(|c| c.is_ascii_digit()) {
        let day = field.parse::<u32>().map_err(|err| {
            ParseError::new(ParseErrorKind::BadMonthDay, format!("{field:?}: {err}"))
        })?;
        return MonthDay::new(day)
            .map(MonthlyPattern::Day)
            .map_err(|err| ParseError::new(ParseErrorKind::BadMonthDay, err.to_string()));
    }

    let mut chars = field.chars();
    let (Some(selector), Some(letter), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ParseError::unexpected(
            ParseErrorKind::BadMonthlyPattern,
            "a day number or a week selector followed by a weekday letter",
            field,
        ));
    };

    let week = match selector {
        '1' => WeekOfMonth::First,
        '2' => WeekOfMonth::Second,
        '3' => WeekOfMonth::Third,
        '4' => WeekOfMonth::Fourth,
        '5' => WeekOfMonth::Fifth,
        '-' => WeekOfMonth::Last,
        c if c.is_ascii_digit() => {
            return Err(ParseError::new(
                ParseErrorKind::BadWeekNumber,
                format!("week {c} is outside 1-5 (use '-' for the last week)"),
            ));
        }
        _ => {
            return Err(ParseError::unexpected(
                ParseErrorKind::BadMonthlyPattern,
                "a week selector (1-5 or '-')",
                field,
            ));
        }
    };

    let weekday = Weekday::from_letter(letter).ok_or_else(|| {
        ParseError::unexpected(
            ParseErrorKind::BadMonthlyPattern,
            "a weekday letter after the week selector",
            field,
        )
    })?;

    Ok(MonthlyPattern::NthWeekday { week, weekday })
}
