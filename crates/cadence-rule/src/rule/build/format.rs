use cadence_core::constants::DATE_FORMAT;

use crate::rule::core::{Frequency, MonthlyPattern, RecurrenceRule, Termination, Weekday};

/// Serializes a rule to its canonical text.
///
/// The interval is omitted when it is 1. A rule without termination keeps an
/// empty termination field (`daily:`) so that the output always parses back.
/// Weekday letters are written in `UMTWRFS` order.
#[must_use]
pub fn format_rule(rule: &RecurrenceRule) -> String {
    let frequency = rule.frequency();
    let mut out = String::from(frequency.keyword());

    if rule.interval().get() > 1 {
        out.push_str(&rule.interval().to_string());
    }

    out.push(':');
    match rule.termination() {
        Some(Termination::Count(count)) => out.push_str(&count.to_string()),
        Some(Termination::Until(until)) => {
            out.push_str(&until.format(DATE_FORMAT).to_string());
        }
        None => {}
    }

    match frequency {
        Frequency::Weekly { weekdays } if !weekdays.is_empty() => {
            out.push(':');
            out.extend(
                Weekday::ALL
                    .into_iter()
                    .filter(|weekday| weekdays.contains(weekday))
                    .map(Weekday::letter),
            );
        }
        Frequency::Monthly {
            pattern: Some(MonthlyPattern::Day(day)),
        } => {
            out.push(':');
            out.push_str(&day.get().to_string());
        }
        Frequency::Monthly {
            pattern: Some(MonthlyPattern::NthWeekday { week, weekday }),
        } => {
            out.push(':');
            out.push(week.selector());
            out.push(weekday.letter());
        }
        _ => {}
    }

    out
}
