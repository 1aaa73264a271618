use crate::rule::core::{Frequency, MonthlyPattern, RecurrenceRule, Termination};

/// Converts a rule to an RFC 5545 `RRULE` value (without the `RRULE:` prefix).
///
/// `UNTIL` is written as a DATE value, so the recurrence's `DTSTART` must be a
/// DATE as well. Weekly rules carry `WKST=SU` because weeks start on Sunday
/// here. Days past the end of a short month roll over in this crate but are
/// skipped by RFC 5545 expanders, so such months differ between the two.
#[must_use]
pub fn to_rrule(rule: &RecurrenceRule) -> String {
    let frequency = rule.frequency();
    let mut parts = vec![format!("FREQ={}", frequency.rfc5545())];

    if rule.interval().get() > 1 {
        parts.push(format!("INTERVAL={}", rule.interval()));
    }

    match rule.termination() {
        Some(Termination::Count(count)) => parts.push(format!("COUNT={count}")),
        Some(Termination::Until(until)) => parts.push(format!("UNTIL={}", until.format("%Y%m%d"))),
        None => {}
    }

    match frequency {
        Frequency::Weekly { weekdays } => {
            if !weekdays.is_empty() {
                let days: Vec<&str> = weekdays.iter().map(|weekday| weekday.rfc5545()).collect();
                parts.push(format!("BYDAY={}", days.join(",")));
            }
            parts.push("WKST=SU".to_string());
        }
        Frequency::Monthly {
            pattern: Some(MonthlyPattern::Day(day)),
        } => parts.push(format!("BYMONTHDAY={}", day.get())),
        Frequency::Monthly {
            pattern: Some(MonthlyPattern::NthWeekday { week, weekday }),
        } => parts.push(format!("BYDAY={}{}", week.ordinal(), weekday.rfc5545())),
        Frequency::Monthly { pattern: None } | Frequency::Daily | Frequency::Yearly => {}
    }

    parts.join(";")
}
