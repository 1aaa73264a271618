use cadence_core::constants::DATE_FORMAT;

use crate::rule::core::{Frequency, MonthlyPattern, RecurrenceRule, Termination, Weekday};

/// Describes a rule as an English sentence, e.g.
/// "Every 2 weeks on Monday, Wednesday, Friday until 2025-12-31".
#[must_use]
pub fn describe_rule(rule: &RecurrenceRule) -> String {
    let frequency = rule.frequency();
    let interval = rule.interval().get();

    let mut out = if interval > 1 {
        format!("Every {interval} {}s", frequency.unit())
    } else {
        format!("Every {}", frequency.unit())
    };

    match frequency {
        Frequency::Weekly { weekdays } if !weekdays.is_empty() => {
            let names: Vec<&str> = weekdays.iter().copied().map(Weekday::name).collect();
            out.push_str(" on ");
            out.push_str(&names.join(", "));
        }
        Frequency::Monthly {
            pattern: Some(MonthlyPattern::Day(day)),
        } => {
            out.push_str(&format!(" on day {}", day.get()));
        }
        Frequency::Monthly {
            pattern: Some(MonthlyPattern::NthWeekday { week, weekday }),
        } => {
            out.push_str(&format!(" on the {} {}", week.word(), weekday.name()));
        }
        _ => {}
    }

    match rule.termination() {
        Some(Termination::Count(count)) if count.get() == 1 => out.push_str(", 1 time"),
        Some(Termination::Count(count)) => out.push_str(&format!(", {count} times")),
        Some(Termination::Until(until)) => {
            out.push_str(&format!(" until {}", until.format(DATE_FORMAT)));
        }
        None => {}
    }

    out
}
