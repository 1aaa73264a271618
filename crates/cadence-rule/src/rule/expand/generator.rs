//! Date sequence generation.
//!
//! Daily, weekly and yearly rules are expanded period by period: period `k` is
//! the anchor's day, week or year shifted by `k * interval` units. Each period
//! yields one candidate date, or one per selected weekday for weekly rules
//! with weekdays.
//!
//! Monthly rules walk a cursor that starts at the anchor. Each step resolves
//! the pattern inside the cursor's month, emits that date, then moves the
//! cursor `interval` months past it, so a monthly rule yields at most one date
//! per calendar month.
//!
//! Day numbers past the end of a month roll over into the next month
//! (February 31st becomes March 3rd in a common year), as does a fifth weekday
//! that the month does not have. A yearly rule anchored on February 29th
//! yields March 1st in common years.
//!
//! Candidates before the anchor are dropped without counting toward the
//! rule's count.

use std::collections::VecDeque;

use cadence_core::constants::DEFAULT_MAX_COUNT;
use chrono::{Datelike, Days, Months, NaiveDate};

use crate::rule::core::{Frequency, MonthlyPattern, RecurrenceRule, WeekOfMonth, Weekday};

/// Lazily expanded occurrences of a rule, in non-decreasing order.
///
/// The sequence ends when the rule's count or end date is reached or when the
/// calendar runs out of representable dates; callers bound it with `take`.
pub(crate) struct Occurrences<'a> {
    rule: &'a RecurrenceRule,
    anchor: NaiveDate,
    period: u64,
    /// Date resolved by the previous monthly step.
    previous_month_date: Option<NaiveDate>,
    pending: VecDeque<NaiveDate>,
    emitted: u32,
    finished: bool,
}

impl<'a> Occurrences<'a> {
    pub(crate) fn new(rule: &'a RecurrenceRule, anchor: NaiveDate) -> Self {
        Self {
            rule,
            anchor,
            period: 0,
            previous_month_date: None,
            pending: VecDeque::new(),
            emitted: 0,
            finished: false,
        }
    }

    /// Candidate dates of period `k`, ascending. `None` once the dates are no
    /// longer representable.
    fn period_dates(&mut self, k: u64) -> Option<Vec<NaiveDate>> {
        let rule = self.rule;
        let anchor = self.anchor;
        let steps = k.checked_mul(u64::from(rule.interval().get()))?;

        let date = match rule.frequency() {
            Frequency::Daily => anchor.checked_add_days(Days::new(steps))?,
            Frequency::Weekly { weekdays } if weekdays.is_empty() => {
                anchor.checked_add_days(Days::new(steps.checked_mul(7)?))?
            }
            Frequency::Weekly { weekdays } => {
                let week_start =
                    start_of_week(anchor)?.checked_add_days(Days::new(steps.checked_mul(7)?))?;
                return weekdays
                    .iter()
                    .map(|weekday| {
                        week_start.checked_add_days(Days::new(u64::from(weekday.code())))
                    })
                    .collect();
            }
            Frequency::Monthly { pattern } => {
                let cursor = match self.previous_month_date {
                    None => anchor,
                    Some(previous) => {
                        previous.checked_add_months(Months::new(rule.interval().get()))?
                    }
                };
                let date = monthly_date(first_of_month(cursor)?, pattern.as_ref(), anchor.day())?;
                self.previous_month_date = Some(date);
                date
            }
            Frequency::Yearly => {
                let month = shift_months(first_of_month(anchor)?, steps.checked_mul(12)?)?;
                day_of_month(month, anchor.day())?
            }
        };

        Some(vec![date])
    }
}

impl Iterator for Occurrences<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            if self
                .rule
                .count()
                .is_some_and(|count| self.emitted >= count.get())
            {
                self.finished = true;
                break;
            }

            let Some(candidate) = self.pending.pop_front() else {
                if let Some(dates) = self.period_dates(self.period) {
                    self.pending.extend(dates);
                    self.period += 1;
                } else {
                    tracing::debug!(period = self.period, "Ran out of representable dates");
                    self.finished = true;
                }
                continue;
            };

            if candidate < self.anchor {
                continue;
            }
            if self.rule.until().is_some_and(|until| candidate > until) {
                self.finished = true;
                break;
            }

            self.emitted += 1;
            return Some(candidate);
        }
        None
    }
}

/// Expands a rule into at most `max_count` occurrence dates, starting at
/// `anchor`.
///
/// The result is in non-decreasing order, contains no date before `anchor`,
/// and respects the rule's count and end date. An end date before the anchor
/// yields an empty list. [`generate_dates_default`] applies the standard cap
/// of `DEFAULT_MAX_COUNT` dates.
#[must_use]
pub fn generate_dates(
    rule: &RecurrenceRule,
    anchor: NaiveDate,
    max_count: usize,
) -> Vec<NaiveDate> {
    let dates: Vec<NaiveDate> = Occurrences::new(rule, anchor).take(max_count).collect();
    tracing::trace!(
        rule = %rule,
        anchor = %anchor,
        max_count,
        produced = dates.len(),
        "Generated occurrence dates"
    );
    dates
}

/// [`generate_dates`] capped at `DEFAULT_MAX_COUNT` (100) dates.
#[must_use]
pub fn generate_dates_default(rule: &RecurrenceRule, anchor: NaiveDate) -> Vec<NaiveDate> {
    generate_dates(rule, anchor, DEFAULT_MAX_COUNT)
}

/// Returns the occurrences falling within `start..=end`, examining at most
/// `max_count` occurrences from the anchor onward.
///
/// This is the query a calendar view makes for its visible range.
#[must_use]
pub fn occurrences_between(
    rule: &RecurrenceRule,
    anchor: NaiveDate,
    start: NaiveDate,
    end: NaiveDate,
    max_count: usize,
) -> Vec<NaiveDate> {
    Occurrences::new(rule, anchor)
        .take(max_count)
        .skip_while(|date| *date < start)
        .take_while(|date| *date <= end)
        .collect()
}

/// Sunday on or before `date`.
fn start_of_week(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(
        date.weekday().num_days_from_sunday(),
    )))
}

fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

fn shift_months(month_start: NaiveDate, months: u64) -> Option<NaiveDate> {
    let months = u32::try_from(months).ok()?;
    month_start.checked_add_months(Months::new(months))
}

/// Date selected by a monthly pattern in the month starting at `month_start`.
/// Without a pattern the anchor's day of the month is used.
fn monthly_date(
    month_start: NaiveDate,
    pattern: Option<&MonthlyPattern>,
    anchor_day: u32,
) -> Option<NaiveDate> {
    match pattern {
        None => day_of_month(month_start, anchor_day),
        Some(MonthlyPattern::Day(day)) => day_of_month(month_start, u32::from(day.get())),
        Some(MonthlyPattern::NthWeekday {
            week: WeekOfMonth::Last,
            weekday,
        }) => last_weekday_of_month(month_start, *weekday),
        Some(MonthlyPattern::NthWeekday { week, weekday }) => {
            nth_weekday_of_month(month_start, *week, *weekday)
        }
    }
}

/// Day `day` counted from the month start; rolls into the next month when the
/// month is shorter.
fn day_of_month(month_start: NaiveDate, day: u32) -> Option<NaiveDate> {
    month_start.checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
}

/// First `weekday` on or after the month start, plus `week - 1` weeks.
fn nth_weekday_of_month(
    month_start: NaiveDate,
    week: WeekOfMonth,
    weekday: Weekday,
) -> Option<NaiveDate> {
    let first_offset = Weekday::from(month_start.weekday()).days_until(weekday);
    let extra_weeks = u64::try_from(week.ordinal() - 1).ok()?;
    month_start.checked_add_days(Days::new(u64::from(first_offset) + extra_weeks * 7))
}

/// Last `weekday` of the month, found by stepping back from the month's last day.
fn last_weekday_of_month(month_start: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let last_day = month_start.checked_add_months(Months::new(1))?.pred_opt()?;
    let back = weekday.days_until(Weekday::from(last_day.weekday()));
    last_day.checked_sub_days(Days::new(u64::from(back)))
}
