//! Recurrence rule data model.
//!
//! The rule is a sum type per frequency so that options which only make sense
//! for one frequency (weekdays, day of month, nth weekday) cannot be attached
//! to another, and a monthly rule can never carry both a day number and an
//! nth-weekday pattern.

mod frequency;
mod rule;
mod weekday;

pub use frequency::{Frequency, MonthDay, MonthlyPattern, WeekOfMonth};
pub use rule::{RecurrenceRule, Termination};
pub use weekday::Weekday;
