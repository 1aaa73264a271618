//! Recurrence rule engine for calendar-projected tasks.
//!
//! A rule is a single line such as `weekly2:2025-12-31:MWF` ("every 2 weeks on
//! Monday, Wednesday and Friday until 2025-12-31"). This crate parses that text,
//! expands a rule into occurrence dates relative to an anchor date, resolves
//! the next occurrence after a reference date, and formats rules back to text
//! or to an English sentence.
//!
//! Everything here is pure: no I/O, no shared state, and every expansion is
//! bounded by an explicit cap.

pub mod error;
pub mod rule;

pub use rule::build::{describe_rule, format_rule, to_rrule};
pub use rule::core::{
    Frequency, MonthDay, MonthlyPattern, RecurrenceRule, Termination, WeekOfMonth, Weekday,
};
pub use cadence_core::constants::{DEFAULT_MAX_COUNT, DEFAULT_NEXT_OCCURRENCE_SCAN};
pub use rule::expand::{
    generate_dates, generate_dates_default, next_occurrence, next_occurrence_within,
    occurrences_between,
};
pub use rule::parse::{ParseError, ParseErrorKind, ParseResult, parse_rule};
