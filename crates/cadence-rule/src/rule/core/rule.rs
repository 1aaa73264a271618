use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Frequency;
use crate::rule::build::format_rule;
use crate::rule::parse::{ParseError, parse_rule};

/// When a rule stops producing occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// Stop after this many occurrences.
    Count(NonZeroU32),
    /// Stop after this date (inclusive).
    Until(NaiveDate),
}

/// A parsed recurrence rule.
///
/// Rules are immutable values: the `with_*` methods consume the rule and
/// return a new one. The canonical text form is available through `Display`
/// and parsing through `FromStr`; serde uses the same text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecurrenceRule {
    frequency: Frequency,
    interval: NonZeroU32,
    termination: Option<Termination>,
}

impl RecurrenceRule {
    /// Creates an unbounded rule repeating every single unit of `frequency`.
    #[must_use]
    pub const fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: NonZeroU32::MIN,
            termination: None,
        }
    }

    #[must_use]
    pub fn with_interval(self, interval: NonZeroU32) -> Self {
        Self { interval, ..self }
    }

    #[must_use]
    pub fn with_termination(self, termination: Option<Termination>) -> Self {
        Self {
            termination,
            ..self
        }
    }

    #[must_use]
    pub const fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    #[must_use]
    pub const fn interval(&self) -> NonZeroU32 {
        self.interval
    }

    #[must_use]
    pub const fn termination(&self) -> Option<Termination> {
        self.termination
    }

    #[must_use]
    pub fn count(&self) -> Option<NonZeroU32> {
        match self.termination? {
            Termination::Count(count) => Some(count),
            Termination::Until(_) => None,
        }
    }

    #[must_use]
    pub fn until(&self) -> Option<NaiveDate> {
        match self.termination? {
            Termination::Until(until) => Some(until),
            Termination::Count(_) => None,
        }
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_rule(self))
    }
}

impl FromStr for RecurrenceRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)
    }
}

impl TryFrom<String> for RecurrenceRule {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_rule(&value)
    }
}

impl From<RecurrenceRule> for String {
    fn from(rule: RecurrenceRule) -> Self {
        format_rule(&rule)
    }
}
