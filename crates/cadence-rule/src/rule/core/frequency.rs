use std::collections::BTreeSet;

use super::Weekday;
use crate::error::{RuleError, RuleResult};

/// How often a rule repeats, together with the options that only make sense
/// for that frequency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    /// An empty set repeats on the anchor's weekday.
    Weekly { weekdays: BTreeSet<Weekday> },
    /// `None` repeats on the anchor's day of month.
    Monthly { pattern: Option<MonthlyPattern> },
    Yearly,
}

impl Frequency {
    /// Weekly frequency restricted to the given weekdays.
    #[must_use]
    pub fn weekly_on(weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        Self::Weekly {
            weekdays: weekdays.into_iter().collect(),
        }
    }

    /// Keyword used in rule text.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly { .. } => "weekly",
            Self::Monthly { .. } => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Calendar unit one step of this frequency spans.
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly { .. } => "week",
            Self::Monthly { .. } => "month",
            Self::Yearly => "year",
        }
    }

    /// RFC 5545 `FREQ` value.
    #[must_use]
    pub const fn rfc5545(&self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly { .. } => "WEEKLY",
            Self::Monthly { .. } => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }
}

/// Which day of the month a monthly rule lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthlyPattern {
    /// A fixed day number.
    Day(MonthDay),
    /// The nth (or last) given weekday of the month.
    NthWeekday { week: WeekOfMonth, weekday: Weekday },
}

/// Day of the month, always within `1..=31`.
///
/// Days past the end of a short month are still valid here; expansion rolls
/// them over into the following month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay(u8);

impl MonthDay {
    /// ## Errors
    /// Returns `RuleError::InvalidMonthDay` outside `1..=31`.
    pub fn new(day: u32) -> RuleResult<Self> {
        u8::try_from(day)
            .ok()
            .filter(|d| (1..=31).contains(d))
            .map(Self)
            .ok_or(RuleError::InvalidMonthDay(day))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Week selector of an nth-weekday monthly pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekOfMonth {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Last,
}

impl WeekOfMonth {
    /// 1 through 5, or -1 for `Last`.
    #[must_use]
    pub const fn ordinal(self) -> i8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Last => -1,
        }
    }

    #[must_use]
    pub const fn from_ordinal(ordinal: i8) -> Option<Self> {
        match ordinal {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            5 => Some(Self::Fifth),
            -1 => Some(Self::Last),
            _ => None,
        }
    }

    /// Selector character used in rule text (`1`..`5`, `-`).
    #[must_use]
    pub const fn selector(self) -> char {
        match self {
            Self::First => '1',
            Self::Second => '2',
            Self::Third => '3',
            Self::Fourth => '4',
            Self::Fifth => '5',
            Self::Last => '-',
        }
    }

    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Fifth => "fifth",
            Self::Last => "last",
        }
    }
}
