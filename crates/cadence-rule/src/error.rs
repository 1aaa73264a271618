use thiserror::Error;

use crate::rule::parse::ParseError;

/// Recurrence rule errors
#[derive(Error, Debug)]
pub enum RuleError {
    #[error(transparent)]
    InvalidRecurrenceRule(#[from] ParseError),

    #[error("Day of month must be between 1 and 31, got {0}")]
    InvalidMonthDay(u32),
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
