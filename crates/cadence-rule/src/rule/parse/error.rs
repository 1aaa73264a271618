//! Recurrence rule parse error types.

use std::fmt;

/// Result type for rule parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Rule text that could not be turned into a `RecurrenceRule`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates an error for a field that does not match what the grammar expects.
    #[must_use]
    pub fn unexpected(kind: ParseErrorKind, expected: &str, found: &str) -> Self {
        Self::new(kind, format!("expected {expected}, found {found:?}"))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid recurrence rule: {}: {}",
            self.kind, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Not exactly 2 or 3 colon-delimited fields.
    MalformedStructure,
    /// Frequency word is not daily, weekly, monthly or yearly.
    UnknownFrequency,
    /// Interval is zero or too large.
    BadInterval,
    /// Count is zero or too large.
    BadCount,
    /// Termination is neither a count nor a valid calendar date.
    BadUntilDate,
    /// Weekly option contains a character outside `UMTWRFS`.
    UnknownWeekday,
    /// Monthly day number outside `1..=31`.
    BadMonthDay,
    /// Monthly option is neither a day number nor a weekday pattern.
    BadMonthlyPattern,
    /// Week selector outside `1..=5` and `-`.
    BadWeekNumber,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedStructure => write!(f, "malformed structure"),
            Self::UnknownFrequency => write!(f, "unknown frequency"),
            Self::BadInterval => write!(f, "bad interval"),
            Self::BadCount => write!(f, "bad count"),
            Self::BadUntilDate => write!(f, "bad until date"),
            Self::UnknownWeekday => write!(f, "unknown weekday character"),
            Self::BadMonthDay => write!(f, "bad month day"),
            Self::BadMonthlyPattern => write!(f, "bad monthly pattern"),
            Self::BadWeekNumber => write!(f, "bad week number"),
        }
    }
}
