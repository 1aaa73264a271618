use cadence_core::constants::DEFAULT_NEXT_OCCURRENCE_SCAN;
use chrono::NaiveDate;

use super::generator::Occurrences;
use crate::rule::core::RecurrenceRule;

/// Returns the first occurrence strictly after `reference`, examining at most
/// `DEFAULT_NEXT_OCCURRENCE_SCAN` occurrences from the anchor.
///
/// The anchor itself is never returned when `reference == anchor`.
#[must_use]
pub fn next_occurrence(
    rule: &RecurrenceRule,
    anchor: NaiveDate,
    reference: NaiveDate,
) -> Option<NaiveDate> {
    next_occurrence_within(rule, anchor, reference, DEFAULT_NEXT_OCCURRENCE_SCAN)
}

/// Same as [`next_occurrence`] with an explicit bound on the number of
/// occurrences examined.
///
/// Returns `None` when the rule terminates before passing `reference` or when
/// `scan` occurrences were examined without finding one.
#[must_use]
pub fn next_occurrence_within(
    rule: &RecurrenceRule,
    anchor: NaiveDate,
    reference: NaiveDate,
    scan: usize,
) -> Option<NaiveDate> {
    let next = Occurrences::new(rule, anchor)
        .take(scan)
        .find(|date| *date > reference);
    tracing::trace!(
        rule = %rule,
        anchor = %anchor,
        reference = %reference,
        next = ?next,
        "Resolved next occurrence"
    );
    next
}
