//! Expansion of recurrence rules into occurrence dates.
//!
//! Occurrences are naive calendar dates. Every public entry point is bounded
//! by an explicit cap, in addition to the rule's own count or end date.

mod generator;
mod next;

pub use generator::{generate_dates, generate_dates_default, occurrences_between};
pub use next::{next_occurrence, next_occurrence_within};
