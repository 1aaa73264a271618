//! Recurrence rule serialization.
//!
//! This module provides serializers for recurrence rules:
//! - Format: canonical rule text, the inverse of the parser
//! - Describe: an English sentence for editing UIs
//! - RRULE: the equivalent RFC 5545 `RRULE` value

mod describe;
mod format;
mod rrule;

pub use describe::describe_rule;
pub use format::format_rule;
pub use rrule::to_rrule;
