//! Parse/format round-trip tests.
//!
//! These tests verify that a rule formatted to text parses back to an equal
//! rule, and that formatting is canonical.

use super::fixtures::*;
use crate::rule::build::format_rule;
use crate::rule::core::RecurrenceRule;
use crate::rule::parse::parse_rule;

/// Parse a rule, format it, then parse again and compare.
fn round_trip(input: &str) -> Result<RecurrenceRule, String> {
    let rule1 = parse_rule(input).map_err(|e| format!("First parse failed: {e}"))?;

    let formatted = format_rule(&rule1);

    let rule2 =
        parse_rule(&formatted).map_err(|e| format!("Second parse failed: {e}\n{formatted}"))?;

    if rule1 != rule2 {
        return Err(format!("Rule mismatch: {rule1:?} vs {rule2:?} (via {formatted})"));
    }

    if format_rule(&rule2) != formatted {
        return Err(format!("Formatting is not stable for {formatted}"));
    }

    Ok(rule2)
}

#[test]
fn round_trip_daily() {
    for input in DAILY_RULES {
        round_trip(input).expect("round trip should succeed");
    }
}

#[test]
fn round_trip_weekly() {
    for input in WEEKLY_RULES {
        round_trip(input).expect("round trip should succeed");
    }
}

#[test]
fn round_trip_monthly() {
    for input in MONTHLY_RULES {
        round_trip(input).expect("round trip should succeed");
    }
}

#[test]
fn round_trip_yearly() {
    for input in YEARLY_RULES {
        round_trip(input).expect("round trip should succeed");
    }
}

#[test]
fn round_trip_canonicalizes_weekdays() {
    let rule = round_trip("weekly:3:fwmWF").expect("round trip should succeed");
    assert_eq!(format_rule(&rule), "weekly:3:MWF");
}

#[test]
fn round_trip_drops_redundant_parts() {
    let cases = [
        ("daily1:3", "daily:3"),
        ("DAILY:3:ignored", "daily:3"),
        ("monthly:3:05", "monthly:3:5"),
        ("weekly:3:", "weekly:3"),
        ("monthly:3:-w", "monthly:3:-W"),
    ];
    for (input, canonical) in cases {
        let rule = round_trip(input).expect("round trip should succeed");
        assert_eq!(format_rule(&rule), canonical, "canonical form of {input}");
    }
}
