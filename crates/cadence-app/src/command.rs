use anyhow::{Context, Result};
use cadence_core::config::EngineConfig;
use cadence_core::constants::DATE_FORMAT;
use cadence_core::error::CoreError;
use cadence_rule::{
    RecurrenceRule, describe_rule, generate_dates, next_occurrence_within, occurrences_between,
    to_rrule,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::cli::Command;

/// Machine-readable summary of a rule.
#[derive(Debug, Serialize)]
struct RuleReport<'a> {
    rule: &'a RecurrenceRule,
    description: String,
    rrule: String,
}

/// Machine-readable expansion of a rule.
#[derive(Debug, Serialize)]
struct DatesReport<'a> {
    rule: &'a RecurrenceRule,
    anchor: NaiveDate,
    dates: Vec<NaiveDate>,
}

/// ## Summary
/// Runs a sub-command and returns the text to print.
///
/// Caps not given on the command line fall back to `engine`.
///
/// ## Errors
/// Returns an error if a date range is inverted or JSON serialization fails.
pub fn run(command: &Command, engine: &EngineConfig) -> Result<String> {
    match command {
        Command::Parse { rule, json } => parse(rule, *json),
        Command::Describe { rule } => Ok(describe_rule(rule)),
        Command::Dates {
            rule,
            anchor,
            max_count,
            json,
        } => {
            let max_count = max_count.unwrap_or(engine.max_count);
            let dates = generate_dates(rule, *anchor, max_count);
            tracing::debug!(rule = %rule, count = dates.len(), max_count, "Expanded rule");
            if *json {
                let report = DatesReport {
                    rule,
                    anchor: *anchor,
                    dates,
                };
                serde_json::to_string_pretty(&report).context("Failed to serialize dates")
            } else {
                Ok(format_dates(&dates))
            }
        }
        Command::Next {
            rule,
            anchor,
            reference,
            scan,
        } => {
            let scan = scan.unwrap_or(engine.next_scan);
            Ok(next_occurrence_within(rule, *anchor, *reference, scan).map_or_else(
                || "none".to_string(),
                |date| date.format(DATE_FORMAT).to_string(),
            ))
        }
        Command::Range {
            rule,
            anchor,
            start,
            end,
            scan,
        } => {
            if start > end {
                return Err(CoreError::InvalidInput(format!(
                    "range start {start} is after range end {end}"
                ))
                .into());
            }
            let scan = scan.unwrap_or(engine.next_scan);
            Ok(format_dates(&occurrences_between(
                rule, *anchor, *start, *end, scan,
            )))
        }
    }
}

fn parse(rule: &RecurrenceRule, json: bool) -> Result<String> {
    let description = describe_rule(rule);
    let rrule = to_rrule(rule);

    if json {
        let report = RuleReport {
            rule,
            description,
            rrule,
        };
        return serde_json::to_string_pretty(&report).context("Failed to serialize rule");
    }

    Ok(format!(
        "rule:        {rule}\ndescription: {description}\nrrule:       {rrule}"
    ))
}

fn format_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|date| date.format(DATE_FORMAT).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::config::Settings;

    fn engine() -> EngineConfig {
        Settings::default().engine
    }

    fn rule(text: &str) -> RecurrenceRule {
        text.parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_log::test]
    fn parse_prints_canonical_form() {
        let output = run(
            &Command::Parse {
                rule: rule("Weekly2:10:fm"),
                json: false,
            },
            &engine(),
        )
        .unwrap();
        assert_eq!(
            output,
            "rule:        weekly2:10:MF\n\
             description: Every 2 weeks on Monday, Friday, 10 times\n\
             rrule:       FREQ=WEEKLY;INTERVAL=2;COUNT=10;BYDAY=MO,FR;WKST=SU"
        );
    }

    #[test_log::test]
    fn parse_json_report() {
        let output = run(
            &Command::Parse {
                rule: rule("monthly:3:15"),
                json: true,
            },
            &engine(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["rule"], "monthly:3:15");
        assert_eq!(value["description"], "Every month on day 15, 3 times");
        assert_eq!(value["rrule"], "FREQ=MONTHLY;COUNT=3;BYMONTHDAY=15");
    }

    #[test_log::test]
    fn dates_use_configured_cap() {
        let mut engine = engine();
        engine.max_count = 2;
        let command = Command::Dates {
            rule: rule("daily:"),
            anchor: date(2025, 1, 6),
            max_count: None,
            json: false,
        };
        assert_eq!(run(&command, &engine).unwrap(), "2025-01-06\n2025-01-07");
    }

    #[test_log::test]
    fn dates_json_lists_iso_dates() {
        let command = Command::Dates {
            rule: rule("monthly:2:2W"),
            anchor: date(2025, 1, 6),
            max_count: Some(10),
            json: true,
        };
        let value: serde_json::Value =
            serde_json::from_str(&run(&command, &engine()).unwrap()).unwrap();
        assert_eq!(value["anchor"], "2025-01-06");
        assert_eq!(
            value["dates"],
            serde_json::json!(["2025-01-08", "2025-02-12"])
        );
    }

    #[test_log::test]
    fn next_prints_date_or_none() {
        let command = Command::Next {
            rule: rule("daily2:3"),
            anchor: date(2025, 1, 6),
            reference: date(2025, 1, 8),
            scan: None,
        };
        assert_eq!(run(&command, &engine()).unwrap(), "2025-01-10");

        let command = Command::Next {
            rule: rule("daily2:3"),
            anchor: date(2025, 1, 6),
            reference: date(2025, 1, 10),
            scan: None,
        };
        assert_eq!(run(&command, &engine()).unwrap(), "none");
    }

    #[test_log::test]
    fn range_rejects_inverted_bounds() {
        let command = Command::Range {
            rule: rule("daily:"),
            anchor: date(2025, 1, 6),
            start: date(2025, 2, 1),
            end: date(2025, 1, 1),
            scan: None,
        };
        let err = run(&command, &engine()).unwrap_err();
        assert!(err.to_string().contains("after range end"));
    }

    #[test_log::test]
    fn range_lists_window() {
        let command = Command::Range {
            rule: rule("weekly::S"),
            anchor: date(2025, 1, 6),
            start: date(2025, 3, 1),
            end: date(2025, 3, 31),
            scan: None,
        };
        assert_eq!(
            run(&command, &engine()).unwrap(),
            "2025-03-01\n2025-03-08\n2025-03-15\n2025-03-22\n2025-03-29"
        );
    }
}
