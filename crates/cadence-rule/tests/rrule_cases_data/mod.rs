use cadence_rule::{RecurrenceRule, generate_dates, parse_rule, to_rrule};
use chrono::NaiveDate;
use rrule::RRuleSet;

pub struct RuleCase {
    pub name: &'static str,
    pub rule: &'static str,
    pub anchor: &'static str,
    pub expected: &'static [&'static str],
    pub max_count: usize,
    /// Whether an RFC 5545 expander produces the same dates.
    pub matches_rfc5545: bool,
}

#[expect(clippy::too_many_lines)]
pub fn rule_cases() -> Vec<RuleCase> {
    vec![
        RuleCase {
            name: "daily_interval_count",
            rule: "daily2:3",
            anchor: "2025-01-06",
            expected: &["2025-01-06", "2025-01-08", "2025-01-10"],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "daily_until",
            rule: "daily3:2025-01-15",
            anchor: "2025-01-06",
            expected: &["2025-01-06", "2025-01-09", "2025-01-12", "2025-01-15"],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "weekly_weekdays_count",
            rule: "weekly:3:MWF",
            anchor: "2025-01-06",
            expected: &["2025-01-06", "2025-01-08", "2025-01-10"],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "weekly_weekdays_interval",
            rule: "weekly2:6:TR",
            anchor: "2025-01-06",
            expected: &[
                "2025-01-07",
                "2025-01-09",
                "2025-01-21",
                "2025-01-23",
                "2025-02-04",
                "2025-02-06",
            ],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "weekly_weekdays_mid_week_anchor",
            rule: "weekly:5:MWF",
            anchor: "2025-01-08",
            expected: &[
                "2025-01-08",
                "2025-01-10",
                "2025-01-13",
                "2025-01-15",
                "2025-01-17",
            ],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "weekly_weekdays_until",
            rule: "weekly:2025-01-15:MWF",
            anchor: "2025-01-06",
            expected: &[
                "2025-01-06",
                "2025-01-08",
                "2025-01-10",
                "2025-01-13",
                "2025-01-15",
            ],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "weekly_sunday_and_saturday",
            rule: "weekly2:4:US",
            anchor: "2025-01-06",
            expected: &["2025-01-11", "2025-01-19", "2025-01-25", "2025-02-02"],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "weekly_plain",
            rule: "weekly3:3",
            anchor: "2025-01-06",
            expected: &["2025-01-06", "2025-01-27", "2025-02-17"],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "monthly_day",
            rule: "monthly:3:15",
            anchor: "2025-01-06",
            expected: &["2025-01-15", "2025-02-15", "2025-03-15"],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "monthly_second_wednesday",
            rule: "monthly:2:2W",
            anchor: "2025-01-06",
            expected: &["2025-01-08", "2025-02-12"],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "monthly_last_friday",
            rule: "monthly2:3:-F",
            anchor: "2025-01-06",
            expected: &["2025-01-31", "2025-03-28", "2025-05-30"],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "monthly_first_monday_after_anchor",
            rule: "monthly:3:1M",
            anchor: "2025-01-07",
            expected: &["2025-02-03", "2025-03-03", "2025-04-07"],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "monthly_day_31_rolls_over",
            rule: "monthly:4:31",
            anchor: "2025-01-06",
            expected: &["2025-01-31", "2025-03-03", "2025-05-01", "2025-07-01"],
            max_count: 100,
            matches_rfc5545: false,
        },
        RuleCase {
            name: "yearly_until",
            rule: "yearly:2027-01-01",
            anchor: "2025-01-06",
            expected: &["2025-01-06", "2026-01-06"],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "yearly_interval_count",
            rule: "yearly2:3",
            anchor: "2025-07-04",
            expected: &["2025-07-04", "2027-07-04", "2029-07-04"],
            max_count: 100,
            matches_rfc5545: true,
        },
        RuleCase {
            name: "unbounded_capped",
            rule: "daily:",
            anchor: "2025-01-06",
            expected: &["2025-01-06", "2025-01-07", "2025-01-08", "2025-01-09"],
            max_count: 4,
            matches_rfc5545: true,
        },
    ]
}

pub fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("Failed to parse date {value}: {err}"))
}

pub fn parse_case_rule(case: &RuleCase) -> RecurrenceRule {
    parse_rule(case.rule).unwrap_or_else(|err| panic!("Failed to parse {}: {}", case.name, err))
}

pub fn assert_case(case: &RuleCase) {
    let rule = parse_case_rule(case);
    let actual = generate_dates(&rule, parse_date(case.anchor), case.max_count);
    let expected: Vec<NaiveDate> = case.expected.iter().copied().map(parse_date).collect();

    assert_eq!(actual, expected, "Case {} did not match", case.name);
}

/// Expands the case with the `rrule` crate from its RFC 5545 export.
///
/// `DTSTART` is a DATE so that it matches the DATE-valued `UNTIL`.
pub fn rfc5545_dates(case: &RuleCase) -> Vec<NaiveDate> {
    let rule = parse_case_rule(case);
    let anchor = parse_date(case.anchor);
    let text = format!(
        "DTSTART;VALUE=DATE:{}\nRRULE:{}",
        anchor.format("%Y%m%d"),
        to_rrule(&rule)
    );

    let rrule_set: RRuleSet = text
        .parse()
        .unwrap_or_else(|err| panic!("Failed to parse {} as {text}: {err}", case.name));
    let limit = u16::try_from(case.max_count).unwrap_or(u16::MAX);

    rrule_set
        .all(limit)
        .dates
        .iter()
        .map(chrono::DateTime::date_naive)
        .collect()
}
