use std::path::PathBuf;

use cadence_core::constants::DATE_FORMAT;
use cadence_rule::RecurrenceRule;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Parse, describe and expand task recurrence rules.
#[derive(Parser, Debug)]
#[command(name = "cadence", version)]
pub struct Cli {
    /// Configuration file (defaults to ./cadence.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the canonical form, description and RRULE export of a rule
    Parse {
        /// Rule text, e.g. `weekly2:2025-12-31:MWF`
        rule: RecurrenceRule,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the English description of a rule
    Describe { rule: RecurrenceRule },

    /// List occurrence dates starting at an anchor date
    Dates {
        rule: RecurrenceRule,

        /// First date the rule is evaluated from (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        anchor: NaiveDate,

        /// Maximum number of dates (overrides `engine.max_count`)
        #[arg(long)]
        max_count: Option<usize>,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the first occurrence after a reference date
    Next {
        rule: RecurrenceRule,

        #[arg(long, value_parser = parse_date)]
        anchor: NaiveDate,

        /// Date to look forward from (exclusive)
        #[arg(long, value_parser = parse_date)]
        reference: NaiveDate,

        /// Occurrences examined before giving up (overrides `engine.next_scan`)
        #[arg(long)]
        scan: Option<usize>,
    },

    /// List the occurrences inside a date range
    Range {
        rule: RecurrenceRule,

        #[arg(long, value_parser = parse_date)]
        anchor: NaiveDate,

        /// First day of the range (inclusive)
        #[arg(long, value_parser = parse_date)]
        start: NaiveDate,

        /// Last day of the range (inclusive)
        #[arg(long, value_parser = parse_date)]
        end: NaiveDate,

        /// Occurrences examined from the anchor (overrides `engine.next_scan`)
        #[arg(long)]
        scan: Option<usize>,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| format!("expected a YYYY-MM-DD date: {err}"))
}
