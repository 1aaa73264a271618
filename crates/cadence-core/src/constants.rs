/// Number of occurrences `generate_dates` produces when the caller has no
/// better cap in mind.
pub const DEFAULT_MAX_COUNT: usize = 100;

/// Number of occurrences the next-occurrence resolver examines before giving
/// up on an unbounded rule.
pub const DEFAULT_NEXT_OCCURRENCE_SCAN: usize = 10_000;

/// Calendar date layout used in rule text and in every human-facing output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default `tracing` filter directive for the command-line tool.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Optional configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "cadence.toml";

/// Prefix of environment variables overriding configuration values.
pub const ENV_PREFIX: &str = "CADENCE";
