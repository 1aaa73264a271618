//! Parser for the single-line recurrence rule text.
//!
//! ```text
//! rule           := frequency-spec ":" termination (":" options)?
//! frequency-spec := ("daily"|"weekly"|"monthly"|"yearly") interval?
//! termination    := count | until | ""
//! options        := weekday-char+ | day-number | week-selector weekday-char
//! ```

mod error;
mod parser;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parser::parse_rule;
