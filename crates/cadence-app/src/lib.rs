//! Command-line front end for the cadence recurrence rule engine.

pub mod cli;
pub mod command;
