//! Shared configuration, errors and constants for the cadence workspace.

pub mod config;
pub mod constants;
pub mod error;
