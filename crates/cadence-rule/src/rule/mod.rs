//! Recurrence rules: data model, text parser, serializers and date expansion.

pub mod build;
pub mod core;
pub mod expand;
pub mod parse;

#[cfg(test)]
mod tests;
