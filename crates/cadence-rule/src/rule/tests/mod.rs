//! Cross-cutting tests over a shared set of rule fixtures.

mod round_trip;
