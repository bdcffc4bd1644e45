//! Command-line wrapper around the schedule normalizer and the calculator.

pub mod commands;
pub mod parser;
