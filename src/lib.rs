//! # rpn
//!
//! rpn evaluates postfix (reverse polish notation) arithmetic expressions.
//! Each line of an input file holds one expression; every line is evaluated on
//! its own and printed next to its value, or next to the reason it failed.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Command line boundary.
///
/// Parses the process arguments with clap and hands the requested file to the
/// runner. Opening the file and writing the output go through parameters, so
/// the whole program can be driven without touching the real process.
pub mod cli;
/// Provides the error types for evaluation and for whole runs.
///
/// # Responsibilities
/// - Defines the per-line evaluation failures.
/// - Defines the failures that stop a run (file access, reading, writing).
/// - Implements `Display` and `std::error::Error` for user-facing reporting.
pub mod error;
/// Turns one line of text into a number.
///
/// This module ties together the lexer, the operators and the stack based
/// evaluator. It has no I/O and no state shared between calls.
pub mod interpreter;
/// Reads expressions line by line and writes one result per line.
pub mod runner;

pub use interpreter::evaluator::evaluate;
pub use runner::{Summary, run, run_path};
