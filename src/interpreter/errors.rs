//! Calculator error types
//!
//! This module defines [`CalcError`], the errors a single input line can raise.
//! None of them are fatal: the session records the message and prompts again.
//!
//! The user-facing message of each variant is fixed (it is what the log file
//! records); the fields carry context for diagnostics only.

use crate::parser::classifier::Command;
use std::fmt;

/// Why an input line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    TooLong { len: usize },
    BadCharacter { ch: char },
    /// Characters are valid but the line is not a command or literal
    Unrecognized,
}

/// Errors raised by classification and by operators
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Malformed or oversized input line; the stack is untouched
    InvalidInput { reason: Rejection },

    /// The operator needs more levels than the stack holds
    InsufficientArguments { command: Command, available: usize },

    /// The operator received an operand it cannot use (text where a number
    /// is required, or a result that does not fit a text value)
    BadArguments { command: Command, detail: String },
}

impl CalcError {
    /// The fixed message shown to the user and written to the log
    pub fn message(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "Bad Input",
            CalcError::InsufficientArguments { .. } => "Insufficient Arguments",
            CalcError::BadArguments { .. } => "Bad Arguments",
        }
    }

    pub(crate) fn insufficient(command: Command, available: usize) -> Self {
        CalcError::InsufficientArguments { command, available }
    }

    pub(crate) fn bad_arguments(command: Command, detail: impl Into<String>) -> Self {
        CalcError::BadArguments {
            command,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for CalcError {}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "empty line"),
            Rejection::TooLong { len } => write!(f, "line of {} characters is too long", len),
            Rejection::BadCharacter { ch } => write!(f, "character {:?} is not accepted", ch),
            Rejection::Unrecognized => write!(f, "not a command or literal"),
        }
    }
}
