//! # Introduction
//!
//! stackcalc is an interactive RPN calculator over a bounded stack of five
//! typed levels. Each input line is classified as a command or a literal;
//! literals are pushed and commands operate on the top levels. Everything shown
//! to the user is mirrored to an append-only log file.
//!
//! ## Pipeline
//!
//! ```text
//! Input line → Classifier → Stack push | Engine → Interaction log → Output / TUI
//! ```
//!
//! 1. [`parser`]: classifies a line as a command, integer, float, string, or
//!    invalid input.
//! 2. [`memory`]: tagged [`memory::value::StackValue`]s held in the bounded
//!    [`memory::stack::Stack`].
//! 3. [`interpreter`]: the operator [`interpreter::engine`] and the
//!    [`interpreter::session::Session`] loop.
//! 4. [`logger`]: the log file and in-memory transcript.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Commands
//!
//! `+` add or concatenate, `-` subtract, `*` multiply, `/` divide, `d` drop,
//! `w` word square, `r` roll, `q` quit.

pub mod config;
pub mod interpreter;
pub mod logger;
pub mod memory;
pub mod parser;
pub mod ui;
