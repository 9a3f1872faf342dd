//! Calculator execution
//!
//! This module provides the core execution logic:
//! - [`engine`]: Operators over the stack (drop, arithmetic, word square, roll)
//! - [`session`]: The read-eval-print loop that owns the stack and the log
//! - [`errors`]: Calculator error types
//! - [`constants`]: Limits, prompt, and default paths
//!
//! # Execution Model
//!
//! One input line is handled at a time. Literals are pushed directly; commands
//! go through [`engine::apply`], which either transforms the stack or reports
//! an error without touching it.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod session;
