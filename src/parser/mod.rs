//! Input parsing
//!
//! The calculator reads one line per prompt, so parsing is a single pass:
//! - [`classifier`]: decides whether a line is a command, a literal, or invalid
//!
//! No external parser dependencies.

pub mod classifier;
