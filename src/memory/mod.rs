//! Value model for the calculator
//!
//! This module provides the core data abstractions:
//! - [`value`]: Tagged stack values (Integer, Float, Text)
//! - [`stack`]: The bounded stack with drop-oldest overflow
//! - [`format`]: `%g`-style float rendering shared by display and concatenation
//!
//! # Limits
//!
//! - Stack depth: 5 levels
//! - Text: 32 characters, enforced when the value is built

pub mod format;
pub mod stack;
pub mod value;
