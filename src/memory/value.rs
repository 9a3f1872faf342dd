//! Stack value representation
//!
//! This module defines [`StackValue`], the tagged value held by each level of the
//! calculator stack. Every value is exactly one of:
//!
//! - [`StackValue::Integer`]: 64-bit signed integer
//! - [`StackValue::Float`]: double-precision float
//! - [`StackValue::Text`]: a [`Text`] of at most [`MAX_TEXT_LEN`] characters
//!
//! # Rendering
//!
//! Values render the way they are shown on the stack and concatenated by `+`:
//! integers in plain decimal, floats with `%.10g` semantics (see
//! [`format_g`](super::format::format_g)), text verbatim.

use super::format::format_g;
use crate::interpreter::constants::{FLOAT_PRECISION, MAX_TEXT_LEN};
use std::fmt;

/// Errors raised while constructing a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Text longer than [`MAX_TEXT_LEN`] characters
    TextTooLong { len: usize },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::TextTooLong { len } => write!(
                f,
                "Text of {} characters exceeds the {} character limit",
                len, MAX_TEXT_LEN
            ),
        }
    }
}

impl std::error::Error for ValueError {}

/// Owned text with a length cap checked at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(String);

impl Text {
    pub fn new(text: impl Into<String>) -> Result<Self, ValueError> {
        let text = text.into();
        let len = text.chars().count();
        if len > MAX_TEXT_LEN {
            return Err(ValueError::TextTooLong { len });
        }
        Ok(Text(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value held by one level of the stack
#[derive(Debug, Clone, PartialEq)]
pub enum StackValue {
    Integer(i64),
    Float(f64),
    Text(Text),
}

impl StackValue {
    /// Build a text value, enforcing the length cap
    pub fn text(text: impl Into<String>) -> Result<Self, ValueError> {
        Text::new(text).map(StackValue::Text)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, StackValue::Text(_))
    }

    /// Get the integer value, returns None if not an Integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            StackValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric value widened to f64, returns None for Text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StackValue::Integer(n) => Some(*n as f64),
            StackValue::Float(x) => Some(*x),
            StackValue::Text(_) => None,
        }
    }

    /// Get the text value, returns None if not Text
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            StackValue::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Short type tag for display
    pub fn type_name(&self) -> &'static str {
        match self {
            StackValue::Integer(_) => "int",
            StackValue::Float(_) => "float",
            StackValue::Text(_) => "str",
        }
    }
}

impl fmt::Display for StackValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackValue::Integer(n) => write!(f, "{}", n),
            StackValue::Float(x) => f.write_str(&format_g(*x, FLOAT_PRECISION)),
            StackValue::Text(t) => f.write_str(t.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_cap() {
        assert!(Text::new("a".repeat(MAX_TEXT_LEN)).is_ok());
        assert_eq!(
            Text::new("a".repeat(MAX_TEXT_LEN + 1)),
            Err(ValueError::TextTooLong {
                len: MAX_TEXT_LEN + 1
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(StackValue::Integer(-42).to_string(), "-42");
        assert_eq!(StackValue::Float(2.5).to_string(), "2.5");
        assert_eq!(StackValue::Float(3.0).to_string(), "3");
        assert_eq!(StackValue::text("ab cd").unwrap().to_string(), "ab cd");
    }

    #[test]
    fn test_numeric_widening() {
        assert_eq!(StackValue::Integer(7).as_f64(), Some(7.0));
        assert_eq!(StackValue::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(StackValue::text("x").unwrap().as_f64(), None);
    }

    #[test]
    fn test_accessors_by_variant() {
        let text = StackValue::text("ab").unwrap();
        assert_eq!(text.as_text().map(Text::as_str), Some("ab"));
        assert_eq!(text.as_integer(), None);
        assert_eq!(StackValue::Integer(3).as_text(), None);
        assert_eq!(StackValue::Float(1.0).as_integer(), None);
        assert_eq!(text.type_name(), "str");
    }
}
