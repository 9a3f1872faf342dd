//! Input line classifier
//!
//! Decides what a single input line means to the calculator: one of the
//! single-character [`Command`]s, an integer, float, or string literal, or
//! invalid input.
//!
//! # Rules
//!
//! 1. A line is rejected outright when it is empty, longer than
//!    [`MAX_INPUT_LEN`] characters, or contains anything other than lowercase
//!    letters, digits, space, and `+ - * / .`.
//! 2. A one-character line is a command (`q d + - * / w r`), a digit, or a
//!    one-character string (letter or space).
//! 3. Longer lines are tried as float, then integer, then string. A single `.`
//!    marks a float; a run of digits would otherwise be ambiguous between an
//!    integer and a string, and the integer reading wins.
//!
//! Numeric literals are read the way C's `strtod`/`strtol` read them: leading
//! spaces are skipped and the longest numeric prefix is used, so `1.5xyz` is
//! the float `1.5` and `-.` is `0.0`. Integers beyond `i64` saturate.

use crate::interpreter::constants::MAX_INPUT_LEN;
use crate::interpreter::errors::{CalcError, Rejection};
use crate::memory::value::{Text, ValueError};
use std::fmt;

/// Single-character calculator commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    Drop,
    Add,
    Sub,
    Mul,
    Div,
    WordSquare,
    Roll,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Quit,
        Command::Drop,
        Command::Add,
        Command::Sub,
        Command::Mul,
        Command::Div,
        Command::WordSquare,
        Command::Roll,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        Command::ALL.into_iter().find(|cmd| cmd.symbol() == c)
    }

    /// The character that invokes this command
    pub fn symbol(self) -> char {
        match self {
            Command::Quit => 'q',
            Command::Drop => 'd',
            Command::Add => '+',
            Command::Sub => '-',
            Command::Mul => '*',
            Command::Div => '/',
            Command::WordSquare => 'w',
            Command::Roll => 'r',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Drop => "drop",
            Command::Add => "add",
            Command::Sub => "subtract",
            Command::Mul => "multiply",
            Command::Div => "divide",
            Command::WordSquare => "word square",
            Command::Roll => "roll",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified input line
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Command(Command),
    Integer(i64),
    Float(f64),
    Text(Text),
}

/// Characters allowed anywhere in an input line
pub fn is_input_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.' | ' ')
}

/// Length and alphabet check applied before a line is echoed or classified
pub fn screen(line: &str) -> Result<(), CalcError> {
    let len = line.chars().count();
    if len > MAX_INPUT_LEN {
        return Err(invalid(Rejection::TooLong { len }));
    }
    match line.chars().find(|c| !is_input_char(*c)) {
        Some(ch) => Err(invalid(Rejection::BadCharacter { ch })),
        None => Ok(()),
    }
}

/// Classify a line (terminator already stripped)
pub fn classify(line: &str) -> Result<Token, CalcError> {
    screen(line)?;

    // Screened lines are ASCII, so bytes and characters coincide.
    match line.as_bytes() {
        [] => Err(invalid(Rejection::Empty)),
        [c] => classify_single(*c),
        bytes => classify_multi(line, bytes),
    }
}

fn classify_single(c: u8) -> Result<Token, CalcError> {
    if let Some(command) = Command::from_char(c as char) {
        return Ok(Token::Command(command));
    }
    match c {
        b'0'..=b'9' => Ok(Token::Integer(i64::from(c - b'0'))),
        b'a'..=b'z' | b' ' => text_token((c as char).to_string()),
        _ => Err(invalid(Rejection::Unrecognized)),
    }
}

fn classify_multi(line: &str, bytes: &[u8]) -> Result<Token, CalcError> {
    if is_float_literal(bytes) {
        return Ok(Token::Float(parse_float_prefix(line)));
    }
    if is_integer_literal(bytes) {
        return Ok(Token::Integer(parse_integer(line)));
    }
    if is_string_literal(bytes) {
        return text_token(line.to_string());
    }
    Err(invalid(Rejection::Unrecognized))
}

fn is_float_literal(bytes: &[u8]) -> bool {
    matches!(bytes[0], b'0'..=b'9' | b'+' | b'-' | b'.' | b' ')
        && bytes.iter().filter(|&&b| b == b'.').count() == 1
}

fn is_integer_literal(bytes: &[u8]) -> bool {
    matches!(bytes[0], b'0'..=b'9' | b'+' | b'-' | b' ')
        && bytes[1..].iter().all(u8::is_ascii_digit)
}

fn is_string_literal(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b' ')
}

fn text_token(text: String) -> Result<Token, CalcError> {
    Text::new(text).map(Token::Text).map_err(|e| match e {
        ValueError::TextTooLong { len } => invalid(Rejection::TooLong { len }),
    })
}

fn invalid(reason: Rejection) -> CalcError {
    CalcError::InvalidInput { reason }
}

/// Read an integer the way `strtol` does, saturating at the `i64` bounds
fn parse_integer(line: &str) -> i64 {
    let s = line.trim_start_matches(' ');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            let d = i64::from(d - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(d)
            } else {
                acc.saturating_mul(10).saturating_add(d)
            }
        })
}

/// Read the longest float prefix the way `strtod` does; no prefix reads as 0
fn parse_float_prefix(line: &str) -> f64 {
    let s = line.trim_start_matches(' ');
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    for word in ["infinity", "inf", "nan"] {
        if s[end..].starts_with(word) {
            return s[..end + word.len()].parse().unwrap_or(0.0);
        }
    }

    if let Some(magnitude) = parse_hex_float(&bytes[end..]) {
        return if bytes.first() == Some(&b'-') {
            -magnitude
        } else {
            magnitude
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// `0x` mantissa with an optional binary exponent; `None` when no hex digit
/// follows the prefix, so the caller reads just the `0`
fn parse_hex_float(bytes: &[u8]) -> Option<f64> {
    let rest = match bytes {
        [b'0', b'x' | b'X', rest @ ..] => rest,
        _ => return None,
    };

    let mut mantissa = 0.0f64;
    let mut scale = 0i32;
    let mut digits = 0usize;
    let mut pos = 0;

    while let Some(d) = rest.get(pos).and_then(|b| (*b as char).to_digit(16)) {
        mantissa = mantissa * 16.0 + f64::from(d);
        digits += 1;
        pos += 1;
    }
    if rest.get(pos) == Some(&b'.') {
        pos += 1;
        while let Some(d) = rest.get(pos).and_then(|b| (*b as char).to_digit(16)) {
            mantissa = mantissa * 16.0 + f64::from(d);
            scale = scale.saturating_sub(4);
            digits += 1;
            pos += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(rest.get(pos), Some(b'p' | b'P')) {
        let mut exp_pos = pos + 1;
        let negative = rest.get(exp_pos) == Some(&b'-');
        if matches!(rest.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&rest[exp_pos..]);
        if exp_digits > 0 {
            let exp = rest[exp_pos..exp_pos + exp_digits]
                .iter()
                .fold(0i32, |acc, d| {
                    acc.saturating_mul(10).saturating_add(i32::from(d - b'0'))
                });
            scale = if negative {
                scale.saturating_sub(exp)
            } else {
                scale.saturating_add(exp)
            };
        }
    }

    Some(mantissa * 2f64.powi(scale))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(line: &str) -> Rejection {
        match classify(line) {
            Err(CalcError::InvalidInput { reason }) => reason,
            other => panic!("expected invalid input for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_single_character_commands() {
        for command in Command::ALL {
            let line = command.symbol().to_string();
            assert_eq!(classify(&line), Ok(Token::Command(command)));
        }
    }

    #[test]
    fn test_single_digits_are_integers() {
        for d in 0..=9 {
            assert_eq!(classify(&d.to_string()), Ok(Token::Integer(d)));
        }
    }

    #[test]
    fn test_single_letters_and_space_are_text() {
        assert!(matches!(classify("a"), Ok(Token::Text(ref t)) if t.as_str() == "a"));
        assert!(matches!(classify(" "), Ok(Token::Text(ref t)) if t.as_str() == " "));
        // Command letters win over text
        assert_eq!(classify("w"), Ok(Token::Command(Command::WordSquare)));
    }

    #[test]
    fn test_single_period_is_invalid() {
        assert_eq!(rejection("."), Rejection::Unrecognized);
    }

    #[test]
    fn test_floats() {
        assert_eq!(classify("2.5"), Ok(Token::Float(2.5)));
        assert_eq!(classify("-0.5"), Ok(Token::Float(-0.5)));
        assert_eq!(classify(".25"), Ok(Token::Float(0.25)));
        assert_eq!(classify("+3."), Ok(Token::Float(3.0)));
        assert_eq!(classify(" 1.5"), Ok(Token::Float(1.5)));
        assert_eq!(classify("1.5e2"), Ok(Token::Float(150.0)));
    }

    #[test]
    fn test_float_reads_numeric_prefix() {
        assert_eq!(classify("1.5abc"), Ok(Token::Float(1.5)));
        assert_eq!(classify("-."), Ok(Token::Float(0.0)));
        assert_eq!(classify("7.x"), Ok(Token::Float(7.0)));
    }

    #[test]
    fn test_hex_floats() {
        assert_eq!(classify("0x1.8"), Ok(Token::Float(1.5)));
        assert_eq!(classify("0x.8"), Ok(Token::Float(0.5)));
        assert_eq!(classify("-0xa.4"), Ok(Token::Float(-10.25)));
        assert_eq!(classify("0x1.8p2"), Ok(Token::Float(6.0)));
        assert_eq!(classify("0x1.p-1"), Ok(Token::Float(0.5)));
        // No hex digit after the prefix: only the 0 is read
        assert_eq!(classify("0x.g"), Ok(Token::Float(0.0)));
    }

    #[test]
    fn test_float_needs_exactly_one_period() {
        assert_eq!(rejection("1.2.3"), Rejection::Unrecognized);
        assert_eq!(rejection("a.b"), Rejection::Unrecognized);
    }

    #[test]
    fn test_integers() {
        assert_eq!(classify("42"), Ok(Token::Integer(42)));
        assert_eq!(classify("-17"), Ok(Token::Integer(-17)));
        assert_eq!(classify("+8"), Ok(Token::Integer(8)));
        assert_eq!(classify(" 9"), Ok(Token::Integer(9)));
        assert_eq!(classify("007"), Ok(Token::Integer(7)));
    }

    #[test]
    fn test_integer_saturates() {
        assert_eq!(
            classify("99999999999999999999"),
            Ok(Token::Integer(i64::MAX))
        );
        assert_eq!(
            classify("-99999999999999999999"),
            Ok(Token::Integer(i64::MIN))
        );
    }

    #[test]
    fn test_strings() {
        assert!(
            matches!(classify("hello world"), Ok(Token::Text(ref t)) if t.as_str() == "hello world")
        );
        assert!(matches!(classify("abc123"), Ok(Token::Text(ref t)) if t.as_str() == "abc123"));
        // Second character is not a digit, so this is text rather than an integer
        assert!(matches!(classify("1 2"), Ok(Token::Text(ref t)) if t.as_str() == "1 2"));
    }

    #[test]
    fn test_operator_runs_are_invalid() {
        assert_eq!(rejection("++"), Rejection::Unrecognized);
        assert_eq!(rejection("-a"), Rejection::Unrecognized);
        assert_eq!(rejection("ab/"), Rejection::Unrecognized);
    }

    #[test]
    fn test_rejected_lines() {
        assert_eq!(rejection(""), Rejection::Empty);
        assert_eq!(rejection("ABC"), Rejection::BadCharacter { ch: 'A' });
        assert_eq!(rejection("a,b"), Rejection::BadCharacter { ch: ',' });
        assert_eq!(
            rejection(&"a".repeat(MAX_INPUT_LEN + 1)),
            Rejection::TooLong {
                len: MAX_INPUT_LEN + 1
            }
        );
        assert!(classify(&"a".repeat(MAX_INPUT_LEN)).is_ok());
    }
}
