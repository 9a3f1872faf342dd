//! Operator execution over the calculator stack
//!
//! Every operator checks its operands before touching the stack. When a check
//! fails the stack is left exactly as it was; operands are only popped once the
//! result is known.
//!
//! Operands are named by level: level 1 is the most recent value, level 2 the
//! one below it. Binary operators compute `level2 OP level1`, so the value
//! entered first is the left-hand side.
//!
//! # Arithmetic
//!
//! Integer arithmetic uses the native two's complement behaviour: `+ - *` wrap
//! on overflow, and integer division by zero traps (panics) exactly as the
//! native `/` does. Float arithmetic follows IEEE 754, so dividing by zero
//! yields an infinity or NaN.

use crate::interpreter::errors::CalcError;
use crate::memory::stack::Stack;
use crate::memory::value::{StackValue, Text};
use crate::parser::classifier::Command;

/// What an operator produced besides its effect on the stack
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The stack changed (or was deliberately left alone); nothing to show
    Updated,
    /// Lines to show and log, e.g. the rows of a word square
    Display(Vec<String>),
    /// The session should end
    Quit,
}

/// Apply a command to the stack
pub fn apply(stack: &mut Stack, command: Command) -> Result<Effect, CalcError> {
    match command {
        Command::Quit => Ok(Effect::Quit),
        Command::Drop => drop_top(stack),
        Command::Add => add(stack),
        Command::Sub => arithmetic(stack, Command::Sub, i64::wrapping_sub, |a, b| a - b),
        Command::Mul => arithmetic(stack, Command::Mul, i64::wrapping_mul, |a, b| a * b),
        Command::Div => arithmetic(stack, Command::Div, i64::wrapping_div, |a, b| a / b),
        Command::WordSquare => word_square(stack).map(Effect::Display),
        Command::Roll => roll(stack),
    }
}

/// Remove the top level
pub fn drop_top(stack: &mut Stack) -> Result<Effect, CalcError> {
    stack
        .pop()
        .map(|_| Effect::Updated)
        .ok_or_else(|| CalcError::insufficient(Command::Drop, 0))
}

/// Add the top two levels.
///
/// Text on either side turns the operation into concatenation
/// (`level2` then `level1`); otherwise the numeric sum is a Float if either
/// operand is a Float and an Integer if both are.
pub fn add(stack: &mut Stack) -> Result<Effect, CalcError> {
    let (lhs, rhs) = operands(stack, Command::Add)?;

    let result = if lhs.is_text() || rhs.is_text() {
        let joined = format!("{}{}", lhs, rhs);
        Text::new(joined).map(StackValue::Text).map_err(|e| {
            CalcError::bad_arguments(Command::Add, e.to_string())
        })?
    } else {
        numeric_result(lhs, rhs, i64::wrapping_add, |a, b| a + b)
    };

    replace_operands(stack, result);
    Ok(Effect::Updated)
}

/// Subtract, multiply, or divide the top two levels.
///
/// Level 1 is checked before level 2, so a Text level 1 reports
/// `BadArguments` even when level 2 is missing.
fn arithmetic(
    stack: &mut Stack,
    command: Command,
    int_op: fn(i64, i64) -> i64,
    float_op: fn(f64, f64) -> f64,
) -> Result<Effect, CalcError> {
    let available = stack.len();

    let rhs = stack
        .peek(1)
        .ok_or_else(|| CalcError::insufficient(command, available))?;
    if rhs.is_text() {
        return Err(CalcError::bad_arguments(command, "level 1 is text"));
    }

    let lhs = stack
        .peek(2)
        .ok_or_else(|| CalcError::insufficient(command, available))?;
    if lhs.is_text() {
        return Err(CalcError::bad_arguments(command, "level 2 is text"));
    }

    let result = numeric_result(lhs, rhs, int_op, float_op);
    replace_operands(stack, result);
    Ok(Effect::Updated)
}

/// Build the word square of the top two levels, leaving them on the stack.
///
/// `word1` is level 2 rendered as text and `word2` is level 1. The square has
/// `min(len1, len2) + 1` rows of `len1` characters; row `i` is `word1` with its
/// first `i` characters taken from `word2`.
pub fn word_square(stack: &Stack) -> Result<Vec<String>, CalcError> {
    let (lhs, rhs) = operands(stack, Command::WordSquare)?;

    let word1: Vec<char> = lhs.to_string().chars().collect();
    let word2: Vec<char> = rhs.to_string().chars().collect();
    let rows = word1.len().min(word2.len()) + 1;

    Ok((0..rows)
        .map(|i| word2[..i].iter().chain(&word1[i..]).collect())
        .collect())
}

/// Move the bottom level to the top
pub fn roll(stack: &mut Stack) -> Result<Effect, CalcError> {
    if stack.is_empty() {
        return Err(CalcError::insufficient(Command::Roll, 0));
    }
    stack.roll();
    Ok(Effect::Updated)
}

/// Borrow levels 2 and 1 (in that order), or report how many are present
fn operands(stack: &Stack, command: Command) -> Result<(&StackValue, &StackValue), CalcError> {
    match (stack.peek(2), stack.peek(1)) {
        (Some(lhs), Some(rhs)) => Ok((lhs, rhs)),
        _ => Err(CalcError::insufficient(command, stack.len())),
    }
}

/// Combine two numeric operands, promoting to Float when either is a Float
fn numeric_result(
    lhs: &StackValue,
    rhs: &StackValue,
    int_op: fn(i64, i64) -> i64,
    float_op: fn(f64, f64) -> f64,
) -> StackValue {
    match (lhs, rhs) {
        (StackValue::Integer(a), StackValue::Integer(b)) => StackValue::Integer(int_op(*a, *b)),
        _ => {
            // Callers have already excluded Text operands.
            let a = lhs.as_f64().unwrap_or(f64::NAN);
            let b = rhs.as_f64().unwrap_or(f64::NAN);
            StackValue::Float(float_op(a, b))
        }
    }
}

/// Pop the two operands and push the result in their place
fn replace_operands(stack: &mut Stack, result: StackValue) {
    stack.pop();
    stack.pop();
    stack.push(result);
}
