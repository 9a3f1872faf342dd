//! Bounded calculator stack
//!
//! [`Stack`] holds at most [`MAX_LEVELS`] values. Levels are numbered from the
//! top: level 1 is the most recently pushed value, level 2 the one below it.
//!
//! # Overflow
//!
//! The bound is a sliding window. Pushing onto a full stack silently discards
//! the bottom (oldest) level before adding the new value, so a push never fails.
//!
//! # Rendering
//!
//! [`Stack::render`] produces the lines shown before every prompt, deepest level
//! first and level 1 last:
//!
//! ```text
//! 3: 10
//! 2: 2.5
//! 1: abc
//! ```

use super::value::StackValue;
use crate::interpreter::constants::{EMPTY_STACK, MAX_LEVELS};

/// The calculator stack
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    // Bottom first; the top of the stack is the last element.
    values: Vec<StackValue>,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            values: Vec::with_capacity(MAX_LEVELS),
        }
    }

    /// Push a value, evicting the bottom level when the stack is full
    pub fn push(&mut self, value: StackValue) {
        if self.values.len() == MAX_LEVELS {
            self.values.remove(0);
        }
        self.values.push(value);
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Option<StackValue> {
        self.values.pop()
    }

    /// Look at a level without removing it (level 1 is the top)
    pub fn peek(&self, level: usize) -> Option<&StackValue> {
        if level == 0 || level > self.values.len() {
            return None;
        }
        self.values.get(self.values.len() - level)
    }

    /// Number of levels currently held
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values, bottom first
    pub fn values(&self) -> &[StackValue] {
        &self.values
    }

    /// Iterate from level 1 (top) down to the bottom
    pub fn iter_top_down(&self) -> impl Iterator<Item = &StackValue> {
        self.values.iter().rev()
    }

    /// Rotate so the bottom level becomes the top and every other level moves
    /// one position down. A no-op for fewer than two levels.
    pub fn roll(&mut self) {
        if self.values.len() >= 2 {
            self.values.rotate_left(1);
        }
    }

    /// Lines shown for the current stack state
    pub fn render(&self) -> Vec<String> {
        if self.values.is_empty() {
            return vec![EMPTY_STACK.to_string()];
        }

        let depth = self.values.len();
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| format!("{}: {}", depth - index, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(stack: &Stack) -> Vec<i64> {
        stack
            .iter_top_down()
            .filter_map(StackValue::as_integer)
            .collect()
    }

    #[test]
    fn test_push_pop_order() {
        let mut stack = Stack::new();
        stack.push(StackValue::Integer(1));
        stack.push(StackValue::Integer(2));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some(StackValue::Integer(2)));
        assert_eq!(stack.pop(), Some(StackValue::Integer(1)));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_overflow_evicts_bottom() {
        let mut stack = Stack::new();
        for n in 1..=6 {
            stack.push(StackValue::Integer(n));
            assert!(stack.len() <= MAX_LEVELS);
        }

        assert_eq!(ints(&stack), vec![6, 5, 4, 3, 2]);
    }

    #[test]
    fn test_peek_levels() {
        let mut stack = Stack::new();
        stack.push(StackValue::Integer(10));
        stack.push(StackValue::Integer(20));

        assert_eq!(stack.peek(1), Some(&StackValue::Integer(20)));
        assert_eq!(stack.peek(2), Some(&StackValue::Integer(10)));
        assert_eq!(stack.peek(0), None);
        assert_eq!(stack.peek(3), None);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_roll_moves_bottom_to_top() {
        let mut stack = Stack::new();
        // Top-down: A B C
        for word in ["c", "b", "a"] {
            stack.push(StackValue::text(word).unwrap());
        }

        stack.roll();

        let top_down: Vec<String> = stack.iter_top_down().map(|v| v.to_string()).collect();
        assert_eq!(top_down, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_roll_single_level_is_noop() {
        let mut stack = Stack::new();
        stack.push(StackValue::Integer(1));
        stack.roll();
        assert_eq!(ints(&stack), vec![1]);
    }

    #[test]
    fn test_render() {
        let mut stack = Stack::new();
        assert_eq!(stack.render(), vec!["Empty Stack"]);

        stack.push(StackValue::Integer(10));
        stack.push(StackValue::Float(2.5));
        stack.push(StackValue::text("abc").unwrap());

        assert_eq!(stack.render(), vec!["3: 10", "2: 2.5", "1: abc"]);
    }
}
