// In-memory copy of the interaction log

use crate::interpreter::constants::TRANSCRIPT_CAPACITY;
use std::collections::VecDeque;

/// What produced a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Stack renders and operator output
    Output,
    /// Error messages
    Error,
    /// Echoed user input, prompt included
    Input,
}

/// A single logged line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub text: String,
    pub kind: LineKind,
}

/// The most recent lines written to the interaction log, oldest dropped first
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: VecDeque<TranscriptLine>,
    capacity: usize,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self::with_capacity(TRANSCRIPT_CAPACITY)
    }

    /// Keep at most `capacity` lines (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Transcript {
            lines: VecDeque::with_capacity(capacity.min(TRANSCRIPT_CAPACITY)),
            capacity,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, kind: LineKind) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(TranscriptLine {
            text: text.into(),
            kind,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranscriptLine> {
        self.lines.iter()
    }

    /// All line texts in order
    pub fn get_output(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }

    /// The most recent line of the given kind
    pub fn last_of(&self, kind: LineKind) -> Option<&TranscriptLine> {
        self.lines.iter().rev().find(|line| line.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
