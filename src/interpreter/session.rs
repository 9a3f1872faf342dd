//! The read-eval-print session
//!
//! A [`Session`] owns the stack and the interaction log. Each round renders the
//! stack, prompts, reads one line, and dispatches it:
//!
//! ```text
//! render → prompt → read → screen → echo → classify → push | apply → render ...
//! ```
//!
//! Lines that are too long or use characters outside the input alphabet are
//! rejected before they are echoed to the log. Calculator errors are recorded
//! and the loop continues; only `q` (or the end of input) ends it, and only
//! I/O failures on the output or log file escape [`Session::run`].

use crate::interpreter::constants::PROMPT;
use crate::interpreter::engine::{self, Effect};
use crate::interpreter::errors::CalcError;
use crate::logger::InteractionLog;
use crate::memory::stack::Stack;
use crate::memory::value::StackValue;
use crate::parser::classifier::{self, Token};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Whether the session keeps going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One calculator session
pub struct Session<W: Write> {
    stack: Stack,
    log: InteractionLog<W>,
    last_error: Option<CalcError>,
}

impl<W: Write> Session<W> {
    pub fn new(log: InteractionLog<W>) -> Self {
        Session {
            stack: Stack::new(),
            log,
            last_error: None,
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn log(&self) -> &InteractionLog<W> {
        &self.log
    }

    /// Error raised by the most recent line, if any
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// End the session and give back the log
    pub fn into_log(self) -> InteractionLog<W> {
        self.log
    }

    /// Run until `q` or end of input
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        info!("session started");
        let mut buf = Vec::new();

        loop {
            self.render()?;
            self.log.prompt(PROMPT)?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("end of input");
                break;
            }

            // Invalid UTF-8 becomes U+FFFD and is rejected by the screen.
            let line = String::from_utf8_lossy(&buf);
            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        info!("session ended");
        Ok(())
    }

    /// Record the current stack lines
    pub fn render(&mut self) -> io::Result<()> {
        for line in self.stack.render() {
            self.log.record(&line)?;
        }
        Ok(())
    }

    /// Process one raw input line, terminator included or not
    pub fn handle_line(&mut self, raw: &str) -> io::Result<Flow> {
        let line = raw
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(raw);
        self.last_error = None;

        if let Err(err) = classifier::screen(line) {
            return self.report(err);
        }
        self.log.record_input(&format!("{}{}", PROMPT, line))?;

        let token = match classifier::classify(line) {
            Ok(token) => token,
            Err(err) => return self.report(err),
        };
        debug!(?token, "classified input");

        let command = match token {
            Token::Command(command) => command,
            Token::Integer(n) => return self.push(StackValue::Integer(n)),
            Token::Float(x) => return self.push(StackValue::Float(x)),
            Token::Text(text) => return self.push(StackValue::Text(text)),
        };

        debug!(command = command.name(), depth = self.stack.len(), "dispatching");
        match engine::apply(&mut self.stack, command) {
            Ok(Effect::Quit) => Ok(Flow::Quit),
            Ok(Effect::Updated) => Ok(Flow::Continue),
            Ok(Effect::Display(lines)) => {
                for line in &lines {
                    self.log.record(line)?;
                }
                Ok(Flow::Continue)
            }
            Err(err) => self.report(err),
        }
    }

    fn push(&mut self, value: StackValue) -> io::Result<Flow> {
        self.stack.push(value);
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: CalcError) -> io::Result<Flow> {
        debug!(error = ?err, "input rejected");
        self.log.record_error(err.message())?;
        self.last_error = Some(err);
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::errors::Rejection;

    fn session() -> Session<Vec<u8>> {
        Session::new(InteractionLog::new(Vec::new(), None))
    }

    #[test]
    fn test_crlf_terminator_stripped() {
        let mut s = session();
        s.handle_line("12\r\n").unwrap();
        assert_eq!(s.stack().values(), &[StackValue::Integer(12)]);
    }

    #[test]
    fn test_oversized_line_not_echoed() {
        let mut s = session();
        let long = "a".repeat(40);
        s.handle_line(&long).unwrap();

        assert!(s.stack().is_empty());
        assert_eq!(s.log().transcript().get_output(), vec!["Bad Input"]);
        assert!(matches!(
            s.last_error(),
            Some(CalcError::InvalidInput {
                reason: Rejection::TooLong { len: 40 }
            })
        ));
    }

    #[test]
    fn test_unrecognized_line_echoed_then_rejected() {
        let mut s = session();
        s.handle_line("++\n").unwrap();
        assert_eq!(s.log().transcript().get_output(), vec!["# ++", "Bad Input"]);
    }

    #[test]
    fn test_last_error_cleared_by_next_line() {
        let mut s = session();
        s.handle_line("d").unwrap();
        assert!(s.last_error().is_some());
        s.handle_line("1").unwrap();
        assert!(s.last_error().is_none());
    }

    #[test]
    fn test_quit() {
        let mut s = session();
        assert_eq!(s.handle_line("q\n").unwrap(), Flow::Quit);
    }
}
