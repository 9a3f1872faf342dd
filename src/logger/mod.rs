//! Interaction logging
//!
//! Everything the user sees is mirrored to a persistent record:
//! - [`file`]: the append-only log file, truncated at session start
//! - [`transcript`]: an in-memory copy used by the terminal UI and by tests
//!
//! [`InteractionLog`] ties both to the user-visible output stream. Echoed input
//! goes to the log file and transcript only, since the user already sees what
//! they typed.

pub mod file;
pub mod transcript;

pub use file::LogFile;
pub use transcript::{LineKind, Transcript, TranscriptLine};

use std::io::{self, Write};

/// Output stream, log file, and transcript written in lockstep
#[derive(Debug)]
pub struct InteractionLog<W: Write> {
    out: W,
    file: Option<LogFile>,
    transcript: Transcript,
}

impl<W: Write> InteractionLog<W> {
    /// `file` is `None` when nothing should reach the disk
    pub fn new(out: W, file: Option<LogFile>) -> Self {
        InteractionLog {
            out,
            file,
            transcript: Transcript::new(),
        }
    }

    /// Show a line to the user and log it
    pub fn record(&mut self, line: &str) -> io::Result<()> {
        self.write_line(line, LineKind::Output)
    }

    /// Show an error message to the user and log it
    pub fn record_error(&mut self, message: &str) -> io::Result<()> {
        self.write_line(message, LineKind::Error)
    }

    /// Log an echoed input line (prompt included) without showing it
    pub fn record_input(&mut self, line: &str) -> io::Result<()> {
        self.append_file(line)?;
        self.transcript.push(line, LineKind::Input);
        Ok(())
    }

    /// Show the prompt; prompts are not logged
    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.out.write_all(prompt.as_bytes())?;
        self.out.flush()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn file(&self) -> Option<&LogFile> {
        self.file.as_ref()
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str, kind: LineKind) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.append_file(line)?;
        self.transcript.push(line, kind);
        Ok(())
    }

    fn append_file(&self, line: &str) -> io::Result<()> {
        match &self.file {
            Some(file) => file.append(&format!("{}\n", line)),
            None => Ok(()),
        }
    }
}
