//! Main TUI application state and logic

use crate::interpreter::session::{Flow, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io::{self, Write};
use tracing::debug;

/// The main application state
pub struct App<W: Write> {
    /// The calculator session driven by this UI
    pub session: Session<W>,

    /// Line being typed
    pub input: String,

    /// Scroll offset of the log pane (`usize::MAX` follows the newest line)
    pub transcript_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the last submitted line failed
    pub status_is_error: bool,
}

impl<W: Write> App<W> {
    /// Create the app and record the initial stack render
    pub fn new(mut session: Session<W>) -> io::Result<Self> {
        session.render()?;
        Ok(App {
            session,
            input: String::new(),
            transcript_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key)?;
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, then the input line and the status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        super::panes::render_stack_pane(frame, columns[0], self.session.stack());

        super::panes::render_transcript_pane(
            frame,
            columns[1],
            self.session.log().transcript(),
            &mut self.transcript_scroll,
        );

        super::panes::render_input_line(frame, main_chunks[1], &self.input);

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.status_is_error,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) -> io::Result<()> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.submit()?;
            }
            KeyCode::Up => {
                self.transcript_scroll = self.transcript_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.transcript_scroll = self.transcript_scroll.saturating_add(1);
            }
            KeyCode::End => {
                self.transcript_scroll = usize::MAX;
            }
            _ => {}
        }
        Ok(())
    }

    /// Hand the typed line to the session, then show the new stack
    fn submit(&mut self) -> io::Result<()> {
        let line = std::mem::take(&mut self.input);
        debug!(line = %line, "submitted from terminal ui");

        if self.session.handle_line(&line)? == Flow::Quit {
            self.should_quit = true;
            return Ok(());
        }
        self.session.render()?;

        match self.session.last_error() {
            Some(err) => {
                self.status_message = err.message().to_string();
                self.status_is_error = true;
            }
            None => {
                self.status_message =
                    format!("{} level(s) on the stack", self.session.stack().len());
                self.status_is_error = false;
            }
        }

        // Follow the newest log lines
        self.transcript_scroll = usize::MAX;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::InteractionLog;
    use crate::memory::value::StackValue;
    use ratatui::backend::TestBackend;

    fn app() -> App<Vec<u8>> {
        App::new(Session::new(InteractionLog::new(Vec::new(), None))).unwrap()
    }

    fn type_line(app: &mut App<Vec<u8>>, line: &str) {
        for c in line.chars() {
            app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
        }
        app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
    }

    #[test]
    fn test_typed_lines_drive_session() {
        let mut app = app();
        type_line(&mut app, "3");
        type_line(&mut app, "4");
        type_line(&mut app, "+");

        assert_eq!(app.session.stack().values(), &[StackValue::Integer(7)]);
        assert!(app.input.is_empty());
        assert!(!app.status_is_error);
        assert_eq!(app.status_message, "1 level(s) on the stack");
    }

    #[test]
    fn test_error_shown_in_status() {
        let mut app = app();
        type_line(&mut app, "d");

        assert!(app.status_is_error);
        assert_eq!(app.status_message, "Insufficient Arguments");
    }

    #[test]
    fn test_backspace_edits_input() {
        let mut app = app();
        for c in "12".chars() {
            app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
        }
        app.handle_key_event(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(app.input, "1");
    }

    #[test]
    fn test_quit_line_and_escape() {
        let mut app = app();
        type_line(&mut app, "q");
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_stack_and_log() {
        let mut app = app();
        type_line(&mut app, "ab");

        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(screen.contains("Stack 1/5"));
        assert!(screen.contains("\"ab\""));
        assert!(screen.contains("Empty Stack"));
        assert!(screen.contains("# ab"));
    }
}
