//! Input line rendering

use crate::interpreter::constants::{MAX_INPUT_LEN, PROMPT};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input line and place the cursor after the typed text
pub fn render_input_line(frame: &mut Frame, area: Rect, input: &str) {
    let len = input.chars().count();
    // Over-long lines are still submitted (and rejected), so only warn here.
    let text_color = if len > MAX_INPUT_LEN {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.fg
    };

    let block = Block::default()
        .title(format!(" Input {}/{} ", len, MAX_INPUT_LEN))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(input.to_string(), Style::default().fg(text_color)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    let cursor_x = area.x + 1 + (PROMPT.len() + len) as u16;
    let max_x = area.x + area.width.saturating_sub(2);
    frame.set_cursor_position(Position::new(cursor_x.min(max_x), area.y + 1));
}
