//! Stack pane rendering
//!
//! Shows all five level slots, deepest first, so level 1 sits at the bottom of
//! the pane next to the input line. Empty slots are drawn dimmed.

use crate::interpreter::constants::MAX_LEVELS;
use crate::memory::{stack::Stack, value::StackValue};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the stack pane
pub fn render_stack_pane(frame: &mut Frame, area: Rect, stack: &Stack) {
    let block = Block::default()
        .title(format!(" Stack {}/{} ", stack.len(), MAX_LEVELS))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let items: Vec<ListItem> = (1..=MAX_LEVELS)
        .rev()
        .map(|level| ListItem::new(level_line(level, stack.peek(level))))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn level_line(level: usize, value: Option<&StackValue>) -> Line<'static> {
    let label = Span::styled(
        format!("{}: ", level),
        Style::default().fg(DEFAULT_THEME.comment),
    );

    let Some(value) = value else {
        return Line::from(vec![
            label,
            Span::styled("·", Style::default().fg(DEFAULT_THEME.comment)),
        ]);
    };

    let value_color = match value {
        StackValue::Integer(_) => DEFAULT_THEME.number,
        StackValue::Float(_) => DEFAULT_THEME.float,
        StackValue::Text(_) => DEFAULT_THEME.string,
    };
    let shown = match value.as_text() {
        Some(t) => format!("\"{}\"", t),
        None => value.to_string(),
    };

    Line::from(vec![
        label,
        Span::styled(
            shown,
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", value.type_name()),
            Style::default().fg(DEFAULT_THEME.type_name),
        ),
    ])
}
