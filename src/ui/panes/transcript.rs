//! Transcript pane rendering

use crate::logger::{LineKind, Transcript};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the transcript pane.
///
/// `scroll_offset` is clamped here; `usize::MAX` pins the view to the newest
/// lines.
pub fn render_transcript_pane(
    frame: &mut Frame,
    area: Rect,
    transcript: &Transcript,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if transcript.is_empty() {
        let paragraph = Paragraph::new("(nothing logged yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let total_items = transcript.len();
    // Account for borders, min 1
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = transcript
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| {
            let style = match line.kind {
                LineKind::Output => Style::default().fg(DEFAULT_THEME.fg),
                LineKind::Input => Style::default().fg(DEFAULT_THEME.primary),
                LineKind::Error => Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            };
            ListItem::new(line.text.as_str()).style(style)
        })
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
