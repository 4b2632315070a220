//! Status bar view
//!
//! Shows the item count, the last status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    let count = app.session.ledger().len();
    spans.push(Span::styled(" Items: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        count.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        let color = if message.is_error {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::styled(
            message.text.as_str(),
            Style::default().fg(color),
        ));
    }

    // Key hints (right-aligned)
    let hints = match app.screen {
        Screen::Welcome => " Enter:New  l:Load  q:Quit ",
        Screen::List => " a:Add  r:Remove  s:Save  h:Help  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
