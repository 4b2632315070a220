//! Shopping list view
//!
//! Items are laid out in fixed-width columns filled top to bottom. Items
//! that don't fit in the window are left off; the status bar still shows
//! the full count.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::{grid_columns, truncate_item};
use crate::tui::app::App;

/// Render the shopping list screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Shopping list: ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = app.session.list();
    if lines.is_empty() {
        let empty = Paragraph::new("The list is empty. Press 'a' to add an item or 'h' for help.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let column_width = app.session.settings().column_width;
    let columns = layout_columns(&lines, column_width, inner.width, inner.height);

    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            columns
                .iter()
                .map(|_| Constraint::Length(column_width))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (column, column_area) in columns.into_iter().zip(areas.iter()) {
        let items: Vec<Line> = column
            .into_iter()
            .map(|text| Line::from(Span::styled(text, Style::default().fg(Color::White))))
            .collect();
        frame.render_widget(Paragraph::new(items), *column_area);
    }
}

/// Truncate each line and split into as many columns as fit in `width`
pub fn layout_columns(
    lines: &[String],
    column_width: u16,
    width: u16,
    height: u16,
) -> Vec<Vec<String>> {
    if column_width == 0 {
        return Vec::new();
    }

    let truncated: Vec<String> = lines
        .iter()
        .map(|line| truncate_item(line, column_width as usize))
        .collect();

    let max_columns = (width / column_width) as usize;
    grid_columns(&truncated, height as usize)
        .into_iter()
        .take(max_columns)
        .collect()
}
