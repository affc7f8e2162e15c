//! Search Input UI
//!
//! Renders the search box with the typed query and a blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the search input box
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `input`: Current contents of the input
/// - `active`: Whether input is actively receiving keystrokes
/// - `total`: Total matches reported for the current query, if known
pub fn render_search_input(f: &mut Frame, area: Rect, input: &str, active: bool, total: Option<u64>) {
    let title = match (active, total) {
        (true, _) => " Search - Enter to search, Esc to browse ".to_string(),
        (false, Some(total)) => format!(" Search ({} images) - / to edit ", total),
        (false, None) => " Search - / to edit ".to_string(),
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Query: "),
            Span::raw(input),
            Span::styled("█", cursor_style),
        ])
    } else if input.is_empty() {
        Line::from(Span::styled(
            "Search for images…",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            format!("Query: {}", input),
            Style::default().fg(Color::Gray),
        ))
    };

    f.render_widget(Paragraph::new(input_line).block(block), area);
}
