//! Controls bar under the gallery: loader, Load more button, last error and
//! the scroll-to-top button. Button rectangles are recorded in the hit map.

use imgsearch::logic;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::App;

const LOADER_COLOR: Color = Color::Rgb(0x4f, 0xa9, 0x4d);

const LOAD_MORE_LABEL: &str = " Load more (m) ";
const SCROLL_TOP_LABEL: &str = " ▲ Top (t) ";

pub fn render_controls(f: &mut Frame, area: Rect, app: &mut App) {
    if app.model.scroll_to_top_visible() {
        let width = (SCROLL_TOP_LABEL.chars().count() as u16 + 2).min(area.width);
        let button = Rect {
            x: area.right().saturating_sub(width),
            width,
            ..area
        };
        render_button(f, button, SCROLL_TOP_LABEL, Color::Gray);
        app.hit_map.set_scroll_top(button);
    }

    if app.model.loader_visible() {
        let elapsed = app
            .model
            .ui
            .loading_since
            .map(|since| since.elapsed().as_millis())
            .unwrap_or(0);
        let loader = Line::from(vec![
            Span::styled(logic::ui::loader_frame(elapsed), Style::default().fg(LOADER_COLOR)),
            Span::styled(" Loading", Style::default().fg(LOADER_COLOR)),
        ]);
        f.render_widget(
            Paragraph::new(loader).alignment(Alignment::Center),
            middle_row(area),
        );
        return;
    }

    if let Some(message) = app.model.gallery.error_message() {
        let label = app
            .model
            .ui
            .last_error_type
            .map(|error_type| format!("{}: ", error_type.as_str()))
            .unwrap_or_default();
        let line = Line::from(vec![
            Span::styled(format!("✗ {}", label), Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        ]);
        let row = Rect {
            width: area.width.saturating_sub(SCROLL_TOP_LABEL.chars().count() as u16 + 3),
            ..middle_row(area)
        };
        f.render_widget(Paragraph::new(line), row);
        return;
    }

    if app.model.load_more_visible() {
        let width = (LOAD_MORE_LABEL.chars().count() as u16 + 2).min(area.width);
        let button = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            width,
            ..area
        };
        render_button(f, button, LOAD_MORE_LABEL, Color::Cyan);
        app.hit_map.set_load_more(button);
    }
}

fn render_button(f: &mut Frame, area: Rect, label: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    f.render_widget(
        Paragraph::new(Span::styled(label.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)))
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

fn middle_row(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: 1.min(area.height),
        ..area
    }
}
