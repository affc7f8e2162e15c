use imgsearch::model::{Notification, NotificationKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, notification: &Notification) {
    let message = notification.message.as_str();

    // Icon + borders + padding around the text
    let max_width = (area.width as usize).min(80);
    let toast_width = (message.width() + 6).min(max_width) as u16;
    let inner_width = toast_width.saturating_sub(2).max(1) as usize;
    let text_lines = (message.width() + 2).div_ceil(inner_width).max(1) as u16;
    let toast_height = (text_lines + 2).min(area.height);

    let toast_x = (area.width.saturating_sub(toast_width)) / 2;
    let toast_y = 3.min(area.height.saturating_sub(toast_height));

    let toast_area = Rect {
        x: area.x + toast_x,
        y: area.y + toast_y,
        width: toast_width,
        height: toast_height,
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let (icon, color) = match notification.kind {
        NotificationKind::Error => ("✗ ", Color::Red),
        NotificationKind::Info => ("ℹ ", Color::Cyan),
    };

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(message),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}
