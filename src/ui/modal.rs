//! Image Modal UI
//!
//! Overlay with the enlarged image and its metadata. Shows the thumbnail
//! until the full-size image is ready.

use imgsearch::api::ImageVariant;
use imgsearch::logic::formatting::format_likes;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use super::layout::centered_rect;
use crate::{App, ImagePreviewState};

pub fn render_modal(f: &mut Frame, area: Rect, app: &mut App) {
    let Some(item) = app.model.modal.selected() else {
        return;
    };

    let modal_area = centered_rect(80, 80, area);
    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", item.display_description()))
        .border_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(inner);

    let mut byline = vec![
        Span::styled("Photo by ", Style::default().fg(Color::Gray)),
        Span::styled(item.user.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled("♥ ", Style::default().fg(Color::Red)),
        Span::raw(format_likes(item.likes)),
    ];
    if let Some(ImagePreviewState::Ready { dimensions: (width, height), .. }) =
        app.image_state_map.get(&(item.id.clone(), ImageVariant::Full))
    {
        byline.push(Span::styled(format!("   {}×{}", width, height), Style::default().fg(Color::DarkGray)));
    }

    let details = vec![
        Line::from(byline),
        Line::from(Span::styled(
            item.display_description().to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(":Close"),
        ]),
    ];
    f.render_widget(
        Paragraph::new(details).wrap(Wrap { trim: true }),
        chunks[1],
    );

    let full_key = (item.id.clone(), ImageVariant::Full);
    let thumb_key = (item.id.clone(), ImageVariant::Thumbnail);
    let image_area = chunks[0];

    // Fall back to the thumbnail while the full image is on its way
    let is_ready = |state: Option<&ImagePreviewState>| matches!(state, Some(ImagePreviewState::Ready { .. }));
    let full_ready = is_ready(app.image_state_map.get(&full_key));
    let thumb_ready = is_ready(app.image_state_map.get(&thumb_key));
    let key = if thumb_ready && !full_ready { thumb_key } else { full_key };

    let message = match app.image_state_map.get_mut(&key) {
        Some(ImagePreviewState::Ready { protocol, .. }) => {
            f.render_stateful_widget(StatefulImage::default(), image_area, protocol);
            None
        }
        Some(ImagePreviewState::Failed { reason }) => Some(format!("✗ {}", reason)),
        Some(ImagePreviewState::Loading) => Some("Loading…".to_string()),
        None if app.image_picker.is_none() => Some("Image previews are disabled".to_string()),
        None => Some("Loading…".to_string()),
    };

    if let Some(message) = message {
        let line_area = Rect {
            y: image_area.y + image_area.height / 2,
            height: 1.min(image_area.height),
            ..image_area
        };
        f.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            line_area,
        );
    }
}
