//! Gallery Grid UI
//!
//! Renders the scrollable card grid. Geometry of every frame is written back
//! to the scroll model and `App::grid`, and card rectangles go into the hit
//! map for mouse clicks.

use imgsearch::api::{ImageItem, ImageVariant};
use imgsearch::logic::{self, layout::GridGeometry};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use crate::{App, ImagePreviewState};

pub fn render_gallery(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let grid = logic::layout::grid_geometry(inner.width);
    let item_count = app.model.gallery.images().len();
    let content_height = grid.content_height(item_count);
    let max_offset = logic::scroll::max_scroll_offset(content_height, inner.height);

    app.grid = Some(grid);
    app.model.scroll.set_geometry(max_offset, grid.card_height, inner.height);

    if item_count == 0 {
        render_empty_hint(f, inner, app);
        return;
    }

    let offset = app.model.scroll.offset;
    let view_bottom = offset.saturating_add(inner.height);
    let selected = app.model.gallery.selected_index;
    let show_images = !app.model.modal.scroll_locked();

    for (index, item) in app.model.gallery.images().iter().enumerate() {
        let top = grid.item_top(index);
        let bottom = top.saturating_add(grid.card_height);
        if bottom <= offset || top >= view_bottom {
            continue;
        }

        let x = inner.x + grid.column_of(index) as u16 * grid.card_width;
        let visible_top = top.max(offset);
        let visible_bottom = bottom.min(view_bottom);
        let card_area = Rect {
            x,
            y: inner.y + (visible_top - offset),
            width: grid.card_width,
            height: visible_bottom - visible_top,
        };
        let fully_visible = top >= offset && bottom <= view_bottom;

        app.hit_map.add_card(card_area, index);

        let preview = if show_images && fully_visible {
            app.image_state_map.get_mut(&(item.id.clone(), ImageVariant::Thumbnail))
        } else {
            None
        };

        render_card(f, card_area, item, selected == Some(index), fully_visible, preview);
    }

    render_scrollbar(f, area, &grid, item_count, offset, max_offset);
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    item: &ImageItem,
    is_selected: bool,
    fully_visible: bool,
    preview: Option<&mut ImagePreviewState>,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let title_width = area.width.saturating_sub(4) as usize;
    let title = logic::formatting::truncate_to_width(item.display_description(), title_width);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", title), border_style));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Clipped cards only get their frame
    if !fully_visible || inner.height < 2 {
        return;
    }

    let image_area = Rect {
        height: inner.height - 1,
        ..inner
    };
    let caption_area = Rect {
        y: inner.y + inner.height - 1,
        height: 1,
        ..inner
    };

    match preview {
        Some(ImagePreviewState::Ready { protocol, .. }) => {
            f.render_stateful_widget(StatefulImage::default(), image_area, protocol);
        }
        Some(ImagePreviewState::Loading) => {
            render_centered(f, image_area, "Loading…", Color::DarkGray);
        }
        Some(ImagePreviewState::Failed { .. }) => {
            render_centered(f, image_area, "✗ image unavailable", Color::Red);
        }
        None => {
            let text = Paragraph::new(item.display_description())
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true });
            f.render_widget(text, image_area.inner(Margin { horizontal: 1, vertical: 1 }));
        }
    }

    let caption = format!("♥ {}  {}", logic::formatting::format_likes(item.likes), item.user.name);
    let caption = logic::formatting::truncate_to_width(&caption, caption_area.width as usize);
    f.render_widget(
        Paragraph::new(caption).style(Style::default().fg(Color::DarkGray)),
        caption_area,
    );
}

fn render_centered(f: &mut Frame, area: Rect, text: &str, color: Color) {
    if area.height == 0 {
        return;
    }
    let line_area = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        line_area,
    );
}

fn render_empty_hint(f: &mut Frame, area: Rect, app: &App) {
    let gallery = &app.model.gallery;

    let hint = if gallery.is_loading() {
        "Searching…"
    } else if gallery.query().is_empty() {
        "Type a query and press Enter to search for images"
    } else if gallery.error_message().is_some() {
        return;
    } else {
        "No images to show"
    };

    render_centered(f, area, hint, Color::DarkGray);
}

fn render_scrollbar(f: &mut Frame, area: Rect, grid: &GridGeometry, item_count: usize, offset: u16, max_offset: u16) {
    if max_offset == 0 || grid.rows(item_count) < 2 {
        return;
    }

    let mut scrollbar_state = ScrollbarState::new(max_offset as usize).position(offset as usize);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("█");

    f.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            horizontal: 0,
            vertical: 1,
        }),
        &mut scrollbar_state,
    );
}
