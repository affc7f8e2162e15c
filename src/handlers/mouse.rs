//! Mouse Input Handler
//!
//! Wheel events scroll the gallery; left clicks are resolved against the
//! hit map recorded by the last rendered frame.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::ui::layout::HitTarget;
use crate::App;

/// Rows scrolled per wheel notch
const WHEEL_SCROLL: i32 = 3;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_gallery(WHEEL_SCROLL),
        MouseEventKind::ScrollUp => app.scroll_gallery(-WHEEL_SCROLL),
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, mouse.column, mouse.row),
        _ => {}
    }
}

fn handle_click(app: &mut App, column: u16, row: u16) {
    // The modal covers the gallery; any click dismisses it
    if app.model.modal.is_open() {
        app.close_modal();
        return;
    }

    match app.hit_map.hit(column, row) {
        Some(HitTarget::Card(index)) => app.open_image_at(index),
        Some(HitTarget::LoadMore) => app.load_more(),
        Some(HitTarget::ScrollTop) => app.scroll_to_top(),
        Some(HitTarget::Search) => app.model.search.focus(),
        None => {
            if app.model.search.editing {
                app.model.search.cancel();
            }
        }
    }
}
