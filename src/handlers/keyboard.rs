//! Keyboard Input Handler
//!
//! Handles all keyboard input. Keys are routed by focus: the modal first,
//! then the search box while it is being edited, then the gallery.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use imgsearch::logic::navigation::Move;

use crate::App;

/// Rows scrolled by a single arrow press while the gallery has no selection
const LINE_SCROLL: i32 = 3;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.modal.is_open() {
        handle_modal_key(app, key);
    } else if app.model.search.editing {
        handle_search_key(app, key);
    } else {
        handle_gallery_key(app, key);
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char(' ') => {
            app.close_modal();
        }
        // Everything else is swallowed; the gallery underneath is locked
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Esc => app.model.search.cancel(),
        KeyCode::Backspace => app.model.search.backspace(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.search.clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.search.insert_char(c);
        }
        _ => {}
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('/') | KeyCode::Char('s') => app.model.search.focus(),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_selected_image(),
        KeyCode::Char('m') => app.load_more(),
        KeyCode::Char('t') | KeyCode::Home => app.scroll_to_top(),

        KeyCode::Left => move_or_scroll(app, Move::Left),
        KeyCode::Right => move_or_scroll(app, Move::Right),
        KeyCode::Up => move_or_scroll(app, Move::Up),
        KeyCode::Down => move_or_scroll(app, Move::Down),
        KeyCode::Char('h') if vim_mode => move_or_scroll(app, Move::Left),
        KeyCode::Char('l') if vim_mode => move_or_scroll(app, Move::Right),
        KeyCode::Char('k') if vim_mode => move_or_scroll(app, Move::Up),
        KeyCode::Char('j') if vim_mode => move_or_scroll(app, Move::Down),
        KeyCode::Char('g') if vim_mode => app.move_selection(Move::First),
        KeyCode::Char('G') if vim_mode => app.move_selection(Move::Last),
        KeyCode::End => app.move_selection(Move::Last),

        KeyCode::PageDown => app.scroll_gallery_page(true),
        KeyCode::PageUp => app.scroll_gallery_page(false),
        KeyCode::Char('d') if vim_mode && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_gallery_page(true);
        }
        KeyCode::Char('u') if vim_mode && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_gallery_page(false);
        }
        _ => {}
    }
}

/// Move the selection, or just scroll when there is nothing to select
fn move_or_scroll(app: &mut App, direction: Move) {
    if !app.model.gallery.images().is_empty() {
        app.move_selection(direction);
        return;
    }

    match direction {
        Move::Up => app.scroll_gallery(-LINE_SCROLL),
        Move::Down => app.scroll_gallery(LINE_SCROLL),
        _ => {}
    }
}
