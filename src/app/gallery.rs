//! Gallery navigation methods
//!
//! Keyboard selection, the modal, and viewport scrolling. Selection moves
//! keep the selected card inside the viewport.

use crate::App;
use imgsearch::api::ImageVariant;
use imgsearch::logic::navigation::{self, Move};
use imgsearch::logic::scroll;

impl App {
    /// Move the gallery selection and scroll it into view
    pub(crate) fn move_selection(&mut self, direction: Move) {
        let len = self.model.gallery.images().len();
        let columns = self.grid.map_or(1, |grid| grid.columns);

        let next = navigation::move_selection(self.model.gallery.selected_index, len, columns, direction);
        self.model.gallery.selected_index = next;

        if let Some(index) = next {
            self.scroll_selection_into_view(index);
        }
    }

    fn scroll_selection_into_view(&mut self, index: usize) {
        let Some(grid) = self.grid else {
            return;
        };

        let state = &mut self.model.scroll;
        let offset = scroll::ensure_visible(
            state.offset,
            state.viewport_height,
            grid.item_top(index),
            grid.card_height,
        );
        state.offset = offset.min(state.max_offset);
    }

    /// Open the modal on the selected card and fetch its full-size image
    pub(crate) fn open_selected_image(&mut self) {
        if self.model.open_selected() {
            self.request_modal_image();
        }
    }

    /// Open the modal on the card at `index` (mouse click)
    pub(crate) fn open_image_at(&mut self, index: usize) {
        if self.model.open_modal(index) {
            self.request_modal_image();
        }
    }

    fn request_modal_image(&mut self) {
        if let Some(item) = self.model.modal.selected().cloned() {
            tracing::debug!(item_id = %item.id, "opening image");
            self.request_image(&item, ImageVariant::Full);
        }
    }

    pub(crate) fn close_modal(&mut self) {
        self.model.close_modal();
    }

    /// Scroll the gallery by `delta` rows; ignored while the modal locks scrolling
    pub(crate) fn scroll_gallery(&mut self, delta: i32) {
        if self.model.modal.scroll_locked() {
            return;
        }
        self.model.scroll.scroll_by(delta);
    }

    /// Scroll by one viewport height
    pub(crate) fn scroll_gallery_page(&mut self, down: bool) {
        let page = self.model.scroll.viewport_height.max(1) as i32;
        self.scroll_gallery(if down { page } else { -page });
    }

    pub(crate) fn scroll_to_top(&mut self) {
        if self.model.scroll_to_top() && !self.model.gallery.images().is_empty() {
            self.model.gallery.selected_index = Some(0);
        }
    }
}
