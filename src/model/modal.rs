//! Modal Model
//!
//! The single image shown enlarged, if any. `scroll_locked` mirrors the
//! selection and tells the gallery to ignore scrolling while the overlay is
//! up.

use crate::api::ImageItem;

#[derive(Clone, Debug, Default)]
pub struct ModalModel {
    selected: Option<ImageItem>,
    scroll_locked: bool,
}

impl ModalModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, item: ImageItem) {
        self.selected = Some(item);
        self.scroll_locked = true;
    }

    /// Close the modal, returning the item that was shown
    pub fn close(&mut self) -> Option<ImageItem> {
        self.scroll_locked = false;
        self.selected.take()
    }

    pub fn selected(&self) -> Option<&ImageItem> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}
