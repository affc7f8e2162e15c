//! Scroll Model
//!
//! Gallery viewport offset plus the one-shot auto-scroll armed after a page
//! is appended. The renderer reports geometry every frame through
//! `set_geometry`, which also clamps the offset.

use crate::logic;

/// Auto-scroll waiting for an image to finish loading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingScroll {
    pub item_id: String,
    pub generation: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ScrollModel {
    /// First visible row of the grid
    pub offset: u16,

    /// Largest valid offset, from the last rendered frame
    pub max_offset: u16,

    /// Rendered height of one card, from the last rendered frame
    pub card_height: u16,

    /// Visible height of the grid, from the last rendered frame
    pub viewport_height: u16,

    pending: Option<PendingScroll>,
}

impl ScrollModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_geometry(&mut self, max_offset: u16, card_height: u16, viewport_height: u16) {
        self.max_offset = max_offset;
        self.card_height = card_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(max_offset);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.offset = logic::scroll::scroll_by(self.offset, delta, self.max_offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.pending = None;
    }

    /// Wait for `item_id` to load, then scroll
    pub fn arm(&mut self, item_id: String, generation: u64) {
        self.pending = Some(PendingScroll { item_id, generation });
    }

    pub fn disarm(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<&PendingScroll> {
        self.pending.as_ref()
    }

    /// Completion signal for an image; fires the pending scroll at most once
    ///
    /// The offset is not clamped here: the page that triggered the scroll may
    /// not have been rendered yet, and the next `set_geometry` clamps anyway.
    pub fn on_image_loaded(&mut self, item_id: &str, generation: u64) -> bool {
        let matches = self
            .pending
            .as_ref()
            .is_some_and(|p| p.item_id == item_id && p.generation == generation);

        if !matches {
            return false;
        }

        self.pending = None;
        let distance = logic::scroll::auto_scroll_distance(self.card_height);
        self.offset = self.offset.saturating_add(distance);
        tracing::debug!(item_id, distance, offset = self.offset, "auto-scroll after page load");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_for_matching_item() {
        let mut scroll = ScrollModel::new();
        scroll.set_geometry(100, 10, 30);
        scroll.arm("last".to_string(), 3);

        assert!(!scroll.on_image_loaded("other", 3));
        assert!(scroll.on_image_loaded("last", 3));
        assert_eq!(scroll.offset, 19);

        assert!(!scroll.on_image_loaded("last", 3));
        assert_eq!(scroll.offset, 19);
    }

    #[test]
    fn test_ignores_old_generation() {
        let mut scroll = ScrollModel::new();
        scroll.set_geometry(100, 10, 30);
        scroll.arm("last".to_string(), 3);
        assert!(!scroll.on_image_loaded("last", 4));
        assert!(scroll.pending().is_some());
    }

    #[test]
    fn test_geometry_clamps_offset() {
        let mut scroll = ScrollModel::new();
        scroll.set_geometry(100, 10, 30);
        scroll.scroll_by(80);
        scroll.set_geometry(40, 10, 30);
        assert_eq!(scroll.offset, 40);
    }

    #[test]
    fn test_scroll_to_top_disarms() {
        let mut scroll = ScrollModel::new();
        scroll.set_geometry(100, 10, 30);
        scroll.scroll_by(50);
        scroll.arm("x".to_string(), 1);

        scroll.scroll_to_top();
        assert_eq!(scroll.offset, 0);
        assert!(scroll.pending().is_none());
    }
}
