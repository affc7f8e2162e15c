//! Scroll calculation logic
//!
//! Pure functions for the gallery viewport: auto-scroll distance after a page
//! is appended, offset clamping, and keeping the selected card in view.

/// Factor applied to the last card's rendered height when auto-scrolling
pub const AUTO_SCROLL_FACTOR: f32 = 1.9;

/// Distance to scroll after a new page has been appended
///
/// # Examples
/// ```
/// use imgsearch::logic::scroll::auto_scroll_distance;
///
/// assert_eq!(auto_scroll_distance(10), 19);
/// assert_eq!(auto_scroll_distance(12), 23); // 22.8 rounds up
/// assert_eq!(auto_scroll_distance(0), 0);
/// ```
pub fn auto_scroll_distance(item_height: u16) -> u16 {
    (item_height as f32 * AUTO_SCROLL_FACTOR).round() as u16
}

/// Largest offset that still fills the viewport
///
/// # Examples
/// ```
/// use imgsearch::logic::scroll::max_scroll_offset;
///
/// assert_eq!(max_scroll_offset(100, 30), 70);
/// assert_eq!(max_scroll_offset(20, 30), 0);
/// ```
pub fn max_scroll_offset(content_height: u16, viewport_height: u16) -> u16 {
    content_height.saturating_sub(viewport_height)
}

/// Apply a signed delta to an offset, clamped to `0..=max`
pub fn scroll_by(offset: u16, delta: i32, max: u16) -> u16 {
    let next = (offset as i32 + delta).clamp(0, max as i32);
    next as u16
}

/// Smallest change to `offset` that makes the item fully visible
///
/// Items taller than the viewport are aligned to the top.
///
/// # Examples
/// ```
/// use imgsearch::logic::scroll::ensure_visible;
///
/// // Already visible
/// assert_eq!(ensure_visible(0, 30, 10, 10), 0);
/// // Below the viewport: scroll down until its bottom edge is visible
/// assert_eq!(ensure_visible(0, 30, 40, 10), 20);
/// // Above the viewport: scroll up to its top edge
/// assert_eq!(ensure_visible(25, 30, 10, 10), 10);
/// ```
pub fn ensure_visible(offset: u16, viewport_height: u16, item_top: u16, item_height: u16) -> u16 {
    let item_bottom = item_top.saturating_add(item_height);
    let view_bottom = offset.saturating_add(viewport_height);

    if item_top < offset || item_height >= viewport_height {
        item_top
    } else if item_bottom > view_bottom {
        item_bottom - viewport_height
    } else {
        offset
    }
}
