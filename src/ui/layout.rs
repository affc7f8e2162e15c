use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Search input at the top
    pub search_area: Rect,
    /// Scrollable card grid
    pub gallery_area: Rect,
    /// Loader, Load more, error line and scroll-to-top
    pub controls_area: Rect,
    /// Hotkey legend
    pub legend_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input (top border, text, bottom border)
            Constraint::Min(3),    // Gallery
            Constraint::Length(3), // Controls bar
            Constraint::Length(1), // Legend
            Constraint::Length(1), // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        search_area: chunks[0],
        gallery_area: chunks[1],
        controls_area: chunks[2],
        legend_area: chunks[3],
        status_area: chunks[4],
    }
}

/// Centered rectangle covering a percentage of `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Something clickable on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Card(usize),
    LoadMore,
    ScrollTop,
    Search,
}

/// Clickable regions recorded while rendering a frame
#[derive(Debug, Default)]
pub struct HitMap {
    cards: Vec<(Rect, usize)>,
    load_more: Option<Rect>,
    scroll_top: Option<Rect>,
    search: Option<Rect>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.load_more = None;
        self.scroll_top = None;
        self.search = None;
    }

    pub fn add_card(&mut self, area: Rect, index: usize) {
        self.cards.push((area, index));
    }

    pub fn set_load_more(&mut self, area: Rect) {
        self.load_more = Some(area);
    }

    pub fn set_scroll_top(&mut self, area: Rect) {
        self.scroll_top = Some(area);
    }

    pub fn set_search(&mut self, area: Rect) {
        self.search = Some(area);
    }

    /// Resolve a click at terminal cell (`column`, `row`)
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let contains = |area: &Rect| {
            column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
        };

        if self.load_more.as_ref().is_some_and(contains) {
            return Some(HitTarget::LoadMore);
        }
        if self.scroll_top.as_ref().is_some_and(contains) {
            return Some(HitTarget::ScrollTop);
        }
        if self.search.as_ref().is_some_and(contains) {
            return Some(HitTarget::Search);
        }

        self.cards
            .iter()
            .find(|(area, _)| contains(area))
            .map(|(_, index)| HitTarget::Card(*index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_terminal() {
        let info = calculate_layout(Rect::new(0, 0, 80, 40));
        assert_eq!(info.search_area.height, 3);
        assert_eq!(info.gallery_area.height, 40 - 3 - 3 - 1 - 1);
        assert_eq!(info.status_area.y, 39);
    }

    #[test]
    fn test_hit_map_resolves_cards_and_buttons() {
        let mut hits = HitMap::default();
        hits.add_card(Rect::new(0, 3, 30, 14), 0);
        hits.add_card(Rect::new(30, 3, 30, 14), 1);
        hits.set_load_more(Rect::new(20, 40, 15, 3));

        assert_eq!(hits.hit(5, 5), Some(HitTarget::Card(0)));
        assert_eq!(hits.hit(30, 16), Some(HitTarget::Card(1)));
        assert_eq!(hits.hit(60, 5), None);
        assert_eq!(hits.hit(25, 41), Some(HitTarget::LoadMore));

        hits.clear();
        assert_eq!(hits.hit(5, 5), None);
    }
}
