//! Layout calculation logic
//!
//! Pure functions for laying out the gallery grid: how many columns fit,
//! where each card sits, and how tall the whole grid is.

/// Narrowest a card may get before a column is dropped
pub const MIN_CARD_WIDTH: u16 = 28;

/// Rendered height of one gallery card (borders + thumbnail + caption)
pub const CARD_HEIGHT: u16 = 14;

/// Geometry of the gallery grid for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub columns: usize,
    pub card_width: u16,
    pub card_height: u16,
}

/// Calculate grid geometry for the available width
///
/// # Examples
/// ```
/// use imgsearch::logic::layout::{grid_geometry, CARD_HEIGHT};
///
/// let grid = grid_geometry(120);
/// assert_eq!(grid.columns, 4);
/// assert_eq!(grid.card_width, 30);
/// assert_eq!(grid.card_height, CARD_HEIGHT);
///
/// // Always at least one column, even on tiny terminals
/// assert_eq!(grid_geometry(10).columns, 1);
/// ```
pub fn grid_geometry(width: u16) -> GridGeometry {
    let columns = (width / MIN_CARD_WIDTH).max(1) as usize;
    let card_width = width / columns as u16;

    GridGeometry {
        columns,
        card_width,
        card_height: CARD_HEIGHT,
    }
}

impl GridGeometry {
    /// Row index of the item at `index`
    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    /// Column index of the item at `index`
    pub fn column_of(&self, index: usize) -> usize {
        index % self.columns
    }

    /// Number of rows needed for `item_count` items
    pub fn rows(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.columns)
    }

    /// Top edge of the item at `index`, in content coordinates
    pub fn item_top(&self, index: usize) -> u16 {
        (self.row_of(index) as u16).saturating_mul(self.card_height)
    }

    /// Total height of the grid in rows of terminal cells
    pub fn content_height(&self, item_count: usize) -> u16 {
        (self.rows(item_count) as u16).saturating_mul(self.card_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_geometry_narrow() {
        let grid = grid_geometry(55);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.card_width, 55);
    }

    #[test]
    fn test_grid_geometry_exact_fit() {
        let grid = grid_geometry(56);
        assert_eq!(grid.columns, 2);
        assert_eq!(grid.card_width, 28);
    }

    #[test]
    fn test_rows_and_positions() {
        let grid = grid_geometry(84); // 3 columns
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.rows(0), 0);
        assert_eq!(grid.rows(3), 1);
        assert_eq!(grid.rows(4), 2);
        assert_eq!(grid.row_of(4), 1);
        assert_eq!(grid.column_of(4), 1);
        assert_eq!(grid.item_top(4), CARD_HEIGHT);
        assert_eq!(grid.content_height(7), CARD_HEIGHT * 3);
    }
}
