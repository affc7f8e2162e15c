//! Gallery selection logic
//!
//! Pure functions for moving the selection cursor around the card grid.
//! Movement clamps at the edges instead of wrapping; the grid grows at the
//! bottom as pages load, so wrapping to the top would be surprising.

/// Direction of a selection move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// Calculate the selection after a move
///
/// # Arguments
/// * `current` - Current selection index (None if no selection)
/// * `len` - Number of items in the gallery
/// * `columns` - Number of columns in the grid
/// * `direction` - Requested move
///
/// # Returns
/// * `Some(index)` - New selection
/// * `None` - If the gallery is empty
///
/// # Examples
/// ```
/// use imgsearch::logic::navigation::{move_selection, Move};
///
/// // Empty gallery
/// assert_eq!(move_selection(None, 0, 3, Move::Down), None);
///
/// // No selection yet selects the first item
/// assert_eq!(move_selection(None, 5, 3, Move::Right), Some(0));
///
/// // Down moves one row
/// assert_eq!(move_selection(Some(1), 10, 3, Move::Down), Some(4));
///
/// // Down on the last partial row clamps to the last item
/// assert_eq!(move_selection(Some(5), 7, 3, Move::Down), Some(6));
/// ```
pub fn move_selection(current: Option<usize>, len: usize, columns: usize, direction: Move) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let last = len - 1;
    let columns = columns.max(1);

    let Some(i) = current else {
        return Some(match direction {
            Move::Last => last,
            _ => 0,
        });
    };
    let i = i.min(last);

    Some(match direction {
        Move::Left => i.saturating_sub(1),
        Move::Right => (i + 1).min(last),
        Move::Up => {
            if i >= columns {
                i - columns
            } else {
                i
            }
        }
        Move::Down => {
            if i + columns <= last {
                i + columns
            } else if i / columns < last / columns {
                last
            } else {
                i
            }
        }
        Move::First => 0,
        Move::Last => last,
    })
}
