//! The sliding square region that counts for play and win detection.

use super::types::{Position, WindowShift};
use serde::{Deserialize, Serialize};

/// Active window: a `size`×`size` sub-region identified by its top-left corner.
///
/// A window built through [`ActiveWindow::centered`] or
/// [`ActiveWindow::shifted`] always lies fully inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveWindow {
    origin: Position,
    size: usize,
}

impl ActiveWindow {
    /// Creates a window at `origin` without bounds checking.
    pub const fn new(origin: Position, size: usize) -> Self {
        Self { origin, size }
    }

    /// Creates a window centred on a board of `board_size`.
    pub fn centered(board_size: usize, size: usize) -> Self {
        let offset = board_size.saturating_sub(size) / 2;
        Self::new(Position::new(offset, offset), size)
    }

    /// Top-left corner on the board.
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Side length of the window.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the window lies fully on a board of `board_size`.
    pub fn fits(&self, board_size: usize) -> bool {
        self.origin.x + self.size <= board_size && self.origin.y + self.size <= board_size
    }

    /// Returns true if `pos` is inside the window.
    pub fn contains(&self, pos: Position) -> bool {
        (self.origin.x..self.origin.x + self.size).contains(&pos.x)
            && (self.origin.y..self.origin.y + self.size).contains(&pos.y)
    }

    /// Board position of the cell at window-relative `(col, row)`.
    pub fn cell(&self, col: usize, row: usize) -> Position {
        Position::new(self.origin.x + col, self.origin.y + row)
    }

    /// All cells in the window, rows top to bottom, columns left to right.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| self.cell(col, row)))
    }

    /// The window translated by `shift`, or `None` if it would leave the board.
    pub fn shifted(&self, shift: WindowShift, board_size: usize) -> Option<Self> {
        let (dx, dy) = shift.delta();
        let x = self.origin.x.checked_add_signed(dx)?;
        let y = self.origin.y.checked_add_signed(dy)?;
        let moved = Self::new(Position::new(x, y), self.size);
        moved.fits(board_size).then_some(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_on_reference_board() {
        let window = ActiveWindow::centered(5, 3);
        assert_eq!(window.origin(), Position::new(1, 1));
        assert!(window.fits(5));
    }

    #[test]
    fn test_contains_is_inclusive_of_far_edge() {
        let window = ActiveWindow::centered(5, 3);
        assert!(window.contains(Position::new(3, 3)));
        assert!(window.contains(Position::new(1, 3)));
        assert!(!window.contains(Position::new(0, 1)));
        assert!(!window.contains(Position::new(4, 2)));
    }

    #[test]
    fn test_cells_are_row_major() {
        let window = ActiveWindow::new(Position::new(2, 0), 3);
        let cells: Vec<_> = window.cells().take(4).collect();
        assert_eq!(
            cells,
            vec![
                Position::new(2, 0),
                Position::new(3, 0),
                Position::new(4, 0),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_shift_stays_on_board() {
        let corner = ActiveWindow::new(Position::new(0, 0), 3);
        assert_eq!(corner.shifted(WindowShift::Left, 5), None);
        assert_eq!(corner.shifted(WindowShift::UpRight, 5), None);
        assert_eq!(
            corner.shifted(WindowShift::DownRight, 5).map(|w| w.origin()),
            Some(Position::new(1, 1))
        );

        let far = ActiveWindow::new(Position::new(2, 2), 3);
        assert_eq!(far.shifted(WindowShift::Right, 5), None);
        assert_eq!(far.shifted(WindowShift::Down, 5), None);
    }
}
