//! The square grid of cell occupancy.

use super::types::{Player, Position};
use super::window::ActiveWindow;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A write addressed a cell that is not on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Position {} is off the board", pos)]
pub struct OffBoard {
    /// The rejected position.
    pub pos: Position,
}

/// Square board, cells stored in row-major order.
///
/// Out-of-range reads return `None` like an empty cell; writes outside the
/// board are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.y * self.size + pos.x)
    }

    /// Gets the occupant at the given position.
    pub fn get(&self, pos: Position) -> Option<Player> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    /// Sets the occupant at the given position.
    pub fn set(&mut self, pos: Position, occupant: Option<Player>) -> Result<(), OffBoard> {
        let i = self.index(pos).ok_or(OffBoard { pos })?;
        self.cells[i] = occupant;
        Ok(())
    }

    /// Writes a cell the caller has already checked against the window.
    pub(crate) fn put(&mut self, pos: Position, occupant: Option<Player>) {
        debug_assert!(self.contains(pos), "write off the board at {}", pos);
        if let Some(i) = self.index(pos) {
            self.cells[i] = occupant;
        }
    }

    /// Checks if a cell is on the board and unoccupied.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.contains(pos) && self.get(pos).is_none()
    }

    /// Number of occupied cells, both players combined.
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of cells held by `player`.
    pub fn count_of(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| **c == Some(player)).count()
    }

    /// Formats the board as text, bracketing cells inside `window`.
    ///
    /// Empty cells print as `.`; the header row and column carry coordinates.
    pub fn display(&self, window: &ActiveWindow) -> String {
        let mut result = String::from("   ");
        for x in 0..self.size {
            result.push_str(&format!(" {} ", x));
        }
        result.push('\n');
        for y in 0..self.size {
            result.push_str(&format!("{:>2} ", y));
            for x in 0..self.size {
                let pos = Position::new(x, y);
                let symbol = match self.get(pos) {
                    Some(player) => player.to_string(),
                    None => ".".to_string(),
                };
                if window.contains(pos) {
                    result.push_str(&format!("[{}]", symbol));
                } else {
                    result.push_str(&format!(" {} ", symbol));
                }
            }
            if y + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.count_occupied(), 0);
        assert!(board.is_empty(Position::new(4, 4)));
    }

    #[test]
    fn test_set_out_of_bounds_rejected() {
        let mut board = Board::new(5);
        assert_eq!(
            board.set(Position::new(5, 0), Some(Player::X)),
            Err(OffBoard {
                pos: Position::new(5, 0)
            })
        );
        assert!(!board.is_empty(Position::new(5, 0)));
    }

    #[test]
    fn test_put_overwrites_and_clears() {
        let mut board = Board::new(5);
        board.put(Position::new(2, 3), Some(Player::O));
        assert_eq!(board.get(Position::new(2, 3)), Some(Player::O));
        board.put(Position::new(2, 3), None);
        assert!(board.is_empty(Position::new(2, 3)));
    }

    #[test]
    fn test_counts_per_player() {
        let mut board = Board::new(5);
        board.set(Position::new(0, 0), Some(Player::X)).unwrap();
        board.set(Position::new(1, 0), Some(Player::X)).unwrap();
        board.set(Position::new(4, 4), Some(Player::O)).unwrap();
        assert_eq!(board.count_of(Player::X), 2);
        assert_eq!(board.count_of(Player::O), 1);
        assert_eq!(board.count_occupied(), 3);
    }

    #[test]
    fn test_display_marks_window() {
        let mut board = Board::new(5);
        board.set(Position::new(1, 1), Some(Player::O)).unwrap();
        let text = board.display(&ActiveWindow::new(Position::new(1, 1), 3));
        let row_one = text.lines().nth(2).unwrap();
        assert_eq!(row_one, " 1  . [O][.][.] . ");
    }
}
