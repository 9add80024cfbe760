//! Win detection restricted to the active window.

use super::super::{ActiveWindow, Board, Player, Position};
use tracing::instrument;

/// Every line of the window: rows top to bottom, columns left to right,
/// then the main and anti diagonals.
pub fn window_lines(window: &ActiveWindow) -> Vec<Vec<Position>> {
    let n = window.size();
    let mut lines = Vec::with_capacity(2 * n + 2);
    for row in 0..n {
        lines.push((0..n).map(|col| window.cell(col, row)).collect());
    }
    for col in 0..n {
        lines.push((0..n).map(|row| window.cell(col, row)).collect());
    }
    lines.push((0..n).map(|i| window.cell(i, i)).collect());
    lines.push((0..n).map(|i| window.cell(n - 1 - i, i)).collect());
    lines
}

/// Returns true if `player` fills any line of the window.
///
/// Pieces outside the window never count.
#[instrument(skip(board))]
pub fn has_line(board: &Board, window: &ActiveWindow, player: Player) -> bool {
    window_lines(window)
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Some(player)))
}

/// Returns the first completed line in the window and its owner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, window: &ActiveWindow) -> Option<(Player, Vec<Position>)> {
    window_lines(window).into_iter().find_map(|line| {
        let owner = board.get(*line.first()?)?;
        line.iter()
            .all(|&pos| board.get(pos) == Some(owner))
            .then_some((owner, line))
    })
}

/// Decides the winner after `mover` has played.
///
/// Any completed line inside the window ends the game in the mover's
/// favour, even one of the opponent's exposed by a window shift.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, window: &ActiveWindow, mover: Player) -> Option<Player> {
    winning_line(board, window).map(|_| mover)
}
