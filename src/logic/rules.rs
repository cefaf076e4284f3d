use crate::logic::board::{Board, Side, CELL_COUNT, WIN_LINES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Cell index outside 0-8.
    OutOfBounds,
    /// Target cell already holds a mark; moves never overwrite.
    Occupied,
    /// The game already reached a terminal outcome.
    GameOver,
    /// The given side is not the one to move.
    NotYourTurn,
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Side),
    Draw,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Finds a completed win line, returning the winning side and the
/// matched triple so the UI can highlight it.
///
/// Boards reachable by alternating play hold at most one winning side,
/// so scan order does not matter.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Side, [usize; 3])> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(side) = board.get(a) {
            if board.get(b) == Some(side) && board.get(c) == Some(side) {
                return Some((side, line));
            }
        }
    }
    None
}

/// Pure terminal-state check: a win for either side, a draw on a full
/// board, or still in progress.
#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((side, _)) = winning_line(board) {
        return Outcome::Win(side);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Checks that a move may be played on this board: index in range, cell
/// empty, game still live.
pub fn validate_move(board: &Board, index: usize) -> Result<(), MoveError> {
    if index >= CELL_COUNT {
        return Err(MoveError::OutOfBounds);
    }
    if evaluate(board).is_terminal() {
        return Err(MoveError::GameOver);
    }
    if board.get(index).is_some() {
        return Err(MoveError::Occupied);
    }
    Ok(())
}

/// Validates and applies a move, returning the next board. The input
/// board is never mutated.
pub fn apply_move(board: &Board, index: usize, side: Side) -> Result<Board, MoveError> {
    validate_move(board, index)?;
    let mut next = board.clone();
    next.place_quiet(index, side);
    Ok(next)
}
