use crate::logic::board::{Board, Side};
use crate::logic::rules::{self, MoveError, Outcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub index: usize,
    pub side: Side,
}

/// One game of tic-tac-toe, owned by the caller.
///
/// Replaces the mutable globals of a typical UI loop: the hosting UI
/// applies the human's moves, asks the engine for the computer's, and
/// resets the session when a round is acknowledged. Scores live in
/// [`crate::record::ScoreRecord`], never here; resetting a session
/// never touches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub board: Board,
    pub turn: Side,
    pub status: Outcome,
    pub last_move: Option<usize>,
    pub history: Vec<MoveRecord>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Fresh session: empty board, human to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Side::Player,
            status: Outcome::InProgress,
            last_move: None,
            history: Vec::new(),
        }
    }

    /// Applies one move for `side`, which must be the side to move.
    /// On success the status is re-evaluated and, while the game is
    /// live, the turn passes to the other side.
    pub fn apply_move(&mut self, index: usize, side: Side) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if side != self.turn {
            return Err(MoveError::NotYourTurn);
        }

        self.board = rules::apply_move(&self.board, index, side)?;
        self.history.push(MoveRecord { index, side });
        self.last_move = Some(index);
        self.status = rules::evaluate(&self.board);

        if !self.status.is_terminal() {
            self.turn = self.turn.opposite();
        }
        Ok(())
    }

    /// Starts the next round: empty board, human to move, history
    /// cleared. Externally tracked scores are unaffected.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
