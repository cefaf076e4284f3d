use crate::logic::board::Board;
use crate::logic::rules;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub mod search;


/// Strength of the computer opponent, chosen by the UI and read fresh
/// on every selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform random move.
    Easy,
    /// Coin flip per move between Hard and Easy.
    Medium,
    /// Exhaustive minimax, never loses.
    Hard,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions evaluated while scoring the selection.
    pub nodes: u32,
    /// Game-tree value of the chosen move from the computer's side:
    /// positive is a forced computer win, zero a draw with best play.
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// Selection was requested on a full or otherwise terminal board.
    NoMoveAvailable,
}

/// Seam between the game loop and the computer opponent.
pub trait MoveSelector {
    /// Picks the computer's next cell on a live board.
    fn select_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
    ) -> Result<(usize, SearchStats), SelectError>;
}

/// The stock selector: exhaustive minimax blended with an injected
/// randomness source according to the difficulty.
///
/// The generator is a type parameter so tests can drive Easy and
/// Medium with a deterministic sequence instead of entropy.
#[derive(Debug, Clone)]
pub struct MinimaxEngine<R: Rng> {
    rng: R,
}

impl MinimaxEngine<StdRng> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MinimaxEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MinimaxEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSelector for MinimaxEngine<R> {
    fn select_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
    ) -> Result<(usize, SearchStats), SelectError> {
        if rules::evaluate(board).is_terminal() {
            return Err(SelectError::NoMoveAvailable);
        }

        let pick = match difficulty {
            Difficulty::Hard => search::best_move(board),
            Difficulty::Easy => search::random_move(board, &mut self.rng),
            // The original flips this coin on every move, not once per
            // game; a Medium opponent may alternate styles mid-game.
            Difficulty::Medium => {
                if self.rng.gen_bool(0.5) {
                    search::best_move(board)
                } else {
                    search::random_move(board, &mut self.rng)
                }
            }
        };

        let (index, stats) = pick.ok_or(SelectError::NoMoveAvailable)?;
        log::debug!(
            "selected cell {} on {:?} ({} nodes, score {})",
            index,
            difficulty,
            stats.nodes,
            stats.score
        );
        Ok((index, stats))
    }
}
