//! Exhaustive game-tree search for the 3x3 board.
//!
//! No pruning and no caching: the full tree is at most 9! positions,
//! cut well below that by terminal checks, so brute force is both
//! correct and instant.

use crate::logic::board::{Board, Side, CELL_COUNT};
use crate::logic::rules::{self, Outcome};
use rand::seq::SliceRandom;
use rand::Rng;

use super::SearchStats;

/// Best computer move by minimax, or `None` on a board with no empty
/// cell.
///
/// Wins are scored `10 - depth` and losses `depth - 10`, so a win this
/// turn beats any deeper forced win and a deep loss beats a quick one.
/// Ties keep the lowest cell index.
#[must_use]
pub fn best_move(board: &Board) -> Option<(usize, SearchStats)> {
    let mut scratch = board.clone();
    let mut nodes = 0u32;
    let mut best: Option<(usize, i32)> = None;

    for index in 0..CELL_COUNT {
        if !scratch.is_cell_empty(index) {
            continue;
        }
        scratch.place_quiet(index, Side::Computer);
        let score = minimax(&mut scratch, 0, false, &mut nodes);
        scratch.clear_quiet(index);

        if best.map_or(true, |(_, top)| score > top) {
            best = Some((index, score));
        }
    }

    best.map(|(index, score)| (index, SearchStats { nodes, score }))
}

/// Uniform random pick among the empty cells, for the Easy opponent.
/// The reported score is the minimax value of the picked cell, so
/// callers always see what the pick was worth.
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<(usize, SearchStats)> {
    let open: Vec<usize> = board.empty_cells().collect();
    let index = *open.choose(rng)?;

    let mut scratch = board.clone();
    let mut nodes = 0u32;
    scratch.place_quiet(index, Side::Computer);
    let score = minimax(&mut scratch, 0, false, &mut nodes);

    Some((index, SearchStats { nodes, score }))
}

/// Plain minimax over a scratch board mutated in place and undone on
/// backtrack. `depth` counts plies below the move being scored at the
/// root; the computer maximizes, the human minimizes.
fn minimax(board: &mut Board, depth: i32, maximizing: bool, nodes: &mut u32) -> i32 {
    *nodes += 1;

    match rules::evaluate(board) {
        Outcome::Win(Side::Computer) => return 10 - depth,
        Outcome::Win(Side::Player) => return depth - 10,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    if maximizing {
        let mut best = i32::MIN;
        for index in 0..CELL_COUNT {
            if board.is_cell_empty(index) {
                board.place_quiet(index, Side::Computer);
                best = best.max(minimax(board, depth + 1, false, nodes));
                board.clear_quiet(index);
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in 0..CELL_COUNT {
            if board.is_cell_empty(index) {
                board.place_quiet(index, Side::Player);
                best = best.min(minimax(board, depth + 1, true, nodes));
                board.clear_quiet(index);
            }
        }
        best
    }
}
