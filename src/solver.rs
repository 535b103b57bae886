//! Position evaluation and game tree search

use log::debug;
use rayon::prelude::*;

use crate::board::{Board, Player, Position};
use crate::AI_DEPTH;

/// The score of a position won by the evaluating player
pub const WIN_SCORE: i32 = 10000;

/// Bound used for an open search window
pub const INFINITY: i32 = i32::MAX;

/// Scores a position from `perspective`'s point of view
///
/// Only finished games have a non-zero score: a win is worth `WIN_SCORE`, a loss
/// `-WIN_SCORE`, and anything else (draws and unfinished positions alike) 0.
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    match board.winner() {
        Some(winner) if winner == perspective => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}

/// How many of their own moves a player gets within a search of `depth` plies
///
/// The player to move plays on the odd plies, their opponent on the even ones.
pub fn moves_within_horizon(depth: u32, to_move: bool) -> u32 {
    if to_move {
        (depth + 1) / 2
    } else {
        depth / 2
    }
}

/// A depth-limited minimax agent with alpha-beta pruning
///
/// # Notes
/// Every score in the tree is taken from the AI player's point of view: the AI
/// maximizes on its own plies and the opponent minimizes on theirs. Moves are
/// tried in (z, y, x) order and ties keep the first move found.
#[derive(Clone, Default)]
pub struct Solver {
    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    pub fn new() -> Self {
        Self { node_count: 0 }
    }

    /// Performs game tree search
    ///
    /// Returns the score of the position and the move that achieves it. The move is
    /// `None` only when the position is won, the depth is exhausted or no moves remain.
    pub fn search(
        &mut self,
        board: &Board,
        ai: Player,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Position>) {
        self.node_count += 1;

        if board.winner().is_some() || depth == 0 {
            return (evaluate(board, ai), None);
        }

        let moves = board.moves();
        if moves.is_empty() {
            return (0, None);
        }

        let mut best_move = None;
        if maximizing {
            let mut best_score = -INFINITY;
            for position in moves {
                let next = board.place(position, ai);
                let (score, _) = self.search(&next, ai, depth - 1, alpha, beta, false);
                // strictly better only, so the earliest move wins ties
                if score > best_score {
                    best_score = score;
                    best_move = Some(position);
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            (best_score, best_move)
        } else {
            let mut best_score = INFINITY;
            for position in moves {
                let next = board.place(position, ai.other());
                let (score, _) = self.search(&next, ai, depth - 1, alpha, beta, true);
                if score < best_score {
                    best_score = score;
                    best_move = Some(position);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            (best_score, best_move)
        }
    }

    /// Searches for the AI's move with the full window at the standard depth
    pub fn best_move(&mut self, board: &Board, ai: Player) -> (i32, Option<Position>) {
        let start = self.node_count;
        let (score, best_move) = self.search(board, ai, AI_DEPTH, -INFINITY, INFINITY, true);
        debug!(
            "searched {} nodes for player {}, score {}",
            self.node_count - start,
            ai.number(),
            score
        );
        (score, best_move)
    }

    /// Scores every legal move for `ai` independently, in move order
    ///
    /// Each reply is searched with its own full window, so unlike `search` every
    /// score is exact. The moves are searched in parallel.
    pub fn analyse(&mut self, board: &Board, ai: Player, depth: u32) -> Vec<(Position, i32)> {
        if board.winner().is_some() {
            return Vec::new();
        }
        let moves = board.moves();

        let results: Vec<(Position, i32, usize)> = moves
            .as_slice()
            .par_iter()
            .map(|&position| {
                let mut solver = Solver::new();
                let next = board.place(position, ai);
                let (score, _) = solver.search(
                    &next,
                    ai,
                    depth.saturating_sub(1),
                    -INFINITY,
                    INFINITY,
                    false,
                );
                (position, score, solver.node_count)
            })
            .collect();

        self.node_count += results.iter().map(|&(_, _, nodes)| nodes).sum::<usize>();
        for (position, score, _) in results.iter() {
            debug!("move {} scores {}", position, score);
        }
        results
            .into_iter()
            .map(|(position, score, _)| (position, score))
            .collect()
    }
}
