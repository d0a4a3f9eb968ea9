//! Position scoring

use crate::board::{Axis, Board, GameOutcome, Player};
use crate::{HEIGHT, WIDTH};

/// Score of a realized win for the scoring player
pub const WIN_SCORE: i32 = 1000;
/// Score of a full board with no winner
pub const DRAW_SCORE: i32 = 0;

/// Scores a board from one player's point of view. Higher is better.
pub trait Evaluator: Send {
    /// Estimate for a position without a realized win
    ///
    /// Must stay well inside `(-WIN_SCORE, WIN_SCORE)` so that wins and losses
    /// always outweigh it.
    fn heuristic(&self, board: &Board, perspective: Player) -> i32;

    /// Full score of an arbitrary position
    fn score(&self, board: &Board, perspective: Player) -> i32 {
        match board.winner() {
            Some(winner) => self.terminal_score(GameOutcome::Won(winner), perspective),
            None => self.heuristic(board, perspective),
        }
    }

    /// Score of a position whose last tile was placed at `(column, row)`
    ///
    /// Only that tile can have completed a four, so nothing else is rescanned.
    fn score_after(&self, board: &Board, perspective: Player, column: usize, row: usize) -> i32 {
        if board.is_winning_cell(column, row) {
            if let Some(mover) = board.get(column, row).and_then(|cell| cell.player()) {
                return self.terminal_score(GameOutcome::Won(mover), perspective);
            }
        }
        self.heuristic(board, perspective)
    }

    /// Score of a finished game
    fn terminal_score(&self, outcome: GameOutcome, perspective: Player) -> i32 {
        match outcome {
            GameOutcome::Won(winner) if winner == perspective => WIN_SCORE,
            GameOutcome::Won(_) => -WIN_SCORE,
            GameOutcome::Drawn | GameOutcome::Ongoing => DRAW_SCORE,
        }
    }
}

/// Rewards tiles that sit next to tiles of the same colour
///
/// Every tile contributes the length of its same-colour runs along all four
/// axes; the opponent's total is subtracted.
#[derive(Copy, Clone, Debug, Default)]
pub struct RunLengthEvaluator;

impl RunLengthEvaluator {
    /// Sum of the four axis runs of one tile
    pub fn adjacency(board: &Board, column: usize, row: usize) -> i32 {
        Axis::ALL
            .iter()
            .map(|&axis| board.axis_run(column, row, axis) as i32)
            .sum()
    }
}

impl Evaluator for RunLengthEvaluator {
    fn heuristic(&self, board: &Board, perspective: Player) -> i32 {
        let own = perspective.to_cell();
        let mut score = 0;
        for column in 0..WIDTH {
            for row in 0..board.height(column).min(HEIGHT) {
                let adjacency = Self::adjacency(board, column, row);
                if board.get(column, row) == Some(own) {
                    score += adjacency;
                } else {
                    score -= adjacency;
                }
            }
        }
        score
    }
}
