//! Fixed-depth adversarial search for the computer opponent

use log::{debug, trace};

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use crate::board::{Board, GameOutcome, Player};
use crate::config::MAX_DEPTH;
use crate::error::GameError;
use crate::evaluator::{Evaluator, RunLengthEvaluator, WIN_SCORE};
use crate::movegen::legal_moves;

/// Default number of plies to look ahead
pub const DEFAULT_DEPTH: usize = 5;

// never negated into overflow, unlike i32::MIN
const INFINITY: i32 = i32::MAX;

/// Search parameters
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead, including the move being chosen
    pub depth: usize,
    /// Prune with alpha-beta bounds. Chooses the same moves as plain minimax.
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            alpha_beta: true,
        }
    }
}

/// The result of a completed search
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub column: usize,
    /// Backed-up score from the searching player's point of view
    pub score: i32,
    pub node_count: usize,
    pub elapsed: Duration,
}

/// A fixed-depth negamax searcher
///
/// # Position Scoring
/// Non-terminal positions at the depth limit get the evaluator's heuristic.
/// A finished game found with `r` plies of depth left scores `WIN_SCORE + r`
/// for the winner and `-(WIN_SCORE + r)` for the loser, so quicker wins and
/// slower losses are preferred. A draw scores 0.
///
/// # Tie-breaking
/// The root always scans columns in ascending order and keeps the first of
/// equally scored moves, so the chosen move is reproducible and does not
/// depend on whether alpha-beta pruning is enabled.
#[derive(Clone, Debug)]
pub struct Searcher<E = RunLengthEvaluator> {
    config: SearchConfig,
    evaluator: E,

    /// The number of nodes searched by the last search (for diagnostics only)
    pub node_count: usize,
}

impl Searcher<RunLengthEvaluator> {
    /// Creates a `Searcher` with the default evaluator
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, RunLengthEvaluator)
    }
}

impl<E: Evaluator> Searcher<E> {
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            node_count: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Picks the best column for `player`
    ///
    /// The caller's board is never modified. Fails with
    /// [`GameError::NoLegalMoves`] on a full board.
    pub fn best_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        self.search(board, player).map(|report| report.column)
    }

    /// Searches the position and reports the chosen column with its score
    pub fn search(&mut self, board: &Board, player: Player) -> Result<SearchReport, GameError> {
        let start_time = Instant::now();
        self.node_count = 1;

        let moves = legal_moves(board);
        if moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }
        // deeper than the number of cells changes nothing
        let depth = self.config.depth.clamp(1, MAX_DEPTH);

        let mut alpha = -INFINITY;
        let mut best: Option<(i32, usize)> = None;
        for &column in moves.iter() {
            let mut next = *board;
            let (_, outcome) = next.drop(column, player)?;
            // the search window is flipped for the other player
            let score = -self.negamax(&next, player.other(), outcome, depth - 1, -INFINITY, -alpha);
            trace!("column {}: score {}", column, score);

            // strictly better only, so ties go to the lowest column
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, column));
            }
            if self.config.alpha_beta && score > alpha {
                alpha = score;
            }
        }

        let (score, column) = best.ok_or(GameError::NoLegalMoves)?;
        let report = SearchReport {
            column,
            score,
            node_count: self.node_count,
            elapsed: start_time.elapsed(),
        };
        debug!(
            "player {} searched {} nodes to depth {} in {:?}: column {}, score {}",
            player.number(),
            report.node_count,
            depth,
            report.elapsed,
            report.column,
            report.score
        );
        Ok(report)
    }

    /// Scores `board` for `player`, who is to move. `last` is the outcome of
    /// the move that produced the position.
    fn negamax(
        &mut self,
        board: &Board,
        player: Player,
        last: GameOutcome,
        depth: usize,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.node_count += 1;

        if last.is_terminal() {
            let score = self.evaluator.terminal_score(last, player);
            return distance_adjusted(score, depth);
        }
        if depth == 0 {
            return self.evaluator.heuristic(board, player);
        }

        let mut moves = legal_moves(board);
        if self.config.alpha_beta {
            // central columns first makes cutoffs more likely
            moves = moves.center_first();
        }

        let mut best = -INFINITY;
        for &column in moves.iter() {
            let mut next = *board;
            let outcome = match next.drop(column, player) {
                Ok((_, outcome)) => outcome,
                Err(_) => continue,
            };
            let score = -self.negamax(&next, player.other(), outcome, depth - 1, -beta, -alpha);
            if score > best {
                best = score;
            }
            if self.config.alpha_beta {
                if score > alpha {
                    alpha = score;
                }
                // a perfect opponent will not allow this branch
                if alpha >= beta {
                    break;
                }
            }
        }
        best
    }
}

/// Pushes terminal scores further from zero the more depth was left when the
/// game ended
fn distance_adjusted(score: i32, depth: usize) -> i32 {
    if score >= WIN_SCORE {
        score + depth as i32
    } else if score <= -WIN_SCORE {
        score - depth as i32
    } else {
        score
    }
}

/// Picks the best column for `player` with a default searcher of the given depth
pub fn best_move(board: &Board, player: Player, depth: usize) -> Result<usize, GameError> {
    let config = SearchConfig {
        depth,
        ..SearchConfig::default()
    };
    Searcher::new(config).best_move(board, player)
}

/// Starts a search on the rayon thread pool and returns immediately
///
/// The search runs on its own copy of `board`, so the caller is free to keep
/// using (but should not play on) its board until the result is taken.
/// Dropping the returned [`PendingMove`] abandons the result.
pub fn spawn_best_move(board: Board, player: Player, config: SearchConfig) -> PendingMove {
    let (sender, receiver) = channel();
    rayon::spawn(move || {
        let mut searcher = Searcher::new(config);
        // the receiver is gone if the caller abandoned the search
        let _ = sender.send(searcher.search(&board, player));
    });
    PendingMove {
        receiver,
        started: Instant::now(),
    }
}

/// A search running in the background
pub struct PendingMove {
    receiver: Receiver<Result<SearchReport, GameError>>,
    started: Instant,
}

impl PendingMove {
    /// Takes the result if the search has finished, without blocking
    ///
    /// Returns `Some` at most once with the search's own result; later calls
    /// report [`GameError::SearchAborted`].
    pub fn try_take(&self) -> Option<Result<SearchReport, GameError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(GameError::SearchAborted)),
        }
    }

    /// Blocks until the search finishes
    pub fn wait(self) -> Result<SearchReport, GameError> {
        self.receiver
            .recv()
            .map_err(|_| GameError::SearchAborted)?
    }

    /// Time since the search was started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
