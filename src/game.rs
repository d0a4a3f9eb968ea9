//! A game session: the board plus whose turn it is, whether the game has
//! ended, and which seats the computer plays

use log::{info, warn};

use crate::board::{Board, GameOutcome, Player};
use crate::error::GameError;
use crate::search::{spawn_best_move, PendingMove, SearchConfig};

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    outcome: GameOutcome,
    // computer control of player one and player two
    ai: [bool; 2],
}

impl Game {
    pub fn new(player_one_ai: bool, player_two_ai: bool) -> Self {
        Self {
            board: Board::new(),
            outcome: GameOutcome::Ongoing,
            ai: [player_one_ai, player_two_ai],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Moves played since the last reset
    pub fn turns(&self) -> usize {
        self.board.num_moves()
    }

    pub fn current_player(&self) -> Player {
        Player::for_turn(self.turns())
    }

    /// Plays `column` for the side to move
    pub fn play(&mut self, column: usize) -> Result<(usize, GameOutcome), GameError> {
        if self.is_over() {
            warn!("move in column {} rejected, the game is over", column);
            return Err(GameError::GameOver);
        }
        let player = self.current_player();
        let (row, outcome) = self.board.drop(column, player).map_err(|err| {
            warn!("move rejected: {}", err);
            err
        })?;

        self.outcome = outcome;
        match outcome {
            GameOutcome::Won(winner) => info!("player {} wins after {} moves", winner.number(), self.turns()),
            GameOutcome::Drawn => info!("game drawn"),
            GameOutcome::Ongoing => {}
        }
        Ok((row, outcome))
    }

    /// Starts a new game with the same seat assignment
    pub fn reset(&mut self) {
        self.board.reset();
        self.outcome = GameOutcome::Ongoing;
        info!("game reset");
    }

    pub fn is_ai(&self, player: Player) -> bool {
        self.ai[Self::seat(player)]
    }

    pub fn set_ai(&mut self, player: Player, enabled: bool) {
        self.ai[Self::seat(player)] = enabled;
    }

    pub fn toggle_ai(&mut self, player: Player) {
        let seat = Self::seat(player);
        self.ai[seat] = !self.ai[seat];
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.is_ai(self.current_player())
    }

    /// Starts searching for the side to move on a snapshot of the board
    ///
    /// The returned column should be passed to [`Game::play`] once the search
    /// completes; no other move may be played in the meantime.
    pub fn request_ai_move(&self, config: SearchConfig) -> Result<PendingMove, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.board.is_board_full() {
            return Err(GameError::NoLegalMoves);
        }
        Ok(spawn_best_move(self.board, self.current_player(), config))
    }

    fn seat(player: Player) -> usize {
        player.number() - 1
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(false, true)
    }
}
