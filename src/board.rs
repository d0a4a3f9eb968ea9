//! The game board: a flat grid of cells filled from the bottom up

use std::fmt;

use crate::error::GameError;
use crate::{CONNECT, HEIGHT, WIDTH};

/// One of the two sides
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// The opposing side
    pub fn other(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// The side to move after `turns` moves have been played
    pub fn for_turn(turns: usize) -> Self {
        if turns % 2 == 0 {
            Player::PlayerOne
        } else {
            Player::PlayerTwo
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }

    /// 1-based seat number, for display
    pub fn number(self) -> usize {
        match self {
            Player::PlayerOne => 1,
            Player::PlayerTwo => 2,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player occupying this cell, if any
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::PlayerOne),
            Cell::PlayerTwo => Some(Player::PlayerTwo),
            Cell::Empty => None,
        }
    }
}

/// The state of the game after a move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameOutcome {
    Ongoing,
    Won(Player),
    Drawn,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

/// The four lines a run of tiles can lie along
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// bottom-left to top-right
    DiagonalUp,
    /// top-left to bottom-right
    DiagonalDown,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalUp,
        Axis::DiagonalDown,
    ];

    /// Column and row step of the positive direction along this axis
    fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::DiagonalUp => (1, 1),
            Axis::DiagonalDown => (1, -1),
        }
    }
}

/// A Connect 4 board
///
/// Cells are stored left-to-right, bottom-to-top, so row 0 is the bottom row.
/// Every column is filled as a contiguous stack from row 0, and [`Board::drop`]
/// is the only way to add a tile.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT],
    heights: [usize; WIDTH],
    num_moves: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
            num_moves: 0,
        }
    }

    /// Builds a position from a string of 1-indexed column digits, alternating
    /// players starting with player one
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, GameError> {
        let mut board = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    let (_, outcome) = board.drop(column - 1, board.side_to_move())?;
                    // abort if the position is won at any point
                    if let GameOutcome::Won(_) = outcome {
                        return Err(GameError::GameOver);
                    }
                }
                _ => {
                    return Err(GameError::InvalidMoveString {
                        character: column_char,
                    })
                }
            }
        }
        Ok(board)
    }

    /// Empties the board in place
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; WIDTH * HEIGHT];
        self.heights = [0; WIDTH];
        self.num_moves = 0;
    }

    /// The cell at `(column, row)`, or `None` outside the board
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        if column < WIDTH && row < HEIGHT {
            Some(self.cells[column + WIDTH * row])
        } else {
            None
        }
    }

    /// Number of tiles in a column
    pub fn height(&self, column: usize) -> usize {
        self.heights.get(column).copied().unwrap_or(0)
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// Whose turn it is, assuming strictly alternating play from an empty board
    pub fn side_to_move(&self) -> Player {
        Player::for_turn(self.num_moves)
    }

    /// Columns outside the board are never playable, so they report full
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= WIDTH || self.heights[column] >= HEIGHT
    }

    pub fn is_board_full(&self) -> bool {
        self.num_moves == WIDTH * HEIGHT
    }

    /// Playable columns in ascending order
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| !self.is_column_full(column))
    }

    /// Drops a tile for `player` into `column`
    ///
    /// Returns the row the tile landed in and the outcome decided by that tile.
    /// On error the board is left untouched.
    pub fn drop(&mut self, column: usize, player: Player) -> Result<(usize, GameOutcome), GameError> {
        if column >= WIDTH {
            return Err(GameError::InvalidColumn { column });
        }
        if self.is_column_full(column) {
            return Err(GameError::ColumnFull { column });
        }

        let row = self.heights[column];
        self.cells[column + WIDTH * row] = player.to_cell();
        self.heights[column] += 1;
        self.num_moves += 1;

        let outcome = if self.is_winning_cell(column, row) {
            GameOutcome::Won(player)
        } else if self.is_board_full() {
            GameOutcome::Drawn
        } else {
            GameOutcome::Ongoing
        };
        Ok((row, outcome))
    }

    /// Counts tiles matching the one at `(column, row)` along `axis` in both
    /// directions, not counting the tile itself
    ///
    /// Empty or out-of-range cells have no run.
    pub fn axis_run(&self, column: usize, row: usize, axis: Axis) -> usize {
        let cell = match self.get(column, row) {
            Some(cell) if !cell.is_empty() => cell,
            _ => return 0,
        };
        let (dx, dy) = axis.step();
        self.count_direction(column, row, dx, dy, cell)
            + self.count_direction(column, row, -dx, -dy, cell)
    }

    fn count_direction(&self, column: usize, row: usize, dx: isize, dy: isize, cell: Cell) -> usize {
        let mut run = 0;
        let mut x = column as isize + dx;
        let mut y = row as isize + dy;
        // a run longer than CONNECT - 1 already decides the game
        while run < CONNECT
            && x >= 0
            && x < WIDTH as isize
            && y >= 0
            && y < HEIGHT as isize
            && self.cells[x as usize + WIDTH * y as usize] == cell
        {
            run += 1;
            x += dx;
            y += dy;
        }
        run
    }

    /// Whether the tile at `(column, row)` is part of an alignment of four
    pub fn is_winning_cell(&self, column: usize, row: usize) -> bool {
        match self.get(column, row) {
            Some(cell) if !cell.is_empty() => Axis::ALL
                .iter()
                .any(|&axis| self.axis_run(column, row, axis) + 1 >= CONNECT),
            _ => false,
        }
    }

    /// Scans the whole board for an alignment of four
    ///
    /// `drop` only ever checks the tile it placed, this is for positions of
    /// unknown history.
    pub fn winner(&self) -> Option<Player> {
        for column in 0..WIDTH {
            for row in 0..self.heights[column] {
                if self.is_winning_cell(column, row) {
                    return self.cells[column + WIDTH * row].player();
                }
            }
        }
        None
    }

    /// The board reflected left to right
    pub fn mirrored(&self) -> Self {
        let mut mirror = *self;
        for column in 0..WIDTH {
            let source = WIDTH - 1 - column;
            mirror.heights[column] = self.heights[source];
            for row in 0..HEIGHT {
                mirror.cells[column + WIDTH * row] = self.cells[source + WIDTH * row];
            }
        }
        mirror
    }

    /// The board with every tile handed to the other player
    pub fn with_players_swapped(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut() {
            if let Some(player) = cell.player() {
                *cell = player.other().to_cell();
            }
        }
        swapped
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            for column in 0..WIDTH {
                let symbol = match self.cells[column + WIDTH * row] {
                    Cell::PlayerOne => 'X',
                    Cell::PlayerTwo => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
