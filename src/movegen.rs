//! Legal move enumeration

use std::ops::Deref;

use crate::{board::Board, WIDTH};

/// Returns the columns ordered from the middle outwards, right of centre
/// before left, as the middle columns are often better moves
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) + (i % 2) * (i / 2 + 1) - (1 - i % 2) * (i / 2);
        i += 1;
    }
    move_order
}

/// A fixed-capacity list of columns, small enough to copy on every search node
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveList {
    size: usize,
    moves: [usize; WIDTH],
}

impl MoveList {
    pub fn new() -> Self {
        Self {
            size: 0,
            moves: [0; WIDTH],
        }
    }

    pub fn push(&mut self, column: usize) {
        debug_assert!(self.size < WIDTH, "more moves than columns");
        self.moves[self.size] = column;
        self.size += 1;
    }

    /// The same columns in center-first order
    pub fn center_first(&self) -> Self {
        let mut ordered = Self::new();
        for &column in move_order().iter() {
            if self.contains(&column) {
                ordered.push(column);
            }
        }
        ordered
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for MoveList {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.moves[..self.size]
    }
}

/// Columns that are not full, in ascending order
///
/// An empty list means the board is full; it is up to the caller to treat
/// that as a draw rather than searching it.
pub fn legal_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    for column in board.legal_columns() {
        moves.push(column);
    }
    moves
}
