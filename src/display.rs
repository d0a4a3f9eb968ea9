use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{Board, Cell, HEIGHT, WIDTH};

/// Draws the board below the cursor, column numbers on top
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    // the cursor now sits on the line below the bottom row
    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let cell = board.get(column, row).unwrap_or(Cell::Empty);
            let (pos_x, pos_y) = cell_position((origin_x, origin_y), column, row);

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}

/// Screen position of a cell, given the position of the line below the
/// bottom row. Rows that would sit above the top of the terminal are clipped
/// to the top line.
fn cell_position(origin: (u16, u16), column: usize, row: usize) -> (u16, u16) {
    (
        origin.0 + column as u16,
        origin.1.saturating_sub(1 + row as u16),
    )
}

/// Display name of a seat, matching the colour it is drawn in
pub fn colour_name(cell: Cell) -> &'static str {
    match cell {
        Cell::PlayerOne => "Red",
        Cell::PlayerTwo => "Yellow",
        Cell::Empty => "Empty",
    }
}
