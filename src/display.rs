use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_agent::{Board, Cell, HEIGHT, WIDTH};

/// Draws the board as a coloured tile grid, top row first, with 1-based
/// column labels underneath
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.get(row, col) {
                        Cell::Yellow => Color::Yellow,
                        Cell::Red => Color::Red,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    stdout.flush()?;
    Ok(())
}
