use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_3d::{
    board::{Cell, Position},
    game::Game,
    win, SIZE,
};

/// Draws the four layers side by side, floor layer on the left
///
/// Columns are labelled with the one-indexed `x` and `y` used for input.
pub fn display(game: &Game) -> Result<()> {
    let mut stdout = stdout();
    let board = game.board();
    let winning_cells = win::winning_line(board).map(|(_, cells)| cells);

    let mut header = String::new();
    for z in 0..SIZE {
        header.push_str(&format!("   z={}    ", z));
    }
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    let x_labels: String = (1..=SIZE).map(|x| format!("{} ", x)).collect();
    let mut labels = String::new();
    for _ in 0..SIZE {
        labels.push_str(&format!("  {}  ", x_labels));
    }
    stdout.queue(PrintStyledContent(style(labels + "\n")))?;

    for y in 0..SIZE {
        for z in 0..SIZE {
            stdout.queue(PrintStyledContent(style(format!("{} ", y + 1))))?;
            for x in 0..SIZE {
                let position = Position::new(z, y, x);
                let highlighted = winning_cells
                    .map(|cells| cells.contains(&position))
                    .unwrap_or(false);
                let background = if highlighted {
                    Color::DarkGreen
                } else {
                    Color::DarkBlue
                };

                let content = match board.get(position) {
                    Cell::PlayerOne => style("O").with(Color::Red),
                    Cell::PlayerTwo => style("O").with(Color::Yellow),
                    Cell::Empty if board.is_placeable(z, y, x) => style("·").with(Color::White),
                    Cell::Empty => style(" ").with(Color::DarkBlue),
                };
                stdout
                    .queue(PrintStyledContent(
                        content.attribute(Attribute::Bold).on(background),
                    ))?
                    .queue(PrintStyledContent(style(" ").on(background)))?;
            }
            stdout.queue(PrintStyledContent(style("  ")))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
