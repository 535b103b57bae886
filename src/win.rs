//! Four-in-a-row detection
//!
//! Every possible line on the board is enumerated at compile time as a bitmask,
//! so checking for a winner is a scan over 76 mask comparisons.

use static_assertions::*;

use crate::board::{Board, Player, Position};
use crate::{CELLS, SIZE};

/// The 13 line directions as `(dx, dy, dz)`
///
/// Only one of each pair of opposite directions is needed, since every cell is
/// tried as the start of a line.
pub const DIRECTIONS: [(i32, i32, i32); 13] = [
    // axes
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
    // face diagonals
    (1, 1, 0),
    (1, 0, 1),
    (0, 1, 1),
    (1, -1, 0),
    (1, 0, -1),
    (0, 1, -1),
    // space diagonals
    (1, 1, 1),
    (1, -1, 1),
    (1, 1, -1),
    (1, -1, -1),
];

/// A line of four cells, identified by its first cell
#[derive(Copy, Clone, Debug)]
pub struct Line {
    pub origin: usize,
    pub mask: u64,
    pub cells: [usize; SIZE],
}

const fn line_end_in_bounds(origin: usize, direction: (i32, i32, i32)) -> bool {
    let position = Position::from_index(origin);
    let reach = (SIZE - 1) as i32;
    let x = position.x as i32 + direction.0 * reach;
    let y = position.y as i32 + direction.1 * reach;
    let z = position.z as i32 + direction.2 * reach;
    x >= 0 && x < SIZE as i32 && y >= 0 && y < SIZE as i32 && z >= 0 && z < SIZE as i32
}

const fn count_lines() -> usize {
    let mut count = 0;
    let mut origin = 0;
    while origin < CELLS {
        let mut d = 0;
        while d < DIRECTIONS.len() {
            if line_end_in_bounds(origin, DIRECTIONS[d]) {
                count += 1;
            }
            d += 1;
        }
        origin += 1;
    }
    count
}

/// The number of distinct lines on the board
pub const LINE_COUNT: usize = count_lines();

const_assert!(LINE_COUNT == 76);

const fn build_lines() -> [Line; LINE_COUNT] {
    let mut lines = [Line {
        origin: 0,
        mask: 0,
        cells: [0; SIZE],
    }; LINE_COUNT];

    let mut i = 0;
    let mut origin = 0;
    // origins in (z, y, x) order, then directions in table order
    while origin < CELLS {
        let mut d = 0;
        while d < DIRECTIONS.len() {
            let direction = DIRECTIONS[d];
            if line_end_in_bounds(origin, direction) {
                let start = Position::from_index(origin);
                let mut cells = [0; SIZE];
                let mut mask = 0;
                let mut step = 0;
                while step < SIZE {
                    let cell = Position::new(
                        (start.z as i32 + direction.2 * step as i32) as usize,
                        (start.y as i32 + direction.1 * step as i32) as usize,
                        (start.x as i32 + direction.0 * step as i32) as usize,
                    );
                    cells[step] = cell.index();
                    mask |= cell.mask();
                    step += 1;
                }
                lines[i] = Line {
                    origin,
                    mask,
                    cells,
                };
                i += 1;
            }
            d += 1;
        }
        origin += 1;
    }
    lines
}

/// Every line on the board, ordered by first cell then by direction
pub static LINES: [Line; LINE_COUNT] = build_lines();

/// Finds the first completed line in scan order along with its owner
pub fn winning_line(board: &Board) -> Option<(Player, [Position; SIZE])> {
    let player_one = board.player_mask(Player::One);
    let player_two = board.player_mask(Player::Two);

    LINES.iter().find_map(|line| {
        let player = if player_one & line.mask == line.mask {
            Player::One
        } else if player_two & line.mask == line.mask {
            Player::Two
        } else {
            return None;
        };
        let mut cells = [Position::new(0, 0, 0); SIZE];
        for (cell, &index) in cells.iter_mut().zip(line.cells.iter()) {
            *cell = Position::from_index(index);
        }
        Some((player, cells))
    })
}

/// Returns the player owning four in a row, or `None` if there is no such line
pub fn check_winner(board: &Board) -> Option<Player> {
    let player_one = board.player_mask(Player::One);
    let player_two = board.player_mask(Player::Two);

    for line in LINES.iter() {
        if player_one & line.mask == line.mask {
            return Some(Player::One);
        }
        if player_two & line.mask == line.mask {
            return Some(Player::Two);
        }
    }
    None
}
