use anyhow::Result;

use std::fmt;

use crate::{game::Game, moves::MoveList, win, LAYER, SIZE};

pub(crate) mod static_masks {
    use crate::{CELLS, LAYER};

    pub const fn bottom_layer_mask() -> u64 {
        (1 << LAYER) - 1
    }
    pub const fn full_board_mask() -> u64 {
        u64::MAX >> (64 - CELLS)
    }
}

/// The occupancy of a single cell
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
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
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// 1 for the first player, 2 for the second
    pub fn number(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// A cell on the board, `z = 0` being the floor layer
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub z: usize,
    pub y: usize,
    pub x: usize,
}

impl Position {
    pub const fn new(z: usize, y: usize, x: usize) -> Self {
        Self { z, y, x }
    }

    pub const fn in_bounds(&self) -> bool {
        self.z < SIZE && self.y < SIZE && self.x < SIZE
    }

    /// Bit index of this cell in the board masks
    pub const fn index(&self) -> usize {
        // coordinates past the edge would alias a neighbouring cell
        debug_assert!(self.in_bounds(), "position out of range");
        self.z * LAYER + self.y * SIZE + self.x
    }

    pub const fn from_index(index: usize) -> Self {
        Self {
            z: index / LAYER,
            y: (index % LAYER) / SIZE,
            x: index % SIZE,
        }
    }

    pub const fn mask(&self) -> u64 {
        1 << self.index()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.z, self.y, self.x)
    }
}

/// A 4x4x4 board stored as one occupancy mask per player
///
/// Bit `z * 16 + y * 4 + x` is set in a player's mask when they occupy that cell.
/// The board is a plain value: placing a piece returns a new board and leaves
/// the original untouched.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    // mask of player one's pieces
    player_one_mask: u64,
    // mask of player two's pieces
    player_two_mask: u64,
}

impl Board {
    /// Creates a board with all 64 cells empty
    pub fn new() -> Self {
        Self {
            player_one_mask: 0,
            player_two_mask: 0,
        }
    }

    /// Builds a position from a move string
    ///
    /// Each move is two digits, the `x` and then the `y` of the column (both 1-4).
    /// The piece drops to the lowest empty cell of the column and the players
    /// alternate, starting with `Player::One`.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        Ok(*Game::from_moves(moves)?.board())
    }

    pub fn player_mask(&self, player: Player) -> u64 {
        match player {
            Player::One => self.player_one_mask,
            Player::Two => self.player_two_mask,
        }
    }

    /// Mask of all occupied cells
    pub fn board_mask(&self) -> u64 {
        self.player_one_mask | self.player_two_mask
    }

    pub fn get(&self, position: Position) -> Cell {
        let mask = position.mask();
        if self.player_one_mask & mask != 0 {
            Cell::PlayerOne
        } else if self.player_two_mask & mask != 0 {
            Cell::PlayerTwo
        } else {
            Cell::Empty
        }
    }

    /// Whether a piece may be placed at `(z, y, x)`
    ///
    /// The cell must be empty and either on the floor or resting on an occupied cell.
    pub fn is_placeable(&self, z: usize, y: usize, x: usize) -> bool {
        let position = Position::new(z, y, x);
        if !position.in_bounds() || self.board_mask() & position.mask() != 0 {
            return false;
        }
        z == 0 || self.board_mask() & Position::new(z - 1, y, x).mask() != 0
    }

    /// Mask of every cell a piece may currently be placed in
    pub fn possible_moves(&self) -> u64 {
        // a layer shifted up by one supports the cells directly above it
        ((self.board_mask() << LAYER) | static_masks::bottom_layer_mask())
            & !self.board_mask()
            & static_masks::full_board_mask()
    }

    /// Every legal placement in (z, y, x) order
    pub fn moves(&self) -> MoveList {
        MoveList::from_mask(self.possible_moves())
    }

    /// Returns a copy of the board with `player`'s piece at `position`
    ///
    /// The target must be placeable; check with [`Board::is_placeable`] first.
    pub fn place(&self, position: Position, player: Player) -> Self {
        debug_assert!(self.get(position).is_empty(), "cell {} occupied", position);
        let mut next = *self;
        match player {
            Player::One => next.player_one_mask |= position.mask(),
            Player::Two => next.player_two_mask |= position.mask(),
        }
        next
    }

    /// The height a piece dropped into column `(y, x)` lands at, `None` if full
    pub fn drop_height(&self, y: usize, x: usize) -> Option<usize> {
        (0..SIZE).find(|&z| self.is_placeable(z, y, x))
    }

    pub fn winner(&self) -> Option<Player> {
        win::check_winner(self)
    }

    pub fn num_moves(&self) -> usize {
        self.board_mask().count_ones() as usize
    }

    pub fn is_full(&self) -> bool {
        self.board_mask() == static_masks::full_board_mask()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
