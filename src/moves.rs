//! Legal move enumeration

use crate::board::{Board, Position};
use crate::LAYER;

/// The legal placements of a position, yielded in (z, y, x) order
///
/// Gravity allows at most one placement per column, so the list never holds
/// more than one move per column.
#[derive(Clone, Debug)]
pub struct MoveList {
    size: usize,
    next: usize,
    moves: [Position; LAYER],
}

impl MoveList {
    pub fn new() -> Self {
        Self {
            size: 0,
            next: 0,
            moves: [Position::new(0, 0, 0); LAYER],
        }
    }

    /// Collects the set bits of a placement mask, lowest index first
    ///
    /// The mask must hold at most one cell per column.
    pub(crate) fn from_mask(mut mask: u64) -> Self {
        debug_assert!(mask.count_ones() as usize <= LAYER, "too many placements");
        let mut list = Self::new();
        while mask != 0 {
            list.push(Position::from_index(mask.trailing_zeros() as usize));
            // clear the lowest set bit
            mask &= mask - 1;
        }
        list
    }

    fn push(&mut self, position: Position) {
        self.moves[self.size] = position;
        self.size += 1;
    }

    /// The moves not yet yielded
    pub fn as_slice(&self) -> &[Position] {
        &self.moves[self.next..self.size]
    }

    pub fn len(&self) -> usize {
        self.size - self.next
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for MoveList {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.size {
            None
        } else {
            self.next += 1;
            Some(self.moves[self.next - 1])
        }
    }
}

/// Lists every placeable cell in (z, y, x) order
pub fn enumerate_moves(board: &Board) -> MoveList {
    board.moves()
}
