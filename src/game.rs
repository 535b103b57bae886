//! A game session: the real board, whose turn it is and how the game stands

use anyhow::{anyhow, Result};
use log::info;

use crate::board::{Board, Player, Position};
use crate::solver::Solver;
use crate::SIZE;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    pub state: GameState,
    // every placement made so far, in order
    history: Vec<Position>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            state: GameState::Playing,
            history: Vec::new(),
        }
    }

    /// Starts a game from a move string (see [`Board::from_moves`])
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut game = Self::new();
        let digits: Vec<char> = moves.as_ref().chars().collect();

        for pair in digits.chunks(2) {
            let column = match pair {
                [x, y] => x.to_digit(10).zip(y.to_digit(10)),
                _ => None,
            };
            match column {
                Some((x, y)) => {
                    game.play_column_checked(x as usize, y as usize)?;
                }
                None => {
                    return Err(anyhow!(
                        "could not parse '{}' as a valid move",
                        pair.iter().collect::<String>()
                    ))
                }
            }
        }
        Ok(game)
    }

    /// Clears the board and gives the first move back to `Player::One`
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the current player's piece at `position` after validating it
    pub fn play_checked(&mut self, position: Position) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        if !position.in_bounds() {
            return Err(anyhow!(
                "Invalid move, cell {} out of range. Coordinates must be between 0 and {}",
                position,
                SIZE - 1
            ));
        }
        if !self.board.get(position).is_empty() {
            return Err(anyhow!("Invalid move, cell {} occupied", position));
        }
        if !self.board.is_placeable(position.z, position.y, position.x) {
            return Err(anyhow!(
                "Invalid move, cell {} has nothing beneath it",
                position
            ));
        }

        self.commit(position);
        Ok(self.state)
    }

    /// Drops the current player's piece into a column, `x` and `y` one-indexed
    pub fn play_column_checked(&mut self, x: usize, y: usize) -> Result<GameState> {
        if x < 1 || x > SIZE || y < 1 || y > SIZE {
            return Err(anyhow!(
                "Invalid move, column ({}, {}) out of range. Columns must be between 1 and {}",
                x,
                y,
                SIZE
            ));
        }
        let z = self
            .board
            .drop_height(y - 1, x - 1)
            .ok_or_else(|| anyhow!("Invalid move, column ({}, {}) full", x, y))?;
        self.play_checked(Position::new(z, y - 1, x - 1))
    }

    /// Lets the solver choose and play a move for the current player
    ///
    /// Returns the search score and the move played, or `None` if the solver
    /// found nothing to play.
    pub fn play_ai(&mut self, solver: &mut Solver) -> Result<Option<(i32, Position)>> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        let (score, best_move) = solver.best_move(&self.board, self.to_move);
        let position = match best_move {
            Some(position) => position,
            None => return Ok(None),
        };
        // the search result is checked again before it touches the real board
        if !self.board.is_placeable(position.z, position.y, position.x) {
            return Err(anyhow!("Solver chose unplaceable cell {}", position));
        }
        self.commit(position);
        Ok(Some((score, position)))
    }

    fn commit(&mut self, position: Position) {
        let player = self.to_move;
        self.board = self.board.place(position, player);
        self.history.push(position);

        self.state = match self.board.winner() {
            Some(winner) => GameState::Won(winner),
            None if self.board.is_full() => GameState::Draw,
            None => GameState::Playing,
        };
        self.to_move = player.other();

        info!(
            "player {} played {}, state {:?}",
            player.number(),
            position,
            self.state
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
