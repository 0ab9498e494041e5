//! Game state and the operations the host engine drives.

use crate::action::{Move, MoveError};
use crate::codec::{self, StateError};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use tracing::instrument;

/// Engine slot of the human player (X).
pub const HUMAN_PLAYER: usize = 0;
/// Engine slot of the AI player (O). Configuration only; no AI runs
/// in this crate.
pub const AI_PLAYER: usize = 1;

/// Tic-tac-toe game: a board plus turn rotation over two players.
///
/// The status is never cached; win and draw queries are recomputed
/// from board contents on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status, derived from the board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = rules::win::check_winner(&self.board) {
            GameStatus::Won(winner)
        } else if rules::draw::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Places the current player's mark at the given position and
    /// advances the turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game already has an
    /// outcome, or [`MoveError::SquareOccupied`] if the square is
    /// taken. The board is unchanged on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Validates and applies a [`Move`], additionally rejecting a
    /// move made by the player whose turn it is not.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Move) -> Result<(), MoveError> {
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }
        self.place(action.position)
    }

    /// Checks if there's a winner.
    pub fn check_for_winner(&self) -> Option<Player> {
        rules::win::check_winner(&self.board)
    }

    /// Checks if the game is drawn (board full, no winner).
    pub fn check_for_draw(&self) -> bool {
        rules::draw::is_draw(&self.board)
    }

    /// Releases every placed mark and resets the turn to X.
    /// Idempotent.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.board.clear();
        self.to_move = Player::X;
    }

    /// Serializes the board for the engine's save hook.
    pub fn state_string(&self) -> String {
        codec::encode(&self.board)
    }

    /// Restores the board from the engine's restore hook, destroying
    /// any existing marks first. Turn rotation is the caller's
    /// concern, as with the host engine's per-turn records.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] on malformed input; the board is left
    /// untouched in that case.
    #[instrument(skip(self))]
    pub fn set_state_string(&mut self, state: &str) -> Result<(), StateError> {
        self.board = codec::decode(state)?;
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
