//! Seam between the host engine loop and a concrete game module.
//!
//! The engine calls setup once, the placement hook on each click, the
//! outcome queries after each move, and the state-string pair from its
//! save/restore path. Rendering, input mapping, and turn records stay
//! on the engine side.

use crate::codec::{self, StateError};
use crate::game::Game;
use crate::position::Position;
use crate::types::Player;

/// The surface a game module exposes to the host engine.
pub trait GameModule {
    /// Called once before the first turn.
    fn set_up_board(&mut self);

    /// Per-click placement hook. Returns `false` and leaves the board
    /// unchanged when the target is missing, occupied, or the game is
    /// over; the engine treats `false` as "click ignored".
    fn action_for_empty_holder(&mut self, target: Option<Position>) -> bool;

    /// Whether the piece at `src` may be picked up. Placement-only
    /// games answer `false` for every square.
    fn can_piece_move_from(&self, src: Position) -> bool;

    /// Whether the piece at `src` may be dropped on `dst`.
    fn can_piece_move_from_to(&self, src: Position, dst: Position) -> bool;

    /// The winning player, if any line is fully owned.
    fn check_for_winner(&self) -> Option<Player>;

    /// Whether the game is drawn.
    fn check_for_draw(&self) -> bool;

    /// State string of a freshly set-up board.
    fn initial_state_string(&self) -> String {
        codec::INITIAL_STATE.to_string()
    }

    /// Serializes the board for the engine's save path.
    fn state_string(&self) -> String;

    /// Restores the board from a previously saved state string.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] on malformed input.
    fn set_state_string(&mut self, state: &str) -> Result<(), StateError>;

    /// Called once when the game ends; releases every placed piece.
    fn stop_game(&mut self);

    /// AI turn hook. Default is a no-op; this module ships without an
    /// AI opponent.
    fn update_ai(&mut self) {}
}

impl GameModule for Game {
    fn set_up_board(&mut self) {
        self.clear();
    }

    fn action_for_empty_holder(&mut self, target: Option<Position>) -> bool {
        match target {
            Some(pos) => self.place(pos).is_ok(),
            None => false,
        }
    }

    // You can't move anything in tic-tac-toe.
    fn can_piece_move_from(&self, _src: Position) -> bool {
        false
    }

    fn can_piece_move_from_to(&self, _src: Position, _dst: Position) -> bool {
        false
    }

    fn check_for_winner(&self) -> Option<Player> {
        Game::check_for_winner(self)
    }

    fn check_for_draw(&self) -> bool {
        Game::check_for_draw(self)
    }

    fn state_string(&self) -> String {
        Game::state_string(self)
    }

    fn set_state_string(&mut self, state: &str) -> Result<(), StateError> {
        Game::set_state_string(self, state)
    }

    fn stop_game(&mut self) {
        self.clear();
    }
}
