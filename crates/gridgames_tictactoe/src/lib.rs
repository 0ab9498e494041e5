//! Pure tic-tac-toe game logic for a gridgames engine frontend.
//!
//! The host engine owns rendering, input mapping, and turn records;
//! this crate owns the board, move legality, outcome evaluation, and
//! the persisted state-string codec. The engine drives it through the
//! [`GameModule`] trait.
//!
//! # Example
//!
//! ```
//! use gridgames_tictactoe::{Game, GameModule, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.set_up_board();
//!
//! game.place(Position::TopLeft)?;
//! game.place(Position::Center)?;
//! assert_eq!(game.to_move(), Player::X);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.state_string(), "100020000");
//! # Ok::<(), gridgames_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod codec;
mod game;
mod hooks;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use codec::{decode, encode, StateError, INITIAL_STATE};
pub use game::{Game, AI_PLAYER, HUMAN_PLAYER};
pub use hooks::GameModule;
pub use position::Position;
pub use rules::draw::{is_draw, is_full};
pub use rules::win::check_winner;
pub use types::{Board, GameStatus, Player, Square};
