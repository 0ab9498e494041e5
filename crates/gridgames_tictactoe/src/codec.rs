//! Board <-> state-string codec.
//!
//! The persisted layout is 9 ASCII digits, one per square in
//! column-major traversal order: `'0'` for empty, `'1'` for X,
//! `'2'` for O. No delimiters, no version tag. The column-major
//! order is part of the wire format kept for compatibility with
//! strings the host engine has already persisted; everywhere else
//! in the crate, board indices are row-major.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// State string of an empty board.
pub const INITIAL_STATE: &str = "000000000";

/// Serializes the board to its 9-digit state string.
#[instrument(skip(board))]
pub fn encode(board: &Board) -> String {
    let mut state = String::with_capacity(9);
    for pos in Position::COLUMN_MAJOR {
        let digit = match board.get(pos) {
            Square::Empty => '0',
            Square::Occupied(player) => char::from(b'1' + player.index() as u8),
        };
        state.push(digit);
    }
    state
}

/// Restores a board from a 9-digit state string.
///
/// # Errors
///
/// Returns [`StateError::BadLength`] unless the input is exactly 9
/// bytes, and [`StateError::BadDigit`] for any byte outside
/// `'0'..='2'`. The board is only produced from fully valid input.
#[instrument]
pub fn decode(state: &str) -> Result<Board, StateError> {
    let bytes = state.as_bytes();
    if bytes.len() != 9 {
        return Err(StateError::BadLength(bytes.len()));
    }

    let mut board = Board::new();
    for (offset, pos) in Position::COLUMN_MAJOR.into_iter().enumerate() {
        let square = match bytes[offset] {
            b'0' => Square::Empty,
            b'1' => Square::Occupied(Player::X),
            b'2' => Square::Occupied(Player::O),
            byte => return Err(StateError::BadDigit { offset, byte }),
        };
        board.set(pos, square);
    }

    Ok(board)
}

/// Error that can occur when decoding a state string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// The input was not exactly 9 bytes long.
    #[display("State string must be 9 digits, got {} bytes", _0)]
    BadLength(usize),

    /// A byte of the input was not one of '0', '1', '2'.
    #[display("Invalid digit {:?} at offset {}", *byte as char, offset)]
    BadDigit {
        /// Offset of the offending byte in the input.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },
}

impl std::error::Error for StateError {}
