//! Tests for the engine-driven game flow: placement, turn rotation,
//! and outcome evaluation.

use gridgames_tictactoe::{
    Game, GameModule, GameStatus, Move, MoveError, Player, Position,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn test_fresh_game() {
    init_tracing();
    let mut game = Game::new();
    game.set_up_board();

    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.check_for_winner(), None);
    assert!(!game.check_for_draw());
    assert_eq!(game.initial_state_string(), "000000000");
    assert_eq!(game.state_string(), "000000000");
}

#[test]
fn test_placement_alternates_turns() {
    let mut game = Game::new();

    assert!(game.action_for_empty_holder(Some(Position::Center)));
    assert_eq!(game.to_move(), Player::O);

    assert!(game.action_for_empty_holder(Some(Position::TopLeft)));
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_occupied_square_rejected_and_board_unchanged() {
    let mut game = Game::new();
    game.place(Position::Center).unwrap();
    let before = game.state_string();

    let result = game.place(Position::Center);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game.state_string(), before);
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_missing_target_rejected() {
    let mut game = Game::new();
    assert!(!game.action_for_empty_holder(None));
    assert_eq!(game.state_string(), "000000000");
}

#[test]
fn test_wrong_player_rejected() {
    let mut game = Game::new();

    let result = game.apply(Move::new(Player::O, Position::Center));
    assert_eq!(result, Err(MoveError::WrongPlayer(Player::O)));
    assert_eq!(game.to_move(), Player::X);

    game.apply(Move::new(Player::X, Position::Center)).unwrap();
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_top_row_win() {
    let mut game = Game::new();
    // X: top row; O: middle row fillers
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        game.place(pos).unwrap();
    }

    assert_eq!(game.check_for_winner(), Some(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert!(!game.check_for_draw());
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = Game::new();
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        game.place(pos).unwrap();
    }

    let result = game.place(Position::BottomLeft);
    assert_eq!(result, Err(MoveError::GameOver));
    assert!(!game.action_for_empty_holder(Some(Position::BottomLeft)));
}

#[test]
fn test_draw_game() {
    let mut game = Game::new();
    // X O X / O X X / O X O - a full board with no line owned
    for pos in [
        Position::TopLeft,      // X
        Position::TopCenter,    // O
        Position::TopRight,     // X
        Position::MiddleLeft,   // O
        Position::Center,       // X
        Position::BottomLeft,   // O
        Position::MiddleRight,  // X
        Position::BottomRight,  // O
        Position::BottomCenter, // X
    ] {
        game.place(pos).unwrap();
    }

    assert_eq!(game.check_for_winner(), None);
    assert!(game.check_for_draw());
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_relocation_always_false() {
    let mut game = Game::new();
    game.place(Position::Center).unwrap();

    for src in Position::ALL {
        assert!(!game.can_piece_move_from(src));
        for dst in Position::ALL {
            assert!(!game.can_piece_move_from_to(src, dst));
        }
    }
}

#[test]
fn test_stop_game_releases_all_pieces() {
    let mut game = Game::new();
    game.place(Position::Center).unwrap();
    game.place(Position::TopLeft).unwrap();

    game.stop_game();
    assert_eq!(game.state_string(), "000000000");
    assert_eq!(game.to_move(), Player::X);

    // Tearing down an empty board is a no-op.
    game.stop_game();
    assert_eq!(game.state_string(), "000000000");
}

#[test]
fn test_update_ai_is_a_stub() {
    let mut game = Game::new();
    game.place(Position::Center).unwrap();
    let before = game.clone();

    game.update_ai();
    assert_eq!(game, before);
}
