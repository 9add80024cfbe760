//! Tests for candidate move generation.

use tictactwo::movegen::{advanced_moves_allowed, generate_moves, valid_window_shifts};
use tictactwo::{Game, GameConfig, Move, Player, Position, WindowShift};

fn place_all(game: &mut Game, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        game.place_piece(Position::new(x, y)).expect("Valid placement");
    }
}

fn opened_game() -> Game {
    let mut game = Game::default();
    place_all(&mut game, &[(1, 1), (2, 2), (3, 1), (1, 3)]);
    game
}

#[test]
fn test_fresh_game_offers_only_placements() {
    let game = Game::default();
    let moves = generate_moves(game.state(), game.config(), Player::X);

    assert_eq!(moves.len(), 9);
    assert_eq!(moves[0], Move::PlacePiece(Position::new(1, 1)));
    assert_eq!(moves[1], Move::PlacePiece(Position::new(2, 1)));
    assert_eq!(moves[3], Move::PlacePiece(Position::new(1, 2)));
    assert_eq!(moves[8], Move::PlacePiece(Position::new(3, 3)));
    assert!(!advanced_moves_allowed(game.state()));
}

#[test]
fn test_advanced_moves_follow_placements() {
    let game = opened_game();
    assert!(advanced_moves_allowed(game.state()));

    let moves = generate_moves(game.state(), game.config(), Player::X);
    // 5 empty cells, 8 shifts from the centre, 2 pieces × 5 destinations.
    assert_eq!(moves.len(), 5 + 8 + 10);

    let placements: Vec<_> = moves[..5].to_vec();
    assert_eq!(
        placements,
        vec![
            Move::PlacePiece(Position::new(2, 1)),
            Move::PlacePiece(Position::new(1, 2)),
            Move::PlacePiece(Position::new(3, 2)),
            Move::PlacePiece(Position::new(2, 3)),
            Move::PlacePiece(Position::new(3, 3)),
        ]
    );

    let shifts: Vec<_> = moves[5..13].to_vec();
    assert_eq!(
        shifts,
        vec![
            Move::MoveWindow(WindowShift::Left),
            Move::MoveWindow(WindowShift::Right),
            Move::MoveWindow(WindowShift::Up),
            Move::MoveWindow(WindowShift::Down),
            Move::MoveWindow(WindowShift::UpLeft),
            Move::MoveWindow(WindowShift::DownLeft),
            Move::MoveWindow(WindowShift::UpRight),
            Move::MoveWindow(WindowShift::DownRight),
        ]
    );

    assert_eq!(
        moves[13],
        Move::MovePiece {
            from: Position::new(1, 1),
            to: Position::new(2, 1),
        }
    );
    assert_eq!(
        moves[17],
        Move::MovePiece {
            from: Position::new(1, 1),
            to: Position::new(3, 3),
        }
    );
    assert_eq!(
        moves[18],
        Move::MovePiece {
            from: Position::new(3, 1),
            to: Position::new(2, 1),
        }
    );
}

#[test]
fn test_piece_moves_use_requested_player() {
    let game = opened_game();
    let moves = generate_moves(game.state(), game.config(), Player::O);

    let sources: Vec<_> = moves
        .iter()
        .filter_map(|m| match m {
            Move::MovePiece { from, .. } => Some(*from),
            _ => None,
        })
        .collect();
    assert_eq!(sources.len(), 10);
    assert!(sources[..5].iter().all(|&p| p == Position::new(2, 2)));
    assert!(sources[5..].iter().all(|&p| p == Position::new(1, 3)));
}

#[test]
fn test_corner_window_shifts() {
    let mut game = opened_game();
    game.move_window(WindowShift::UpLeft).unwrap();

    assert_eq!(
        valid_window_shifts(game.state(), game.config()),
        vec![WindowShift::Right, WindowShift::Down, WindowShift::DownRight]
    );
}

#[test]
fn test_no_placements_without_pieces() {
    let config = GameConfig {
        pieces_per_player: 2,
        movement_threshold: 0,
        ..GameConfig::classic()
    };
    let mut game = Game::new(config);
    place_all(&mut game, &[(1, 1), (2, 2), (3, 1), (1, 3)]);

    let moves = generate_moves(game.state(), game.config(), Player::X);
    assert!(moves.iter().all(|m| !matches!(m, Move::PlacePiece(_))));
    assert_eq!(moves.len(), 8 + 10);
}

#[test]
fn test_generation_does_not_mutate() {
    let game = opened_game();
    let before = game.snapshot();
    let _ = generate_moves(game.state(), game.config(), Player::X);
    let _ = generate_moves(game.state(), game.config(), Player::O);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_lower_threshold_delays_advanced_moves() {
    let config = GameConfig {
        movement_threshold: 1,
        ..GameConfig::classic()
    };
    let mut game = Game::new(config);
    place_all(&mut game, &[(1, 1), (2, 2), (3, 1), (1, 3)]);

    assert!(!advanced_moves_allowed(game.state()));
    let moves = generate_moves(game.state(), game.config(), Player::X);
    assert!(moves.iter().all(|m| matches!(m, Move::PlacePiece(_))));
    assert_eq!(moves.len(), 5);

    place_all(&mut game, &[(2, 1), (3, 3)]);
    assert!(advanced_moves_allowed(game.state()));
    assert!(
        generate_moves(game.state(), game.config(), Player::X)
            .iter()
            .any(|m| matches!(m, Move::MovePiece { .. }))
    );
}
