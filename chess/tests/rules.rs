use chessrules::{movegen, Bitboard, Board, Color, Coord, Game, GameError, MoveError, PieceKind};
use test_case::test_case;

fn coords(squares: &[&str]) -> Bitboard {
    squares.iter().map(|s| s.parse::<Coord>().unwrap()).collect()
}

fn moves_from(layout: &str, square: &str) -> Bitboard {
    let board = Board::from_layout(layout).unwrap();
    let piece = board.piece_at(square.parse().unwrap()).unwrap();
    movegen::gen_moves(piece, &board)
}

#[test]
fn test_square_orientation() {
    let a2: Coord = "a2".parse().unwrap();
    assert_eq!(a2.to_coordinates(), (0, 6));
    let h8: Coord = "h8".parse().unwrap();
    assert_eq!(h8.to_coordinates(), (7, 0));
    assert_eq!(Coord::from_coordinates(4, 7).unwrap().to_string(), "e1");
    assert_eq!(Coord::from_coordinates(8, 0), None);
}

#[test_case("8/8/8/8/8/8/P7/8", &["a3", "a4"]; "empty board")]
#[test_case("8/8/8/8/p7/8/P7/8", &["a3"]; "double step blocked by enemy")]
fn test_pawn_boundary(layout: &str, expected: &[&str]) {
    assert_eq!(moves_from(layout, "a2"), coords(expected));
}

#[test]
fn test_pawn_diagonal_needs_enemy() {
    let moves = moves_from("8/8/8/8/8/p7/1P6/8", "b2");
    assert!(moves.has("a3".parse().unwrap()));
    assert!(!moves.has("c3".parse().unwrap()));

    let moves = moves_from("8/8/8/8/8/P7/1P6/8", "b2");
    assert!(!moves.has("a3".parse().unwrap()));
}

#[test_case("8/8/8/8/P7/8/8/R7", &["a2", "a3"]; "friendly blocker")]
#[test_case("8/8/8/8/p7/8/8/R7", &["a2", "a3", "a4"]; "enemy blocker")]
fn test_rook_blocking(layout: &str, expected: &[&str]) {
    let file_a = chessrules::bitboard_consts::file(chessrules::File::A);
    assert_eq!(moves_from(layout, "a1") & file_a, coords(expected));
}

#[test]
fn test_knight_jump() {
    let moves = moves_from("8/8/8/8/8/8/PPP5/RN1B4", "b1");
    assert_eq!(moves, coords(&["a3", "c3", "d2"]));
    let moves = moves_from("8/8/8/8/8/8/PPP5/RNB5", "b1");
    assert_eq!(moves, coords(&["a3", "c3", "d2"]));
}

#[test]
fn test_queen_in_the_middle() {
    let moves = moves_from("8/8/8/8/3Q4/8/8/8", "d4");
    assert_eq!(moves.len(), 27);
    let moves = moves_from("8/8/8/8/8/8/8/Q7", "a1");
    assert_eq!(moves.len(), 21);
}

#[test]
fn test_play_short_game() {
    let mut game = Game::new();
    let sq = |s: &str| s.parse::<Coord>().unwrap();

    assert_eq!(game.play_squares(sq("e2"), sq("e4")), Ok(None));
    assert_eq!(game.play_squares(sq("d7"), sq("d5")), Ok(None));
    let captured = game.play_squares(sq("e4"), sq("d5")).unwrap().unwrap();
    assert_eq!(captured.kind(), PieceKind::Pawn);
    assert_eq!(captured.color(), Color::Black);

    let queen = game.board().piece_at(sq("d8")).unwrap().id();
    assert_eq!(game.targets(queen), coords(&["d7", "d6", "d5"]));
    assert_eq!(
        game.play(queen, sq("d4")),
        Err(GameError::Move(MoveError::Unreachable {
            piece: *game.board().piece(queen).unwrap(),
            target: sq("d4"),
        }))
    );
    assert!(matches!(game.play(queen, sq("d5")), Ok(Some(p)) if p.kind() == PieceKind::Pawn));
    assert_eq!(game.side(), Color::White);
    assert_eq!(
        game.board().layout(),
        "rnb1kbnr/ppp1pppp/8/3q4/8/8/PPPP1PPP/RNBQKBNR"
    );
    assert_eq!(game.board().len(), 30);
}
