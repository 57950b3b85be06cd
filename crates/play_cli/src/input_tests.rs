use super::*;
use checkers_core::legal_moves;

#[test]
fn parses_two_squares() {
    assert_eq!(parse_move_line("5,0 4,1"), Some(((5, 0), (4, 1))));
    assert_eq!(parse_move_line("  2,1   3,2 "), Some(((2, 1), (3, 2))));
}

#[test]
fn rejects_malformed_lines() {
    assert_eq!(parse_move_line(""), None);
    assert_eq!(parse_move_line("5,0"), None);
    assert_eq!(parse_move_line("5,0 4,1 3,2"), None);
    assert_eq!(parse_move_line("8,0 4,1"), None);
    assert_eq!(parse_move_line("a,b c,d"), None);
}

#[test]
fn resolves_a_typed_opening_move() {
    let mut pos = Position::start();
    pos.set_turn(Side::Black);
    let legal = legal_moves(&mut pos);

    let mv = resolve_move(&pos, &legal, Side::Black, (2, 0), (3, 1)).unwrap();
    assert_eq!((mv.row, mv.col), (3, 1));
    assert!(!mv.is_capture());
}

#[test]
fn rejects_a_square_with_no_own_piece() {
    let mut pos = Position::start();
    pos.set_turn(Side::Black);
    let legal = legal_moves(&mut pos);

    // (5,1) holds a red man, not a black piece.
    assert!(resolve_move(&pos, &legal, Side::Black, (5, 1), (4, 0)).is_none());
}

#[test]
fn rejects_an_illegal_destination() {
    let mut pos = Position::start();
    pos.set_turn(Side::Black);
    let legal = legal_moves(&mut pos);

    // Men cannot move straight forward.
    assert!(resolve_move(&pos, &legal, Side::Black, (2, 0), (3, 0)).is_none());
}
