use super::*;

#[test]
fn startpos_red_moves() {
    let mut pos = Position::start();
    let moves = legal_moves(&mut pos);
    // Four front-row men; the man on column 7 has only one forward diagonal.
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|mv| !mv.is_capture()));
    assert!(moves.iter().all(|mv| mv.mover == PieceClass::Man));
}

#[test]
fn startpos_contains_edge_step() {
    // Red man at (5,1) stepping to (4,0): plain move, nothing captured.
    let mut pos = Position::start();
    let piece = pos.find_piece(Side::Red, PieceClass::Man, 5, 1).unwrap();
    let moves = legal_moves(&mut pos);
    assert!(moves.contains(&Move::step(piece, PieceClass::Man, 4, 0)));
}

#[test]
fn all_moves_stay_in_bounds() {
    let mut pos = Position::start();
    for _ in 0..4 {
        let moves = legal_moves(&mut pos);
        for mv in &moves {
            assert!(mv.row < 8 && mv.col < 8, "move out of bounds: {:?}", mv);
        }
        let mv = moves[0];
        pos.apply(&mv).unwrap();
    }
}

#[test]
fn man_capture_found_and_threat_recorded() {
    let mut pos = Position::empty(Side::Red);
    let attacker = pos.add_piece(Side::Red, PieceClass::Man, 3, 3);
    let victim = pos.add_piece(Side::Black, PieceClass::Man, 2, 4);

    let moves = legal_moves(&mut pos);
    let expected = Move::jump(
        attacker,
        PieceClass::Man,
        1,
        5,
        Capture {
            piece: victim,
            class: PieceClass::Man,
        },
    );
    assert!(moves.contains(&expected));
    assert!(pos.threats(Side::Red).contains(&victim));
}

#[test]
fn capture_over_king_records_king_class() {
    let mut pos = Position::empty(Side::Red);
    let attacker = pos.add_piece(Side::Red, PieceClass::Man, 3, 3);
    let victim = pos.add_piece(Side::Black, PieceClass::King, 2, 2);

    let moves = legal_moves(&mut pos);
    let jump = moves
        .iter()
        .find(|mv| mv.is_capture())
        .expect("capture over king");
    assert_eq!(jump.row, 1);
    assert_eq!(jump.col, 1);
    assert_eq!(
        jump.capture,
        Some(Capture {
            piece: victim,
            class: PieceClass::King,
        })
    );
}

#[test]
fn capture_blocked_by_occupied_landing() {
    let mut pos = Position::empty(Side::Red);
    pos.add_piece(Side::Red, PieceClass::Man, 3, 3);
    pos.add_piece(Side::Black, PieceClass::Man, 2, 4);
    pos.add_piece(Side::Black, PieceClass::Man, 1, 5);

    let moves = legal_moves(&mut pos);
    assert!(moves.iter().all(|mv| !mv.is_capture()));
}

#[test]
fn threat_list_accumulates_across_generations() {
    let mut pos = Position::empty(Side::Red);
    pos.add_piece(Side::Red, PieceClass::Man, 3, 3);
    pos.add_piece(Side::Black, PieceClass::Man, 2, 4);

    legal_moves(&mut pos);
    assert_eq!(pos.threat_len(Side::Red), 1);
    // Nothing clears the list between calls; growth is cumulative.
    legal_moves(&mut pos);
    assert_eq!(pos.threat_len(Side::Red), 2);
}

#[test]
fn men_never_move_backward() {
    let mut pos = Position::empty(Side::Red);
    pos.add_piece(Side::Red, PieceClass::Man, 3, 3);
    let moves = legal_moves(&mut pos);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|mv| mv.row == 2));

    let mut pos = Position::empty(Side::Black);
    pos.add_piece(Side::Black, PieceClass::Man, 3, 3);
    let moves = legal_moves(&mut pos);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|mv| mv.row == 4));
}

#[test]
fn kings_move_in_all_four_directions() {
    let mut pos = Position::empty(Side::Red);
    pos.add_piece(Side::Red, PieceClass::King, 4, 4);
    let moves = legal_moves(&mut pos);
    let mut dests: Vec<(usize, usize)> = moves.iter().map(|mv| (mv.row, mv.col)).collect();
    dests.sort_unstable();
    assert_eq!(dests, vec![(3, 3), (3, 5), (5, 3), (5, 5)]);
}

#[test]
fn king_moves_enumerate_before_man_moves() {
    let mut pos = Position::empty(Side::Red);
    pos.add_piece(Side::Red, PieceClass::Man, 5, 1);
    pos.add_piece(Side::Red, PieceClass::King, 4, 4);

    let moves = legal_moves(&mut pos);
    let first_man = moves
        .iter()
        .position(|mv| mv.mover == PieceClass::Man)
        .unwrap();
    assert!(moves[..first_man]
        .iter()
        .all(|mv| mv.mover == PieceClass::King));
    assert!(moves[first_man..]
        .iter()
        .all(|mv| mv.mover == PieceClass::Man));
}

#[test]
fn fully_blocked_side_has_no_moves() {
    // Red man hemmed in: both forward diagonals hold black men, one jump
    // lands out of bounds and the other landing square is occupied.
    let mut pos = Position::empty(Side::Red);
    pos.add_piece(Side::Red, PieceClass::Man, 5, 1);
    pos.add_piece(Side::Black, PieceClass::Man, 4, 0);
    pos.add_piece(Side::Black, PieceClass::Man, 4, 2);
    pos.add_piece(Side::Black, PieceClass::Man, 3, 3);

    let moves = legal_moves(&mut pos);
    assert!(moves.is_empty());
}
