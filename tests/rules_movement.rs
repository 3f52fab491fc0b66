//! Quiet movement of men and sovereigns.

use damas::{Board, Color, DirectionSet, Move, MoveKind, Piece, Position, RulesPolicy, Square};

fn position(pieces: &[(Piece, Square)], policy: RulesPolicy) -> Position {
    let mut board = Board::empty();

    for &(p, sq) in pieces {
        board.place(p, sq);
    }

    Position::new(board, policy)
}

// ============================================================================
// Men step one square at a time
// ============================================================================

/// A white man advances towards the eighth rank or slips sideways.
#[test]
fn a_white_man_steps_forward_and_sideways() {
    let pos = position(&[(Piece::WhiteMan, Square::D4)], RulesPolicy::clasica());

    assert_eq!(
        pos.moves(Square::D4, MoveKind::ANY),
        vec![
            Move(Square::D4, Square::D5, None),
            Move(Square::D4, Square::E4, None),
            Move(Square::D4, Square::C4, None),
        ]
    );
}

/// A black man advances towards the first rank instead.
#[test]
fn a_black_man_steps_towards_the_first_rank() {
    let pos = position(&[(Piece::BlackMan, Square::D5)], RulesPolicy::clasica());

    assert_eq!(
        pos.moves(Square::D5, MoveKind::ANY),
        vec![
            Move(Square::D5, Square::D4, None),
            Move(Square::D5, Square::E5, None),
            Move(Square::D5, Square::C5, None),
        ]
    );
}

/// Neither the retreat nor the diagonal step exists for a man.
#[test]
fn men_never_step_backward_or_diagonally() {
    let pos = position(&[(Piece::WhiteMan, Square::D4)], RulesPolicy::clasica());
    let moves = pos.moves(Square::D4, MoveKind::ANY);

    assert!(!moves.contains(&Move(Square::D4, Square::D3, None)));
    assert!(!moves.contains(&Move(Square::D4, Square::E5, None)));
    assert!(!moves.contains(&Move(Square::D4, Square::C5, None)));
}

/// The extended variant opens the two forward diagonals to men.
#[test]
fn the_extended_variant_adds_the_forward_diagonals() {
    let policy = RulesPolicy {
        man_move_dirs: DirectionSet::Extended,
        ..RulesPolicy::clasica()
    };

    let pos = position(&[(Piece::WhiteMan, Square::D4)], policy);

    assert_eq!(
        pos.moves(Square::D4, MoveKind::ANY),
        vec![
            Move(Square::D4, Square::D5, None),
            Move(Square::D4, Square::E4, None),
            Move(Square::D4, Square::C4, None),
            Move(Square::D4, Square::E5, None),
            Move(Square::D4, Square::C5, None),
        ]
    );
}

/// An occupied square blocks the step, whoever stands on it.
#[test]
fn men_cannot_step_onto_an_occupied_square() {
    let pos = position(
        &[
            (Piece::WhiteMan, Square::D4),
            (Piece::WhiteMan, Square::D5),
            (Piece::WhiteMan, Square::E4),
        ],
        RulesPolicy::clasica(),
    );

    assert_eq!(
        pos.moves(Square::D4, MoveKind::ANY),
        vec![Move(Square::D4, Square::C4, None)]
    );
}

// ============================================================================
// Sovereigns slide
// ============================================================================

/// A sovereign slides any distance along the eight directions.
#[test]
fn a_sovereign_slides_along_the_eight_rays() {
    let pos = position(&[(Piece::WhiteSovereign, Square::D4)], RulesPolicy::clasica());
    let moves = pos.moves(Square::D4, MoveKind::ANY);

    assert_eq!(moves.len(), 27);
    assert!(moves.contains(&Move(Square::D4, Square::D8, None)));
    assert!(moves.contains(&Move(Square::D4, Square::H8, None)));
    assert!(moves.contains(&Move(Square::D4, Square::A1, None)));
    assert!(moves.contains(&Move(Square::D4, Square::A4, None)));
}

/// The ray ends on the square before the first piece it meets.
#[test]
fn a_sovereign_ray_stops_before_the_first_piece() {
    let pos = position(
        &[
            (Piece::WhiteSovereign, Square::D4),
            (Piece::WhiteMan, Square::D6),
            (Piece::WhiteMan, Square::F4),
        ],
        RulesPolicy::clasica(),
    );

    let moves = pos.moves(Square::D4, MoveKind::ANY);

    assert!(moves.contains(&Move(Square::D4, Square::D5, None)));
    assert!(!moves.contains(&Move(Square::D4, Square::D6, None)));
    assert!(!moves.contains(&Move(Square::D4, Square::D7, None)));
    assert!(moves.contains(&Move(Square::D4, Square::E4, None)));
    assert!(!moves.contains(&Move(Square::D4, Square::F4, None)));
    assert!(!moves.contains(&Move(Square::D4, Square::G4, None)));
}

/// A piece whose every step is blocked simply has no moves.
#[test]
fn a_walled_in_piece_has_no_moves() {
    let pos = position(
        &[
            (Piece::WhiteMan, Square::A1),
            (Piece::WhiteMan, Square::A2),
            (Piece::WhiteMan, Square::B1),
        ],
        RulesPolicy::clasica(),
    );

    assert!(pos.moves(Square::A1, MoveKind::ANY).is_empty());
}

// ============================================================================
// The opening position
// ============================================================================

/// Only the men of the second line can move at first, each straight ahead.
#[test]
fn each_side_opens_with_eight_advancing_steps() {
    let pos = Position::default();

    let white = pos.legal(Color::White);
    let black = pos.legal(Color::Black);

    assert_eq!(white.len(), 8);
    assert_eq!(black.len(), 8);
    assert!(white.iter().chain(&black).all(|m| !m.is_capture()));
}
