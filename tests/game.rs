//! Full turns driven through the public interface.

use damas::{Board, Build, Color, Eager, Game, IllegalMove, InvalidSelection, Move};
use damas::{OpponentBuilder, Outcome, Piece, Position, Reason, Report, RulesPolicy, Square};

fn resume(pieces: &[(Piece, Square)], turn: Color, policy: RulesPolicy) -> Game {
    let mut board = Board::empty();

    for &(p, sq) in pieces {
        board.place(p, sq);
    }

    Game::resume(!turn, turn, Position::new(board, policy))
}

/// A fresh game deploys two full ranks per side and waits on white.
#[test]
fn a_game_opens_with_the_full_ranks_deployed() {
    let game = Game::default();

    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.selection(), None);
    assert_eq!(game.position().board().count(Color::White), 16);
    assert_eq!(game.position().board().count(Color::Black), 16);
    assert_eq!(game.captured(Color::White), 0);
    assert_eq!(game.captured(Color::Black), 0);
}

/// The default rules parse back from their textual form.
#[test]
fn a_game_configured_from_a_string_matches_the_default() {
    let policy: RulesPolicy = "rules()".parse().unwrap();

    assert_eq!(Game::new(Color::White, policy), Game::default());
}

/// Four quiet plies of an ordinary opening, selection first, move second.
#[test]
fn a_short_opening_exchange() {
    let mut game = Game::default();

    assert_eq!(
        game.select(Square::C2).map(<[Move]>::to_vec),
        Ok(vec![Move(Square::C2, Square::C3, None)])
    );

    game.execute(Move(Square::C2, Square::C3, None)).unwrap();
    assert_eq!(game.turn(), Color::Black);

    assert_eq!(
        game.select(Square::F7).map(<[Move]>::to_vec),
        Ok(vec![Move(Square::F7, Square::F6, None)])
    );

    game.execute(Move(Square::F7, Square::F6, None)).unwrap();

    let moves = game.select(Square::C3).map(<[Move]>::to_vec).unwrap();
    assert_eq!(moves.len(), 3);
    game.execute(moves[0]).unwrap();

    let moves = game.select(Square::F6).map(<[Move]>::to_vec).unwrap();
    assert_eq!(moves.len(), 3);
    game.execute(moves[0]).unwrap();

    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.captured(Color::White) + game.captured(Color::Black), 0);
}

/// The opponent speaks only when it is its turn.
#[test]
fn the_opponent_answers_on_its_own_turn() {
    let mut game = Game::new(Color::White, RulesPolicy::clasica());
    let mut opponent = Eager::with_seed(42);

    assert_eq!(game.request_opponent_move(&mut opponent), None);

    game.execute(Move(Square::A2, Square::A3, None)).unwrap();

    let m = game.request_opponent_move(&mut opponent).unwrap();
    assert!(game.legal().contains(&m));

    game.execute(m).unwrap();
    assert_eq!(game.turn(), Color::White);
}

/// While a chain holds the opponent's turn open, the adapter keeps asking
/// and replaying until the report closes the turn.
#[test]
fn the_adapter_replays_an_opponent_chain_step_by_step() {
    let mut game = resume(
        &[
            (Piece::BlackMan, Square::F7),
            (Piece::WhiteMan, Square::F6),
            (Piece::WhiteMan, Square::F4),
            (Piece::WhiteMan, Square::A1),
        ],
        Color::Black,
        RulesPolicy::clasica(),
    );

    let mut opponent = Eager::with_seed(7);
    let mut cleared = Vec::new();

    while let Some(m) = game.request_opponent_move(&mut opponent) {
        let report = game.execute(m).unwrap();
        cleared.extend(report.captured);

        if !report.chain_continues {
            break;
        }
    }

    assert_eq!(cleared, vec![Square::F6, Square::F4]);
    assert_eq!(game.captured(Color::White), 2);
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.outcome(), None);
}

/// Under deferred extraction the fallen leave the board at once but are
/// reported and counted only when the turn closes.
#[test]
fn a_deferred_variant_reports_the_fallen_when_the_turn_closes() {
    let policy = RulesPolicy {
        deferred_extraction: true,
        ..RulesPolicy::clasica()
    };

    let mut game = resume(
        &[
            (Piece::BlackMan, Square::F7),
            (Piece::WhiteMan, Square::F6),
            (Piece::WhiteMan, Square::F4),
            (Piece::WhiteMan, Square::A1),
        ],
        Color::Black,
        policy,
    );

    let first = game
        .execute(Move(Square::F7, Square::F5, Some(Square::F6)))
        .unwrap();

    assert!(first.chain_continues);
    assert!(first.captured.is_empty());
    assert_eq!(game.position()[Square::F6], None);
    assert_eq!(game.captured(Color::White), 0);

    let last = game
        .execute(Move(Square::F5, Square::F3, Some(Square::F4)))
        .unwrap();

    assert!(!last.chain_continues);
    assert_eq!(last.captured, vec![Square::F6, Square::F4]);
    assert_eq!(game.captured(Color::White), 2);
}

/// One capture, one report, every field accounted for.
#[test]
fn the_report_narrates_a_single_capture() {
    let mut game = resume(
        &[
            (Piece::WhiteMan, Square::C3),
            (Piece::BlackMan, Square::C4),
            (Piece::BlackMan, Square::H8),
        ],
        Color::White,
        RulesPolicy::clasica(),
    );

    assert_eq!(
        game.execute(Move(Square::C3, Square::C5, Some(Square::C4))),
        Ok(Report {
            whence: Square::C3,
            whither: Square::C5,
            captured: vec![Square::C4],
            promoted: false,
            chain_continues: false,
            outcome: None,
        })
    );
}

/// Taking the last enemy piece ends the game, and the game stays ended.
#[test]
fn an_annihilating_capture_ends_the_game() {
    let mut game = resume(
        &[(Piece::WhiteMan, Square::D4), (Piece::BlackMan, Square::D5)],
        Color::White,
        RulesPolicy::clasica(),
    );

    let report = game
        .execute(Move(Square::D4, Square::D6, Some(Square::D5)))
        .unwrap();

    let outcome = Outcome::new(Color::White, Reason::Annihilation);

    assert_eq!(report.outcome, Some(outcome));
    assert_eq!(game.outcome(), Some(outcome));
    assert_eq!(
        game.select(Square::D6),
        Err(InvalidSelection::GameHasEnded(outcome))
    );
    assert_eq!(
        game.execute(Move(Square::D6, Square::D7, None)),
        Err(IllegalMove::GameHasEnded(outcome))
    );
    assert_eq!(game.request_opponent_move(&mut Eager::with_seed(3)), None);
}

/// A side with pieces but no moves has lost the moment its turn arrives.
#[test]
fn a_smothered_side_loses_by_blockade() {
    let game = resume(
        &[
            (Piece::BlackMan, Square::A8),
            (Piece::WhiteMan, Square::A6),
            (Piece::WhiteMan, Square::A7),
            (Piece::WhiteMan, Square::B8),
            (Piece::WhiteMan, Square::C8),
        ],
        Color::Black,
        RulesPolicy::clasica(),
    );

    assert_eq!(
        game.outcome(),
        Some(Outcome::new(Color::White, Reason::Blockade))
    );
}

/// An opponent assembled from its textual configuration answers on cue.
#[test]
fn a_configured_opponent_plays_on_cue() {
    let game = Game::new(Color::Black, RulesPolicy::clasica());

    let mut opponent = "voracious()"
        .parse::<OpponentBuilder>()
        .unwrap()
        .build()
        .unwrap();

    let m = game.request_opponent_move(&mut opponent).unwrap();
    assert!(game.legal().contains(&m));
}
