use derpfish::chess::core::{CastleRights, Player, Square};
use derpfish::chess::position::Position;
use pretty_assertions::assert_eq;

fn legal_position(input: &str) -> Position {
    let position = Position::from_fen(input).expect("we are parsing valid position: {input}");
    assert_eq!(position.to_string(), input);
    position
}

fn illegal_position(input: &str) {
    assert!(Position::from_fen(input).is_err(), "input: {input}");
}

#[test]
fn basic_positions() {
    let _ = legal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let _ = legal_position("2r3r1/p3k3/1p3pp1/1B5p/5P2/2P1p1P1/PP4KP/3R4 w - - 0 34");
    let _ = legal_position("r2qkb1r/1pp1pp1p/p1np1np1/1B6/3PP1b1/2N1BN2/PPP2PPP/R2QK2R w KQkq - 0 7");
    let _ = legal_position("r3k3/5p2/2p5/p7/P3r3/2N2n2/1PP2P2/2K2B2 w q - 0 24");
    let _ = legal_position("rnbq1rk1/pp4pp/1b1ppn2/2p2p2/2PP4/1P2PN2/PB2BPPP/RN1Q1RK1 w - c6 0 9");
}

#[test]
fn metadata() {
    let position = legal_position("r3k3/5p2/2p5/p7/P3r3/2N2n2/1PP2P2/2K2B2 w q - 12 24");
    assert_eq!(position.side_to_move(), Player::White);
    assert_eq!(position.castling(), CastleRights::BLACK_LONG);
    assert_eq!(position.en_passant_target(), None);
    assert_eq!(position.halfmove_clock(), 12);
    assert_eq!(position.fullmove_counter().get(), 24);
}

#[test]
fn en_passant_targets_the_pushed_pawn() {
    let position =
        legal_position("r1b1qrk1/ppp2pbp/n2p1np1/4p1B1/2PPP3/2NB1N1P/PP3PP1/R2QK2R w KQ e6 0 9");
    assert_eq!(position.en_passant_target(), Some(Square::E5));

    let position = legal_position("8/8/8/8/2P5/3k4/8/KB6 b - c3 0 1");
    assert_eq!(position.en_passant_target(), Some(Square::C4));

    // The passed-over square has to be right behind a pawn that has just
    // moved two squares.
    illegal_position("8/8/8/8/2P5/3k4/8/KB6 b - c6 0 1");
    illegal_position("8/8/8/8/2P5/3k4/8/KB6 w - c3 0 1");
    illegal_position("8/8/8/8/2P5/3k4/8/KB6 w - c4 0 1");
}

#[test]
fn trimmed_fen() {
    let position = Position::try_from("rnbqkb1r/pp2pppp/3p1n2/8/3NP3/2N5/PPP2PPP/R1BQKB1R b KQkq -")
        .expect("trimmed FEN defaults the move counters");
    assert_eq!(
        position.to_string(),
        "rnbqkb1r/pp2pppp/3p1n2/8/3NP3/2N5/PPP2PPP/R1BQKB1R b KQkq - 0 1"
    );
}

#[test]
fn prefixed_and_padded_input() {
    let expected = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    for input in [
        "fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "  rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1\n",
        "epd rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
    ] {
        assert_eq!(
            Position::try_from(input)
                .unwrap_or_else(|e| panic!("input: {input}, error: {e}"))
                .to_string(),
            expected
        );
    }
}

#[test]
fn incorrect_positions() {
    // Missing fields.
    illegal_position("");
    illegal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    illegal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
    illegal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq");
    // Placement errors.
    illegal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1");
    illegal_position("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    illegal_position("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    // Metadata errors.
    illegal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
    illegal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w QKkq - 0 1");
    illegal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1");
    illegal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1");
    illegal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0");
    // Trailing symbols.
    illegal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra");
}
