#![no_main]
use derpfish::chess::position;
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use shakmaty::{CastlingMode, CastlingSide, Chess, Position};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(position) = position::Position::from_fen(input) else {
        return;
    };
    let Ok(shakmaty_setup) = input.parse::<shakmaty::fen::Fen>() else {
        return;
    };
    let Ok(shakmaty_position) = shakmaty_setup.into_position::<Chess>(CastlingMode::Standard) else {
        return;
    };
    let moves = position
        .generate_moves()
        .iter()
        .map(ToString::to_string)
        .sorted()
        .collect_vec();
    // Every legal move is also pseudo-legal. Promotion pieces are dropped and
    // queenside castling lands three files to the left of the king.
    for legal in shakmaty_position.legal_moves() {
        let uci = legal.to_uci(CastlingMode::Standard).to_string();
        let mut expected = uci[..4].to_string();
        if legal.castling_side() == Some(CastlingSide::QueenSide) {
            expected.replace_range(2..3, "b");
        }
        assert!(
            moves.binary_search(&expected).is_ok(),
            "position: {input}, missing move: {uci}"
        );
    }
});
