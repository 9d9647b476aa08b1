//! Per-piece movement rules over a [`Board`].
//!
//! Every rule answers the same question: which squares can the piece standing
//! on `from` move to? The answers are [pseudo-legal]: they follow the piece's
//! movement pattern and never land on a friendly piece, but nothing checks
//! whether the move leaves the mover's own king in check.
//!
//! All rules are pure functions of the board and the bits of game metadata
//! they need (the side to move, the en passant target, castling rights).
//! Edge handling lives in [`Square::shift`] and [`Square::offset`] and
//! occupancy handling in [`Board`] predicates, the rules only combine them.
//!
//! [pseudo-legal]: https://www.chessprogramming.org/Pseudo-Legal_Move

use arrayvec::ArrayVec;

use crate::chess::board::Board;
use crate::chess::core::{Direction, Player, Rank, Square};

/// The most squares a single piece can reach: a queen in the center of an
/// otherwise empty board.
pub const MAX_DESTINATIONS: usize = 27;

/// Destination squares of a single piece in the order they were generated.
pub type Destinations = ArrayVec<Square, MAX_DESTINATIONS>;

/// Knight jumps as raw square index deltas.
const KNIGHT_OFFSETS: [i8; 8] = [17, 15, 10, 6, -6, -10, -15, -17];

/// Walks from `from` along each direction until the board edge or the first
/// occupied square. The occupied square is included only if it holds an enemy
/// piece (a capture). Directions are walked in the given order and each walk
/// yields squares from the nearest to the farthest.
#[must_use]
pub fn ray_moves(board: &Board, from: Square, directions: &[Direction], player: Player) -> Destinations {
    let mut result = Destinations::new();
    for &direction in directions {
        let mut current = from;
        while let Some(next) = current.shift(direction) {
            if board.is_empty(next) {
                result.push(next);
                current = next;
                continue;
            }
            if board.is_enemy(next, player) {
                result.push(next);
            }
            break;
        }
    }
    result
}

#[must_use]
#[allow(missing_docs)]
pub fn bishop_moves(board: &Board, from: Square, player: Player) -> Destinations {
    ray_moves(board, from, &Direction::DIAGONAL, player)
}

#[must_use]
#[allow(missing_docs)]
pub fn rook_moves(board: &Board, from: Square, player: Player) -> Destinations {
    ray_moves(board, from, &Direction::ORTHOGONAL, player)
}

#[must_use]
#[allow(missing_docs)]
pub fn queen_moves(board: &Board, from: Square, player: Player) -> Destinations {
    ray_moves(board, from, &Direction::ALL, player)
}

/// Pawn destinations, in this order:
///
/// 1. Single push, if the square in front is empty.
/// 2. Double push from the starting rank, if both squares in front are empty.
/// 3. En passant: if `en_passant_target` (the square of the enemy pawn that
///    has just advanced two squares) is right next to the pawn on the same
///    rank, the pawn may move to the empty square behind it.
/// 4. Diagonal captures of enemy pieces.
///
/// The double push and en passant are independent of each other. Reaching the
/// last rank is a plain destination: promotions are not tracked.
///
/// The en passant destination is skipped when the square behind the target is
/// occupied. After a real double push it is always empty, so this only
/// matters for hand-written positions: the move never lands on a friendly
/// piece and an enemy piece there is already reached by the diagonal capture.
#[must_use]
pub fn pawn_moves(
    board: &Board,
    from: Square,
    player: Player,
    en_passant_target: Option<Square>,
) -> Destinations {
    let mut result = Destinations::new();
    let push = player.push_direction();
    if let Some(single) = from.shift(push).filter(|&square| board.is_empty(square)) {
        result.push(single);
        if from.rank() == Rank::pawns_starting(player) {
            if let Some(double) = single.shift(push).filter(|&square| board.is_empty(square)) {
                result.push(double);
            }
        }
    }
    if let Some(target) = en_passant_target {
        if target.rank() == from.rank() && file_distance(from, target) == 1 {
            if let Some(behind) = target.shift(push).filter(|&square| board.is_empty(square)) {
                result.push(behind);
            }
        }
    }
    let captures = match player {
        Player::White => [Direction::UpLeft, Direction::UpRight],
        Player::Black => [Direction::DownLeft, Direction::DownRight],
    };
    for direction in captures {
        if let Some(to) = from.shift(direction) {
            if board.is_enemy(to, player) {
                result.push(to);
            }
        }
    }
    result
}

/// Knight jumps that stay on the board and don't land on a friendly piece.
#[must_use]
pub fn knight_moves(board: &Board, from: Square, player: Player) -> Destinations {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&offset| from.offset(offset))
        // Jumps that wrap around the board edge end up 6 or 7 files away.
        .filter(|&to| file_distance(from, to) <= 2)
        .filter(|&to| board.is_empty_or_enemy(to, player))
        .collect()
}

/// King destinations: the adjacent squares that are empty or hold an enemy
/// piece, followed by the castling moves.
///
/// Castling only looks at the right and at the squares next to the king, not
/// at where the king stands. Kingside needs the two squares to the right of
/// the king to be empty and adds the second one (`from + 2`). Queenside needs
/// the three squares to the left to be empty and adds the third one
/// (`from - 3`). Neither the presence of the rook nor attacks on the squares
/// the king passes are checked.
#[must_use]
pub fn king_moves(
    board: &Board,
    from: Square,
    player: Player,
    queenside_right: bool,
    kingside_right: bool,
) -> Destinations {
    let mut result: Destinations = Direction::ALL
        .iter()
        .filter_map(|&direction| from.shift(direction))
        .filter(|&to| board.is_empty_or_enemy(to, player))
        .collect();
    if queenside_right {
        if let Some(to) = castling_destination(board, from, Direction::Left, 3) {
            result.push(to);
        }
    }
    if kingside_right {
        if let Some(to) = castling_destination(board, from, Direction::Right, 2) {
            result.push(to);
        }
    }
    result
}

/// Walks `steps` squares from the king along its rank. Returns the last
/// square if every square on the way (including the last) is empty.
fn castling_destination(
    board: &Board,
    from: Square,
    direction: Direction,
    steps: usize,
) -> Option<Square> {
    let mut square = from;
    for _ in 0..steps {
        square = square.shift(direction).filter(|&next| board.is_empty(next))?;
    }
    Some(square)
}

fn file_distance(lhs: Square, rhs: Square) -> u8 {
    (lhs.file() as u8).abs_diff(rhs.file() as u8)
}
