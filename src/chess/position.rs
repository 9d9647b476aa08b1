//! Provides fully-specified [Chess Position] implementation: the board plus
//! the game metadata move generation depends on (side to move, castling
//! rights, en passant target) and the move counters.
//!
//! [`Position::allowed_moves`] is the entry point of move generation: it finds
//! the piece on the queried square and hands it to the matching rule from
//! [`crate::chess::movegen`].
//!
//! [Chess Position]: https://www.chessprogramming.org/Chess_Position

use std::fmt;
use std::num::NonZeroU16;

use anyhow::{bail, Context};

use crate::chess::board::Board;
use crate::chess::core::{CastleRights, Move, PieceKind, Player, Rank, Square};
use crate::chess::movegen::{self, Destinations};

/// State of the chess game: board, castling rights, en passant target and
/// half-move counters. It has 1:1 relationship with [Forsyth-Edwards
/// Notation] (FEN).
///
/// [`Position::try_from()`] provides a convenient interface for creating a
/// [`Position`]. It will clean up the input (trim newlines and whitespace) and
/// attempt to parse in either FEN or a version of [Extended Position
/// Description] (EPD) without operations (i.e. FEN without the two move
/// counters).
///
/// The position is a plain value: it is never shared between games and move
/// generation only reads it.
///
/// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
/// [Extended Position Description]: https://www.chessprogramming.org/Extended_Position_Description
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    castling: CastleRights,
    side_to_move: Player,
    /// [Halfmove Clock][^ply] keeps track of the number of (half-)moves
    /// since the last capture or pawn move and is used to enforce
    /// fifty[^fifty]-move draw rule.
    ///
    /// [Halfmove Clock]: https://www.chessprogramming.org/Halfmove_Clock
    /// [^ply]: "Half-move" or ["ply"](https://www.chessprogramming.org/Ply) means a move of only
    ///     one side.
    /// [^fifty]: 50 __full__ moves
    halfmove_clock: u8,
    fullmove_counter: NonZeroU16,
    /// Square of the opponent's pawn that has just advanced by two squares.
    ///
    /// NOTE: FEN records the square that pawn has passed over instead. The
    /// conversion happens in [`Position::from_fen`] and [`fmt::Display`].
    en_passant_target: Option<Square>,
}

impl Position {
    /// Creates the starting position of the standard chess variant.
    ///
    /// ```
    /// use derpfish::chess::position::Position;
    ///
    /// let starting_position = Position::starting();
    /// assert_eq!(
    ///     &starting_position.to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        Self {
            board: Board::starting(),
            castling: CastleRights::ALL,
            ..Self::empty()
        }
    }

    /// Creates an empty board with White to move and no castling rights.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            board: Board::empty(),
            castling: CastleRights::NONE,
            side_to_move: Player::White,
            halfmove_clock: 0,
            fullmove_counter: NonZeroU16::MIN,
            en_passant_target: None,
        }
    }

    /// Assembles a position from its parts. The move counters start from
    /// scratch.
    ///
    /// `en_passant_target` is the square of the pawn that can be captured en
    /// passant (not the square behind it).
    #[must_use]
    pub const fn new(
        board: Board,
        side_to_move: Player,
        castling: CastleRights,
        en_passant_target: Option<Square>,
    ) -> Self {
        Self {
            board,
            castling,
            side_to_move,
            halfmove_clock: 0,
            fullmove_counter: NonZeroU16::MIN,
            en_passant_target,
        }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Square of the pawn that can be captured en passant, if any.
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn halfmove_clock(&self) -> u8 {
        self.halfmove_clock
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn fullmove_counter(&self) -> NonZeroU16 {
        self.fullmove_counter
    }

    /// Lists the squares the piece on `from` can move to.
    ///
    /// Only the pieces of the side to move can be queried: an empty square or
    /// a square with the opponent's piece yields no destinations. The moves
    /// are pseudo-legal, see [`crate::chess::movegen`].
    ///
    /// ```
    /// use derpfish::chess::core::Square;
    /// use derpfish::chess::position::Position;
    ///
    /// let position = Position::starting();
    /// assert_eq!(
    ///     position.allowed_moves(Square::G1).as_slice(),
    ///     &[Square::H3, Square::F3]
    /// );
    /// assert!(position.allowed_moves(Square::G8).is_empty());
    /// ```
    #[must_use]
    pub fn allowed_moves(&self, from: Square) -> Destinations {
        let us = self.side_to_move;
        let piece = match self.board.at(from) {
            Some(piece) if piece.owner == us => piece,
            other => {
                log::debug!("{from} has no piece of the side to move ({us}): {other:?}");
                return Destinations::new();
            },
        };
        log::trace!("generating moves for {piece} on {from}");
        let board = &self.board;
        match piece.kind {
            PieceKind::Pawn => movegen::pawn_moves(board, from, us, self.en_passant_target),
            PieceKind::Knight => movegen::knight_moves(board, from, us),
            PieceKind::Bishop => movegen::bishop_moves(board, from, us),
            PieceKind::Rook => movegen::rook_moves(board, from, us),
            PieceKind::Queen => movegen::queen_moves(board, from, us),
            PieceKind::King => movegen::king_moves(
                board,
                from,
                us,
                self.castling.contains(CastleRights::long(us)),
                self.castling.contains(CastleRights::short(us)),
            ),
        }
    }

    /// Calculates a list of pseudo-legal moves of the side to move: every
    /// destination of every piece it owns, pieces are visited in square order.
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        // TODO: The average branching factor for chess is 35 but we probably
        // have to account for a healthy percentile instead of the average.
        let mut moves = Vec::with_capacity(50);
        for from in self.board.occupied_by(self.side_to_move) {
            moves.extend(
                self.allowed_moves(from)
                    .into_iter()
                    .map(|to| Move::new(from, to)),
            );
        }
        moves
    }

    /// Parses board from Forsyth-Edwards Notation. It will also accept trimmed
    /// FEN (EPD with 4 parts).
    ///
    /// FEN ::=
    ///       Piece Placement
    ///   ' ' Side to move
    ///   ' ' Castling ability
    ///   ' ' En passant target square
    ///   ' ' Halfmove clock
    ///   ' ' Fullmove counter
    ///
    /// The last two parts (together) are optional and will default to "0 1".
    ///
    /// NOTE: This expects properly-formatted inputs: no extra symbols or
    /// additional whitespace. Use [`Position::try_from`] for cleaning up the
    /// input if it is coming from untrusted source and is likely to contain
    /// extra symbols.
    ///
    /// # Errors
    ///
    /// If any of the parts is missing or malformed, or if the en passant
    /// square is not on the rank a pawn could have just passed over.
    pub fn from_fen(input: &str) -> anyhow::Result<Self> {
        let mut parts = input.split(' ');
        let mut result = Self::empty();
        result.board = match parts.next() {
            Some(placement) => Board::from_placement(placement)?,
            None => bail!("incorrect FEN: missing pieces placement"),
        };
        result.side_to_move = match parts.next() {
            Some(value) => value.try_into()?,
            None => bail!("incorrect FEN: missing side to move"),
        };
        result.castling = match parts.next() {
            Some(value) => value.try_into()?,
            None => bail!("incorrect FEN: missing castling rights"),
        };
        result.en_passant_target = match parts.next() {
            Some("-") => None,
            Some(value) => Some(en_passant_target(
                Square::try_from(value).context("incorrect FEN: en passant square")?,
                result.side_to_move,
            )?),
            None => bail!("incorrect FEN: missing en passant square"),
        };
        result.halfmove_clock = match parts.next() {
            Some(value) => {
                if !value.bytes().all(|c| c.is_ascii_digit()) {
                    bail!("halfmove clock can not contain anything other than digits");
                }
                value.parse::<u8>().with_context(|| {
                    format!("incorrect FEN: halfmove clock can not be parsed {value}")
                })?
            },
            // This is a correct EPD: exit early.
            None => return Ok(result),
        };
        result.fullmove_counter = match parts.next() {
            Some(value) => {
                if !value.bytes().all(|c| c.is_ascii_digit()) {
                    bail!("fullmove counter can not contain anything other than digits");
                }
                value.parse::<NonZeroU16>().with_context(|| {
                    format!("incorrect FEN: fullmove counter can not be parsed {value}")
                })?
            },
            None => bail!("incorrect FEN: missing fullmove counter"),
        };
        match parts.next() {
            None => Ok(result),
            Some(_) => bail!("trailing symbols are not allowed in FEN"),
        }
    }
}

/// Converts FEN en passant square (the one the pawn has passed over) into the
/// square of the pawn itself.
fn en_passant_target(passed_over: Square, side_to_move: Player) -> anyhow::Result<Square> {
    let expected_rank = match side_to_move {
        Player::White => Rank::Six,
        Player::Black => Rank::Three,
    };
    if passed_over.rank() != expected_rank {
        bail!(
            "expected en passant square to be on rank {expected_rank}, got {}",
            passed_over.rank()
        );
    }
    let target = passed_over.shift(side_to_move.opponent().push_direction());
    log::debug!("en passant square {passed_over} points to the pawn on {target:?}");
    target.context("en passant square is on the edge of the board")
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl TryFrom<&str> for Position {
    type Error = anyhow::Error;

    /// Trims the input and strips optional `fen ` or `epd ` prefix before
    /// parsing it with [`Position::from_fen`].
    fn try_from(input: &str) -> anyhow::Result<Self> {
        let input = input.trim();
        for prefix in ["fen ", "epd "] {
            if let Some(stripped) = input.strip_prefix(prefix) {
                return Self::from_fen(stripped);
            }
        }
        Self::from_fen(input)
    }
}

impl fmt::Display for Position {
    /// Prints board in Forsyth-Edwards Notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", &self.board)?;
        write!(f, "{} ", &self.side_to_move)?;
        write!(f, "{} ", &self.castling)?;
        match self
            .en_passant_target
            .and_then(|target| target.shift(self.side_to_move.push_direction()))
        {
            Some(square) => write!(f, "{square} "),
            None => write!(f, "- "),
        }?;
        write!(f, "{} ", &self.halfmove_clock)?;
        write!(f, "{}", &self.fullmove_counter)?;
        Ok(())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", &self.board)?;
        writeln!(f, "Player to move: {:?}", &self.side_to_move)?;
        writeln!(f, "Fullmove counter: {:?}", &self.fullmove_counter)?;
        writeln!(f, "En Passant target: {:?}", &self.en_passant_target)?;
        // bitflags' default fmt::Debug implementation is not very convenient:
        // dump FEN instead.
        writeln!(f, "Castling rights: {}", &self.castling)?;
        writeln!(f, "FEN: {self}")?;
        Ok(())
    }
}
