//! Square-centric ([mailbox]) board representation: every square holds either
//! a [`Piece`] or nothing.
//!
//! The board only knows where the pieces are. Everything else about the game
//! (whose turn it is, castling, en passant) is kept in
//! [`crate::chess::position::Position`].
//!
//! [mailbox]: https://www.chessprogramming.org/Mailbox

use std::fmt::{self, Write};

use anyhow::{bail, Context};

use crate::chess::core::{File, Piece, Player, Rank, Square, BOARD_SIZE, BOARD_WIDTH};

/// Piece placement on all 64 squares, indexed by [`Square`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Piece placement of the standard starting position.
    pub const STARTING_PLACEMENT: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Pieces in the standard starting position.
    ///
    /// ```
    /// use derpfish::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        match Self::from_placement(Self::STARTING_PLACEMENT) {
            Ok(board) => board,
            Err(e) => unreachable!("starting placement is valid: {e}"),
        }
    }

    /// Parses the piece placement part of [Forsyth-Edwards Notation]: ranks
    /// from 8 down to 1 separated by `/`, within each rank digits skip that
    /// many empty files and letters place a piece (uppercase for White,
    /// lowercase for Black).
    ///
    /// # Errors
    ///
    /// The input should have exactly 8 ranks and every rank should describe
    /// exactly 8 files. Unknown symbols and `0` runs are rejected.
    ///
    /// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    pub fn from_placement(placement: &str) -> anyhow::Result<Self> {
        let mut result = Self::empty();
        let mut rank_id = BOARD_WIDTH;
        for rank_fen in placement.split('/') {
            if rank_id == 0 {
                bail!("incorrect FEN: expected 8 ranks, got {placement}");
            }
            rank_id -= 1;
            let rank = Rank::try_from(rank_id)?;
            let mut file: u8 = 0;
            for symbol in rank_fen.chars() {
                if file >= BOARD_WIDTH {
                    bail!("incorrect FEN: rank {rank} is longer than {BOARD_WIDTH} files: {rank_fen}");
                }
                match symbol {
                    '0' => bail!("incorrect FEN: increment can not be 0"),
                    '1'..='9' => {
                        file += symbol as u8 - b'0';
                        continue;
                    },
                    _ => (),
                }
                let piece = Piece::try_from(symbol)
                    .with_context(|| format!("incorrect FEN: rank {rank} is {rank_fen}"))?;
                result.squares[Square::new(File::try_from(file)?, rank) as usize] = Some(piece);
                file += 1;
            }
            if file != BOARD_WIDTH {
                bail!(
                    "incorrect FEN: rank size should be exactly {BOARD_WIDTH}, got {rank_fen} of length {file}"
                );
            }
        }
        if rank_id != 0 {
            bail!("incorrect FEN: there should be 8 ranks, got {placement}");
        }
        Ok(result)
    }

    /// Piece standing on the square, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    /// Puts the piece on the square, replacing whatever was there.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square as usize] = piece;
    }

    /// The square holds no piece.
    #[must_use]
    pub const fn is_empty(&self, square: Square) -> bool {
        self.at(square).is_none()
    }

    /// The square holds a piece of `player`'s opponent.
    #[must_use]
    pub fn is_enemy(&self, square: Square, player: Player) -> bool {
        self.at(square).is_some_and(|piece| piece.owner != player)
    }

    /// The square holds one of `player`'s own pieces.
    #[must_use]
    pub fn is_friendly(&self, square: Square, player: Player) -> bool {
        self.at(square).is_some_and(|piece| piece.owner == player)
    }

    /// `player` can put a piece on the square: it is either empty or the
    /// opponent's piece can be captured there. This is the complement of
    /// [`Board::is_friendly`].
    #[must_use]
    pub fn is_empty_or_enemy(&self, square: Square, player: Player) -> bool {
        !self.is_friendly(square, player)
    }

    /// Squares occupied by `player`'s pieces, in index order.
    pub fn occupied_by(&self, player: Player) -> impl Iterator<Item = Square> + '_ {
        Square::iter().filter(move |&square| self.is_friendly(square, player))
    }

    /// Dumps the cells in the integer encoding (see [`Piece::encode`]), index
    /// by square.
    #[must_use]
    pub fn encode(&self) -> [u8; BOARD_SIZE as usize] {
        self.squares.map(|cell| cell.map_or(0, Piece::encode))
    }

    /// Restores a board from [`Board::encode`] output.
    ///
    /// # Errors
    ///
    /// If any of the cells is not a valid encoded piece.
    pub fn decode(cells: &[u8; BOARD_SIZE as usize]) -> anyhow::Result<Self> {
        let mut result = Self::empty();
        for (square, &value) in Square::iter().zip(cells.iter()) {
            result.set(
                square,
                Piece::decode(value).with_context(|| format!("incorrect cell {square}"))?,
            );
        }
        Ok(result)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Display for Board {
    /// Prints the piece placement part of Forsyth-Edwards Notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank_id in (0..BOARD_WIDTH).rev() {
            let mut empty_squares = 0;
            for file_id in 0..BOARD_WIDTH {
                let square = Square::new(
                    File::try_from(file_id).map_err(|_| fmt::Error)?,
                    Rank::try_from(rank_id).map_err(|_| fmt::Error)?,
                );
                match self.at(square) {
                    Some(piece) => {
                        if empty_squares != 0 {
                            write!(f, "{empty_squares}")?;
                            empty_squares = 0;
                        }
                        write!(f, "{piece}")?;
                    },
                    None => empty_squares += 1,
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if rank_id != 0 {
                f.write_char('/')?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Prints the board as a diagram from White's perspective, empty squares
    /// are dots.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank_id in (0..BOARD_WIDTH).rev() {
            for file_id in 0..BOARD_WIDTH {
                let square = Square::try_from(rank_id * BOARD_WIDTH + file_id)
                    .map_err(|_| fmt::Error)?;
                match self.at(square) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => f.write_char('.')?,
                }
                if file_id != BOARD_WIDTH - 1 {
                    f.write_char(' ')?;
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
