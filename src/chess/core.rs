//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};
use std::mem;

use anyhow::{bail, Context};
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// A pair of squares: where the piece stands and where it goes. The move
/// carries no flags (capture, promotion, castling): these are re-derived from
/// the [`crate::chess::position::Position`] it is played in.
///
/// The textual form is the UCI (long algebraic) one:
///
/// ```
/// use derpfish::chess::core::{Move, Square};
///
/// let m = Move::new(Square::E2, Square::E4);
/// assert_eq!(m.to_string(), "e2e4");
/// assert_eq!(Move::from_uci("e2e4").unwrap(), m);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Parses a move in UCI format (e.g. `e2e4`). A trailing promotion
    /// symbol is accepted and ignored: promotions are not tracked.
    ///
    /// # Errors
    ///
    /// If the input is not two squares followed by an optional promotion
    /// piece.
    pub fn from_uci(input: &str) -> anyhow::Result<Self> {
        if !input.is_ascii() || !(4..=5).contains(&input.len()) {
            bail!("move should be 4 or 5 ascii symbols long, got '{input}'");
        }
        let from = Square::try_from(&input[..2]).context("incorrect move source")?;
        let to = Square::try_from(&input[2..4]).context("incorrect move destination")?;
        if let Some(symbol) = input.chars().nth(4) {
            if !matches!(symbol, 'q' | 'r' | 'b' | 'n') {
                bail!("promotion should be one of 'qrbn', got '{symbol}'");
            }
        }
        Ok(Self::new(from, to))
    }
}

impl fmt::Display for Move {
    /// Serializes a move in [UCI format].
    ///
    /// [UCI format]: http://wbec-ridderkerk.nl/html/UCIProtocol.html
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Board squares: from left to right, from bottom to the top:
///
/// ```
/// use derpfish::chess::core::Square;
///
/// assert_eq!(Square::A1 as u8, 0);
/// assert_eq!(Square::E1 as u8, 4);
/// assert_eq!(Square::H1 as u8, 7);
/// assert_eq!(Square::A4 as u8, 8 * 3);
/// assert_eq!(Square::H8 as u8, 63);
/// ```
///
/// Square is a compact representation using only one byte.
///
/// ```
/// use derpfish::chess::core::Square;
/// use std::mem;
///
/// assert_eq!(std::mem::size_of::<Square>(), 1);
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        // File and Rank are both within 0..BOARD_WIDTH.
        unsafe { mem::transmute(file as u8 + (rank as u8) * BOARD_WIDTH) }
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        unsafe { mem::transmute(self as u8 % BOARD_WIDTH) }
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        unsafe { mem::transmute(self as u8 / BOARD_WIDTH) }
    }

    /// Iterates over all squares in index order (A1, B1, ..., H8).
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).map(|index| unsafe { mem::transmute::<u8, Self>(index) })
    }

    /// Adds a raw index delta to the square. Returns [`None`] when the result
    /// falls outside the board.
    ///
    /// NOTE: This only checks the index range. Horizontal steps can "wrap"
    /// from the H file onto the A file of the next rank (and vice versa), use
    /// [`Square::shift`] when the file change matters.
    #[must_use]
    pub fn offset(self, delta: i8) -> Option<Self> {
        let candidate = i16::from(self as u8) + i16::from(delta);
        u8::try_from(candidate)
            .ok()
            .and_then(|index| Self::try_from(index).ok())
    }

    /// Moves the square one step in the given direction. Returns [`None`] if
    /// the step leaves the board, including the steps that would wrap around
    /// the left or right edge.
    #[must_use]
    pub fn shift(self, direction: Direction) -> Option<Self> {
        let candidate = self.offset(direction.offset())?;
        let file_change = candidate.file() as i8 - self.file() as i8;
        if file_change != direction.file_step() {
            return None;
        }
        Some(candidate)
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;

    /// Creates a square given its position on the board.
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> anyhow::Result<Self> {
        const MAX_INDEX: u8 = BOARD_SIZE - 1;
        match square_index {
            0..=MAX_INDEX => Ok(unsafe { mem::transmute::<u8, Self>(square_index) }),
            _ => bail!("square index should be in 0..BOARD_SIZE, got {square_index}"),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses a square in algebraic notation: file letter `a`..`h` followed by
    /// rank digit `1`..`8`.
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let Some((file, rank)) = square.chars().collect_tuple() else {
            bail!(
                "square should be two-char, got '{square}' with {} chars",
                square.chars().count()
            )
        };
        Ok(Self::new(file.try_into()?, rank.try_into()?))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + *self as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;

    fn try_from(file: char) -> anyhow::Result<Self> {
        match file {
            'a'..='h' => Ok(unsafe { mem::transmute::<u8, Self>(file as u8 - b'a') }),
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        }
    }
}

impl TryFrom<u8> for File {
    type Error = anyhow::Error;

    fn try_from(column: u8) -> anyhow::Result<Self> {
        match column {
            0..=7 => Ok(unsafe { mem::transmute::<u8, Self>(column) }),
            _ => bail!("file should be within 0..BOARD_WIDTH, got {column}"),
        }
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    /// The rank the player's pawns start on: only these pawns can advance by
    /// two squares.
    #[must_use]
    pub const fn pawns_starting(player: Player) -> Self {
        match player {
            Player::White => Self::Two,
            Player::Black => Self::Seven,
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: char) -> anyhow::Result<Self> {
        match rank {
            '1'..='8' => Ok(unsafe { mem::transmute::<u8, Self>(rank as u8 - b'1') }),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;

    fn try_from(row: u8) -> anyhow::Result<Self> {
        match row {
            0..=7 => Ok(unsafe { mem::transmute::<u8, Self>(row) }),
            _ => bail!("rank should be within 0..BOARD_WIDTH, got {row}"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Direction in which the player's pawns advance.
    #[must_use]
    pub const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }

    /// Color bits of the integer piece encoding (see [`Piece::encode`]).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::White => 8,
            Self::Black => 16,
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;

    fn try_from(player: &str) -> anyhow::Result<Self> {
        match player {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("player should be 'w' or 'b', got '{player}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Standard [chess pieces]. The discriminants are the kind codes of the
/// integer piece encoding.
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[repr(u8)]
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    King = 1,
    Pawn = 2,
    Knight = 3,
    Bishop = 4,
    Rook = 5,
    Queen = 6,
}

impl TryFrom<u8> for PieceKind {
    type Error = anyhow::Error;

    fn try_from(code: u8) -> anyhow::Result<Self> {
        match code {
            1 => Ok(Self::King),
            2 => Ok(Self::Pawn),
            3 => Ok(Self::Knight),
            4 => Ok(Self::Bishop),
            5 => Ok(Self::Rook),
            6 => Ok(Self::Queen),
            _ => bail!("piece kind code should be within 1..=6, got {code}"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        })
    }
}

/// Represents a specific piece owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// Packs the piece into a single integer: kind code in the low three bits
    /// and the owner's color bit ([`Player::code`]) above them.
    ///
    /// ```
    /// use derpfish::chess::core::{Piece, PieceKind, Player};
    ///
    /// assert_eq!(Piece::new(Player::White, PieceKind::Rook).encode(), 8 | 5);
    /// assert_eq!(Piece::new(Player::Black, PieceKind::King).encode(), 16 | 1);
    /// ```
    #[must_use]
    pub const fn encode(self) -> u8 {
        self.owner.code() | self.kind as u8
    }

    /// Unpacks a cell value produced by [`Piece::encode`]. Zero stands for an
    /// empty cell.
    ///
    /// # Errors
    ///
    /// If the value is neither zero nor a valid color and kind combination.
    pub fn decode(value: u8) -> anyhow::Result<Option<Self>> {
        if value == 0 {
            return Ok(None);
        }
        let kind = value % 8;
        let owner = match value - kind {
            8 => Player::White,
            16 => Player::Black,
            _ => bail!("encoded piece should have exactly one color bit, got {value}"),
        };
        let kind = PieceKind::try_from(kind)
            .with_context(|| format!("incorrect encoded piece {value}"))?;
        Ok(Some(Self { owner, kind }))
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let kind = match symbol.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        };
        // Uppercase symbols are White's, lowercase are Black's.
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Ok(Self { owner, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.to_string();
        match self.owner {
            Player::White => f.write_str(&symbol.to_ascii_uppercase()),
            Player::Black => f.write_str(&symbol),
        }
    }
}

bitflags::bitflags! {
    /// Track the ability to [castle] each side (kingside is often referred to
    /// as O-O or short castle, queenside -- O-O-O or long castle). When the
    /// king moves, player loses ability to castle both sides. When the rook
    /// moves or is captured, player loses ability to castle its corresponding
    /// side.
    ///
    /// The rights only say whether castling is still *potentially* available:
    /// whether the path between the king and the rook is clear is checked by
    /// the move generator.
    ///
    /// [castle]: https://www.chessprogramming.org/Castling
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CastleRights : u8 {
        #[allow(missing_docs)]
        const NONE = 0;
        #[allow(missing_docs)]
        const WHITE_SHORT = 0b1000;
        #[allow(missing_docs)]
        const WHITE_LONG = 0b0100;
        #[allow(missing_docs)]
        const WHITE_BOTH = Self::WHITE_SHORT.bits() | Self::WHITE_LONG.bits();
        #[allow(missing_docs)]
        const BLACK_SHORT = 0b0010;
        #[allow(missing_docs)]
        const BLACK_LONG = 0b0001;
        #[allow(missing_docs)]
        const BLACK_BOTH = Self::BLACK_SHORT.bits() | Self::BLACK_LONG.bits();
        #[allow(missing_docs)]
        const ALL = Self::WHITE_BOTH.bits() | Self::BLACK_BOTH.bits();
    }
}

impl CastleRights {
    /// Kingside (short) castling right of the player.
    #[must_use]
    pub const fn short(player: Player) -> Self {
        match player {
            Player::White => Self::WHITE_SHORT,
            Player::Black => Self::BLACK_SHORT,
        }
    }

    /// Queenside (long) castling right of the player.
    #[must_use]
    pub const fn long(player: Player) -> Self {
        match player {
            Player::White => Self::WHITE_LONG,
            Player::Black => Self::BLACK_LONG,
        }
    }
}

impl TryFrom<&str> for CastleRights {
    type Error = anyhow::Error;

    /// Parses [`CastleRights`] for both players from the FEN format.
    ///
    /// # Errors
    ///
    /// Returns [`anyhow::Error`] if given pattern does not match
    ///
    /// [`CastleRights`] := - | (K)? (Q)? (k)? (q)?
    ///
    /// The letters have to appear in this order and the input can't be empty.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        if input == "-" {
            return Ok(Self::NONE);
        }
        if input.is_empty() {
            bail!("castle rights can not be empty, use '-' instead");
        }
        const ORDER: [(char, CastleRights); 4] = [
            ('K', CastleRights::WHITE_SHORT),
            ('Q', CastleRights::WHITE_LONG),
            ('k', CastleRights::BLACK_SHORT),
            ('q', CastleRights::BLACK_LONG),
        ];
        let mut result = Self::NONE;
        let mut next = 0;
        for symbol in input.chars() {
            let Some(offset) = ORDER[next..].iter().position(|(s, _)| *s == symbol) else {
                bail!("unknown castle rights: {input}");
            };
            result |= ORDER[next + offset].1;
            next += offset + 1;
        }
        Ok(result)
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::NONE {
            return f.write_char('-');
        }
        if self.contains(Self::WHITE_SHORT) {
            f.write_char('K')?;
        }
        if self.contains(Self::WHITE_LONG) {
            f.write_char('Q')?;
        }
        if self.contains(Self::BLACK_SHORT) {
            f.write_char('k')?;
        }
        if self.contains(Self::BLACK_LONG) {
            f.write_char('q')?;
        }
        Ok(())
    }
}

/// Directions on the board from a perspective of White player.
///
/// Traditionally those are North (Up), West (Left), East (Right), South (Down)
/// and their combinations. However, using cardinal directions is confusing,
/// hence they are replaced by relative directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Also known as NorthWest.
    UpLeft,
    /// Also known as North.
    Up,
    /// Also known as NorthEast.
    UpRight,
    /// Also known as East.
    Right,
    /// Also known as West.
    Left,
    /// Also known as SouthWest.
    DownLeft,
    /// Also known as South.
    Down,
    /// Also known as SouthEast.
    DownRight,
}

impl Direction {
    /// Bishop directions.
    pub const DIAGONAL: [Self; 4] = [Self::UpLeft, Self::UpRight, Self::DownRight, Self::DownLeft];
    /// Rook directions.
    pub const ORTHOGONAL: [Self; 4] = [Self::Right, Self::Up, Self::Left, Self::Down];
    /// Queen and king directions.
    pub const ALL: [Self; 8] = [
        Self::UpLeft,
        Self::UpRight,
        Self::DownRight,
        Self::DownLeft,
        Self::Right,
        Self::Up,
        Self::Left,
        Self::Down,
    ];

    /// Change of the square index after one step.
    #[must_use]
    pub const fn offset(self) -> i8 {
        const WIDTH: i8 = BOARD_WIDTH as i8;
        match self {
            Self::UpLeft => WIDTH - 1,
            Self::Up => WIDTH,
            Self::UpRight => WIDTH + 1,
            Self::Right => 1,
            Self::Left => -1,
            Self::DownLeft => -(WIDTH + 1),
            Self::Down => -WIDTH,
            Self::DownRight => -(WIDTH - 1),
        }
    }

    /// Change of the file after one step: -1, 0 or 1.
    #[must_use]
    pub const fn file_step(self) -> i8 {
        match self {
            Self::UpLeft | Self::Left | Self::DownLeft => -1,
            Self::Up | Self::Down => 0,
            Self::UpRight | Self::Right | Self::DownRight => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use std::mem::size_of;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rank() {
        assert_eq!(
            ('1'..='9')
                .filter_map(|ch| Rank::try_from(ch).ok())
                .collect::<Vec<Rank>>(),
            vec![
                Rank::One,
                Rank::Two,
                Rank::Three,
                Rank::Four,
                Rank::Five,
                Rank::Six,
                Rank::Seven,
                Rank::Eight,
            ]
        );
    }

    #[test]
    #[should_panic(expected = "rank should be within '1'..='8', got '0'")]
    fn rank_from_incorrect_char() {
        let _ = Rank::try_from('0').unwrap();
    }

    #[test]
    #[should_panic(expected = "rank should be within 0..BOARD_WIDTH, got 8")]
    fn rank_from_incorrect_index() {
        let _ = Rank::try_from(BOARD_WIDTH).unwrap();
    }

    #[test]
    fn file() {
        assert_eq!(
            (0..=BOARD_WIDTH)
                .filter_map(|idx| File::try_from(idx).ok())
                .collect::<Vec<File>>(),
            ('a'..='i')
                .filter_map(|ch| File::try_from(ch).ok())
                .collect::<Vec<File>>(),
        );
        assert_eq!(File::try_from('c').unwrap(), File::C);
    }

    #[test]
    #[should_panic(expected = "file should be within 'a'..='h', got 'i'")]
    fn file_from_incorrect_char() {
        let _ = File::try_from('i').unwrap();
    }

    #[test]
    fn square() {
        let squares: Vec<_> = [
            0u8,
            BOARD_SIZE - 1,
            BOARD_WIDTH - 1,
            BOARD_WIDTH,
            BOARD_WIDTH * 2 + 5,
            BOARD_SIZE,
        ]
        .iter()
        .filter_map(|square| Square::try_from(*square).ok())
        .collect();
        assert_eq!(
            squares,
            vec![Square::A1, Square::H8, Square::H1, Square::A2, Square::F3]
        );
        assert_eq!(Square::new(File::E, Rank::Four), Square::E4);
        assert_eq!(Square::try_from("a8").unwrap() as u8, 56);
        assert_eq!(Square::try_from("h1").unwrap() as u8, 7);
        assert_eq!(Square::D5.to_string(), "d5");
        assert_eq!(Square::iter().count(), BOARD_SIZE as usize);
        assert_eq!(Square::iter().last(), Some(Square::H8));
    }

    #[test]
    fn incorrect_squares() {
        assert!(Square::try_from("i1").is_err());
        assert!(Square::try_from("a9").is_err());
        assert!(Square::try_from("a").is_err());
        assert!(Square::try_from("a10").is_err());
        assert!(Square::try_from("").is_err());
        assert!(Square::try_from("é1").is_err());
    }

    #[test]
    #[should_panic(expected = "square index should be in 0..BOARD_SIZE, got 64")]
    fn square_from_incorrect_index() {
        let _ = Square::try_from(BOARD_SIZE).unwrap();
    }

    #[test]
    fn primitive_size() {
        assert_eq!(size_of::<Square>(), 1);
        assert_eq!(size_of::<Option<Piece>>(), size_of::<Piece>());
    }

    #[test]
    fn offsets() {
        assert_eq!(Square::A1.offset(-1), None);
        assert_eq!(Square::H8.offset(1), None);
        // Raw offsets don't care about the file wraparound.
        assert_eq!(Square::H1.offset(1), Some(Square::A2));
        assert_eq!(Square::E4.offset(17), Some(Square::F6));
    }

    #[test]
    fn within_board_shift() {
        let square = Square::E4;
        assert_eq!(square.shift(Direction::Left), Some(Square::D4));
        assert_eq!(square.shift(Direction::Up), Some(Square::E5));
        assert_eq!(square.shift(Direction::UpLeft), Some(Square::D5));
        assert_eq!(square.shift(Direction::UpRight), Some(Square::F5));
        assert_eq!(square.shift(Direction::Right), Some(Square::F4));
        assert_eq!(square.shift(Direction::Down), Some(Square::E3));
        assert_eq!(square.shift(Direction::DownLeft), Some(Square::D3));
        assert_eq!(square.shift(Direction::DownRight), Some(Square::F3));
    }

    #[test]
    fn border_squares_shift() {
        let square = Square::A2;
        assert_eq!(square.shift(Direction::Up), Some(Square::A3));
        assert_eq!(square.shift(Direction::UpRight), Some(Square::B3));
        assert_eq!(square.shift(Direction::Down), Some(Square::A1));
        assert_eq!(square.shift(Direction::DownRight), Some(Square::B1));
        for direction in [Direction::Left, Direction::UpLeft, Direction::DownLeft] {
            assert_eq!(square.shift(direction), None);
        }

        let square = Square::H6;
        assert_eq!(square.shift(Direction::Left), Some(Square::G6));
        assert_eq!(square.shift(Direction::UpLeft), Some(Square::G7));
        assert_eq!(square.shift(Direction::DownLeft), Some(Square::G5));
        for direction in [Direction::Right, Direction::UpRight, Direction::DownRight] {
            assert_eq!(square.shift(direction), None);
        }
    }

    #[test]
    fn corner_squares_shift() {
        let square = Square::A1;
        assert_eq!(square.shift(Direction::Up), Some(Square::A2));
        assert_eq!(square.shift(Direction::UpRight), Some(Square::B2));
        assert_eq!(square.shift(Direction::Right), Some(Square::B1));
        for direction in [
            Direction::Left,
            Direction::UpLeft,
            Direction::Down,
            Direction::DownRight,
            Direction::DownLeft,
        ] {
            assert_eq!(square.shift(direction), None);
        }

        let square = Square::H8;
        assert_eq!(square.shift(Direction::Left), Some(Square::G8));
        assert_eq!(square.shift(Direction::Down), Some(Square::H7));
        assert_eq!(square.shift(Direction::DownLeft), Some(Square::G7));
        for direction in [
            Direction::Up,
            Direction::UpRight,
            Direction::UpLeft,
            Direction::DownRight,
            Direction::Right,
        ] {
            assert_eq!(square.shift(direction), None);
        }
    }

    #[test]
    fn piece_symbols() {
        let white_queen = Piece::try_from('Q').unwrap();
        assert_eq!(white_queen, Piece::new(Player::White, PieceKind::Queen));
        assert_eq!(white_queen.to_string(), "Q");
        let black_knight = Piece::try_from('n').unwrap();
        assert_eq!(black_knight, Piece::new(Player::Black, PieceKind::Knight));
        assert_eq!(black_knight.to_string(), "n");
        assert!(Piece::try_from('x').is_err());
        assert!(Piece::try_from('1').is_err());
    }

    #[test]
    fn piece_encoding() {
        for value in 0..=u8::MAX {
            match Piece::decode(value) {
                Ok(None) => assert_eq!(value, 0),
                Ok(Some(piece)) => {
                    assert_eq!(piece.encode(), value);
                    assert_eq!(piece.kind as u8, value % 8);
                    assert_eq!(piece.owner.code(), value - value % 8);
                },
                Err(_) => (),
            }
        }
        assert_eq!(
            Piece::decode(16 | 2).unwrap(),
            Some(Piece::new(Player::Black, PieceKind::Pawn))
        );
        assert!(Piece::decode(8).is_err());
        assert!(Piece::decode(8 | 7).is_err());
        assert!(Piece::decode(24 | 1).is_err());
    }

    #[test]
    fn castle_rights() {
        assert_eq!(CastleRights::try_from("-").unwrap(), CastleRights::NONE);
        assert_eq!(CastleRights::try_from("KQkq").unwrap(), CastleRights::ALL);
        assert_eq!(
            CastleRights::try_from("Kq").unwrap(),
            CastleRights::WHITE_SHORT | CastleRights::BLACK_LONG
        );
        assert_eq!(CastleRights::try_from("Qk").unwrap().to_string(), "Qk");
        assert_eq!(CastleRights::NONE.to_string(), "-");
        assert_eq!(CastleRights::ALL.to_string(), "KQkq");
        for incorrect in ["", "qk", "KK", "KQkqq", "x", "K-"] {
            assert!(
                CastleRights::try_from(incorrect).is_err(),
                "input: {incorrect}"
            );
        }
    }

    #[test]
    fn moves() {
        assert_eq!(
            Move::from_uci("a7a8q").unwrap(),
            Move::new(Square::A7, Square::A8)
        );
        assert!(Move::from_uci("e2e9").is_err());
        assert!(Move::from_uci("e2").is_err());
        assert!(Move::from_uci("e2e4k").is_err());
    }
}
