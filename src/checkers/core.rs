//! Checkers primitives commonly used within [`crate::checkers`].

use std::fmt;
use std::ops::Not;

use anyhow::bail;
use arrayvec::ArrayVec;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Each side starts with 12 men and the piece count never grows.
pub const MAX_PIECES: usize = 12;

/// Upper bound on the number of moves a side can have: every piece can move in
/// at most four diagonal directions and yields at most one move per direction.
pub const MAX_MOVES: usize = MAX_PIECES * 4;

/// Legal moves are stored on the stack.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// A standard game of draughts is played between two players: Dark (having
/// the advantage of the first turn, starting on rows 1-3) and Light (starting
/// on rows 6-8).
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Row on which men of this player are promoted to kings.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Self::Dark => BOARD_WIDTH - 1,
            Self::Light => 0,
        }
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;

    fn try_from(player: &str) -> anyhow::Result<Self> {
        match player {
            "d" => Ok(Self::Dark),
            "l" => Ok(Self::Light),
            _ => bail!("side to move should be 'd' or 'l', got '{player}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                Self::Dark => 'd',
                Self::Light => 'l',
            }
        )
    }
}

/// Standard draughts pieces: men move one step forward, kings step in all four
/// diagonal directions.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

/// Represents a specific piece owned by a player.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Player,
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Diagonal directions (row delta, column delta) this piece can move in.
    #[must_use]
    pub(super) const fn directions(self) -> &'static [(i8, i8)] {
        match (self.kind, self.owner) {
            (PieceKind::King, _) => ALL_DIRECTIONS,
            (PieceKind::Man, Player::Dark) => UP,
            (PieceKind::Man, Player::Light) => DOWN,
        }
    }

    /// Single-byte code used in the board key. Zero is reserved for empty
    /// cells.
    pub(super) const fn code(self) -> u8 {
        match (self.owner, self.kind) {
            (Player::Dark, PieceKind::Man) => 1,
            (Player::Light, PieceKind::Man) => 2,
            (Player::Dark, PieceKind::King) => 3,
            (Player::Light, PieceKind::King) => 4,
        }
    }
}

const UP: &[(i8, i8)] = &[(1, -1), (1, 1)];
const DOWN: &[(i8, i8)] = &[(-1, -1), (-1, 1)];
// Same order as UP followed by DOWN: generation order is part of the search
// tie-breaking.
const ALL_DIRECTIONS: &[(i8, i8)] = &[(1, -1), (1, 1), (-1, -1), (-1, 1)];

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let owner = if symbol.is_ascii_uppercase() {
            symbol.to_ascii_lowercase()
        } else {
            symbol
        };
        let owner = match owner {
            'd' => Player::Dark,
            'l' => Player::Light,
            _ => bail!("piece symbol should be within \"dlDL\", got '{symbol}'"),
        };
        let kind = if symbol.is_ascii_uppercase() {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        Ok(Self { owner, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match (self.owner, self.kind) {
            (Player::Dark, PieceKind::Man) => 'd',
            (Player::Light, PieceKind::Man) => 'l',
            (Player::Dark, PieceKind::King) => 'D',
            (Player::Light, PieceKind::King) => 'L',
        };
        write!(f, "{symbol}")
    }
}

/// Board cell: from left to right, from bottom to the top. Row 0 is the first
/// row from Dark's side, column 0 is the `a` column.
///
/// ```
/// use checkers::checkers::core::Square;
///
/// let square = Square::new(2, 1).unwrap();
/// assert_eq!(square.row(), 2);
/// assert_eq!(square.column(), 1);
/// assert_eq!(square.to_string(), "b3");
/// assert_eq!(Square::try_from("b3").unwrap(), square);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    index: u8,
}

impl Square {
    /// Creates a square given its zero-based row and column.
    ///
    /// # Errors
    ///
    /// If either coordinate is outside 0..[`BOARD_WIDTH`] range.
    pub fn new(row: u8, column: u8) -> anyhow::Result<Self> {
        if row >= BOARD_WIDTH {
            bail!("row should be within 0..BOARD_WIDTH, got {row}");
        }
        if column >= BOARD_WIDTH {
            bail!("column should be within 0..BOARD_WIDTH, got {column}");
        }
        Ok(Self {
            index: row * BOARD_WIDTH + column,
        })
    }

    /// Returns the square for signed coordinates or [`None`] if they are off
    /// the board.
    #[must_use]
    pub fn from_coordinates(row: i8, column: i8) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let column = u8::try_from(column).ok()?;
        Self::new(row, column).ok()
    }

    /// Iterates over all squares in row-major order, starting from `a1`.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).map(|index| Self { index })
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.index / BOARD_WIDTH
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.index % BOARD_WIDTH
    }

    /// Pieces only ever stand on the dark squares of the board.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        (self.row() + self.column()) % 2 == 1
    }

    /// Returns the square `distance` steps away in the given diagonal
    /// direction, if it is still on the board.
    #[must_use]
    pub fn shift(self, (rows, columns): (i8, i8), distance: i8) -> Option<Self> {
        #[allow(clippy::cast_possible_wrap)]
        let (row, column) = (self.row() as i8, self.column() as i8);
        Self::from_coordinates(row + rows * distance, column + columns * distance)
    }

    pub(super) const fn index(self) -> usize {
        self.index as usize
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses a square from its two-character notation, e.g. `b6`.
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let (column, row) = match square.chars().collect_tuple() {
            Some((column, row)) => (column, row),
            None => bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            ),
        };
        let column = match column {
            'a'..='h' => column as u8 - b'a',
            _ => bail!("column should be within 'a'..='h', got '{column}'"),
        };
        let row = match row {
            '1'..='8' => row as u8 - b'1',
            _ => bail!("row should be within '1'..='8', got '{row}'"),
        };
        Self::new(row, column)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.column()) as char,
            (b'1' + self.row()) as char
        )
    }
}

/// An opponent piece removed from the board by a jump.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Capture {
    /// Where the jumped piece was standing.
    pub square: Square,
    /// Kept so that the exact piece can be put back when the move is undone.
    pub kind: PieceKind,
}

/// Represents a single ply: one piece moving one square diagonally or jumping
/// over an opponent piece. Moves are produced by the move generator of
/// [`crate::checkers::position::Position`] and carry everything needed to
/// apply them and to take them back.
///
/// Chained jumps are not modelled: a jump always removes exactly one piece
/// and passes the turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub(super) from: Square,
    pub(super) to: Square,
    pub(super) capture: Option<Capture>,
    pub(super) promotion: bool,
}

impl Move {
    pub(super) const fn step(from: Square, to: Square, promotion: bool) -> Self {
        Self {
            from,
            to,
            capture: None,
            promotion,
        }
    }

    pub(super) const fn jump(from: Square, to: Square, capture: Capture, promotion: bool) -> Self {
        Self {
            from,
            to,
            capture: Some(capture),
            promotion,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Returns `true` for moves capturing an opponent piece.
    #[must_use]
    pub const fn is_jump(&self) -> bool {
        self.capture.is_some()
    }

    /// Square of the jumped piece, empty for regular steps.
    #[must_use]
    pub fn captured(&self) -> Option<Square> {
        self.capture.map(|capture| capture.square)
    }

    /// Returns `true` if the move turns a man into a king.
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.promotion
    }
}

impl fmt::Display for Move {
    /// Serializes a move in the standard draughts notation: `c3-d4` for
    /// steps and `c3xe5` for jumps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.is_jump() { 'x' } else { '-' };
        write!(f, "{}{separator}{}", self.from, self.to)
    }
}
