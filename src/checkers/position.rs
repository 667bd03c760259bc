//! Provides fully-specified draughts position: the board with all pieces on
//! it and the side to move.
//!
//! Move making and unmaking also live here as the only ways of mutating
//! [`Position`]. The move generator is implemented in a sibling module.

use std::fmt;

use anyhow::{bail, Context};
use itertools::Itertools;

use crate::checkers::core::{
    Move,
    Piece,
    PieceKind,
    Player,
    Square,
    BOARD_SIZE,
    BOARD_WIDTH,
    MAX_PIECES,
};

/// Rows each side fills at the start of the game.
const STARTING_ROWS: u8 = 3;

/// Canonical byte encoding of the board contents: one byte per cell. The side
/// to move is not part of the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key([u8; BOARD_SIZE as usize]);

/// State of the game: the 8×8 board and the side to move.
///
/// [`Position::from_layout`] and [`fmt::Display`] provide a compact textual
/// representation similar to Forsyth-Edwards Notation: rows from the 8th to
/// the 1st separated by `/`, `d`/`l` for men, `D`/`L` for kings, digits for
/// runs of empty cells, then the side to move.
///
/// ```
/// use checkers::checkers::position::Position;
///
/// let position = Position::starting();
/// assert_eq!(
///     position.to_string(),
///     "l1l1l1l1/1l1l1l1l/l1l1l1l1/8/8/1d1d1d1d/d1d1d1d1/1d1d1d1d d"
/// );
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    board: [Option<Piece>; BOARD_SIZE as usize],
    side_to_move: Player,
}

impl Position {
    /// Creates the starting position: Dark men on the playable squares of rows
    /// 1-3, Light men on rows 6-8, Dark to move.
    #[must_use]
    pub fn starting() -> Self {
        let mut result = Self::empty();
        for square in Square::iter().filter(|square| square.is_playable()) {
            let owner = match square.row() {
                row if row < STARTING_ROWS => Player::Dark,
                row if row >= BOARD_WIDTH - STARTING_ROWS => Player::Light,
                _ => continue,
            };
            result.board[square.index()] = Some(Piece::new(owner, PieceKind::Man));
        }
        result
    }

    /// Creates an empty board to be filled by parser.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            board: [None; BOARD_SIZE as usize],
            side_to_move: Player::Dark,
        }
    }

    /// Side to move.
    #[must_use]
    pub const fn us(&self) -> Player {
        self.side_to_move
    }

    /// Side waiting for its turn.
    #[must_use]
    pub const fn they(&self) -> Player {
        self.us().opponent()
    }

    /// Returns the piece standing on the square, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    /// Iterates over all pieces of the player along with their squares.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| match self.at(square) {
            Some(piece) if piece.owner == player => Some((square, piece)),
            _ => None,
        })
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn num_pieces(&self) -> usize {
        self.board.iter().flatten().count()
    }

    /// Returns the board encoding used for caching evaluations.
    #[must_use]
    pub fn key(&self) -> Key {
        let mut key = [0; BOARD_SIZE as usize];
        for (code, cell) in key.iter_mut().zip(self.board.iter()) {
            *code = cell.map_or(0, Piece::code);
        }
        Key(key)
    }

    /// Applies the move if it is one of the legal moves of the piece on its
    /// starting square. Returns `false` and leaves the position untouched
    /// otherwise.
    ///
    /// Legality is checked per piece: a side that has a capture with some
    /// other piece can still make a regular step. Use
    /// [`Position::legal_moves`] to get moves respecting the mandatory capture
    /// rule for the whole side.
    #[must_use]
    pub fn make_move(&mut self, next_move: &Move) -> bool {
        if !self.moves_from(next_move.from()).contains(next_move) {
            log::debug!("rejected illegal move {next_move} in {self}");
            return false;
        }
        self.play(next_move);
        true
    }

    /// Takes back the move most recently applied to this position. Calling it
    /// with any other move leaves the position in an unspecified state.
    pub fn unmake_move(&mut self, last_move: &Move) {
        debug_assert!(self.at(last_move.from()).is_none());
        debug_assert_eq!(
            self.at(last_move.to()).map(|piece| piece.owner),
            Some(self.they())
        );
        self.undo(last_move);
    }

    /// Applies the move without checking legality.
    pub(crate) fn play(&mut self, next_move: &Move) {
        let Some(piece) = self.board[next_move.from.index()].take() else {
            unreachable!("move {next_move} does not start from an occupied square");
        };
        if let Some(capture) = next_move.capture {
            self.board[capture.square.index()] = None;
        }
        let piece = if next_move.promotion {
            Piece::new(piece.owner, PieceKind::King)
        } else {
            piece
        };
        self.board[next_move.to.index()] = Some(piece);
        self.side_to_move = self.they();
    }

    pub(crate) fn undo(&mut self, last_move: &Move) {
        self.side_to_move = self.they();
        let Some(piece) = self.board[last_move.to.index()].take() else {
            unreachable!("move {last_move} does not end on an occupied square");
        };
        if let Some(capture) = last_move.capture {
            self.board[capture.square.index()] = Some(Piece::new(!piece.owner, capture.kind));
        }
        let piece = if last_move.promotion {
            Piece::new(piece.owner, PieceKind::Man)
        } else {
            piece
        };
        self.board[last_move.from.index()] = Some(piece);
    }

    /// Parses the position from its compact textual layout (see
    /// [`Position`]).
    ///
    /// # Errors
    ///
    /// The layout is malformed or describes a position that can not occur in a
    /// game: pieces on the light squares, men on their promotion row or more
    /// than 12 pieces of one side.
    pub fn from_layout(input: &str) -> anyhow::Result<Self> {
        let input = input.trim();
        let Some((placement, side_to_move)) = input.split_once(' ') else {
            bail!("incorrect layout: missing side to move in '{input}'");
        };
        let rows = placement.split('/').collect_vec();
        if rows.len() != BOARD_WIDTH as usize {
            bail!(
                "incorrect layout: expected {BOARD_WIDTH} rows, got {}",
                rows.len()
            );
        }
        let mut result = Self::empty();
        for (&row_layout, row) in rows.iter().zip((0..BOARD_WIDTH).rev()) {
            let mut column: u8 = 0;
            for symbol in row_layout.chars() {
                if column >= BOARD_WIDTH {
                    bail!("incorrect layout: row '{row_layout}' has more than {BOARD_WIDTH} cells");
                }
                match symbol {
                    '.' => column += 1,
                    '1'..='8' => column += symbol as u8 - b'0',
                    _ => {
                        let piece = Piece::try_from(symbol)?;
                        let square = Square::new(row, column)?;
                        result.put(square, piece)?;
                        column += 1;
                    },
                }
            }
            if column != BOARD_WIDTH {
                bail!(
                    "incorrect layout: row size should be exactly {BOARD_WIDTH}, got '{row_layout}' of length {column}"
                );
            }
        }
        result.side_to_move = Player::try_from(side_to_move)
            .with_context(|| format!("incorrect layout: '{input}'"))?;
        for player in [Player::Dark, Player::Light] {
            let count = result.pieces(player).count();
            if count > MAX_PIECES {
                bail!("expected <= {MAX_PIECES} {player:?} pieces, got {count}");
            }
        }
        Ok(result)
    }

    fn put(&mut self, square: Square, piece: Piece) -> anyhow::Result<()> {
        if !square.is_playable() {
            bail!("pieces can only be placed on dark squares, got {piece} on {square}");
        }
        if !piece.is_king() && square.row() == piece.owner.promotion_row() {
            bail!("men can not be placed on their promotion row, got {piece} on {square}");
        }
        self.board[square.index()] = Some(piece);
        Ok(())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl TryFrom<&str> for Position {
    type Error = anyhow::Error;

    fn try_from(input: &str) -> anyhow::Result<Self> {
        Self::from_layout(input)
    }
}

impl fmt::Display for Position {
    /// Prints the position in its compact layout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_WIDTH).rev() {
            let mut empty_cells = 0;
            for column in 0..BOARD_WIDTH {
                match self.board[(row * BOARD_WIDTH + column) as usize] {
                    Some(piece) => {
                        if empty_cells != 0 {
                            write!(f, "{empty_cells}")?;
                            empty_cells = 0;
                        }
                        write!(f, "{piece}")?;
                    },
                    None => empty_cells += 1,
                }
            }
            if empty_cells != 0 {
                write!(f, "{empty_cells}")?;
            }
            if row != 0 {
                const ROW_SEPARATOR: char = '/';
                write!(f, "{ROW_SEPARATOR}")?;
            }
        }
        write!(f, " {}", self.side_to_move)
    }
}

impl fmt::Debug for Position {
    /// Draws the board as a grid ('.' for empty cells, layout symbol for
    /// pieces) with row and column labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_WIDTH).rev() {
            write!(f, "{} |", row + 1)?;
            for column in 0..BOARD_WIDTH {
                match self.board[(row * BOARD_WIDTH + column) as usize] {
                    Some(piece) => write!(f, " {piece}"),
                    None => write!(f, " ."),
                }?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  +----------------")?;
        writeln!(f, "    a b c d e f g h")?;
        write!(f, "{:?} to move", self.side_to_move)
    }
}

/// [Perft] (**per**formance **t**esting) is a technique for checking
/// correctness of move generation by traversing the tree of possible positions
/// (nodes) and calculating all the leaf nodes at certain depth.
///
/// The position is restored before returning.
///
/// [Perft]: https://www.chessprogramming.org/Perft
#[must_use]
pub fn perft(position: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = position.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for next_move in &moves {
        position.play(next_move);
        nodes += perft(position, depth - 1);
        position.undo(next_move);
    }
    nodes
}
