//! Implements the search for the best move: [Minimax] with [Alpha-Beta
//! pruning] on top of a [Transposition Table].
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax
//! [Alpha-Beta pruning]: https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
//! [Transposition Table]: https://www.chessprogramming.org/Transposition_Table

use std::fmt;

use crate::checkers::core::{Move, MoveList, Player};
use crate::checkers::position::Position;
use crate::evaluation::{evaluate, Value};

mod minimax;
mod transposition;

use transposition::TranspositionTable;

/// Search depth in plies.
pub type Depth = u8;

/// Default number of positions kept in the transposition table during a single
/// search.
pub const DEFAULT_TABLE_CAPACITY: usize = 1 << 20;

/// Strength of the computer player: deeper searches play better but take
/// longer.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of plies searched at this difficulty.
    #[must_use]
    pub const fn depth(self) -> Depth {
        match self {
            Self::Easy => 2,
            Self::Medium => 4,
            Self::Hard => 6,
        }
    }
}

/// Maps the levels 1, 2 and 3 to [`Difficulty::Easy`], [`Difficulty::Medium`]
/// and [`Difficulty::Hard`]. Any other level falls back to the medium one.
impl From<u8> for Difficulty {
    fn from(level: u8) -> Self {
        match level {
            1 => Self::Easy,
            3 => Self::Hard,
            _ => Self::Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };
        write!(f, "{name}")
    }
}

/// Outcome of the search from the root position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for the side to move or [`None`] if it has no moves.
    pub best_move: Option<Move>,
    /// Value of the best move from the perspective of the side to move:
    /// positive values are good for it.
    pub score: Value,
    /// Number of positions visited by the search.
    pub nodes: u64,
}

/// Finds the best moves. Owns the transposition table that is reused between
/// searches to avoid reallocations but cleared at the start of each of them.
pub struct Searcher {
    table: TranspositionTable,
    nodes: u64,
    table_hits: u64,
}

impl Searcher {
    /// Creates the searcher that keeps at most `table_capacity` positions in
    /// its transposition table. Capacity of 0 disables the table.
    #[must_use]
    pub fn new(table_capacity: usize) -> Self {
        Self {
            table: TranspositionTable::new(table_capacity),
            nodes: 0,
            table_hits: 0,
        }
    }

    /// Picks the move for the side to move at the given difficulty. Returns
    /// [`None`] if there are no legal moves.
    ///
    /// The position is restored to its original state before returning.
    ///
    /// ```
    /// use checkers::checkers::position::Position;
    /// use checkers::search::{Difficulty, Searcher};
    ///
    /// let mut position = Position::starting();
    /// let mut searcher = Searcher::default();
    /// let best_move = searcher.best_move(&mut position, Difficulty::Easy);
    /// assert!(best_move.is_some());
    /// assert_eq!(position, Position::starting());
    /// ```
    #[must_use]
    pub fn best_move(&mut self, position: &mut Position, difficulty: Difficulty) -> Option<Move> {
        self.search(position, difficulty.depth()).best_move
    }

    /// Searches all legal moves of the side to move `depth` plies deep and
    /// returns the one with the best score for that side. Ties are resolved in
    /// favor of the move generated first.
    ///
    /// Depth 0 does not look at the moves at all: the result has no best move
    /// and the static score of the position.
    ///
    /// The position is restored to its original state before returning.
    pub fn search(&mut self, position: &mut Position, depth: Depth) -> SearchResult {
        self.table.clear();
        self.nodes = 0;
        self.table_hits = 0;

        let mover = position.us();
        let perspective = match mover {
            Player::Dark => 1,
            Player::Light => -1,
        };
        let mut best: Option<(Move, Value)> = None;
        let candidates = if depth == 0 {
            MoveList::new()
        } else {
            position.legal_moves()
        };
        for next_move in candidates {
            position.play(&next_move);
            let value = self.minimax(
                position,
                depth - 1,
                mover == Player::Light,
                Value::MIN,
                Value::MAX,
            );
            position.undo(&next_move);
            let score = perspective * value;
            log::trace!("{next_move}: {score}");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((next_move, score));
            }
        }

        let result = SearchResult {
            best_move: best.map(|(best_move, _)| best_move),
            score: best.map_or_else(|| perspective * evaluate(position), |(_, score)| score),
            nodes: self.nodes,
        };
        log::debug!(
            "{mover:?} searched depth {depth}: best move {}, score {}, {} nodes, {} table hits, {} table entries",
            result
                .best_move
                .map_or_else(|| "none".to_string(), |best_move| best_move.to_string()),
            result.score,
            result.nodes,
            self.table_hits,
            self.table.len(),
        );
        result
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_CAPACITY)
    }
}
