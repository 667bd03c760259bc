//! Implementation of [Minimax] algorithm with [Alpha-Beta pruning] extension.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax
//! [Alpha-Beta pruning]: https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning

use crate::checkers::core::Player;
use crate::checkers::position::Position;
use crate::evaluation::{evaluate, Value};
use crate::search::{Depth, Searcher};

impl Searcher {
    /// Returns the value of the position searched `depth` plies deep. Dark is
    /// the maximizing player: `maximizing` selects whose moves are explored at
    /// this node. The search is cut off as soon as `beta <= alpha`.
    ///
    /// Positions with no depth left and finished games are evaluated
    /// statically. Values of other positions are looked up in and stored to the
    /// transposition table.
    ///
    /// The position is restored to its original state before returning.
    pub fn minimax(
        &mut self,
        position: &mut Position,
        depth: Depth,
        maximizing: bool,
        mut alpha: Value,
        mut beta: Value,
    ) -> Value {
        self.nodes += 1;
        if depth == 0 || position.is_game_over() {
            return evaluate(position);
        }
        let key = position.key();
        if let Some(value) = self.table.probe(&key) {
            self.table_hits += 1;
            return value;
        }

        let player = if maximizing {
            Player::Dark
        } else {
            Player::Light
        };
        let mut moves = position.generate_moves(player);
        // Captures first.
        moves.sort_by_key(|candidate| !candidate.is_jump());

        let mut best = if maximizing { Value::MIN } else { Value::MAX };
        for next_move in &moves {
            position.play(next_move);
            let value = self.minimax(position, depth - 1, !maximizing, alpha, beta);
            position.undo(next_move);
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if beta <= alpha {
                break;
            }
        }

        self.table.store(key, best);
        best
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn minimax(layout: &str, depth: Depth, maximizing: bool) -> Value {
        let mut position = Position::try_from(layout).unwrap();
        let original = position.clone();
        let value = Searcher::new(0).minimax(&mut position, depth, maximizing, Value::MIN, Value::MAX);
        assert_eq!(position, original);
        value
    }

    #[test]
    fn starting_position() {
        let starting = Position::starting().to_string();
        assert_eq!(minimax(&starting, 0, true), 0);
        // The best first step advances a man by one row.
        assert_eq!(minimax(&starting, 1, true), 5);
        assert_eq!(minimax(&starting, 1, false), -5);
        assert_eq!(minimax(&starting, 2, true), 0);
    }

    #[test]
    fn finished_game() {
        // Evaluated statically regardless of depth.
        assert_eq!(minimax("8/8/8/8/2d5/8/8/8 l", 6, false), 115);
        assert_eq!(minimax("8/8/8/8/2d5/8/8/8 l", 6, true), 115);
        assert_eq!(minimax("8/8/8/8/8/8/8/8 d", 3, true), 0);
    }

    #[test]
    fn capture() {
        // Dark takes the only Light man.
        assert_eq!(minimax("8/8/8/8/4l3/3d4/8/8 d", 1, true), 120);
        // Light takes the only Dark man.
        assert_eq!(minimax("8/8/8/8/4l3/3d4/8/8 l", 1, false), -130);
    }

    #[test]
    fn table_hits() {
        let mut position = Position::starting();
        let mut cached = Searcher::default();
        let _ = cached.minimax(&mut position, 4, true, Value::MIN, Value::MAX);
        let mut uncached = Searcher::new(0);
        let _ = uncached.minimax(&mut position, 4, true, Value::MIN, Value::MAX);
        assert_eq!(uncached.table_hits, 0);
        assert!(cached.table_hits > 0);
        assert!(cached.nodes < uncached.nodes);
    }
}
