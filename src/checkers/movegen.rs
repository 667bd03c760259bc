//! Legal move generation.
//!
//! Every piece looks at the diagonal neighbours in the directions it is
//! allowed to move in: an empty neighbour is a step, an opponent neighbour
//! with an empty square right behind it is a jump. Jumps are mandatory: if any
//! piece of a side can jump, the side has to jump.

use crate::checkers::core::{Capture, Move, MoveList, Piece, Player, Square};
use crate::checkers::position::Position;

impl Position {
    /// Returns the moves of the piece standing on the square. The list is empty
    /// if the square is empty or the piece does not belong to the side to move.
    /// Once the piece can jump, its regular steps are not returned.
    #[must_use]
    pub fn moves_from(&self, square: Square) -> MoveList {
        let mut jumps = MoveList::new();
        let mut steps = MoveList::new();
        if let Some(piece) = self.at(square) {
            if piece.owner == self.us() {
                self.piece_moves(square, piece, &mut jumps, &mut steps);
            }
        }
        if jumps.is_empty() {
            steps
        } else {
            jumps
        }
    }

    /// Same as [`Position::moves_from`] for raw coordinates: off-board cells
    /// have no moves.
    #[must_use]
    pub fn moves_at(&self, row: i8, column: i8) -> MoveList {
        Square::from_coordinates(row, column)
            .map_or_else(MoveList::new, |square| self.moves_from(square))
    }

    /// Calculates all moves of the player's pieces, regardless of whose turn it
    /// is. If any of the pieces can jump, only jumps are returned.
    ///
    /// Moves are ordered by the starting square (`a1`, `b1`, ..., `h8`) and
    /// then by direction, which makes the order stable between calls.
    #[must_use]
    pub fn generate_moves(&self, player: Player) -> MoveList {
        let mut jumps = MoveList::new();
        let mut steps = MoveList::new();
        for (square, piece) in self.pieces(player) {
            self.piece_moves(square, piece, &mut jumps, &mut steps);
        }
        if jumps.is_empty() {
            steps
        } else {
            jumps
        }
    }

    /// Moves available to the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.generate_moves(self.us())
    }

    /// Returns the legal move of the piece on `from` that ends on `to`, if
    /// there is one.
    #[must_use]
    pub fn find_move(&self, from: Square, to: Square) -> Option<Move> {
        self.moves_from(from)
            .into_iter()
            .find(|candidate| candidate.to() == to)
    }

    /// The game is over as soon as either side is left without moves: it has
    /// no pieces or all of them are blocked.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.generate_moves(Player::Dark).is_empty() || self.generate_moves(Player::Light).is_empty()
    }

    /// Returns the player who won the game or [`None`] if the game is still
    /// going. The side to move loses if it can not move, otherwise the game is
    /// won by the side to move once its opponent is out of moves.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        if self.legal_moves().is_empty() {
            Some(self.they())
        } else if self.generate_moves(self.they()).is_empty() {
            Some(self.us())
        } else {
            None
        }
    }

    fn piece_moves(&self, from: Square, piece: Piece, jumps: &mut MoveList, steps: &mut MoveList) {
        for &direction in piece.directions() {
            let Some(neighbour) = from.shift(direction, 1) else {
                continue;
            };
            match self.at(neighbour) {
                None => steps.push(Move::step(from, neighbour, promotes(piece, neighbour))),
                Some(jumped) if jumped.owner != piece.owner => {
                    let Some(landing) = from.shift(direction, 2) else {
                        continue;
                    };
                    if self.at(landing).is_none() {
                        let capture = Capture {
                            square: neighbour,
                            kind: jumped.kind,
                        };
                        jumps.push(Move::jump(from, landing, capture, promotes(piece, landing)));
                    }
                },
                Some(_) => {},
            }
        }
    }
}

fn promotes(piece: Piece, to: Square) -> bool {
    !piece.is_king() && to.row() == piece.owner.promotion_row()
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;

    fn setup(layout: &str) -> Position {
        Position::try_from(layout).unwrap_or_else(|e| panic!("invalid layout {layout}: {e}"))
    }

    fn square(notation: &str) -> Square {
        Square::try_from(notation).unwrap()
    }

    fn notation(moves: &MoveList) -> Vec<String> {
        moves.iter().map(ToString::to_string).collect_vec()
    }

    #[test]
    fn starting_position() {
        let position = Position::starting();
        assert_eq!(
            notation(&position.legal_moves()),
            ["b3-a4", "b3-c4", "d3-c4", "d3-e4", "f3-e4", "f3-g4", "h3-g4"]
        );
        assert_eq!(
            notation(&position.generate_moves(Player::Light)),
            ["a6-b5", "c6-b5", "c6-d5", "e6-d5", "e6-f5", "g6-f5", "g6-h5"]
        );
        // Back rows are blocked.
        assert!(position.moves_from(square("b1")).is_empty());
        assert!(position.moves_from(square("d1")).is_empty());
        assert_eq!(notation(&position.moves_from(square("h3"))), ["h3-g4"]);
    }

    #[test]
    fn no_moves_for_wrong_cells() {
        let position = Position::starting();
        // Empty cell.
        assert!(position.moves_from(square("d4")).is_empty());
        // Opponent piece.
        assert!(position.moves_from(square("a6")).is_empty());
        // Off the board.
        assert!(position.moves_at(-1, 0).is_empty());
        assert!(position.moves_at(3, 8).is_empty());
        assert!(position.moves_at(8, 8).is_empty());
        // Same as the notation.
        assert_eq!(position.moves_at(2, 1), position.moves_from(square("b3")));
    }

    #[test]
    fn men_move_forward() {
        let position = setup("8/8/8/8/2d5/8/8/8 d");
        assert_eq!(notation(&position.legal_moves()), ["c4-b5", "c4-d5"]);
        let position = setup("8/8/8/8/2l5/8/8/8 l");
        assert_eq!(notation(&position.legal_moves()), ["c4-b3", "c4-d3"]);
    }

    #[test]
    fn kings_move_in_all_directions() {
        let position = setup("8/8/8/8/2D5/8/8/8 d");
        assert_eq!(
            notation(&position.legal_moves()),
            ["c4-b5", "c4-d5", "c4-b3", "c4-d3"]
        );
        let position = setup("8/8/8/8/2L5/8/8/8 l");
        assert_eq!(
            notation(&position.legal_moves()),
            ["c4-b5", "c4-d5", "c4-b3", "c4-d3"]
        );
        // Corner.
        let position = setup("L7/8/8/8/8/8/8/8 l");
        assert_eq!(notation(&position.legal_moves()), ["a8-b7"]);
    }

    #[test]
    fn kings_jump_backwards() {
        let position = setup("8/8/8/8/2D5/3l4/8/8 d");
        assert_eq!(notation(&position.legal_moves()), ["c4xe2"]);
        let capture = position.legal_moves()[0];
        assert_eq!(capture.captured(), Some(square("d3")));
    }

    #[test]
    fn men_do_not_jump_backwards() {
        let position = setup("8/8/8/8/2d5/3l4/8/8 d");
        assert_eq!(notation(&position.legal_moves()), ["c4-b5", "c4-d5"]);
    }

    #[test]
    fn jump_needs_empty_landing() {
        // Landing occupied by an opponent piece.
        let position = setup("8/8/4l3/3l4/2d5/8/8/8 d");
        assert_eq!(notation(&position.legal_moves()), ["c4-b5"]);
        // Landing occupied by our piece.
        let position = setup("8/8/4d3/3l4/2d5/8/8/8 d");
        assert_eq!(notation(&position.legal_moves()), ["c4-b5", "e6-d7", "e6-f7"]);
        // Landing off the board.
        let position = setup("8/8/8/8/8/8/l7/1d6 d");
        assert_eq!(notation(&position.legal_moves()), ["b1-c2"]);
    }

    #[test]
    fn own_pieces_block() {
        let position = setup("8/8/8/3d4/2d5/8/8/8 d");
        assert_eq!(
            notation(&position.legal_moves()),
            ["c4-b5", "d5-c6", "d5-e6"]
        );
    }

    #[test]
    fn mandatory_capture() {
        // d3 can jump e4 while h3 could only step.
        let position = setup("8/8/8/8/4l3/3d3d/8/8 d");
        assert_eq!(notation(&position.legal_moves()), ["d3xf5"]);
        // Each piece on its own still reports its moves.
        assert_eq!(notation(&position.moves_from(square("h3"))), ["h3-g4"]);
        assert_eq!(notation(&position.moves_from(square("d3"))), ["d3xf5"]);
        // The per-piece rule suppresses steps of the jumping piece only.
        let position = setup("8/8/8/8/2l5/3d4/8/8 d");
        assert_eq!(notation(&position.moves_from(square("d3"))), ["d3xb5"]);
    }

    #[test]
    fn multiple_captures() {
        let position = setup("8/8/8/8/2l1l3/3d4/8/8 d");
        assert_eq!(notation(&position.legal_moves()), ["d3xb5", "d3xf5"]);
        assert!(position.legal_moves().iter().all(Move::is_jump));
    }

    #[test]
    fn jump_promotes() {
        let position = setup("8/3l4/2d5/8/8/8/8/8 d");
        let moves = position.legal_moves();
        assert_eq!(notation(&moves), ["c6xe8"]);
        assert!(moves[0].is_promotion());
    }

    #[test]
    fn find_move() {
        let position = Position::starting();
        let next_move = position.find_move(square("d3"), square("e4")).unwrap();
        assert_eq!(next_move.to_string(), "d3-e4");
        assert_eq!(position.find_move(square("d3"), square("d4")), None);
        assert_eq!(position.find_move(square("d6"), square("e5")), None);
    }

    #[test]
    fn game_over() {
        assert!(!Position::starting().is_game_over());
        assert_eq!(Position::starting().winner(), None);

        // Empty board.
        let position = setup("8/8/8/8/8/8/8/8 d");
        assert!(position.is_game_over());
        assert!(position.legal_moves().is_empty());

        // Light has no pieces left.
        let position = setup("8/8/8/8/2d5/8/8/8 l");
        assert!(position.is_game_over());
        assert_eq!(position.winner(), Some(Player::Dark));
        let position = setup("8/8/8/8/2d5/8/8/8 d");
        assert!(position.is_game_over());
        assert_eq!(position.winner(), Some(Player::Dark));

        // The Dark man on b1 is blocked by Light men it can not jump.
        let position = setup("8/8/8/8/8/3l4/l1l5/1d6 d");
        assert!(position.is_game_over());
        assert_eq!(position.winner(), Some(Player::Light));
    }
}
