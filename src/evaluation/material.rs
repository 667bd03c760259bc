//! Material evaluation: every man is worth a fixed value plus a bonus for each
//! row it advanced towards the promotion row, kings are worth a fixed larger
//! value.
//!
//! The evaluation is stable (fixed piece values), easy to understand and
//! deterministic, which makes it a good baseline for testing the search.

use crate::checkers::core::{Piece, PieceKind, Player, Square, BOARD_WIDTH};
use crate::checkers::position::Position;
use crate::evaluation::Value;

const MAN_VALUE: Value = 100;
const ADVANCEMENT_BONUS: Value = 5;
const KING_VALUE: Value = 160;

/// Number of rows the man advanced from the back row of its owner.
fn advancement(owner: Player, square: Square) -> Value {
    let row = match owner {
        Player::Dark => square.row(),
        Player::Light => BOARD_WIDTH - 1 - square.row(),
    };
    Value::from(row)
}

fn piece_value(square: Square, piece: Piece) -> Value {
    match piece.kind {
        PieceKind::Man => MAN_VALUE + ADVANCEMENT_BONUS * advancement(piece.owner, square),
        PieceKind::King => KING_VALUE,
    }
}

fn player_value(position: &Position, player: Player) -> Value {
    position
        .pieces(player)
        .map(|(square, piece)| piece_value(square, piece))
        .sum()
}

pub(crate) fn material_advantage(position: &Position) -> Value {
    player_value(position, Player::Dark) - player_value(position, Player::Light)
}
