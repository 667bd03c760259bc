//! This module implements "static" [evaluation], i.e. predicting the value of
//! a given position without [`crate::search`].
//!
//! The value is absolute rather than relative to the side to move: positive
//! values favor Dark, negative values favor Light. A single man on its own
//! back row is worth 100.
//!
//! [evaluation]: https://www.chessprogramming.org/Evaluation

use crate::checkers::position::Position;

pub(crate) mod material;

/// Evaluation of a position in "man" units.
pub type Value = i32;

/// Returns the static evaluation of the position. The side to move does not
/// affect the result.
#[must_use]
pub fn evaluate(position: &Position) -> Value {
    material::material_advantage(position)
}
