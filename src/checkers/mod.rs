//! Implementation of the draughts (English checkers) rules: the board, pieces,
//! moves and their generation.

pub mod core;
mod movegen;
pub mod position;
