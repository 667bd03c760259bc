//! Parsing of the lines typed by the human player.

use crate::checkers::core::Square;
use crate::search::Difficulty;

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    /// Ends the game.
    Quit,
    /// Discards the selected piece to pick another one.
    Cancel,
    /// A square in the algebraic notation (e.g. `b3`).
    Select(Square),
    Unknown(String),
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let input = input.trim();
        match input {
            "quit" => Self::Quit,
            "x" => Self::Cancel,
            _ => Square::try_from(input).map_or_else(|_| Self::Unknown(input.to_string()), Self::Select),
        }
    }
}

/// Parses the difficulty level choice: 1, 2 or 3.
pub(super) fn parse_difficulty(input: &str) -> Option<Difficulty> {
    match input.trim().parse::<u8>() {
        Ok(level @ 1..=3) => Some(Difficulty::from(level)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_quit() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("  quit\n"), Command::Quit);
        assert_eq!(Command::parse("quit now"), Command::Unknown("quit now".into()));
    }

    #[test]
    fn parse_cancel() {
        assert_eq!(Command::parse("x\n"), Command::Cancel);
        assert_eq!(Command::parse("X"), Command::Unknown("X".into()));
    }

    #[test]
    fn parse_square() {
        assert_eq!(
            Command::parse("b3\n"),
            Command::Select(Square::new(2, 1).unwrap())
        );
        assert_eq!(
            Command::parse("h8"),
            Command::Select(Square::new(7, 7).unwrap())
        );
        assert_eq!(Command::parse("i1"), Command::Unknown("i1".into()));
        assert_eq!(Command::parse("b 3"), Command::Unknown("b 3".into()));
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
    }

    #[test]
    fn difficulty() {
        assert_eq!(parse_difficulty("1\n"), Some(Difficulty::Easy));
        assert_eq!(parse_difficulty("2"), Some(Difficulty::Medium));
        assert_eq!(parse_difficulty(" 3 "), Some(Difficulty::Hard));
        assert_eq!(parse_difficulty("0"), None);
        assert_eq!(parse_difficulty("4"), None);
        assert_eq!(parse_difficulty("-1"), None);
        assert_eq!(parse_difficulty("easy"), None);
        assert_eq!(parse_difficulty(""), None);
    }
}
