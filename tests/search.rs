use checkers::checkers::position::Position;
use checkers::search::{Difficulty, Searcher};
use pretty_assertions::assert_eq;

fn setup(input: &str) -> Position {
    Position::try_from(input).unwrap_or_else(|e| panic!("parsing legal position {input}: {e}"))
}

fn best_move(layout: &str, depth: u8) -> (String, i32) {
    let mut position = setup(layout);
    let result = Searcher::default().search(&mut position, depth);
    assert_eq!(position, setup(layout));
    (result.best_move.unwrap().to_string(), result.score)
}

#[test]
fn avoids_losing_a_man() {
    // Stepping to d5 lets e6 jump, f5 is protected by g4.
    let layout = "8/8/4l3/8/4d1d1/8/8/8 d";
    assert_eq!(best_move(layout, 1), ("e4-d5".to_string(), 125));
    assert_eq!(best_move(layout, 2), ("e4-f5".to_string(), 120));
    // Looking further, h5 wins the Light man.
    assert_eq!(best_move(layout, 3), ("g4-h5".to_string(), 245));
    assert_eq!(best_move(layout, 6), ("g4-h5".to_string(), 245));
}

#[test]
fn scores_are_relative_to_side_to_move() {
    // Mirror image of the position above with colors swapped.
    let layout = "8/8/8/1l1l4/8/3d4/8/8 l";
    assert_eq!(best_move(layout, 1).1, 125);
    assert_eq!(best_move(layout, 2).1, 120);
    assert_eq!(best_move(layout, 3).1, 245);
}

#[test]
fn deterministic() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut position = Position::starting();
        let first = Searcher::default().best_move(&mut position, difficulty);
        let second = Searcher::default().best_move(&mut position, difficulty);
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(position, Position::starting());
    }
}

#[test]
fn table_saves_nodes() {
    let mut position = Position::starting();
    let cached = Searcher::default().search(&mut position, 6);
    let uncached = Searcher::new(0).search(&mut position, 6);
    assert_eq!(cached.nodes, 2809);
    assert_eq!(uncached.nodes, 4506);
    assert_eq!(cached.best_move, uncached.best_move);
    assert_eq!(cached.score, -10);
}

#[test]
fn no_legal_moves() {
    let mut position = setup("8/8/8/8/8/3l4/l1l5/1d6 d");
    assert_eq!(Searcher::default().best_move(&mut position, Difficulty::Hard), None);
}
