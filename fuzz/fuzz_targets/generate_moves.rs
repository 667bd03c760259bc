#![no_main]
use checkers::checkers::core::Player;
use checkers::checkers::position::Position;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut position) = Position::try_from(input) else {
        return;
    };
    let original = position.clone();
    let moves = position.legal_moves();
    // Captures are mandatory for the whole side.
    if moves.iter().any(|next_move| next_move.is_jump()) {
        assert!(moves.iter().all(|next_move| next_move.is_jump()));
    }
    assert_eq!(
        position.is_game_over(),
        moves.is_empty() || position.generate_moves(!position.us()).is_empty()
    );
    for next_move in &moves {
        assert!(position.make_move(next_move));
        assert_eq!(position.us(), !original.us());
        assert!(position.num_pieces() <= original.num_pieces());
        position.unmake_move(next_move);
        assert_eq!(position, original);
    }
});
