#![no_main]
use checkers::checkers::position::Position;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(position) = Position::try_from(input) else {
        return;
    };
    let layout = position.to_string();
    assert_eq!(Position::try_from(layout.as_str()).unwrap(), position);
});
