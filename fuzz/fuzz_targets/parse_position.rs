#![no_main]
use derpfish::chess::position::Position;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(position) = Position::try_from(input) else {
        return;
    };
    let serialized = position.to_string();
    let reparsed = Position::from_fen(&serialized)
        .expect("printed position should be parsed back");
    assert_eq!(reparsed, position);
    assert_eq!(reparsed.to_string(), serialized);
});
