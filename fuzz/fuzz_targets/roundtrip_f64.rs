#![no_main]

use libfuzzer_sys::fuzz_target;

// f32 is covered exhaustively by the test suite; the f64 space gets fuzzed.
fuzz_target!(|value: f64| {
    let s = value.to_string();
    let r = charconv::from_chars::<f64, _>(&s);
    assert!(r.is_ok());
    assert_eq!(r.consumed, s.len());
    if value.is_nan() {
        assert!(r.value.is_nan());
    } else {
        assert_eq!(r.value, value);
    }
});
