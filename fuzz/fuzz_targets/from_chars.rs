#![no_main]

use libfuzzer_sys::fuzz_target;
use std::hint::black_box;

fuzz_target!(|data: &[u8]| {
    let _ = black_box(charconv::from_chars::<f32, _>(data));
    let _ = black_box(charconv::from_chars::<f64, _>(data));
    let _ = black_box(charconv::from_chars_ws::<f64, _>(data));
    let _ = black_box(charconv::from_chars_radix::<u64, _>(data, 16));
    let _ = black_box(charconv::from_chars_radix::<i32, _>(data, 36));
});
