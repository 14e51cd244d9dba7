#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if barrage::stress::parse_duration(input).is_ok() {
            debug_assert!(!input.starts_with('-'));
        }
    }
});
