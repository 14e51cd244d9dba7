#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        for (outer, inner) in [(",", ":"), (";", "=")] {
            if let Ok(pairs) = barrage::http::parse_key_values(input, outer, inner) {
                debug_assert!(!pairs.is_empty());
                for (key, value) in &pairs {
                    debug_assert!(!key.is_empty() && !value.is_empty());
                    debug_assert_eq!(key.as_str(), key.trim());
                    debug_assert_eq!(value.as_str(), value.trim());
                }
            }
        }
    }
});
