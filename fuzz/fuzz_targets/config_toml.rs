#![no_main]

use barrage::config::types::ConfigFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<ConfigFile>(input) {
            for target in config.targets.unwrap_or_default() {
                if let Some(url) = target.url {
                    debug_assert!(url.len() <= input.len());
                }
            }
        }
    }
});
