#![no_main]

use barrage::config::types::ConfigFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = serde_json::from_slice::<ConfigFile>(data) {
        let targets = config.targets.unwrap_or_default();
        for target in &targets {
            if let Some(url) = target.url.as_ref() {
                let _ = barrage::http::build_request(&barrage::stress::Target::new(url.as_str()));
            }
        }
    }
});
