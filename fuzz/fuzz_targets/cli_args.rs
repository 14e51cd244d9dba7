#![no_main]

use clap::{CommandFactory, FromArgMatches};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut args = Vec::new();
        args.push("barrage".to_owned());
        for token in input.split_whitespace().take(64) {
            args.push(token.to_owned());
        }
        let Ok(matches) = barrage::args::StressArgs::command().try_get_matches_from(&args) else {
            return;
        };
        let Ok(parsed) = barrage::args::StressArgs::from_arg_matches(&matches) else {
            return;
        };
        if let Ok(run) = barrage::config::resolve_run_config(&parsed, &matches, None) {
            debug_assert_eq!(run.targets.len(), parsed.urls.len());
            let _ = barrage::stress::validate_config(&run);
        }
    }
});
