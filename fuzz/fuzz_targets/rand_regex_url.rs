#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::StdRng;

fuzz_target!(|data: &[u8]| {
    let Some((seed, rest)) = data.split_first() else {
        return;
    };
    let Ok(pattern) = std::str::from_utf8(rest) else {
        return;
    };
    let mut target = barrage::stress::Target::new(pattern);
    target.regex_url = true;
    let Ok(plan) = barrage::http::RequestPlan::prepare(&target) else {
        return;
    };
    let mut rng = StdRng::seed_from_u64(u64::from(*seed));
    for _ in 0..4 {
        if let Ok(request) = plan.materialize(&mut rng) {
            debug_assert!(request.url().host_str().is_some());
        }
    }
});
