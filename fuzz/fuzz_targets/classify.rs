#![no_main]
use libfuzzer_sys::fuzz_target;
use name_audit::classify;

fuzz_target!(|data: &str| {
    classify(data);
});
