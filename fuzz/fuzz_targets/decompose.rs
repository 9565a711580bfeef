#![no_main]
use libfuzzer_sys::fuzz_target;
use name_audit::decompose;

fuzz_target!(|data: &str| {
    let result = decompose(Some(data));
    assert_eq!(result, decompose(Some(data)));
});
