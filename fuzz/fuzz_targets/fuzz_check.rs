#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // First two characters pick the jurisdiction, the rest is the code.
        // Must not panic, and both entry points must agree.
        let split = s.char_indices().nth(2).map_or(s.len(), |(i, _)| i);
        let (jurisdiction, code) = s.split_at(split);
        let ok = vatnum::check(jurisdiction, code);
        assert_eq!(ok, vatnum::validate(jurisdiction, code).is_ok());
    }
});
