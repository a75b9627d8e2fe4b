#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First line is the template, the rest are existing names
    if let Ok(s) = std::str::from_utf8(data) {
        let mut lines = s.lines();
        let template = lines.next().unwrap_or("");
        let _ = nextname::synthesize_name(template, lines);
    }
});
